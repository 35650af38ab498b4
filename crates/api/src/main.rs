use anyhow::Context;

use classroom_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    classroom_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = classroom_api::app::build_app(&config).context("failed to seed store")?;

    let addr = config.http_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
