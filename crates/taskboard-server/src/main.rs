/*
[INPUT]:  Environment configuration (PORT, TASKBOARD_DB, FRONTEND_ORIGIN)
[OUTPUT]: Running task store HTTP service
[POS]:    Binary entry point
[UPDATE]: When changing startup flow or configuration
*/

use anyhow::{Context, Result, anyhow};
use taskboard_server::{create_app, db, env_or};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let pool = db::init_db(&db::database_url()).await?;

    let app = create_app(pool);
    let port = env_or("PORT", "8080");
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(%addr, "task store listening");

    axum::serve(listener, app).await.context("serve")?;
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
