use std::sync::Arc;

use anyhow::Context;

use solestock_api::app::{self, services::AppServices};
use solestock_api::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    solestock_observability::tracing::init(settings.log_format);
    for warning in &settings.warnings {
        tracing::warn!("{warning}");
    }

    let app = app::build_app(Arc::new(AppServices::new()));

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
