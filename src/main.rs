use std::sync::Arc;

use materna_flow::config::{BypassConfig, ServerConfig};
use materna_flow::flow::routes::{FlowRouteState, flow_routes};
use materna_flow::flow::{FlowManager, FlowState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let bypass = BypassConfig::from_env();
    let server = ServerConfig::from_env();

    eprintln!("🌸 Materna Flow v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Status API: http://0.0.0.0:{}/api/flow/status", server.port);
    if bypass.any_active() {
        eprintln!("   Bypasses: {:?}", bypass);
    }

    let manager = Arc::new(FlowManager::new(FlowState::default(), bypass));

    // Log every stage change
    let mut stage_rx = manager.subscribe();
    tokio::spawn(async move {
        while stage_rx.changed().await.is_ok() {
            let stage = *stage_rx.borrow_and_update();
            tracing::info!(%stage, "Flow stage is now");
        }
    });

    let app = flow_routes(FlowRouteState {
        manager: Arc::clone(&manager),
    });
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", server.port)).await?;
    tracing::info!(port = server.port, "Flow status server started");
    axum::serve(listener, app).await?;

    Ok(())
}
