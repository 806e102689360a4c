//! Eye Break - A 20-20-20 work/break phase timer
//!
//! This is the main entry point for the eye-break application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use eye_break::{
    config::Config,
    state::AppState,
    api::create_router,
    services::{LogNotifier, SoundNotifier},
    tasks::{display_task, tick_source_task},
    timer::Notifier,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("eye_break={},tower_http=info", config.log_level()))
        .init();

    let durations = config.durations()?;

    info!("Starting eye-break server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, work={}s, break={}s",
          config.host, config.port, durations.work_secs(), durations.break_secs());

    let notifier: Arc<dyn Notifier> = if config.mute {
        Arc::new(LogNotifier)
    } else {
        info!("Transition sound: {} {}", config.player, config.sound);
        Arc::new(SoundNotifier::new(config.player.clone(), config.sound.clone()))
    };

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), durations, notifier));

    // Start the tick source background task
    let tick_state = Arc::clone(&state);
    tokio::spawn(async move {
        tick_source_task(tick_state).await;
    });

    if config.display {
        let display_state = Arc::clone(&state);
        tokio::spawn(async move {
            display_task(display_state).await;
        });
    }

    if config.autostart {
        state.start()?;
    }

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start working or resume");
    info!("  POST /pause  - Pause the current phase");
    info!("  POST /reset  - Stop and rewind to a full work phase");
    info!("  GET  /status - Current phase, time left and session stats");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
