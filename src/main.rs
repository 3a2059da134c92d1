//! Service entry point.
//!
//! Loads configuration, builds the curriculum table once, wires the
//! conversation handler behind the HTTP surface, and serves.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kazanim_guide::adapters::http::{app_router, MessageHandlers};
use kazanim_guide::adapters::{InMemorySessionStore, JsonFileSource, SystemClock};
use kazanim_guide::application::HandleMessageHandler;
use kazanim_guide::config::AppConfig;
use kazanim_guide::domain::curriculum::CurriculumTable;
use kazanim_guide::ports::CurriculumSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Loaded once; immutable for the rest of the run. A load failure is
    // degraded mode, not a startup failure: every lookup will miss.
    let source = JsonFileSource::new(config.curriculum.data_path.clone());
    let curriculum = match source.load() {
        Ok(table) => {
            info!(
                path = %config.curriculum.data_path,
                objectives = table.objective_count(),
                "curriculum table loaded"
            );
            table
        }
        Err(e) => {
            warn!(error = %e, "curriculum table unavailable, starting with an empty table");
            CurriculumTable::empty()
        }
    };

    let handler = Arc::new(HandleMessageHandler::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(curriculum),
        Arc::new(SystemClock::new()),
    ));

    let router = app_router(
        MessageHandlers::new(handler),
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr();
    info!(%addr, "kazanim-guide listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
