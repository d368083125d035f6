pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::path::PathBuf;
use std::sync::Arc;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub admin_config_path: Arc<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let admin_config_path = config.admin_config_path();
    let static_dir = config.static_dir();

    shared::admin_descriptor::check_on_startup(&admin_config_path).await?;
    tracing::info!("Serving static files from {}", static_dir.display());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let state = AppState {
        admin_config_path: Arc::new(admin_config_path),
    };
    let app = routes::configure_routes(state, &static_dir).layer(cors);

    let addr = config.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
