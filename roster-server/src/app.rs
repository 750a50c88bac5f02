use std::sync::Arc;

use axum::Router;
use roster_core::DeveloperRepository;
use roster_store::DeveloperStore;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::config::{ConfigError, ServerConfig};
use crate::routes;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub developers: Arc<dyn DeveloperRepository>,
}

impl AppState {
    pub fn new(developers: Arc<dyn DeveloperRepository>) -> Self {
        Self { developers }
    }
}

/// Assembles the full router: `/health` at the root, developer routes under
/// `mount_path` (or at the root when `None`).
pub fn build_router(
    state: AppState,
    mount_path: Option<&str>,
) -> Router {
    routes::mark_started();

    let developers = routes::developer_routes();
    let router = match mount_path {
        Some(path) => {
            debug!(path, "mounting developer routes");
            Router::new().nest(path, developers)
        }
        None => developers,
    };

    router
        .merge(routes::system_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds a seeded in-memory store from `config` and the router over it.
pub fn build_app(config: &ServerConfig) -> Result<Router, ConfigError> {
    config.validate()?;
    let mount_path = config.mount_path()?;
    let store = DeveloperStore::seeded(Arc::new(config.tax));
    let state = AppState::new(Arc::new(store));
    Ok(build_router(state, mount_path.as_deref()))
}
