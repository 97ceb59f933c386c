//! Application state.

use std::sync::Arc;

use dispatch_store::DispatchStore;

use crate::config::Config;

/// Shared application state.
pub struct AppState<S: DispatchStore> {
    /// Server configuration.
    pub config: Config,
    /// Dispatch store.
    pub store: S,
}

impl<S: DispatchStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }

    /// Returns true if guarded routes need a signed-in dispatcher.
    pub fn session_required(&self) -> bool {
        self.config.require_session
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config and store.
pub fn create_shared_state<S: DispatchStore>(config: Config, store: S) -> SharedState<S> {
    Arc::new(AppState::new(config, store))
}
