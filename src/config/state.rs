// Runtime application state module

use crate::router::Router;

use super::types::Config;

/// Shared application state: the loaded configuration plus the populated
/// route registry. Both are fixed once the listener starts accepting.
pub struct AppState {
    pub config: Config,
    pub router: Router,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, router: Router) -> Self {
        Self { config, router }
    }
}
