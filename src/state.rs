// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::profile::Profile;
use crate::services::provider::ChatProvider;
use crate::services::resolver::ReplyResolver;

pub type SharedState = Arc<AppState>;

/// Read-only per-process state handed to every handler.
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: ReplyResolver,
}

impl AppState {
    pub fn new(config: Config, profile: Profile, provider: Option<Arc<dyn ChatProvider>>) -> Self {
        let config = Arc::new(config);
        let resolver = ReplyResolver::new(config.clone(), Arc::new(profile), provider);
        Self { config, resolver }
    }
}
