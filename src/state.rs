use std::sync::Arc;

use crate::auth::SessionResolver;
use crate::database::PortalStore;

/// Capabilities shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PortalStore>,
    pub sessions: Arc<dyn SessionResolver>,
}

impl AppState {
    pub fn new(store: Arc<dyn PortalStore>, sessions: Arc<dyn SessionResolver>) -> Self {
        Self { store, sessions }
    }
}
