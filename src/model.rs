//! This module defines the shared state handed to every HTTP handler.

use crate::store::BingoStore;
use std::sync::Arc;

/// The central, shared state of the application.
/// An `Arc<AppState>` is installed as the router state, so any handler can
/// reach the store without globals.
pub struct AppState {
    /// Where cards and the session singleton live. Either the in-memory store
    /// or PostgreSQL, chosen at startup from the configuration.
    pub store: Arc<dyn BingoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BingoStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }
}
