//! Shared application state for all routes. Holds no data of its own; everything lives in the store.

use crate::store::Repository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
}

impl AppState {
    pub fn new<R: Repository + 'static>(repo: R) -> Self {
        AppState { repo: Arc::new(repo) }
    }
}
