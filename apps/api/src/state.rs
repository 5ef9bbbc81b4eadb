use std::sync::{Arc, Mutex, PoisonError};

use crate::resume::SharedStore;
use crate::workspace::Workspace;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// One résumé workspace per process. Each request runs to completion
    /// under this lock, so editor transitions never interleave.
    workspace: Arc<Mutex<Workspace>>,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        AppState {
            workspace: Arc::new(Mutex::new(Workspace::new(store))),
        }
    }

    /// Runs `f` as a single, uninterrupted event against the workspace.
    pub fn with_workspace<R>(&self, f: impl FnOnce(&mut Workspace) -> R) -> R {
        let mut workspace = self
            .workspace
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut workspace)
    }
}
