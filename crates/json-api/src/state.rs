//! Shared Handler State

use std::sync::Arc;

use catalog_app::context::AppContext;

/// Injected into every request's depot as `Arc<State>`.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
