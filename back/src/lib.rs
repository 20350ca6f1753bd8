pub mod clock;
pub mod config;
pub mod error;
pub mod middleware;
pub mod store;
pub mod v1;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;

use crate::{clock::Clock, store::TaskStore, validation::DueDateRule};

pub struct AppState {
    pub store: TaskStore,
    pub clock: Arc<dyn Clock>,
    pub due_date_rule: DueDateRule,
}

impl AppState {
    pub fn new(store: TaskStore, clock: Arc<dyn Clock>, due_date_rule: DueDateRule) -> Self {
        Self {
            store,
            clock,
            due_date_rule,
        }
    }
}

/// Full application: routes plus the redirect and logging middleware.
pub fn app(state: Arc<AppState>) -> Router {
    v1::router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::redirect_legacy_tasks))
            .layer(axum::middleware::from_fn(middleware::log_requests)),
    )
}
