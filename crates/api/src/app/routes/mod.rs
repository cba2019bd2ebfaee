use axum::{routing::get, Router};

pub mod expenses;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(expenses::router())
}
