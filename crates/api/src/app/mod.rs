//! HTTP API application wiring (Axum router + ledger injection).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use spendlog_ledger::Ledger;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// The ledger capability is injected explicitly; there is no implicit
/// default, so tests can hand in a stub and `main` hands in the real one.
pub fn build_app(ledger: Arc<dyn Ledger>) -> Router {
    routes::router().layer(Extension(ledger))
}
