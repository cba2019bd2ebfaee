use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use spendlog_ledger::{Ledger, RecordResult, Submission};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/expenses", post(record_expense))
        .route("/expenses/:date", get(expenses_on))
}

/// `POST /expenses` — parse the body into a submission and hand it to the
/// ledger. A body that is not a JSON object never reaches the ledger: the
/// `Json` extractor rejects it with a 4xx before this handler runs.
pub async fn record_expense(
    Extension(ledger): Extension<Arc<dyn Ledger>>,
    Json(submission): Json<Submission>,
) -> axum::response::Response {
    match ledger.record(submission) {
        RecordResult::Accepted { id } => {
            tracing::info!(%id, "expense recorded");
            (StatusCode::OK, Json(dto::RecordedResponse { expense_id: id })).into_response()
        }
        RecordResult::Rejected { reason } => {
            errors::json_error(StatusCode::UNPROCESSABLE_ENTITY, reason)
        }
    }
}

/// `GET /expenses/:date` — records for the exact date key, insertion order,
/// `200` with an empty array when none exist.
pub async fn expenses_on(
    Extension(ledger): Extension<Arc<dyn Ledger>>,
    Path(date): Path<String>,
) -> axum::response::Response {
    let records = ledger.expenses_on(&date);
    (StatusCode::OK, Json(records)).into_response()
}
