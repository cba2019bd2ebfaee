use serde::Serialize;

use spendlog_ledger::ExpenseId;

/// Body of a successful `POST /expenses` response.
#[derive(Debug, Serialize)]
pub struct RecordedResponse {
    pub expense_id: ExpenseId,
}
