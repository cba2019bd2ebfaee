use serde::{Deserialize, Serialize};

/// A validated, stored expense entry (immutable).
///
/// Note: `Record` carries no validation logic of its own; it is the
/// validated-output shape. The ledger is the only production constructor,
/// after a submission passes the validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    payee: String,
    amount: f64,
    date: String,
}

impl Record {
    pub fn new(payee: String, amount: f64, date: String) -> Self {
        Self {
            payee,
            amount,
            date,
        }
    }

    pub fn payee(&self) -> &str {
        &self.payee
    }

    /// Monetary amount as submitted; no normalization is applied.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Calendar date in `YYYY-MM-DD` form, kept as an opaque text key.
    pub fn date(&self) -> &str {
        &self.date
    }
}
