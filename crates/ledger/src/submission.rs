use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::record::Record;

/// Raw, unvalidated input describing one candidate expense.
///
/// Fixed set of optional typed fields rather than a dynamically-keyed map:
/// unknown keys in the request body are ignored, so a payload like
/// `{"some":"data"}` parses to an all-`None` submission and fails validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Submission {
    pub payee: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

/// Why a submission field was rejected (missing or invalid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("payee is required")]
    PayeeRequired,
    #[error("amount is required")]
    AmountRequired,
    #[error("date is required")]
    DateRequired,
}

impl Submission {
    /// Validate every field and convert into a storable [`Record`].
    ///
    /// Field order in the error list is fixed (payee, amount, date) and
    /// validation never short-circuits: the caller gets one list naming
    /// every missing/invalid field.
    pub fn into_record(self) -> Result<Record, Vec<SubmissionError>> {
        let mut errors = Vec::new();

        if !self.payee.as_deref().is_some_and(|p| !p.is_empty()) {
            errors.push(SubmissionError::PayeeRequired);
        }
        if !self.amount.is_some_and(|a| a > 0.0) {
            errors.push(SubmissionError::AmountRequired);
        }
        if !self.date.as_deref().is_some_and(well_formed_date) {
            errors.push(SubmissionError::DateRequired);
        }

        match (errors.is_empty(), self.payee, self.amount, self.date) {
            (true, Some(payee), Some(amount), Some(date)) => {
                Ok(Record::new(payee, amount, date))
            }
            _ => Err(errors),
        }
    }
}

fn well_formed_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}
