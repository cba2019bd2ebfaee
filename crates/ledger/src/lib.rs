//! Expense ledger (validation, identifier assignment, date-indexed storage).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod ledger;
pub mod record;
pub mod submission;

pub use ledger::{ExpenseId, InMemoryLedger, Ledger, RecordResult};
pub use record::Record;
pub use submission::{Submission, SubmissionError};
