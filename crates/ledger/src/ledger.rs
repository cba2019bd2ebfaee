use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::submission::Submission;

/// Identifier assigned to an accepted expense record.
///
/// Process-wide sequence starting at 1; an id is consumed exactly once per
/// accepted record and never reused or reset while the process runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// First identifier handed out by a fresh ledger.
    pub const FIRST: ExpenseId = ExpenseId(1);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Outcome of a record attempt. No other states exist.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordResult {
    Accepted { id: ExpenseId },
    Rejected { reason: String },
}

/// Capability interface the HTTP boundary depends on.
///
/// Production (`InMemoryLedger`) and test doubles both satisfy it; the
/// boundary takes it by injection and never constructs a default itself.
pub trait Ledger: Send + Sync {
    /// Validate `submission` and, on success, assign the next identifier and
    /// store the resulting record under its date.
    ///
    /// Malformed field content is a normal `Rejected` outcome, not an error;
    /// a rejected submission leaves storage and the id counter untouched.
    fn record(&self, submission: Submission) -> RecordResult;

    /// All stored records for the exact date key, in insertion order.
    ///
    /// The date is an opaque key here: no parsing, no validation. Unknown
    /// keys yield an empty vec, never an error. Read-only.
    fn expenses_on(&self, date: &str) -> Vec<Record>;
}

/// Storage + counter live behind one lock: the counter increment and the
/// date-bucket append are a composite mutation that must not interleave.
#[derive(Debug)]
struct LedgerState {
    by_date: HashMap<String, Vec<Record>>,
    next_id: ExpenseId,
}

/// In-memory ledger; state is process-lifetime scoped.
#[derive(Debug)]
pub struct InMemoryLedger {
    state: Mutex<LedgerState>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LedgerState {
                by_date: HashMap::new(),
                next_id: ExpenseId::FIRST,
            }),
        }
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for InMemoryLedger {
    fn record(&self, submission: Submission) -> RecordResult {
        let record = match submission.into_record() {
            Ok(record) => record,
            Err(errors) => {
                let reason = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                return RecordResult::Rejected { reason };
            }
        };

        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id = id.next();
        state
            .by_date
            .entry(record.date().to_owned())
            .or_default()
            .push(record);

        RecordResult::Accepted { id }
    }

    fn expenses_on(&self, date: &str) -> Vec<Record> {
        let state = self.state.lock().unwrap();
        state.by_date.get(date).cloned().unwrap_or_default()
    }
}
