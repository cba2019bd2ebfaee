//! Boundary tests against a stub ledger: only the HTTP mapping is under
//! test, the ledger's answers are canned.

use std::sync::{Arc, Mutex};

use reqwest::StatusCode;
use serde_json::json;

use spendlog_ledger::{ExpenseId, Ledger, Record, RecordResult, Submission};

struct StubLedger {
    record_result: RecordResult,
    expenses: Vec<Record>,
    seen: Mutex<Vec<Submission>>,
}

impl StubLedger {
    fn accepting(id: u64) -> Self {
        Self {
            record_result: RecordResult::Accepted {
                id: ExpenseId::new(id),
            },
            expenses: Vec::new(),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn rejecting(reason: &str) -> Self {
        Self {
            record_result: RecordResult::Rejected {
                reason: reason.to_string(),
            },
            expenses: Vec::new(),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn serving(expenses: Vec<Record>) -> Self {
        Self {
            record_result: RecordResult::Rejected {
                reason: "unused".to_string(),
            },
            expenses,
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl Ledger for StubLedger {
    fn record(&self, submission: Submission) -> RecordResult {
        self.seen.lock().unwrap().push(submission);
        self.record_result.clone()
    }

    fn expenses_on(&self, _date: &str) -> Vec<Record> {
        self.expenses.clone()
    }
}

async fn spawn(ledger: Arc<dyn Ledger>) -> (String, tokio::task::JoinHandle<()>) {
    let app = spendlog_api::app::build_app(ledger);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base_url, handle)
}

#[tokio::test]
async fn post_maps_acceptance_to_expense_id_body() {
    let stub = Arc::new(StubLedger::accepting(417));
    let (base_url, handle) = spawn(stub.clone()).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/expenses", base_url))
        .json(&json!({ "payee": "Starbucks", "amount": 5.00, "date": "2017-06-10" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "expense_id": 417 }));

    // The parsed submission reaches the ledger unchanged.
    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].payee.as_deref(), Some("Starbucks"));
    assert_eq!(seen[0].amount, Some(5.00));
    assert_eq!(seen[0].date.as_deref(), Some("2017-06-10"));

    drop(seen);
    handle.abort();
}

#[tokio::test]
async fn post_maps_rejection_to_422_with_error_body() {
    let stub = Arc::new(StubLedger::rejecting("Expense incomplete"));
    let (base_url, handle) = spawn(stub).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/expenses", base_url))
        .json(&json!({ "some": "data" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Expense incomplete" }));

    handle.abort();
}

#[tokio::test]
async fn get_renders_ledger_records_as_json_array() {
    let stub = Arc::new(StubLedger::serving(vec![
        Record::new("Starbucks".to_string(), 5.00, "2017-06-10".to_string()),
        Record::new("Zoo".to_string(), 4.75, "2017-06-10".to_string()),
    ]));
    let (base_url, handle) = spawn(stub).await;

    let res = reqwest::get(format!("{}/expenses/2017-06-10", base_url))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            { "payee": "Starbucks", "amount": 5.00, "date": "2017-06-10" },
            { "payee": "Zoo", "amount": 4.75, "date": "2017-06-10" },
        ])
    );

    handle.abort();
}
