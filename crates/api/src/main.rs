use std::sync::Arc;

use spendlog_ledger::InMemoryLedger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    spendlog_observability::init();

    let addr = std::env::var("SPENDLOG_ADDR").unwrap_or_else(|_| {
        tracing::debug!("SPENDLOG_ADDR not set; using 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let ledger = Arc::new(InMemoryLedger::new());
    let app = spendlog_api::app::build_app(ledger);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
