//! Invoke Entry Point
//!
//! Reads one JSON invocation per line from stdin, runs it against an
//! in-memory ledger, and writes one JSON response per line to stdout.
//! Uses `anyhow` for startup and I/O errors, but invocation-level
//! errors are reported as responses via `kernel::error::AppError`.

use std::env;
use std::sync::Arc;

use clinic::{ClinicConfig, Dispatcher, InMemoryLedger, Invocation, InvokeResponse, KeyLayout};
use kernel::error::app_error::AppError;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn load_config() -> anyhow::Result<ClinicConfig> {
    let key_layout = match env::var("CLINIC_KEY_LAYOUT") {
        Ok(raw) => raw.parse::<KeyLayout>()?,
        Err(_) => KeyLayout::default(),
    };
    Ok(ClinicConfig { key_layout })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries responses only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invoke=info,clinic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config()?;
    tracing::info!(key_layout = %config.key_layout, "Ledger ready");

    let dispatcher = Dispatcher::new(Arc::new(InMemoryLedger::new()), config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Invocation>(&line) {
            Ok(invocation) => dispatcher.invoke(invocation).await,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed invocation");
                let err = AppError::invalid_argument(format!("Malformed invocation: {e}"))
                    .with_action("Send {\"function\": ..., \"Args\": [...]} on a single line.")
                    .with_source(e);
                InvokeResponse::failure(&err)
            }
        };

        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    Ok(())
}
