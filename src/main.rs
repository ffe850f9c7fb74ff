//! Group Settle - Binary Entry Point
//!
//! Reads a JSON balance list from the file given as the first argument (or
//! uses a built-in sample group), settles it and prints the report.
//!
//! ```bash
//! RUST_LOG=group_settle=debug cargo run -- balances.json
//! ```

use std::fs;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use group_settle::types::Amount;
use group_settle::{EngineConfig, Expense, Ledger, MemberId, SettlementEngine};

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "group_settle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Small weekend-trip group used when no input file is given
fn sample_ledger() -> anyhow::Result<Ledger> {
    let mut ledger = Ledger::new([("alice", "Alice"), ("bob", "Bob"), ("cara", "Cara")])?;
    let everyone = ["alice", "bob", "cara"].map(MemberId::from);

    ledger.record(Expense::equal_split(
        "e1",
        "Cabin rental",
        "alice",
        "450.00".parse::<Amount>()?,
        &everyone,
    )?)?;
    ledger.record(Expense::equal_split(
        "e2",
        "Groceries",
        "bob",
        "96.30".parse::<Amount>()?,
        &everyone,
    )?)?;
    ledger.record(Expense::equal_split(
        "e3",
        "Fuel",
        "cara",
        "40".parse::<Amount>()?,
        &everyone[..2],
    )?)?;

    Ok(ledger)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = EngineConfig::from_env()?;
    let engine = SettlementEngine::with_config(config);
    tracing::info!(epsilon = %config.epsilon, "Settlement engine configured");

    let report = match std::env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("failed to read balance list from {path}"))?;
            engine.settle_json(&json)?
        }
        None => {
            let ledger = sample_ledger()?;
            tracing::info!(
                members = ledger.member_count(),
                expenses = ledger.expenses().len(),
                "No input file given, settling sample group"
            );
            engine.settle(&ledger.balances()?)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    eprintln!();
    for transfer in &report.transfers {
        eprintln!("  {transfer}");
    }
    eprintln!("  Settled:     {}", report.summary.is_settled);
    eprintln!("  Fingerprint: {}", report.fingerprint());

    Ok(())
}
