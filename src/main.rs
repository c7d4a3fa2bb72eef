//! BUSTED AI - Command-Line Transaction Analyzer
//!
//! Collects the transaction fields as flags, runs them through the rule
//! engine, and prints the verdict with the system information panel.

use anyhow::{Context, Result};
use busted_ai::{
    config::AppConfig, report, rules::RuleEngine, types::TransactionInput, types::TransactionType,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Analyze a single transaction for fraud.
#[derive(Parser, Debug)]
#[command(name = "busted", version, about)]
struct Cli {
    /// Transaction amount in currency units
    #[arg(long)]
    amount: f64,

    /// Balance of the origin account before the transaction
    #[arg(long)]
    old_balance: f64,

    /// Balance of the origin account after the transaction
    #[arg(long)]
    new_balance: f64,

    /// Transaction type
    #[arg(long, value_enum)]
    tx_type: TransactionType,

    /// Destination account is a known merchant
    #[arg(long, default_value_t = false)]
    merchant_dest: bool,

    /// Path to a TOML file overriding the rule thresholds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the verdict as JSON instead of the rendered report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("busted_ai=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // A config file that fails to load is fatal for the session.
    let config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)
            .with_context(|| format!("Could not load rule configuration from {}", path.display()))?,
        None => AppConfig::default(),
    };
    info!("Fraud detection system activated");

    let engine = RuleEngine::new(config.rules);

    let tx = TransactionInput::new(cli.amount, cli.old_balance, cli.new_balance, cli.tx_type)
        .with_merchant_destination(cli.merchant_dest);

    let verdict = engine
        .evaluate(&tx)
        .context("Transaction could not be analyzed")?;

    info!(
        verdict_id = %verdict.verdict_id,
        fraud_detected = verdict.fraud_detected,
        confidence = verdict.confidence,
        method = %verdict.detection_method,
        "Analysis complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print!("{}", report::render_verdict(&verdict, &tx));
        println!();
        print!("{}", report::render_system_info(&tx, verdict.amount_ratio));
    }

    Ok(())
}
