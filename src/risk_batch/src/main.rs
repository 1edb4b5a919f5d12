use clap::Parser;
use risk_batch::{load_borrowers, score_borrowers};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "risk-batch", version, about = "Score every borrower in a JSON file")]
struct Cli {
    /// JSON array of borrower records
    #[arg(default_value = "borrowers.json")]
    path: PathBuf,
    /// Print a JSON array instead of one line per borrower.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "risk_batch=info,warn".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let records = load_borrowers(&cli.path)?;
    let outcomes = score_borrowers(&records);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            println!("{}", outcome);
        }
    }

    let failed = outcomes.iter().filter(|o| o.risk_tier.is_none()).count();
    info!(
        "scored {} of {} borrowers from {}",
        outcomes.len() - failed,
        outcomes.len(),
        cli.path.display()
    );
    Ok(())
}
