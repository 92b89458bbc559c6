use anyhow::Context;
use clap::Parser;
use regret_roast::utils::{logger, validation::Validate};
use regret_roast::{Intensity, RoastConfig, RoastRequest, SeededRandom, ThreadRandom};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "roast")]
#[command(about = "Print a single roast for a purchase", allow_negative_numbers = true)]
struct Args {
    /// What was bought
    #[arg(long)]
    item: String,

    /// What the money would be worth today
    #[arg(long)]
    regret: f64,

    /// Crypto ticker it could have bought
    #[arg(long, default_value = "BTC")]
    crypto: String,

    /// Purchase price
    #[arg(long)]
    price: f64,

    /// fun, medium or savage; anything else means medium
    #[arg(long, default_value = "medium")]
    intensity: String,

    /// Seed the fallback randomness for a reproducible roast
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print which path produced the roast
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = match RoastConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let engine = match args.seed {
        Some(seed) => config.build_engine(Arc::new(SeededRandom::new(seed))),
        None => config.build_engine(Arc::new(ThreadRandom)),
    }
    .context("failed to build roast engine")?;

    let request = RoastRequest::new(
        args.item,
        args.regret,
        args.crypto,
        args.price,
        Intensity::parse_lenient(&args.intensity),
    );

    let outcome = engine.roast(&request).await;
    if args.verbose {
        tracing::info!("Roast source: {:?}", outcome.source);
    }
    println!("{}", outcome.roast);

    Ok(())
}
