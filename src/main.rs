use clap::Parser;
use regret_roast::adapters::http;
use regret_roast::utils::{logger, validation::Validate};
use regret_roast::ServeArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServeArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting regret-roast server");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let state = config.build_state()?;
    if state.engine.provider_enabled() {
        tracing::info!("🤖 Generation provider enabled ({})", config.provider.model);
    } else {
        tracing::info!("📚 Generation provider disabled, serving fallback roasts only");
    }

    if let Err(e) = http::serve(&config.server.bind, config.server.max_body_bytes, state).await {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    Ok(())
}
