use anyhow::Context;
use clap::Parser;
use redirect_checker::utils::{logger, validation::Validate};
use redirect_checker::{
    CheckEngine, CheckerError, CliConfig, FileConfig, LocalStorage, ReqwestProbe,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Initialise logging
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting redirect-checker");
    tracing::debug!("CLI config: {:?}", cli);

    // Load the optional config file
    let file_config = match cli.config.as_deref() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = FileConfig::from_file(path).and_then(|c| c.validate().map(|_| c));
            match file_config {
                Ok(file_config) => Some(file_config),
                Err(e) => fail(&e),
            }
        }
        None => None,
    };

    // Merge flags over the file, then validate
    let config = cli.into_checker_config(file_config.as_ref());
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    // Build the probe and engine
    let probe = ReqwestProbe::new(config.timeout(), config.user_agent.as_deref())
        .context("failed to build HTTP client")?;
    let filename = config.filename.clone();
    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine =
        CheckEngine::new_with_monitoring(probe, LocalStorage::default(), config, monitor_enabled);
    let mut stdout = std::io::stdout();

    // Per-pair failures are reported, not fatal
    match engine.run(&mut stdout).await {
        Ok(summary) => {
            if summary.failed() > 0 {
                tracing::warn!(
                    "{} of {} redirects did not check out",
                    summary.failed(),
                    summary.total
                );
            }
        }
        Err(e) if e.is_structural() => {
            tracing::error!("❌ Could not parse {}: {}", filename, e);
            println!("Error processing CSV file '{}'. Check file structure.", filename);
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
            fail(&e);
        }
    }

    Ok(())
}

fn fail(e: &CheckerError) -> ! {
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
