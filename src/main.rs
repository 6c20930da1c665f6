use clap::Parser;
use dropfill::core::engine;
use dropfill::utils::{logger, validation::Validate};
use dropfill::{CliConfig, LoadPhase, SelectBox};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dropfill CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立控制項並執行填充
    let mut control = SelectBox::new(config.control_id.clone());

    let report = match engine::fill_from_config(&config, &mut control).await {
        Ok(report) => report,
        Err(e) => {
            // Only source construction can fail here; a failed fetch is
            // swallowed by the engine and reported through the phase.
            tracing::error!("❌ Could not set up the roster source: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match report.phase {
        LoadPhase::Loaded => {
            tracing::info!("✅ Dropdown filled with {} entries", report.appended);
        }
        LoadPhase::Loading => {
            tracing::warn!("⚠️ Roster unavailable, dropdown keeps the placeholder only");
        }
    }

    println!("{}", control.render());

    Ok(())
}
