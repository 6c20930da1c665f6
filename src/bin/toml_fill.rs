use clap::Parser;
use dropfill::config::toml_config::TomlConfig;
use dropfill::core::engine;
use dropfill::utils::{logger, validation::Validate};
use dropfill::{ConfigProvider, LoadPhase, SelectBox};

#[derive(Parser)]
#[command(name = "toml-fill")]
#[command(about = "Dropdown fill driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "dropfill.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the configuration without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-driven dropdown fill");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated");
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no fetch will occur");
        return Ok(());
    }

    let mut control = SelectBox::new(config.control_id());

    let report = match engine::fill_from_config(&config, &mut control).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
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

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Control: {}", config.control_id());
    tracing::info!("📋 Placeholder: {}", config.placeholder_text());
    tracing::info!("📋 Roster: {}", config.roster_location());
    if let Some(page) = config.page_url() {
        tracing::info!("📋 Resolved against page: {}", page);
    }
}
