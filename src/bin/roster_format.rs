use clap::Parser;
use dropfill::core::roster_format;
use dropfill::utils::error::ErrorSeverity;
use dropfill::utils::logger;
use std::path::Path;

#[derive(Parser)]
#[command(name = "roster-format")]
#[command(about = "Converts a CSV name roster into the JSON resource the dropdown consumes")]
struct Args {
    /// Path to the CSV roster (one 'id,name' line per member)
    #[arg(short, long, default_value = "id.txt")]
    input: String,

    /// Where to write the JSON roster
    #[arg(short, long, default_value = "idjson.txt")]
    output: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Converting roster: {} -> {}", args.input, args.output);

    match roster_format::convert_file(Path::new(&args.input), Path::new(&args.output)) {
        Ok(count) => {
            tracing::info!("✅ Roster conversion completed");
            println!("✅ Wrote {} entries to {}", count, args.output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Roster conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
