use clap::Parser;
use small_fp::core::report::render_text;
use small_fp::utils::error::ErrorSeverity;
use small_fp::utils::{logger, validation::Validate};
use small_fp::{build_exercises, CliConfig, DrillConfig, DrillEngine, LocalStorage, ReportWriter};

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting small-fp");
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(output_path) => {
            tracing::info!("✅ Drills completed");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Drills failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> small_fp::Result<String> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            DrillConfig::from_file(path)?
        }
        None => {
            tracing::info!("No configuration file given, using built-in samples");
            DrillConfig::default()
        }
    };

    if let Some(output_path) = &cli.output_path {
        config.report.output_path = output_path.clone();
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }

    config.validate()?;
    tracing::debug!("Effective config: {:?}", config);

    let exercises = build_exercises(&config, &cli.only)?;
    let engine = DrillEngine::new(config.report.title.clone(), exercises)
        .with_keep_going(cli.keep_going);
    let report = engine.run()?;

    if cli.print {
        print!("{}", render_text(&report));
    }

    let storage = LocalStorage::new(config.report.output_path.clone());
    let writer = ReportWriter::new(storage, &config.report);
    writer.save(&report, config.report.format)
}
