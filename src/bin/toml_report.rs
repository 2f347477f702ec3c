use anyhow::Context;
use clap::Parser;
use flight_profit::core::ConfigProvider;
use flight_profit::utils::{logger, validation::Validate};
use flight_profit::{LocalStorage, ProfitEngine, ProfitPipeline, TomlConfig};
use std::path::Path;

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Flight profitability report driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "flight-profit.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    // 日誌格式由設定檔決定
    match config.log_format() {
        Some("json") => logger::init_json_logger(args.verbose),
        _ => logger::init_cli_logger(args.verbose),
    }

    tracing::info!("🚀 Starting TOML-based flight profitability report");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }
    let dump_tables = config.dump_tables();

    let storage = LocalStorage::new(".".to_string());
    let pipeline = ProfitPipeline::new(storage, config);
    let engine = ProfitEngine::new_with_monitoring(pipeline, monitor_enabled).with_table_dump(dump_tables);

    let outcome = engine.run().inspect_err(|e| {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    })?;

    if let Some(path) = outcome.output_path {
        tracing::info!("✅ Report complete: {}", path);
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    eprintln!("📋 Configuration Summary:");
    eprintln!("  Input dir: {}", config.input_dir());
    eprintln!(
        "  Tables: {}, {}, {}",
        config.airports_file(),
        config.aircraft_file(),
        config.flights_file()
    );
    eprintln!("  Delimiter: {:?}", config.delimiter());
    eprintln!("  Output: {}", Path::new(config.output_dir()).join(&config.report.output_file).display());
    eprintln!("  Dump tables: {}", config.dump_tables());

    if args.dry_run {
        eprintln!("  🔍 DRY RUN MODE ENABLED");
    }

    eprintln!();
}

fn perform_dry_run(config: &TomlConfig) {
    eprintln!("🔍 Dry Run Analysis:");
    eprintln!();

    eprintln!("📥 Input Tables:");
    for file in [
        config.airports_file(),
        config.aircraft_file(),
        config.flights_file(),
    ] {
        let path = Path::new(config.input_dir()).join(file);
        let status = match std::fs::metadata(&path) {
            Ok(meta) => format!("{} bytes", meta.len()),
            Err(e) => format!("unavailable ({})", e),
        };
        eprintln!("  {}: {}", path.display(), status);
    }

    eprintln!();
    eprintln!("💾 Output Configuration:");
    eprintln!(
        "  Report: {}",
        Path::new(config.output_dir()).join(config.output_file()).display()
    );

    eprintln!();
    eprintln!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
