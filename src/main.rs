use clap::Parser;
use flight_profit::core::ConfigProvider;
use flight_profit::utils::{logger, validation::Validate};
use flight_profit::{CliConfig, LocalStorage, ProfitEngine, ProfitPipeline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting flight-profit CLI");
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

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }
    let dump_tables = config.dump_tables();

    // 路徑已由 input_dir / output_dir 決定，Storage 以目前目錄為基準
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ProfitPipeline::new(storage, config);

    let engine = ProfitEngine::new_with_monitoring(pipeline, monitor_enabled).with_table_dump(dump_tables);

    match engine.run() {
        Ok(outcome) => {
            if let Some(path) = outcome.output_path {
                tracing::info!("✅ Report complete: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
