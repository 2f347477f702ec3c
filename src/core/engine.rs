use crate::core::report::{dump_tables, write_console};
use crate::core::{Pipeline, ProfitResult, ProfitSummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub results: Vec<ProfitResult>,
    pub summary: ProfitSummary,
    /// 報表檔寫入失敗時為 `None`，其餘輸出不受影響
    pub output_path: Option<String>,
}

pub struct ProfitEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
    dump_tables: bool,
}

impl<P: Pipeline> ProfitEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
            dump_tables: true,
        }
    }

    pub fn with_table_dump(mut self, enabled: bool) -> Self {
        self.dump_tables = enabled;
        self
    }

    pub fn run(&self) -> Result<RunOutcome> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// 依序執行 extract、transform、輸出到終端機、寫入報表檔，最後傾印輸入表
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<RunOutcome> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        tracing::info!("🚀 Starting flight profitability run");

        // Extract
        let dataset = self.pipeline.extract()?;
        monitor.log_stats("Load");

        // Transform
        let transformed = self.pipeline.transform(&dataset)?;
        monitor.log_stats("Calculate");

        // 終端機輸出失敗（例如 stdout 已關閉）不影響報表檔
        if let Err(e) = write_console(out, &transformed.results) {
            tracing::warn!("⚠️ Failed to write report to console: {}", e);
        }

        // Load：寫檔失敗只回報，不中斷
        let output_path = match self.pipeline.load(&transformed) {
            Ok(path) => {
                tracing::info!("📁 Report saved to: {}", path);
                Some(path)
            }
            Err(e) => {
                tracing::error!("❌ Error writing report: {}", e);
                eprintln!("❌ Error writing to file: {}", e);
                None
            }
        };
        monitor.log_stats("Report");

        if self.dump_tables {
            if let Err(e) = dump_tables(out, &dataset.source_tables) {
                tracing::warn!("⚠️ Failed to dump input tables: {}", e);
            }
        }

        let summary = transformed.summary;
        tracing::info!(
            "✅ Processed {} flights: {} profitable, {} loss-making, {} errors, total profit {}",
            summary.flights,
            summary.profitable,
            summary.loss_making,
            summary.errors,
            summary.total_profit
        );
        monitor.log_final_stats();

        Ok(RunOutcome {
            results: transformed.results,
            summary,
            output_path,
        })
    }
}
