use crate::core::calculator::calculate_profits;
use crate::core::loader::load_table;
use crate::core::report::render_report;
use crate::core::{
    AircraftRecord, AirportRecord, ConfigProvider, FlightDataset, FlightRecord, NamedTable,
    Pipeline, ProfitSummary, Storage, TableRow, TransformResult,
};
use crate::utils::error::{ProfitError, Result};
use crate::utils::validation::validate_delimiter;
use std::path::Path;

pub struct ProfitPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> ProfitPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn input_path(&self, file: &str) -> String {
        Path::new(self.config.input_dir())
            .join(file)
            .to_string_lossy()
            .into_owned()
    }

    fn output_path(&self) -> String {
        Path::new(self.config.output_dir())
            .join(self.config.output_file())
            .to_string_lossy()
            .into_owned()
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ProfitPipeline<S, C> {
    fn extract(&self) -> Result<FlightDataset> {
        let delimiter = validate_delimiter("delimiter", self.config.delimiter())?;

        let paths = [
            self.input_path(self.config.airports_file()),
            self.input_path(self.config.aircraft_file()),
            self.input_path(self.config.flights_file()),
        ];

        // 三個檔案都嘗試讀取，逐一回報失敗，任何一個失敗就停止這次執行
        let mut failed = Vec::new();
        let mut tables = Vec::with_capacity(paths.len());
        for path in &paths {
            match load_table(&self.storage, path, delimiter) {
                Ok(table) => tables.push(NamedTable {
                    name: path.clone(),
                    table,
                }),
                Err(e) => {
                    tracing::error!("❌ Error reading file {}: {}", path, e);
                    failed.push(path.clone());
                }
            }
        }

        if !failed.is_empty() {
            return Err(ProfitError::LoadFailed { sources: failed });
        }

        let airports = AirportRecord::rows_from(&tables[0].table, &tables[0].name)?;
        let aircraft = AircraftRecord::rows_from(&tables[1].table, &tables[1].name)?;
        let flights = FlightRecord::rows_from(&tables[2].table, &tables[2].name)?;

        tracing::info!(
            "📥 Loaded {} airports, {} aircraft types, {} flights",
            airports.len(),
            aircraft.len(),
            flights.len()
        );

        Ok(FlightDataset {
            airports,
            aircraft,
            flights,
            source_tables: tables,
        })
    }

    fn transform(&self, data: &FlightDataset) -> Result<TransformResult> {
        let results = calculate_profits(&data.flights, &data.airports, &data.aircraft);
        let summary = ProfitSummary::from_results(&results);
        let report = render_report(&results);

        tracing::debug!(
            "Calculated {} results ({} errors)",
            results.len(),
            summary.errors
        );

        Ok(TransformResult {
            results,
            report,
            summary,
        })
    }

    fn load(&self, result: &TransformResult) -> Result<String> {
        let output_path = self.output_path();

        tracing::debug!(
            "Writing report ({} bytes) to {}",
            result.report.len(),
            output_path
        );
        self.storage
            .write_file(&output_path, result.report.as_bytes())?;

        Ok(output_path)
    }
}
