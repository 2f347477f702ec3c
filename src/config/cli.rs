use crate::core::report::DEFAULT_OUTPUT_FILE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_delimiter, validate_file_extensions, validate_non_empty_string, validate_path,
    Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const INPUT_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "flight-profit")]
#[command(about = "Calculate per-flight profitability from flight, airport and aircraft tables")]
pub struct CliConfig {
    #[arg(long, default_value = "airports.csv")]
    pub airports: String,

    #[arg(long, default_value = "aeroplanes.csv")]
    pub aircraft: String,

    #[arg(long, default_value = "valid_flight_data.csv")]
    pub flights: String,

    #[arg(long, default_value = ".")]
    pub input_dir: String,

    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, default_value_t = ',', help = "Field delimiter for all input tables")]
    pub delimiter: char,

    #[arg(long, help = "Do not print the loaded tables after the report")]
    pub no_dump: bool,

    #[arg(long, help = "Log process CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_dir(&self) -> &str {
        &self.input_dir
    }

    fn airports_file(&self) -> &str {
        &self.airports
    }

    fn aircraft_file(&self) -> &str {
        &self.aircraft
    }

    fn flights_file(&self) -> &str {
        &self.flights
    }

    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn output_file(&self) -> String {
        self.output_file.clone()
    }

    fn dump_tables(&self) -> bool {
        !self.no_dump
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_dir", &self.input_dir)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_non_empty_string("output_file", &self.output_file)?;
        validate_file_extensions(
            "input files",
            &[
                self.airports.as_str(),
                self.aircraft.as_str(),
                self.flights.as_str(),
            ],
            INPUT_EXTENSIONS,
        )?;
        validate_delimiter("delimiter", self.delimiter)?;
        Ok(())
    }
}
