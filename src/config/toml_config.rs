use crate::core::report::DEFAULT_OUTPUT_FILE;
use crate::core::ConfigProvider;
use crate::utils::error::{ProfitError, Result};
use crate::utils::validation::{
    validate_delimiter, validate_file_extensions, validate_non_empty_string, validate_path,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const INPUT_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub dir: String,
    pub airports: String,
    pub aircraft: String,
    pub flights: String,
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            airports: "airports.csv".to_string(),
            aircraft: "aeroplanes.csv".to_string(),
            flights: "valid_flight_data.csv".to_string(),
            delimiter: ',',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_dir: String,
    /// 可包含 `{timestamp}`，執行時替換成 UTC 時間
    pub output_file: String,
    pub dump_tables: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            dump_tables: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProfitError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_path("input.dir", &self.input.dir)?;
        validate_path("report.output_dir", &self.report.output_dir)?;
        validate_non_empty_string("report.output_file", &self.report.output_file)?;
        validate_file_extensions(
            "input",
            &[
                self.input.airports.as_str(),
                self.input.aircraft.as_str(),
                self.input.flights.as_str(),
            ],
            INPUT_EXTENSIONS,
        )?;
        validate_delimiter("input.delimiter", self.input.delimiter)?;

        if let Some(format) = self.log_format() {
            if !["compact", "json"].contains(&format) {
                return Err(ProfitError::InvalidConfigValueError {
                    field: "monitoring.log_format".to_string(),
                    value: format.to_string(),
                    reason: "Valid formats: compact, json".to_string(),
                });
            }
        }

        Ok(())
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_format(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_format.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_dir(&self) -> &str {
        &self.input.dir
    }

    fn airports_file(&self) -> &str {
        &self.input.airports
    }

    fn aircraft_file(&self) -> &str {
        &self.input.aircraft
    }

    fn flights_file(&self) -> &str {
        &self.input.flights
    }

    fn delimiter(&self) -> char {
        self.input.delimiter
    }

    fn output_dir(&self) -> &str {
        &self.report.output_dir
    }

    fn output_file(&self) -> String {
        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
        self.report.output_file.replace("{timestamp}", &timestamp)
    }

    fn dump_tables(&self) -> bool {
        self.report.dump_tables
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
