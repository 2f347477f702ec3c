use crate::domain::tables::{AircraftRecord, AirportRecord, FlightRecord};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use thiserror::Error;

/// 一列原始資料：欄位名稱與字串值，順序與表頭一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// 手寫序列化以保留欄位順序
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct NamedTable {
    pub name: String,
    pub table: Table,
}

/// extract 階段的輸出：型別化的三張表，以及供終端機傾印的原始資料
#[derive(Debug, Clone)]
pub struct FlightDataset {
    pub airports: Vec<AirportRecord>,
    pub aircraft: Vec<AircraftRecord>,
    pub flights: Vec<FlightRecord>,
    pub source_tables: Vec<NamedTable>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlightError {
    #[error("Error: Invalid Overseas Airport code: {0}")]
    UnknownAirport(String),

    #[error("Error: Invalid aircraft type: {0}")]
    UnknownAircraft(String),

    #[error("Error: Invalid number in '{column}': '{value}'")]
    InvalidNumber { column: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfitResult {
    Profit { flight: FlightRecord, profit: f64 },
    Error(FlightError),
}

impl ProfitResult {
    pub fn profit(&self) -> Option<f64> {
        match self {
            Self::Profit { profit, .. } => Some(*profit),
            Self::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfitSummary {
    pub flights: usize,
    pub profitable: usize,
    pub loss_making: usize,
    pub errors: usize,
    pub total_profit: f64,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub results: Vec<ProfitResult>,
    pub report: String,
    pub summary: ProfitSummary,
}
