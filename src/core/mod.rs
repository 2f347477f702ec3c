pub mod calculator;
pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{
    FlightDataset, FlightError, NamedTable, ProfitResult, ProfitSummary, Record, Table,
    TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::domain::reference::ReferenceTable;
pub use crate::domain::tables::{AircraftRecord, AirportRecord, FlightRecord, TableRow};
pub use crate::utils::error::Result;
