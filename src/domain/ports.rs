use crate::domain::model::{FlightDataset, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_dir(&self) -> &str;
    fn airports_file(&self) -> &str;
    fn aircraft_file(&self) -> &str;
    fn flights_file(&self) -> &str;
    fn delimiter(&self) -> char;
    fn output_dir(&self) -> &str;
    fn output_file(&self) -> String;
    fn dump_tables(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<FlightDataset>;
    fn transform(&self, data: &FlightDataset) -> Result<TransformResult>;
    fn load(&self, result: &TransformResult) -> Result<String>;
}
