//! 三張輸入表的型別化檢視。
//!
//! 欄位值保持原始字串，數值解析留給計算階段，這樣壞掉的數字只會影響該筆航班。

use crate::domain::model::{Record, Table};
use crate::utils::error::{ProfitError, Result};

pub const AIRPORT_CODE: &str = "Code";
pub const DISTANCE_FROM_MAN: &str = "Distance from MAN";
pub const DISTANCE_FROM_LGW: &str = "Distance from LGW";

pub const AIRCRAFT_TYPE: &str = "Type of Aircraft";
pub const RUNNING_COST: &str = "Running cost per seat per 100km";

pub const UK_AIRPORT: &str = "UK Airport";
pub const OVERSEAS_AIRPORT: &str = "Overseas Airport";
pub const FLIGHT_AIRCRAFT_TYPE: &str = "Type of aircraft";
pub const ECONOMY_SEATS: &str = "Number of economy seats booked";
pub const BUSINESS_SEATS: &str = "Number of business seats booked";
pub const FIRST_SEATS: &str = "Number of first class seats booked";
pub const ECONOMY_PRICE: &str = "Price of economy class seat";
pub const BUSINESS_PRICE: &str = "Price of business class seat";
pub const FIRST_PRICE: &str = "Price of first class seat";

pub trait TableRow: Sized {
    const REQUIRED_COLUMNS: &'static [&'static str];

    fn from_record(record: &Record) -> Self;

    /// 先檢查表頭，缺欄位直接失敗，再逐列轉換
    fn rows_from(table: &Table, source_name: &str) -> Result<Vec<Self>> {
        // 空檔沒有表頭也沒有資料，直接回傳空集合
        if table.headers.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(column) = Self::REQUIRED_COLUMNS
            .iter()
            .find(|column| !table.has_column(column))
        {
            return Err(ProfitError::MissingColumn {
                source_name: source_name.to_string(),
                column: column.to_string(),
            });
        }

        Ok(table.records.iter().map(Self::from_record).collect())
    }
}

// 列太短時欄位會缺席，留空字串讓計算階段回報解析錯誤
fn field(record: &Record, column: &str) -> String {
    record.get(column).unwrap_or_default().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportRecord {
    pub code: String,
    pub distance_from_man: String,
    pub distance_from_lgw: String,
}

impl TableRow for AirportRecord {
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &[AIRPORT_CODE, DISTANCE_FROM_MAN, DISTANCE_FROM_LGW];

    fn from_record(record: &Record) -> Self {
        Self {
            code: field(record, AIRPORT_CODE),
            distance_from_man: field(record, DISTANCE_FROM_MAN),
            distance_from_lgw: field(record, DISTANCE_FROM_LGW),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AircraftRecord {
    pub aircraft_type: String,
    pub running_cost_per_seat_per_100km: String,
}

impl TableRow for AircraftRecord {
    const REQUIRED_COLUMNS: &'static [&'static str] = &[AIRCRAFT_TYPE, RUNNING_COST];

    fn from_record(record: &Record) -> Self {
        Self {
            aircraft_type: field(record, AIRCRAFT_TYPE),
            running_cost_per_seat_per_100km: field(record, RUNNING_COST),
        }
    }
}

/// 單一艙等的訂位數與票價
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatClass {
    pub seats_booked: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub uk_airport: String,
    pub overseas_airport: String,
    pub aircraft_type: String,
    pub economy: SeatClass,
    pub business: SeatClass,
    pub first: SeatClass,
}

impl FlightRecord {
    /// 依經濟、商務、頭等的順序列出艙等及其欄位名稱
    pub fn seat_classes(&self) -> [(&SeatClass, &'static str, &'static str); 3] {
        [
            (&self.economy, ECONOMY_SEATS, ECONOMY_PRICE),
            (&self.business, BUSINESS_SEATS, BUSINESS_PRICE),
            (&self.first, FIRST_SEATS, FIRST_PRICE),
        ]
    }
}

impl TableRow for FlightRecord {
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        UK_AIRPORT,
        OVERSEAS_AIRPORT,
        FLIGHT_AIRCRAFT_TYPE,
        ECONOMY_SEATS,
        BUSINESS_SEATS,
        FIRST_SEATS,
        ECONOMY_PRICE,
        BUSINESS_PRICE,
        FIRST_PRICE,
    ];

    fn from_record(record: &Record) -> Self {
        Self {
            uk_airport: field(record, UK_AIRPORT),
            overseas_airport: field(record, OVERSEAS_AIRPORT),
            aircraft_type: field(record, FLIGHT_AIRCRAFT_TYPE),
            economy: SeatClass {
                seats_booked: field(record, ECONOMY_SEATS),
                price: field(record, ECONOMY_PRICE),
            },
            business: SeatClass {
                seats_booked: field(record, BUSINESS_SEATS),
                price: field(record, BUSINESS_PRICE),
            },
            first: SeatClass {
                seats_booked: field(record, FIRST_SEATS),
                price: field(record, FIRST_PRICE),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let records = rows
            .iter()
            .map(|row| {
                Record::new(
                    headers
                        .iter()
                        .zip(row.iter())
                        .map(|(h, v)| (h.clone(), v.to_string()))
                        .collect(),
                )
            })
            .collect();
        Table { headers, records }
    }

    #[test]
    fn test_airport_rows_from_table() {
        let t = table(
            &["Code", "Full name", "Distance from MAN", "Distance from LGW"],
            &[&["JFK", "John F Kennedy", "5376", "5583"]],
        );
        let rows = AirportRecord::rows_from(&t, "airports.csv").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "JFK");
        assert_eq!(rows[0].distance_from_man, "5376");
        assert_eq!(rows[0].distance_from_lgw, "5583");
    }

    #[test]
    fn test_missing_required_column_fails_fast() {
        let t = table(&["Type of Aircraft"], &[&["Medium narrow body"]]);
        let err = AircraftRecord::rows_from(&t, "aeroplanes.csv").unwrap_err();
        match err {
            ProfitError::MissingColumn { source_name, column } => {
                assert_eq!(source_name, "aeroplanes.csv");
                assert_eq!(column, RUNNING_COST);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_short_row_leaves_empty_values() {
        let t = table(
            &["Type of Aircraft", "Running cost per seat per 100km"],
            &[&["Large narrow body"]],
        );
        let rows = AircraftRecord::rows_from(&t, "aeroplanes.csv").unwrap();
        assert_eq!(rows[0].aircraft_type, "Large narrow body");
        assert_eq!(rows[0].running_cost_per_seat_per_100km, "");
    }

    #[test]
    fn test_empty_table_has_no_rows() {
        let rows = FlightRecord::rows_from(&Table::default(), "flights.csv").unwrap();
        assert!(rows.is_empty());
    }
}
