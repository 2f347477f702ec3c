use crate::core::{
    AircraftRecord, AirportRecord, FlightError, FlightRecord, ProfitResult, ProfitSummary,
    ReferenceTable,
};
use crate::domain::tables::{DISTANCE_FROM_LGW, DISTANCE_FROM_MAN, RUNNING_COST};
use std::str::FromStr;

/// 從曼徹斯特出發的航班使用 `Distance from MAN`，其他一律視為 LGW
pub const MANCHESTER: &str = "MAN";

/// 依輸入順序為每筆航班產生一個結果，參照表重複鍵以第一筆為準
pub fn calculate_profits(
    flights: &[FlightRecord],
    airports: &[AirportRecord],
    aircraft: &[AircraftRecord],
) -> Vec<ProfitResult> {
    let airports = ReferenceTable::new("airport", airports);
    let aircraft = ReferenceTable::new("aircraft", aircraft);
    tracing::debug!(
        "Indexed {} airports and {} aircraft types",
        airports.len(),
        aircraft.len()
    );

    flights
        .iter()
        .map(|flight| calculate_flight(flight, &airports, &aircraft))
        .collect()
}

pub fn calculate_flight(
    flight: &FlightRecord,
    airports: &ReferenceTable<'_, AirportRecord>,
    aircraft: &ReferenceTable<'_, AircraftRecord>,
) -> ProfitResult {
    match flight_profit(flight, airports, aircraft) {
        Ok(profit) => ProfitResult::Profit {
            flight: flight.clone(),
            profit,
        },
        Err(e) => {
            tracing::debug!("Flight skipped: {}", e);
            ProfitResult::Error(e)
        }
    }
}

fn flight_profit(
    flight: &FlightRecord,
    airports: &ReferenceTable<'_, AirportRecord>,
    aircraft: &ReferenceTable<'_, AircraftRecord>,
) -> Result<f64, FlightError> {
    let airport = airports
        .get(&flight.overseas_airport)
        .ok_or_else(|| FlightError::UnknownAirport(flight.overseas_airport.clone()))?;

    let plane = aircraft
        .get(&flight.aircraft_type)
        .ok_or_else(|| FlightError::UnknownAircraft(flight.aircraft_type.clone()))?;

    let distance: i64 = if flight.uk_airport == MANCHESTER {
        parse_field(DISTANCE_FROM_MAN, &airport.distance_from_man)?
    } else {
        parse_field(DISTANCE_FROM_LGW, &airport.distance_from_lgw)?
    };

    let mut income = 0.0;
    let mut passengers: u64 = 0;
    for (class, seats_column, price_column) in flight.seat_classes() {
        let seats: u32 = parse_field(seats_column, &class.seats_booked)?;
        let price = parse_amount(price_column, &class.price)?;
        income += f64::from(seats) * price;
        passengers += u64::from(seats);
    }

    let running_cost = parse_amount(RUNNING_COST, &plane.running_cost_per_seat_per_100km)?;
    let cost_per_seat = running_cost * (distance as f64 / 100.0);
    let total_cost = cost_per_seat * passengers as f64;

    Ok(round_to_cents(income - total_cost))
}

fn parse_field<T: FromStr>(column: &'static str, value: &str) -> Result<T, FlightError> {
    value.trim().parse().map_err(|_| FlightError::InvalidNumber {
        column,
        value: value.to_string(),
    })
}

// f64 的 FromStr 接受 NaN 與 inf，金額只允許有限值
fn parse_amount(column: &'static str, value: &str) -> Result<f64, FlightError> {
    let amount: f64 = parse_field(column, value)?;
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(FlightError::InvalidNumber {
            column,
            value: value.to_string(),
        })
    }
}

/// 四捨五入到小數點後兩位，並把 -0.0 正規化為 0
pub fn round_to_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl ProfitSummary {
    pub fn from_results(results: &[ProfitResult]) -> Self {
        let mut summary = Self {
            flights: results.len(),
            ..Self::default()
        };

        for result in results {
            match result.profit() {
                Some(profit) => {
                    if profit > 0.0 {
                        summary.profitable += 1;
                    } else if profit < 0.0 {
                        summary.loss_making += 1;
                    }
                    summary.total_profit += profit;
                }
                None => summary.errors += 1,
            }
        }

        summary.total_profit = round_to_cents(summary.total_profit);
        summary
    }
}
