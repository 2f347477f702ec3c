use crate::core::{NamedTable, ProfitResult};
use crate::utils::error::Result;
use std::io::Write;

/// 報表的貨幣符號，票價與利潤都原樣接在後面
pub const CURRENCY: &str = "£";

pub const DEFAULT_OUTPUT_FILE: &str = "flight_profit.txt";

pub fn render_result(result: &ProfitResult) -> String {
    match result {
        ProfitResult::Error(e) => format!("{}\n", e),
        ProfitResult::Profit { flight, profit } => format!(
            "
      Flight Details:
      UK Airport: {uk}
      Overseas Airport: {overseas}
      Type of aircraft: {aircraft}
      Number of economy seats booked: {economy_seats}
      Number of business seats booked: {business_seats}
      Number of first class seats booked: {first_seats}
      Price of economy class seat: {c}{economy_price}
      Price of business class seat: {c}{business_price}
      Price of first class seat: {c}{first_price}
      Profit: {c}{profit}
    ",
            uk = flight.uk_airport,
            overseas = flight.overseas_airport,
            aircraft = flight.aircraft_type,
            economy_seats = flight.economy.seats_booked,
            business_seats = flight.business.seats_booked,
            first_seats = flight.first.seats_booked,
            economy_price = flight.economy.price,
            business_price = flight.business.price,
            first_price = flight.first.price,
            c = CURRENCY,
            profit = profit,
        ),
    }
}

/// 依輸入順序串接所有區塊，也就是寫入輸出檔的內容
pub fn render_report(results: &[ProfitResult]) -> String {
    results.iter().map(render_result).collect()
}

/// 終端機輸出：每個區塊各佔一次輸出
pub fn write_console<W: Write>(out: &mut W, results: &[ProfitResult]) -> std::io::Result<()> {
    for result in results {
        match result {
            ProfitResult::Error(_) => write!(out, "{}", render_result(result))?,
            ProfitResult::Profit { .. } => writeln!(out, "{}", render_result(result))?,
        }
    }
    out.flush()
}

/// 把載入的三張表以 JSON 形式印出，方便核對輸入
pub fn dump_tables<W: Write>(out: &mut W, tables: &[NamedTable]) -> Result<()> {
    for named in tables {
        writeln!(out, "{} ({} records):", named.name, named.table.len())?;
        serde_json::to_writer_pretty(&mut *out, &named.table.records)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
