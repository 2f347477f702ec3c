use flight_profit::core::ProfitResult;
use flight_profit::{LocalStorage, ProfitEngine, ProfitError, ProfitPipeline, TomlConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const AIRPORTS: &str = "\
Code,Full name,Distance from MAN,Distance from LGW
JFK,John F Kennedy International,800,500
ORY,Paris-Orly,610,396
";

const AEROPLANES: &str = "\
Type of Aircraft,Running cost per seat per 100km,Maximum flight range (km),Number of economy seats,Number of business seats,Number of first class seats
Medium narrow body,2.50,4100,160,12,0
Large wide body,15,12000,380,38,18
";

const FLIGHTS: &str = "\
UK Airport,Overseas Airport,Type of aircraft,Number of economy seats booked,Number of business seats booked,Number of first class seats booked,Price of economy class seat,Price of business class seat,Price of first class seat
LGW,JFK,Medium narrow body,100,20,5,200.00,500.00,1000.00

MAN,JFK,Medium narrow body,100,20,5,200.00,500.00,1000.00
LGW,XXX,Medium narrow body,100,20,5,200.00,500.00,1000.00

MAN,ORY,Boeing 999,10,0,0,50,0,0
LGW,ORY,Large wide body,ten,0,0,50,0,0
";

fn write_inputs(dir: &Path, flights: &str) {
    fs::write(dir.join("airports.csv"), AIRPORTS).unwrap();
    fs::write(dir.join("aeroplanes.csv"), AEROPLANES).unwrap();
    fs::write(dir.join("valid_flight_data.csv"), flights).unwrap();
}

fn config_for(dir: &Path) -> TomlConfig {
    let toml_content = format!(
        r#"
[input]
dir = "{0}"

[report]
output_dir = "{0}/out"
dump_tables = false
"#,
        dir.display()
    );
    TomlConfig::from_toml_str(&toml_content).unwrap()
}

#[test]
fn test_end_to_end_report() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    write_inputs(temp_dir.path(), FLIGHTS);

    let pipeline = ProfitPipeline::new(LocalStorage::new(String::new()), config_for(temp_dir.path()));
    let engine = ProfitEngine::new(pipeline).with_table_dump(false);

    let mut console = Vec::new();
    let outcome = engine.run_with_output(&mut console)?;

    // 空白行不算航班，結果數與順序與輸入一致
    assert_eq!(outcome.results.len(), 5);
    assert_eq!(outcome.results[0].profit(), Some(33437.5));
    assert_eq!(outcome.results[1].profit(), Some(32500.0));
    assert!(outcome.results[2].is_error());
    assert!(outcome.results[3].is_error());
    assert!(outcome.results[4].is_error());
    assert_eq!(outcome.summary.errors, 3);
    assert_eq!(outcome.summary.profitable, 2);

    let output_path = outcome.output_path.expect("report should be written");
    let report = fs::read_to_string(&output_path)?;

    assert!(report.contains("      UK Airport: LGW\n"));
    assert!(report.contains("      Price of economy class seat: £200.00\n"));
    assert!(report.contains("      Profit: £33437.5\n"));
    assert!(report.contains("      Profit: £32500\n"));
    assert!(report.contains("Error: Invalid Overseas Airport code: XXX\n"));
    assert!(report.contains("Error: Invalid aircraft type: Boeing 999\n"));
    assert!(report.contains("Error: Invalid number in 'Number of economy seats booked': 'ten'\n"));

    let first_error = report.find("XXX").unwrap();
    let second_error = report.find("Boeing 999").unwrap();
    assert!(first_error < second_error);

    let console = String::from_utf8(console)?;
    assert!(console.contains("Error: Invalid aircraft type: Boeing 999"));
    Ok(())
}

#[test]
fn test_report_is_overwritten_each_run() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    write_inputs(temp_dir.path(), FLIGHTS);

    let out_dir = temp_dir.path().join("out");
    fs::create_dir_all(&out_dir)?;
    fs::write(out_dir.join("flight_profit.txt"), "stale report from a previous run")?;

    let pipeline = ProfitPipeline::new(LocalStorage::new(String::new()), config_for(temp_dir.path()));
    let outcome = ProfitEngine::new(pipeline)
        .with_table_dump(false)
        .run_with_output(&mut Vec::new())?;

    let report = fs::read_to_string(outcome.output_path.unwrap())?;
    assert!(!report.contains("stale report"));
    Ok(())
}

#[test]
fn test_table_dump_follows_report() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    write_inputs(temp_dir.path(), FLIGHTS);

    let pipeline = ProfitPipeline::new(LocalStorage::new(String::new()), config_for(temp_dir.path()));
    let mut console = Vec::new();
    ProfitEngine::new(pipeline).run_with_output(&mut console)?;

    let console = String::from_utf8(console)?;
    let report_end = console.find("Error: Invalid number").unwrap();
    let dump_start = console.find("airports.csv (2 records):").unwrap();
    assert!(report_end < dump_start);
    assert!(console.contains("aeroplanes.csv (2 records):"));
    assert!(console.contains("valid_flight_data.csv (5 records):"));
    assert!(console.contains("\"Code\": \"ORY\""));
    Ok(())
}

#[test]
fn test_missing_input_is_fatal() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("airports.csv"), AIRPORTS)?;

    let pipeline = ProfitPipeline::new(LocalStorage::new(String::new()), config_for(temp_dir.path()));
    let result = ProfitEngine::new(pipeline).run_with_output(&mut Vec::new());

    match result {
        Err(ProfitError::LoadFailed { sources }) => {
            assert_eq!(sources.len(), 2);
            assert!(sources[0].ends_with("aeroplanes.csv"));
            assert!(sources[1].ends_with("valid_flight_data.csv"));
        }
        other => panic!("unexpected result: {other:?}"),
    }

    // 載入失敗時不應產生報表
    assert!(!temp_dir.path().join("out/flight_profit.txt").exists());
    Ok(())
}

#[test]
fn test_unwritable_output_is_not_fatal() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    write_inputs(temp_dir.path(), FLIGHTS);

    // 輸出目錄的位置被一個檔案佔住，寫入必然失敗
    fs::write(temp_dir.path().join("out"), "not a directory")?;

    let pipeline = ProfitPipeline::new(LocalStorage::new(String::new()), config_for(temp_dir.path()));
    let mut console = Vec::new();
    let outcome = ProfitEngine::new(pipeline)
        .with_table_dump(false)
        .run_with_output(&mut console)?;

    assert!(outcome.output_path.is_none());
    assert_eq!(outcome.results.len(), 5);
    assert!(String::from_utf8(console)?.contains("Profit: £33437.5"));
    Ok(())
}

#[test]
fn test_tab_delimited_inputs() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    fs::write(dir.join("airports.csv"), AIRPORTS.replace(',', "\t"))?;
    fs::write(dir.join("aeroplanes.csv"), AEROPLANES.replace(',', "\t"))?;
    fs::write(dir.join("valid_flight_data.csv"), FLIGHTS.replace(',', "\t"))?;

    let mut config = config_for(dir);
    config.input.delimiter = '\t';

    let pipeline = ProfitPipeline::new(LocalStorage::new(String::new()), config);
    let outcome = ProfitEngine::new(pipeline)
        .with_table_dump(false)
        .run_with_output(&mut Vec::new())?;

    assert_eq!(outcome.results.len(), 5);
    assert!(matches!(outcome.results[0], ProfitResult::Profit { profit, .. } if profit == 33437.5));
    Ok(())
}
