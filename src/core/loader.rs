use crate::core::{Record, Storage, Table};
use crate::utils::error::Result;
use csv::{ReaderBuilder, StringRecord, Trim};

pub const DEFAULT_DELIMITER: u8 = b',';

/// 解析分隔文字：第一行為表頭，其後每個非空白行依位置對應到表頭欄位。
///
/// 欄位不足時缺少的欄位不會出現在 [`Record`] 中，多出來的欄位直接丟棄。
/// 引號沒有特殊意義，每一行只依分隔符號切開。
/// 只去除整行前後的空白，欄位值本身維持原始字串，不做型別轉換。
pub fn parse_table(content: &[u8], delimiter: u8) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .quoting(false)
        .trim(Trim::Headers)
        .from_reader(content);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let values = trim_line(&row);
        if values.len() == 1 && values[0].is_empty() {
            continue;
        }

        let fields = headers
            .iter()
            .zip(values)
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        records.push(Record::new(fields));
    }

    Ok(Table { headers, records })
}

// 等同於先 trim 整行再切欄位：只動第一欄的開頭與最後一欄的結尾
fn trim_line(row: &StringRecord) -> Vec<&str> {
    let mut values: Vec<&str> = row.iter().collect();
    if let Some(first) = values.first_mut() {
        *first = first.trim_start();
    }
    if let Some(last) = values.last_mut() {
        *last = last.trim_end();
    }
    values
}

/// 透過 Storage 讀取整個檔案再解析。讀取失敗時不回傳任何部分資料
pub fn load_table<S: Storage>(storage: &S, path: &str, delimiter: u8) -> Result<Table> {
    tracing::debug!("Reading table from: {}", path);
    let content = storage.read_file(path)?;
    let table = parse_table(&content, delimiter)?;
    tracing::debug!(
        "Loaded {} records with {} columns from {}",
        table.len(),
        table.headers.len(),
        path
    );
    Ok(table)
}
