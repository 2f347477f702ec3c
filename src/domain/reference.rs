use crate::domain::tables::{AircraftRecord, AirportRecord};
use std::collections::HashMap;

pub trait ReferenceKey {
    fn reference_key(&self) -> &str;
}

impl ReferenceKey for AirportRecord {
    fn reference_key(&self) -> &str {
        &self.code
    }
}

impl ReferenceKey for AircraftRecord {
    fn reference_key(&self) -> &str {
        &self.aircraft_type
    }
}

/// 以鍵值索引的參照表。重複的鍵以檔案中第一筆為準，其餘只記警告
#[derive(Debug)]
pub struct ReferenceTable<'a, T> {
    index: HashMap<&'a str, &'a T>,
}

impl<'a, T: ReferenceKey> ReferenceTable<'a, T> {
    pub fn new(label: &str, rows: &'a [T]) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        for row in rows {
            let key = row.reference_key();
            if index.contains_key(key) {
                tracing::warn!(
                    "⚠️ Duplicate {} key '{}' ignored, keeping the first occurrence",
                    label,
                    key
                );
                continue;
            }
            index.insert(key, row);
        }
        Self { index }
    }

    pub fn get(&self, key: &str) -> Option<&'a T> {
        self.index.get(key).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }
}
