//! Listing sinks.
//!
//! For each extracted listing the surrounding system persists
//! `(item, direction, price, timestamp, speaker)`. The parser core has no
//! persistence contract of its own; [`ListingSink`] is the seam. Sinks:
//! stdout (one JSON line per record) or in-memory (tests).

use crate::types::ItemId;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One persisted row: a listing plus its upload context.
#[derive(Clone, Debug, Serialize)]
pub struct ListingRecord {
    /// Normalized server-time timestamp of the log line.
    pub timestamp: NaiveDateTime,
    pub speaker: String,
    pub item_id: ItemId,
    pub is_selling: bool,
    pub price: Option<u64>,
}

/// Sink for extracted listings. Implementations write to stdout, a store,
/// or an in-memory buffer (tests).
pub trait ListingSink: Send + Sync {
    fn record(&self, record: &ListingRecord);
}

/// Writes one JSON line per record to stdout. Safe to use from multiple
/// threads.
pub struct StdoutSink;

impl ListingSink for StdoutSink {
    fn record(&self, record: &ListingRecord) {
        if let Ok(line) = serde_json::to_string(record) {
            println!("{}", line);
        }
    }
}

/// In-memory sink that stores records for tests. Clone shares the same
/// backing buffer.
#[derive(Clone, Default)]
pub struct InMemorySink {
    records: std::sync::Arc<std::sync::Mutex<Vec<ListingRecord>>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ListingRecord> {
        self.records.lock().expect("lock").clone()
    }

    pub fn clear(&self) {
        self.records.lock().expect("lock").clear();
    }
}

impl ListingSink for InMemorySink {
    fn record(&self, record: &ListingRecord) {
        self.records.lock().expect("lock").push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn in_memory_sink_accumulates_and_clears() {
        let sink = InMemorySink::new();
        let record = ListingRecord {
            timestamp: NaiveDate::from_ymd_opt(2017, 1, 1)
                .unwrap()
                .and_hms_opt(13, 45, 35)
                .unwrap(),
            speaker: "Toon".to_string(),
            item_id: ItemId(17),
            is_selling: true,
            price: Some(1200),
        };
        sink.record(&record);
        sink.record(&record);
        assert_eq!(sink.records().len(), 2);
        assert_eq!(sink.records()[0].item_id, ItemId(17));
        sink.clear();
        assert!(sink.records().is_empty());
    }

    #[test]
    fn clones_share_the_backing_buffer() {
        let sink = InMemorySink::new();
        let other = sink.clone();
        other.record(&ListingRecord {
            timestamp: NaiveDate::from_ymd_opt(2017, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            speaker: "Toon".to_string(),
            item_id: ItemId(1),
            is_selling: false,
            price: None,
        });
        assert_eq!(sink.records().len(), 1);
    }
}
