use std::fs::File;
use std::path::Path;

use crate::store::{SentimentRecord, StoreError};

const FOCUS_YEARS: &[&str] = &["2024", "2025", "2026"];

pub fn in_focus_years(year_range: &str) -> bool {
    FOCUS_YEARS.iter().any(|y| year_range.contains(y))
}

/// Raw CSV read, no year filtering.
pub fn read_sentiment_csv(path: &Path) -> Result<Vec<SentimentRecord>, StoreError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let record: SentimentRecord = result?;
        rows.push(record);
    }
    Ok(rows)
}

/// CSV read filtered to the 2024-2026 focus window; this is what the
/// store's sentiment table holds.
pub fn load_sentiment(path: &Path) -> Result<Vec<SentimentRecord>, StoreError> {
    let mut rows = read_sentiment_csv(path)?;
    rows.retain(|r| in_focus_years(&r.year_range));
    Ok(rows)
}
