use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub mod keywords;
pub mod ratings;
pub mod sentiment;

#[derive(Debug, Clone, PartialEq)]
pub struct RatingRecord {
    pub platform: String,
    pub category: String,
    pub score: f64,
    pub max_score: u32,
    pub review_count: Option<u32>,
    pub date_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub theme: String,
    pub positive_mentions: u32,
    pub negative_mentions: u32,
    pub platform: String,
    pub year_range: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRecord {
    pub phrase: &'static str,
    pub mention_count: u32,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Process-local read-only tables, fully rebuilt from static inputs on
/// every init. A convenience cache, never a system of record.
#[derive(Debug, Clone)]
pub struct DataStore {
    pub ratings: Vec<RatingRecord>,
    pub sentiment: Option<Vec<SentimentRecord>>,
    pub csv_path: PathBuf,
}

impl DataStore {
    pub fn init(csv_path: &Path) -> Result<DataStore, StoreError> {
        let ratings = ratings::seed_ratings()?;

        // Sentiment is best-effort: a missing or unreadable CSV degrades
        // the dependent chart, it does not abort the run.
        let sentiment = match sentiment::load_sentiment(csv_path) {
            Ok(rows) => {
                tracing::info!(
                    "sentiment table loaded: {} rows in 2024-2026 focus from {}",
                    rows.len(),
                    csv_path.display()
                );
                Some(rows)
            }
            Err(err) => {
                warn!(
                    "sentiment data unavailable ({err}); dependent chart will degrade"
                );
                None
            }
        };

        Ok(DataStore {
            ratings,
            sentiment,
            csv_path: csv_path.to_path_buf(),
        })
    }

    /// Sentiment rows for the butterfly chart. Prefers a fresh read of the
    /// CSV; falls back to the cached (year-filtered) table when the file
    /// has gone away since init.
    pub fn sentiment_rows(&self) -> Result<Vec<SentimentRecord>, StoreError> {
        match sentiment::read_sentiment_csv(&self.csv_path) {
            Ok(rows) => Ok(rows),
            Err(err) => match &self.sentiment {
                Some(cached) => {
                    warn!("CSV re-read failed ({err}); using cached sentiment table");
                    Ok(cached.clone())
                }
                None => Err(err),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/tests.rs"]
mod tests;
