use std::collections::{BTreeMap, BTreeSet};

use crate::agg::ChartError;
use crate::store::RatingRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    /// Row labels, lexicographic order.
    pub platforms: Vec<String>,
    /// Column labels, lexicographic order.
    pub categories: Vec<String>,
    /// values[row][col], normalized 0-100; 0.0 where absent.
    pub values: Vec<Vec<f64>>,
    /// present[row][col] is false for combinations with no source record,
    /// letting renderers tell a missing cell from a true zero score.
    pub present: Vec<Vec<bool>>,
}

pub fn normalized_score(score: f64, max_score: u32) -> f64 {
    score / max_score as f64 * 100.0
}

pub fn aggregate_heatmap(ratings: &[RatingRecord]) -> Result<HeatmapGrid, ChartError> {
    if ratings.is_empty() {
        return Err(ChartError::NoData("no platform ratings"));
    }

    let platforms: Vec<String> = ratings
        .iter()
        .map(|r| r.platform.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let categories: Vec<String> = ratings
        .iter()
        .map(|r| r.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // First value wins on duplicate (platform, category) keys.
    let mut cells: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for r in ratings {
        cells
            .entry((r.platform.as_str(), r.category.as_str()))
            .or_insert_with(|| normalized_score(r.score, r.max_score));
    }

    let mut values = Vec::with_capacity(platforms.len());
    let mut present = Vec::with_capacity(platforms.len());
    for p in &platforms {
        let mut row_values = Vec::with_capacity(categories.len());
        let mut row_present = Vec::with_capacity(categories.len());
        for c in &categories {
            match cells.get(&(p.as_str(), c.as_str())) {
                Some(&v) => {
                    row_values.push(v);
                    row_present.push(true);
                }
                None => {
                    row_values.push(0.0);
                    row_present.push(false);
                }
            }
        }
        values.push(row_values);
        present.push(row_present);
    }

    Ok(HeatmapGrid {
        platforms,
        categories,
        values,
        present,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/agg/heatmap.rs"]
mod tests;
