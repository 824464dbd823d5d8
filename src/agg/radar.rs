use crate::agg::ChartError;
use crate::store::RatingRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    /// Category labels, polygon-closed: first element repeated at the end.
    pub categories: Vec<String>,
    /// Scores in category order, closed the same way.
    pub scores: Vec<f64>,
    /// Shared axis maximum (the records' max_score).
    pub axis_max: f64,
}

pub fn aggregate_radar(ratings: &[RatingRecord]) -> Result<RadarSeries, ChartError> {
    let filtered: Vec<&RatingRecord> = ratings
        .iter()
        .filter(|r| r.platform == "Blind" && r.category != "Overall")
        .collect();

    if filtered.is_empty() {
        return Err(ChartError::NoData("no Blind platform ratings"));
    }

    let mut categories: Vec<String> = filtered.iter().map(|r| r.category.clone()).collect();
    let mut scores: Vec<f64> = filtered.iter().map(|r| r.score).collect();
    let axis_max = filtered
        .iter()
        .map(|r| r.max_score as f64)
        .fold(0.0f64, f64::max);

    // Close the polygon so the plotted line loops back to its start.
    categories.push(categories[0].clone());
    scores.push(scores[0]);

    Ok(RadarSeries {
        categories,
        scores,
        axis_max,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/agg/radar.rs"]
mod tests;
