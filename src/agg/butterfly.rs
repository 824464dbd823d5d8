use crate::agg::ChartError;
use crate::store::SentimentRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct ButterflySeries {
    /// Theme labels, worst sentiment ratio first.
    pub themes: Vec<String>,
    pub positive: Vec<i64>,
    /// Negative mention counts, negated for left-side bars.
    pub negative: Vec<i64>,
}

/// positive / (positive + negative), with 1 substituted for a zero
/// denominator so an unmentioned theme reads as ratio 0.
pub fn sentiment_ratio(positive: u32, negative: u32) -> f64 {
    // Widen before adding so the sum cannot overflow u32.
    let total = positive as u64 + negative as u64;
    positive as f64 / total.max(1) as f64
}

pub fn aggregate_butterfly(rows: &[SentimentRecord]) -> Result<ButterflySeries, ChartError> {
    if rows.is_empty() {
        return Err(ChartError::NoData("no sentiment rows"));
    }

    let mut indexed: Vec<(usize, f64)> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (i, sentiment_ratio(r.positive_mentions, r.negative_mentions)))
        .collect();

    // Stable sort: equal ratios keep source order.
    indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut themes = Vec::with_capacity(rows.len());
    let mut positive = Vec::with_capacity(rows.len());
    let mut negative = Vec::with_capacity(rows.len());
    for (i, _ratio) in indexed {
        let row = &rows[i];
        themes.push(row.theme.clone());
        positive.push(row.positive_mentions as i64);
        negative.push(-(row.negative_mentions as i64));
    }

    Ok(ButterflySeries {
        themes,
        positive,
        negative,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/agg/butterfly.rs"]
mod tests;
