
use super::*;
use crate::agg::ChartError;
use crate::store::RatingRecord;

fn rating(platform: &str, category: &str, score: f64, max_score: u32) -> RatingRecord {
    RatingRecord {
        platform: platform.to_string(),
        category: category.to_string(),
        score,
        max_score,
        review_count: None,
        date_range: "2024-2025".to_string(),
    }
}

#[test]
fn test_normalization() {
    assert_eq!(normalized_score(3.8, 5), 76.0);
    assert_eq!(normalized_score(5.0, 5), 100.0);
    assert_eq!(normalized_score(0.0, 5), 0.0);
}

#[test]
fn test_missing_combination_fills_zero_with_mask() {
    let ratings = vec![
        rating("Blind", "Management", 2.5, 5),
        rating("Indeed", "Overall", 3.9, 5),
    ];
    let grid = aggregate_heatmap(&ratings).unwrap();
    assert_eq!(grid.platforms, vec!["Blind", "Indeed"]);
    assert_eq!(grid.categories, vec!["Management", "Overall"]);

    // Present cells.
    assert_eq!(grid.values[0][0], 50.0);
    assert!(grid.present[0][0]);
    assert_eq!(grid.values[1][1], 78.0);
    assert!(grid.present[1][1]);

    // Absent combinations: value 0, mask false.
    assert_eq!(grid.values[0][1], 0.0);
    assert!(!grid.present[0][1]);
    assert_eq!(grid.values[1][0], 0.0);
    assert!(!grid.present[1][0]);
}

#[test]
fn test_duplicate_key_first_value_wins() {
    let ratings = vec![
        rating("Blind", "Management", 2.5, 5),
        rating("Blind", "Management", 4.5, 5),
    ];
    let grid = aggregate_heatmap(&ratings).unwrap();
    assert_eq!(grid.values[0][0], 50.0);
}

#[test]
fn test_rows_and_columns_sorted() {
    let ratings = vec![
        rating("Indeed", "Overall", 3.9, 5),
        rating("Blind", "Work Life Balance", 4.3, 5),
        rating("Comparably", "Manager Onboarding", 1.3, 5),
    ];
    let grid = aggregate_heatmap(&ratings).unwrap();
    assert_eq!(grid.platforms, vec!["Blind", "Comparably", "Indeed"]);
    assert_eq!(
        grid.categories,
        vec!["Manager Onboarding", "Overall", "Work Life Balance"]
    );
}

#[test]
fn test_empty_input_signals_no_data() {
    assert!(matches!(aggregate_heatmap(&[]), Err(ChartError::NoData(_))));
}
