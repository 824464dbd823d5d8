
use super::*;
use crate::agg::ChartError;
use crate::store::RatingRecord;

fn rating(platform: &str, category: &str, score: f64) -> RatingRecord {
    RatingRecord {
        platform: platform.to_string(),
        category: category.to_string(),
        score,
        max_score: 5,
        review_count: None,
        date_range: "2024-2025".to_string(),
    }
}

#[test]
fn test_polygon_closure() {
    let ratings = vec![
        rating("Blind", "Management", 2.9),
        rating("Blind", "Compensation", 3.8),
        rating("Blind", "Career Growth", 3.0),
    ];
    let series = aggregate_radar(&ratings).unwrap();
    assert_eq!(series.categories.len(), 4);
    assert_eq!(series.scores.len(), 4);
    assert_eq!(series.categories.first(), series.categories.last());
    assert_eq!(series.scores.first(), series.scores.last());
    assert_eq!(series.axis_max, 5.0);
}

#[test]
fn test_filters_overall_and_other_platforms() {
    let ratings = vec![
        rating("Blind", "Overall", 3.5),
        rating("Blind", "Management", 2.9),
        rating("Indeed", "Overall", 3.9),
        rating("Glassdoor_SF", "Work Life Balance", 4.1),
    ];
    let series = aggregate_radar(&ratings).unwrap();
    assert_eq!(series.categories, vec!["Management", "Management"]);
    assert_eq!(series.scores, vec![2.9, 2.9]);
}

#[test]
fn test_empty_filter_signals_no_data() {
    let ratings = vec![rating("Indeed", "Overall", 3.9)];
    assert!(matches!(
        aggregate_radar(&ratings),
        Err(ChartError::NoData(_))
    ));
    assert!(matches!(aggregate_radar(&[]), Err(ChartError::NoData(_))));
}

#[test]
fn test_seeded_store_has_four_axes() {
    let ratings = crate::store::ratings::seed_ratings().unwrap();
    let series = aggregate_radar(&ratings).unwrap();
    // Four non-Overall Blind categories, plus the closing duplicate.
    assert_eq!(series.categories.len(), 5);
    assert!(!series.categories[..4].contains(&"Overall".to_string()));
}
