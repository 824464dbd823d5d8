use crate::store::{RatingRecord, StoreError};

// Platform ratings collected across review sites, 2023-2025 windows.
const RATINGS: &[(&str, &str, f64, u32, Option<u32>, &str)] = &[
    ("Blind", "Overall", 3.5, 5, Some(357), "2024-2025"),
    ("Blind", "Work Life Balance", 4.3, 5, Some(357), "2024-2025"),
    ("Blind", "Management", 2.9, 5, Some(357), "2024-2025"),
    ("Blind", "Career Growth", 3.0, 5, Some(357), "2024-2025"),
    ("Blind", "Compensation", 3.8, 5, Some(357), "2024-2025"),
    ("Glassdoor_SF", "Overall", 3.8, 5, Some(57), "2024-2025"),
    ("Glassdoor_SF", "Work Life Balance", 4.1, 5, Some(57), "2024-2025"),
    ("Glassdoor_SF", "Career Opportunities", 3.3, 5, Some(57), "2024-2025"),
    ("Comparably", "Manager Onboarding", 1.3, 5, None, "2023-2024"),
    ("Glassdoor_PM", "Overall", 3.3, 5, None, "2024-2025"),
    ("Indeed", "Overall", 3.9, 5, None, "2024-2025"),
];

pub fn seed_ratings() -> Result<Vec<RatingRecord>, StoreError> {
    let mut out = Vec::with_capacity(RATINGS.len());
    for &(platform, category, score, max_score, review_count, date_range) in RATINGS {
        if score < 0.0 || score > max_score as f64 {
            return Err(StoreError::InvalidRecord(format!(
                "rating {platform}/{category}: score {score} outside 0..={max_score}"
            )));
        }
        out.push(RatingRecord {
            platform: platform.to_string(),
            category: category.to_string(),
            score,
            max_score,
            review_count,
            date_range: date_range.to_string(),
        });
    }
    Ok(out)
}
