
use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("onboard_dash_view_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn entries() -> Vec<ChartEntry> {
    vec![
        ChartEntry {
            id: "radar",
            title: "Chart 1: Radar Ratings",
            caption: "Ratings across categories.",
            status: ChartStatus::Rendered,
            image: Some("01_radar_ratings.png".to_string()),
            interactive: None,
        },
        ChartEntry {
            id: "butterfly",
            title: "Chart 2: Sentiment Butterfly",
            caption: "Positive vs negative mentions.",
            status: ChartStatus::NoData,
            image: None,
            interactive: None,
        },
        ChartEntry {
            id: "tagcloud",
            title: "Chart 4: Top Onboarding Issues",
            caption: "Mention frequency.",
            status: ChartStatus::Rendered,
            image: Some("04_top_keywords.png".to_string()),
            interactive: Some("04_top_keywords.html".to_string()),
        },
    ]
}

#[test]
fn test_write_dashboard_artifacts() {
    let dir = make_temp_dir();
    write_dashboard(&entries(), &dir).unwrap();
    assert!(dir.join(DASHBOARD_HTML).exists());
    assert!(dir.join(MANIFEST_JSON).exists());
}

#[test]
fn test_page_has_selector_and_states() {
    let html = build_page(&entries());
    assert!(html.contains("<option value=\"radar\">"));
    assert!(html.contains("<option value=\"butterfly\">"));
    assert!(html.contains("<img src=\"01_radar_ratings.png\""));
    assert!(html.contains("No data available for this chart."));
    assert!(html.contains("04_top_keywords.html"));
    // First entry is the one shown initially.
    assert!(html.contains("class=\"chart active\" id=\"chart-radar\""));
}

#[test]
fn test_manifest_round_trips() {
    let dir = make_temp_dir();
    write_dashboard(&entries(), &dir).unwrap();
    let raw = std::fs::read_to_string(dir.join(MANIFEST_JSON)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let charts = parsed.as_array().unwrap();
    assert_eq!(charts.len(), 3);
    assert_eq!(charts[0]["id"], "radar");
    assert_eq!(charts[0]["status"], "rendered");
    assert_eq!(charts[1]["status"], "no_data");
    assert_eq!(charts[2]["interactive"], "04_top_keywords.html");
}
