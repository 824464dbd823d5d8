
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::agg::butterfly::aggregate_butterfly;
use crate::agg::heatmap::aggregate_heatmap;
use crate::agg::radar::aggregate_radar;
use crate::agg::tagcloud::aggregate_tagcloud;
use crate::agg::ChartError;
use crate::render::butterfly::{render_butterfly, BUTTERFLY_PNG};
use crate::render::heatmap::{render_heatmap, HEATMAP_PNG};
use crate::render::radar::{render_radar, RADAR_PNG};
use crate::render::tagcloud::{render_tagcloud, TAGCLOUD_PNG};
use crate::store::keywords::seed_keywords;
use crate::store::ratings::seed_ratings;
use crate::store::SentimentRecord;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("onboard_dash_render_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

// The raster backends cannot draw text without a system font; that failure
// mode is a legal Render error, not a path-contract violation.
fn assert_written(result: Result<PathBuf, ChartError>, dir: &std::path::Path, file: &str) {
    match result {
        Ok(path) => {
            assert_eq!(path, dir.join(file));
            assert!(path.exists());
        }
        Err(ChartError::Render(_)) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_radar_reports_the_file_it_wrote() {
    let dir = make_temp_dir();
    let series = aggregate_radar(&seed_ratings().unwrap()).unwrap();
    assert_written(render_radar(&series, &dir), &dir, RADAR_PNG);
}

#[test]
fn test_butterfly_reports_the_file_it_wrote() {
    let dir = make_temp_dir();
    let rows = vec![SentimentRecord {
        theme: "Onboarding".to_string(),
        positive_mentions: 12,
        negative_mentions: 34,
        platform: "Blind".to_string(),
        year_range: "2024-2025".to_string(),
    }];
    let series = aggregate_butterfly(&rows).unwrap();
    assert_written(render_butterfly(&series, &dir), &dir, BUTTERFLY_PNG);
}

#[test]
fn test_heatmap_reports_the_file_it_wrote() {
    let dir = make_temp_dir();
    let grid = aggregate_heatmap(&seed_ratings().unwrap()).unwrap();
    assert_written(render_heatmap(&grid, &dir), &dir, HEATMAP_PNG);
}

#[test]
fn test_tagcloud_reports_the_file_it_wrote() {
    let dir = make_temp_dir();
    let layout = aggregate_tagcloud(&seed_keywords()).unwrap();
    assert_written(render_tagcloud(&layout, &dir), &dir, TAGCLOUD_PNG);
}
