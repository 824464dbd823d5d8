
use super::*;
use clap::Parser;

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["onboard-dash"]).unwrap();
    assert_eq!(cli.data, PathBuf::from("feedback_data.csv"));
    assert_eq!(cli.out, PathBuf::from("charts"));
    assert_eq!(cli.chart, ChartSelect::All);
}

#[test]
fn test_cli_single_chart() {
    let cli = Cli::try_parse_from(["onboard-dash", "--chart", "butterfly"]).unwrap();
    assert_eq!(cli.chart, ChartSelect::Butterfly);
    assert!(cli.chart.wants(ChartSelect::Butterfly));
    assert!(!cli.chart.wants(ChartSelect::Radar));
}

#[test]
fn test_cli_rejects_unknown_chart() {
    assert!(Cli::try_parse_from(["onboard-dash", "--chart", "sankey"]).is_err());
}

#[test]
fn test_all_selector_wants_everything() {
    for which in [
        ChartSelect::Radar,
        ChartSelect::Butterfly,
        ChartSelect::Heatmap,
        ChartSelect::Tagcloud,
    ] {
        assert!(ChartSelect::All.wants(which));
    }
}

#[test]
fn test_entry_from_maps_errors_to_status() {
    let ok = entry_from(
        "radar",
        "t",
        "c",
        Ok(PathBuf::from("/tmp/out/01_radar_ratings.png")),
        None,
    );
    assert_eq!(ok.status, ChartStatus::Rendered);
    assert_eq!(ok.image.as_deref(), Some("01_radar_ratings.png"));

    let empty = entry_from("radar", "t", "c", Err(ChartError::NoData("empty")), None);
    assert_eq!(empty.status, ChartStatus::NoData);
    assert!(empty.image.is_none());

    let failed = entry_from(
        "radar",
        "t",
        "c",
        Err(ChartError::Render("backend".to_string())),
        None,
    );
    assert_eq!(failed.status, ChartStatus::Failed);
}
