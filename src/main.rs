mod agg;
mod render;
mod store;
mod trace;
mod view;

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use crate::agg::ChartError;
use crate::store::DataStore;
use crate::view::{ChartEntry, ChartStatus};

#[derive(Debug, Parser)]
#[command(name = "onboard-dash", version, about = "Renders employee-feedback analytics charts and a static HTML dashboard")]
struct Cli {
    /// Sentiment CSV (theme, positive_mentions, negative_mentions, platform, year_range).
    #[arg(long, default_value = "feedback_data.csv")]
    data: PathBuf,
    /// Output directory for rendered charts and the dashboard page.
    #[arg(long, default_value = "charts")]
    out: PathBuf,
    /// Render a single chart instead of all four.
    #[arg(long, value_enum, default_value_t = ChartSelect::All)]
    chart: ChartSelect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChartSelect {
    All,
    Radar,
    Butterfly,
    Heatmap,
    Tagcloud,
}

impl ChartSelect {
    fn wants(self, which: ChartSelect) -> bool {
        self == ChartSelect::All || self == which
    }
}

fn main() {
    trace::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    std::fs::create_dir_all(&cli.out)
        .map_err(|e| format!("cannot create output directory {}: {e}", cli.out.display()))?;

    let store = DataStore::init(&cli.data).map_err(|e| e.to_string())?;

    let mut entries = Vec::new();
    if cli.chart.wants(ChartSelect::Radar) {
        entries.push(radar_entry(&store, &cli.out));
    }
    if cli.chart.wants(ChartSelect::Butterfly) {
        entries.push(butterfly_entry(&store, &cli.out));
    }
    if cli.chart.wants(ChartSelect::Heatmap) {
        entries.push(heatmap_entry(&store, &cli.out));
    }
    if cli.chart.wants(ChartSelect::Tagcloud) {
        entries.push(tagcloud_entry(&cli.out));
    }

    view::write_dashboard(&entries, &cli.out).map_err(|e| e.to_string())?;

    let rendered = entries
        .iter()
        .filter(|e| e.status == ChartStatus::Rendered)
        .count();
    info!(
        "dashboard written to {} ({rendered}/{} charts rendered)",
        cli.out.join(view::DASHBOARD_HTML).display(),
        entries.len()
    );
    Ok(())
}

fn entry_from(
    id: &'static str,
    title: &'static str,
    caption: &'static str,
    result: Result<PathBuf, ChartError>,
    interactive: Option<PathBuf>,
) -> ChartEntry {
    let (status, image) = match result {
        Ok(path) => (
            ChartStatus::Rendered,
            path.file_name().map(|f| f.to_string_lossy().into_owned()),
        ),
        Err(ChartError::NoData(msg)) => {
            warn!("{title}: no data ({msg})");
            (ChartStatus::NoData, None)
        }
        Err(err) => {
            warn!("{title}: {err}");
            (ChartStatus::Failed, None)
        }
    };
    ChartEntry {
        id,
        title,
        caption,
        status,
        image,
        interactive: interactive
            .as_deref()
            .and_then(Path::file_name)
            .map(|f| f.to_string_lossy().into_owned()),
    }
}

fn radar_entry(store: &DataStore, out: &Path) -> ChartEntry {
    let result = agg::radar::aggregate_radar(&store.ratings)
        .and_then(|series| render::radar::render_radar(&series, out));
    entry_from(
        "radar",
        "Chart 1: Radar Ratings",
        "Employee ratings across key categories from Blind platform reviews (n=357, 2024-2025).",
        result,
        None,
    )
}

fn butterfly_entry(store: &DataStore, out: &Path) -> ChartEntry {
    let result = store
        .sentiment_rows()
        .map_err(|_| ChartError::NoData("sentiment CSV unavailable"))
        .and_then(|rows| agg::butterfly::aggregate_butterfly(&rows))
        .and_then(|series| render::butterfly::render_butterfly(&series, out));
    entry_from(
        "butterfly",
        "Chart 2: Sentiment Butterfly",
        "Positive vs. negative mentions across feedback themes, worst ratio at the bottom, best at the top (2024-2026).",
        result,
        None,
    )
}

fn heatmap_entry(store: &DataStore, out: &Path) -> ChartEntry {
    let result = agg::heatmap::aggregate_heatmap(&store.ratings)
        .and_then(|grid| render::heatmap::render_heatmap(&grid, out));
    entry_from(
        "heatmap",
        "Chart 3: Platform Heatmap",
        "Normalized scores (0-100%) across review platforms and categories; gray cells have no data.",
        result,
        None,
    )
}

fn tagcloud_entry(out: &Path) -> ChartEntry {
    let keywords = store::keywords::seed_keywords();
    let layout = agg::tagcloud::aggregate_tagcloud(&keywords);
    let (result, interactive) = match layout {
        Ok(layout) => {
            let interactive = if render::tagcloud::interactive_available() {
                render::tagcloud::render_tagcloud_interactive(&layout, out)
            } else {
                None
            };
            (render::tagcloud::render_tagcloud(&layout, out), interactive)
        }
        Err(err) => (Err(err), None),
    };
    entry_from(
        "tagcloud",
        "Chart 4: Top Onboarding Issues",
        "Onboarding and learning issues from employee feedback (2024-2026); larger, darker tags were mentioned more often.",
        result,
        interactive,
    )
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
