use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::agg::ChartError;
use crate::agg::heatmap::HeatmapGrid;
use crate::render::{BORDER, MIDNIGHT, render_err, score_colormap};

pub const HEATMAP_PNG: &str = "03_platform_heatmap.png";

const WIDTH: u32 = 1400;
const HEIGHT: u32 = 600;

pub fn render_heatmap(grid: &HeatmapGrid, out_dir: &Path) -> Result<PathBuf, ChartError> {
    std::fs::create_dir_all(out_dir).map_err(render_err)?;
    let out_path = out_dir.join(HEATMAP_PNG);

    let n_rows = grid.platforms.len();
    let n_cols = grid.categories.len();

    let root = BitMapBackend::new(&out_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let platforms = grid.platforms.clone();
    let categories = grid.categories.clone();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Chart 3: Platform Ratings Comparison - Normalized Scores",
            ("sans-serif", 30).into_font().color(&MIDNIGHT),
        )
        .margin(18)
        .x_label_area_size(48)
        .y_label_area_size(170)
        .build_cartesian_2d(
            (0..n_cols).into_segmented(),
            (0..n_rows).into_segmented(),
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .axis_style(BORDER)
        .x_labels(n_cols)
        .y_labels(n_rows)
        .x_label_formatter(&|seg: &SegmentValue<usize>| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                categories.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .y_label_formatter(&|seg: &SegmentValue<usize>| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                platforms.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .x_desc("Category")
        .y_desc("Platform")
        .label_style(("sans-serif", 15).into_font().color(&MIDNIGHT))
        .draw()
        .map_err(render_err)?;

    for (row, (row_values, row_present)) in grid.values.iter().zip(&grid.present).enumerate() {
        for (col, (&value, &present)) in row_values.iter().zip(row_present).enumerate() {
            // Missing combinations are drawn in the neutral border tone with
            // no annotation, distinct from a legitimate zero score.
            let fill = if present {
                score_colormap(value)
            } else {
                BORDER
            };
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [
                        (SegmentValue::Exact(col), SegmentValue::Exact(row)),
                        (SegmentValue::Exact(col + 1), SegmentValue::Exact(row + 1)),
                    ],
                    fill.filled(),
                )))
                .map_err(render_err)?;
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [
                        (SegmentValue::Exact(col), SegmentValue::Exact(row)),
                        (SegmentValue::Exact(col + 1), SegmentValue::Exact(row + 1)),
                    ],
                    WHITE.stroke_width(2),
                )))
                .map_err(render_err)?;
            if present {
                let style = ("sans-serif", 18)
                    .into_font()
                    .color(&MIDNIGHT)
                    .pos(Pos::new(HPos::Center, VPos::Center));
                chart
                    .draw_series(std::iter::once(Text::new(
                        format!("{value:.1}"),
                        (SegmentValue::CenterOf(col), SegmentValue::CenterOf(row)),
                        style,
                    )))
                    .map_err(render_err)?;
            }
        }
    }

    root.present().map_err(render_err)?;
    // The backend borrows out_path until it is dropped at end of scope.
    Ok(out_dir.join(HEATMAP_PNG))
}
