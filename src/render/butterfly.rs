use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::agg::ChartError;
use crate::agg::butterfly::ButterflySeries;
use crate::render::{BORDER, GREEN, MIDNIGHT, RED, SECONDARY, render_err};

pub const BUTTERFLY_PNG: &str = "02_sentiment_butterfly.png";

const WIDTH: u32 = 1400;
const HEIGHT: u32 = 800;

pub fn render_butterfly(series: &ButterflySeries, out_dir: &Path) -> Result<PathBuf, ChartError> {
    std::fs::create_dir_all(out_dir).map_err(render_err)?;
    let out_path = out_dir.join(BUTTERFLY_PNG);

    let n = series.themes.len();
    let max_pos = series.positive.iter().copied().max().unwrap_or(0) as f64;
    let min_neg = series.negative.iter().copied().min().unwrap_or(0) as f64;
    let pad = (max_pos - min_neg).max(1.0) * 0.08;

    let root = BitMapBackend::new(&out_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let themes = series.themes.clone();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Chart 2: Sentiment Analysis - What Engineers Talk About",
            ("sans-serif", 30).into_font().color(&MIDNIGHT),
        )
        .margin(18)
        .x_label_area_size(56)
        .y_label_area_size(280)
        .build_cartesian_2d(min_neg - pad..max_pos + pad, (0..n).into_segmented())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(SECONDARY.mix(0.15))
        .axis_style(BORDER)
        .y_labels(n)
        .y_label_formatter(&|seg: &SegmentValue<usize>| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                themes.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .x_label_formatter(&|x| format!("{x:.0}"))
        .x_desc("Mentions (negative | positive)")
        .label_style(("sans-serif", 17).into_font().color(&MIDNIGHT))
        .draw()
        .map_err(render_err)?;

    // Worst ratio sits at index 0, which the y axis puts at the bottom.
    for (i, (&pos, &neg)) in series.positive.iter().zip(&series.negative).enumerate() {
        if pos > 0 {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [
                        (0.0, SegmentValue::Exact(i)),
                        (pos as f64, SegmentValue::Exact(i + 1)),
                    ],
                    GREEN.mix(0.8).filled(),
                )))
                .map_err(render_err)?;
            let style = ("sans-serif", 16)
                .into_font()
                .color(&MIDNIGHT)
                .pos(Pos::new(HPos::Left, VPos::Center));
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{pos}"),
                    (pos as f64 + pad * 0.12, SegmentValue::CenterOf(i)),
                    style,
                )))
                .map_err(render_err)?;
        }
        if neg < 0 {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [
                        (neg as f64, SegmentValue::Exact(i)),
                        (0.0, SegmentValue::Exact(i + 1)),
                    ],
                    RED.mix(0.8).filled(),
                )))
                .map_err(render_err)?;
            let style = ("sans-serif", 16)
                .into_font()
                .color(&MIDNIGHT)
                .pos(Pos::new(HPos::Right, VPos::Center));
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{}", -neg),
                    (neg as f64 - pad * 0.12, SegmentValue::CenterOf(i)),
                    style,
                )))
                .map_err(render_err)?;
        }
    }

    // Shared zero axis.
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![
                (0.0, SegmentValue::Exact(0)),
                (0.0, SegmentValue::Exact(n)),
            ],
            MIDNIGHT.stroke_width(2),
        )))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    // The backend borrows out_path until it is dropped at end of scope.
    Ok(out_dir.join(BUTTERFLY_PNG))
}
