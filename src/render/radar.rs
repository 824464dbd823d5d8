use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::agg::ChartError;
use crate::agg::radar::RadarSeries;
use crate::render::{GREEN, MIDNIGHT, SECONDARY, render_err};

pub const RADAR_PNG: &str = "01_radar_ratings.png";

const SIZE: u32 = 1000;
const CENTER: (f64, f64) = (500.0, 520.0);
const RADIUS: f64 = 340.0;

fn spoke_point(index: usize, n: usize, r: f64) -> (i32, i32) {
    // First axis at the top, proceeding clockwise.
    let angle = std::f64::consts::FRAC_PI_2 - index as f64 / n as f64 * std::f64::consts::TAU;
    (
        (CENTER.0 + r * angle.cos()).round() as i32,
        (CENTER.1 - r * angle.sin()).round() as i32,
    )
}

pub fn render_radar(series: &RadarSeries, out_dir: &Path) -> Result<PathBuf, ChartError> {
    std::fs::create_dir_all(out_dir).map_err(render_err)?;
    let out_path = out_dir.join(RADAR_PNG);

    // Closed sequences carry the duplicated first element.
    let n = series.categories.len() - 1;
    let axis_max = if series.axis_max > 0.0 {
        series.axis_max
    } else {
        1.0
    };

    let root = BitMapBackend::new(&out_path, (SIZE, SIZE)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let title = ("sans-serif", 30).into_font().color(&MIDNIGHT);
    root.draw(&Text::new(
        "Chart 1: Employee Ratings (Blind, 2024-2025)",
        (60, 40),
        title,
    ))
    .map_err(render_err)?;

    // Grid rings with tick labels up the vertical axis.
    let rings = axis_max.ceil() as u32;
    for k in 1..=rings {
        let r = RADIUS * k as f64 / axis_max;
        root.draw(&Circle::new(
            (CENTER.0 as i32, CENTER.1 as i32),
            r as i32,
            ShapeStyle {
                color: SECONDARY.mix(0.3),
                filled: false,
                stroke_width: 1,
            },
        ))
        .map_err(render_err)?;
        root.draw(&Text::new(
            format!("{k}"),
            (CENTER.0 as i32 + 8, (CENTER.1 - r) as i32),
            ("sans-serif", 16).into_font().color(&SECONDARY),
        ))
        .map_err(render_err)?;
    }

    // Spokes and category labels.
    for (i, category) in series.categories[..n].iter().enumerate() {
        let edge = spoke_point(i, n, RADIUS);
        root.draw(&PathElement::new(
            vec![(CENTER.0 as i32, CENTER.1 as i32), edge],
            SECONDARY.mix(0.3),
        ))
        .map_err(render_err)?;

        let label_at = spoke_point(i, n, RADIUS + 42.0);
        let style = ("sans-serif", 22)
            .into_font()
            .color(&MIDNIGHT)
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(category.clone(), label_at, style))
            .map_err(render_err)?;
    }

    // Score polygon: translucent fill under a solid outline.
    let points: Vec<(i32, i32)> = series
        .scores
        .iter()
        .enumerate()
        .map(|(i, &score)| spoke_point(i % n, n, RADIUS * score / axis_max))
        .collect();

    root.draw(&Polygon::new(points.clone(), GREEN.mix(0.15)))
        .map_err(render_err)?;
    root.draw(&PathElement::new(
        points.clone(),
        GREEN.stroke_width(3),
    ))
    .map_err(render_err)?;
    for &p in &points[..n] {
        root.draw(&Circle::new(p, 5, GREEN.filled()))
            .map_err(render_err)?;
    }

    root.draw(&Text::new(
        "Data: Blind employee reviews (n=357)",
        (60, SIZE as i32 - 40),
        ("sans-serif", 15).into_font().color(&SECONDARY),
    ))
    .map_err(render_err)?;

    root.present().map_err(render_err)?;
    // The backend borrows out_path until it is dropped at end of scope.
    Ok(out_dir.join(RADAR_PNG))
}
