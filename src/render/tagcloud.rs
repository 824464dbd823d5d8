use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::agg::ChartError;
use crate::agg::tagcloud::{Emphasis, TagCloudLayout};
use crate::render::{MIDNIGHT, SECONDARY, render_err};

pub const TAGCLOUD_PNG: &str = "04_top_keywords.png";
pub const TAGCLOUD_HTML: &str = "04_top_keywords.html";

const WIDTH: u32 = 1400;
const HEIGHT: u32 = 600;

// Point sizes from the layout are scaled up for the raster canvas.
const PT_TO_PX: f64 = 2.2;

/// Whether this build carries the interactive HTML renderer.
pub fn interactive_available() -> bool {
    cfg!(feature = "interactive")
}

pub fn render_tagcloud(layout: &TagCloudLayout, out_dir: &Path) -> Result<PathBuf, ChartError> {
    std::fs::create_dir_all(out_dir).map_err(render_err)?;
    let out_path = out_dir.join(TAGCLOUD_PNG);

    let root = BitMapBackend::new(&out_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    root.draw(&Text::new(
        "Chart 4: Top Onboarding Issues - Tag Cloud",
        (WIDTH as i32 / 2, 34),
        ("sans-serif", 30)
            .into_font()
            .color(&MIDNIGHT)
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))
    .map_err(render_err)?;

    for tag in &layout.tags {
        let px = (tag.x * WIDTH as f64).round() as i32;
        // Paper coordinates are y-up; pixels are y-down.
        let py = ((1.0 - tag.y) * HEIGHT as f64).round() as i32;
        let size = tag.size_pt * PT_TO_PX;
        let style = match tag.emphasis {
            Emphasis::Bold | Emphasis::Medium => FontStyle::Bold,
            Emphasis::Normal => FontStyle::Normal,
        };
        let color = RGBColor(tag.color.0, tag.color.1, tag.color.2);
        let font = FontDesc::new(FontFamily::SansSerif, size, style)
            .color(&color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(tag.phrase.clone(), (px, py), font))
            .map_err(render_err)?;
    }

    root.draw(&Text::new(
        "Tag size and colour intensity = mention frequency | Data: employee feedback 2024-2026",
        (WIDTH as i32 / 2, HEIGHT as i32 - 22),
        ("sans-serif", 15)
            .into_font()
            .color(&SECONDARY)
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))
    .map_err(render_err)?;

    root.present().map_err(render_err)?;
    // The backend borrows out_path until it is dropped at end of scope.
    Ok(out_dir.join(TAGCLOUD_PNG))
}

/// Best-effort interactive rendering; absence or failure never affects the
/// raster output.
#[cfg(feature = "interactive")]
pub fn render_tagcloud_interactive(layout: &TagCloudLayout, out_dir: &Path) -> Option<PathBuf> {
    let out_path = out_dir.join(TAGCLOUD_HTML);
    let html = build_tagcloud_html(layout);
    match std::fs::write(&out_path, html) {
        Ok(()) => Some(out_path),
        Err(err) => {
            tracing::debug!("interactive tag cloud skipped: {err}");
            None
        }
    }
}

#[cfg(not(feature = "interactive"))]
pub fn render_tagcloud_interactive(_layout: &TagCloudLayout, _out_dir: &Path) -> Option<PathBuf> {
    None
}

#[cfg(feature = "interactive")]
fn build_tagcloud_html(layout: &TagCloudLayout) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Top Onboarding Issues - Tag Cloud</title>\n<style>\n");
    out.push_str("body{font-family:Inter,Arial,sans-serif;background:#ffffff;margin:0}\n");
    out.push_str(".cloud{position:relative;width:100%;height:460px}\n");
    out.push_str(".tag{position:absolute;transform:translate(-50%,-50%);white-space:nowrap}\n");
    out.push_str("h1{text-align:center;color:#00112c;font-size:16px;padding-top:18px}\n");
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str("<h1>Chart 4: Top Onboarding Issues - Tag Cloud</h1>\n<div class=\"cloud\">\n");
    for tag in &layout.tags {
        let weight = match tag.emphasis {
            Emphasis::Bold => 700,
            Emphasis::Medium => 600,
            Emphasis::Normal => 400,
        };
        out.push_str(&format!(
            "<span class=\"tag\" title=\"{count} mentions\" style=\"left:{x:.1}%;top:{y:.1}%;\
             font-size:{size:.0}px;color:#{r:02x}{g:02x}{b:02x};font-weight:{weight}\">{phrase}</span>\n",
            count = tag.count,
            x = tag.x * 100.0,
            y = (1.0 - tag.y) * 100.0,
            size = tag.size_pt * 1.6,
            r = tag.color.0,
            g = tag.color.1,
            b = tag.color.2,
            phrase = tag.phrase,
        ));
    }
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/tagcloud.rs"]
mod tests;
