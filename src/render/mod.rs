use plotters::style::RGBColor;

use crate::agg::ChartError;

pub mod butterfly;
pub mod heatmap;
pub mod radar;
pub mod tagcloud;

// Brand palette.
pub const MIDNIGHT: RGBColor = RGBColor(0x00, 0x11, 0x2c);
pub const SECONDARY: RGBColor = RGBColor(0x5c, 0x68, 0x7c);
pub const GREEN: RGBColor = RGBColor(0x0a, 0xbf, 0x53);
pub const RED: RGBColor = RGBColor(0xe2, 0x2d, 0x2d);
pub const BORDER: RGBColor = RGBColor(0xe6, 0xe8, 0xeb);

pub(crate) fn render_err(err: impl std::fmt::Display) -> ChartError {
    ChartError::Render(err.to_string())
}

fn mix_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + t * (b as f64 - a as f64)).round() as u8
}

fn mix(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    RGBColor(
        mix_channel(a.0, b.0, t),
        mix_channel(a.1, b.1, t),
        mix_channel(a.2, b.2, t),
    )
}

const MAP_LOW: RGBColor = RGBColor(0xd7, 0x30, 0x27);
const MAP_MID: RGBColor = RGBColor(0xff, 0xff, 0xbf);
const MAP_HIGH: RGBColor = RGBColor(0x1a, 0x98, 0x50);

/// Red-yellow-green colormap over a 0-100 normalized score.
pub fn score_colormap(value: f64) -> RGBColor {
    let t = (value / 100.0).clamp(0.0, 1.0);
    if t < 0.5 {
        mix(MAP_LOW, MAP_MID, t * 2.0)
    } else {
        mix(MAP_MID, MAP_HIGH, (t - 0.5) * 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/smoke.rs"]
mod smoke_tests;
