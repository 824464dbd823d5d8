use crate::agg::ChartError;
use crate::store::KeywordRecord;

/// Fixed 3-row partition of the sorted-descending keyword list. Hand-tuned
/// for exactly 15 items; any other count would overlap and is rejected.
pub const ROW_SPLIT: [usize; 3] = [4, 6, 5];
pub const ROW_Y: [f64; 3] = [0.78, 0.50, 0.22];
pub const EXPECTED_KEYWORDS: usize = 15;

pub const SIZE_MIN_PT: f64 = 11.0;
pub const SIZE_MAX_PT: f64 = 25.0;

// Light mint -> brand green.
pub const COLOR_LIGHT: (u8, u8, u8) = (0xa8, 0xe6, 0xc1);
pub const COLOR_DARK: (u8, u8, u8) = (0x0a, 0xbf, 0x53);

pub const BOLD_MIN_COUNT: u32 = 38;
pub const MEDIUM_MIN_COUNT: u32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Medium,
    Normal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTag {
    pub phrase: String,
    pub count: u32,
    /// Paper coordinates in (0,1), y up.
    pub x: f64,
    pub y: f64,
    pub size_pt: f64,
    pub color: (u8, u8, u8),
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagCloudLayout {
    pub tags: Vec<PlacedTag>,
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    // Truncating, so the bounds resolve exactly at t = 0 and t = 1.
    (a as f64 + t * (b as f64 - a as f64)) as u8
}

pub fn lerp_color(t: f64) -> (u8, u8, u8) {
    (
        lerp_channel(COLOR_LIGHT.0, COLOR_DARK.0, t),
        lerp_channel(COLOR_LIGHT.1, COLOR_DARK.1, t),
        lerp_channel(COLOR_LIGHT.2, COLOR_DARK.2, t),
    )
}

pub fn lerp_size(t: f64) -> f64 {
    SIZE_MIN_PT + t * (SIZE_MAX_PT - SIZE_MIN_PT)
}

fn emphasis_for(count: u32) -> Emphasis {
    if count >= BOLD_MIN_COUNT {
        Emphasis::Bold
    } else if count >= MEDIUM_MIN_COUNT {
        Emphasis::Medium
    } else {
        Emphasis::Normal
    }
}

pub fn aggregate_tagcloud(keywords: &[KeywordRecord]) -> Result<TagCloudLayout, ChartError> {
    if keywords.is_empty() {
        return Err(ChartError::NoData("no keywords"));
    }
    if keywords.len() != EXPECTED_KEYWORDS {
        return Err(ChartError::Layout(format!(
            "tag-cloud row partition requires exactly {EXPECTED_KEYWORDS} keywords, got {}",
            keywords.len()
        )));
    }

    let mut sorted: Vec<KeywordRecord> = keywords.to_vec();
    sorted.sort_by(|a, b| b.mention_count.cmp(&a.mention_count));

    let min_c = sorted.iter().map(|k| k.mention_count).min().unwrap_or(0);
    let max_c = sorted.iter().map(|k| k.mention_count).max().unwrap_or(0);
    let span = (max_c - min_c).max(1) as f64;

    let mut tags = Vec::with_capacity(sorted.len());
    let mut offset = 0usize;
    for (row, &row_len) in ROW_SPLIT.iter().enumerate() {
        let group = &sorted[offset..offset + row_len];
        for (j, kw) in group.iter().enumerate() {
            let t = (kw.mention_count - min_c) as f64 / span;
            tags.push(PlacedTag {
                phrase: kw.phrase.to_string(),
                count: kw.mention_count,
                x: (j + 1) as f64 / (row_len + 1) as f64,
                y: ROW_Y[row],
                size_pt: lerp_size(t),
                color: lerp_color(t),
                emphasis: emphasis_for(kw.mention_count),
            });
        }
        offset += row_len;
    }

    Ok(TagCloudLayout { tags })
}

#[cfg(test)]
#[path = "../../tests/src_inline/agg/tagcloud.rs"]
mod tests;
