use thiserror::Error;

pub mod butterfly;
pub mod heatmap;
pub mod radar;
pub mod tagcloud;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no data: {0}")]
    NoData(&'static str),
    #[error("unsupported layout: {0}")]
    Layout(String),
    #[error("render failed: {0}")]
    Render(String),
}
