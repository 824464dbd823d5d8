use std::path::Path;

use serde::Serialize;

use crate::store::StoreError;

pub const DASHBOARD_HTML: &str = "index.html";
pub const MANIFEST_JSON: &str = "manifest.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStatus {
    Rendered,
    NoData,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
    pub status: ChartStatus,
    /// Raster file name relative to the output directory.
    pub image: Option<String>,
    /// Optional interactive rendering, tag cloud only.
    pub interactive: Option<String>,
}

pub fn write_dashboard(entries: &[ChartEntry], out_dir: &Path) -> Result<(), StoreError> {
    std::fs::create_dir_all(out_dir)?;
    let manifest = serde_json::to_string_pretty(entries)
        .map_err(|e| StoreError::InvalidRecord(e.to_string()))?;
    std::fs::write(out_dir.join(MANIFEST_JSON), manifest)?;
    std::fs::write(out_dir.join(DASHBOARD_HTML), build_page(entries))?;
    Ok(())
}

fn build_page(entries: &[ChartEntry]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Onboarding Research Dashboard</title>\n<style>\n");
    out.push_str("body{font-family:Inter,Arial,sans-serif;background:#f7f7f8;color:#00112c;margin:0;padding:2rem}\n");
    out.push_str("h1{font-size:2rem;margin-bottom:.25rem}\n");
    out.push_str(".sub{color:#5c687c;margin-bottom:1.5rem}\n");
    out.push_str("select{padding:.5rem;border:1px solid #e6e8eb;border-radius:6px;background:#fff;font-size:1rem}\n");
    out.push_str(".chart{display:none;background:#fff;border-radius:8px;padding:1rem;margin-top:1.5rem;box-shadow:0 2px 4px rgba(0,0,0,.05)}\n");
    out.push_str(".chart.active{display:block}\n");
    out.push_str(".chart img{max-width:100%}\n");
    out.push_str(".caption{color:#5c687c;margin-top:.75rem}\n");
    out.push_str(".empty{color:#5c687c;padding:3rem;text-align:center}\n");
    out.push_str("a{color:#0070f5}\n");
    out.push_str("footer{color:#5c687c;font-size:.85rem;margin-top:2rem;text-align:center}\n");
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str("<h1>Onboarding Research Dashboard</h1>\n");
    out.push_str("<p class=\"sub\">Evidence-based analysis of employee feedback (2024-2026 focus)</p>\n");

    out.push_str("<select id=\"picker\" onchange=\"pick(this.value)\">\n");
    for entry in entries {
        out.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            entry.id, entry.title
        ));
    }
    out.push_str("</select>\n");

    for (i, entry) in entries.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        out.push_str(&format!(
            "<div class=\"chart{active}\" id=\"chart-{}\">\n<h2>{}</h2>\n",
            entry.id, entry.title
        ));
        match (&entry.status, &entry.image) {
            (ChartStatus::Rendered, Some(image)) => {
                out.push_str(&format!("<img src=\"{image}\" alt=\"{}\">\n", entry.title));
                if let Some(interactive) = &entry.interactive {
                    out.push_str(&format!(
                        "<p><a href=\"{interactive}\">Interactive version</a></p>\n"
                    ));
                }
                out.push_str(&format!("<p class=\"caption\">{}</p>\n", entry.caption));
            }
            _ => {
                out.push_str("<p class=\"empty\">No data available for this chart.</p>\n");
            }
        }
        out.push_str("</div>\n");
    }

    out.push_str("<script>\n");
    out.push_str("function pick(id){\n");
    out.push_str("  document.querySelectorAll('.chart').forEach(function(el){el.classList.remove('active');});\n");
    out.push_str("  document.getElementById('chart-'+id).classList.add('active');\n");
    out.push_str("}\n</script>\n");
    out.push_str("<footer>Data sources: Blind, Glassdoor, Indeed, Comparably | Focus: 2024-2026</footer>\n");
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/view.rs"]
mod tests;
