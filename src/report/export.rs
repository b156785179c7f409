//! Report export functions for Markdown, HTML and JSON formats.
//!
//! Every exporter takes a snapshot of the results region so the same report
//! can be written several times without touching the renderer.

use super::types::{Block, OutputFormat, ReportSnapshot};
use crate::console_format::ConsoleWriter;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const PAGE_TITLE: &str = "Медицинские осмотры: объем обследований и противопоказания";

/// Render a snapshot in the requested format.
pub fn render_snapshot(snapshot: &ReportSnapshot, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Console => {
            let mut buffer = Vec::new();
            ConsoleWriter::new(&mut buffer, false)
                .write_blocks(&snapshot.blocks)
                .map_err(|e| format!("Failed to render report: {}", e))?;
            String::from_utf8(buffer).map_err(|e| format!("Failed to render report: {}", e))
        }
        OutputFormat::Markdown => Ok(format_markdown(snapshot)),
        OutputFormat::Html => Ok(format_html(snapshot)),
        OutputFormat::Json => format_json(snapshot),
    }
}

/// Write a snapshot to a file in the requested format.
pub fn export_report(snapshot: &ReportSnapshot, format: OutputFormat, output_path: &Path) -> Result<(), String> {
    let content = render_snapshot(snapshot, format)?;
    let mut file =
        File::create(output_path).map_err(|e| format!("Failed to create {}: {}", output_path.display(), e))?;
    file.write_all(content.as_bytes()).map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;
    Ok(())
}

/// Markdown: `#` for the header, `##` for subheaders, numbered lists.
pub fn format_markdown(snapshot: &ReportSnapshot) -> String {
    let mut out = String::new();

    for block in &snapshot.blocks {
        match block {
            Block::Header { text } => {
                out.push_str(&format!("# {}\n\n", text));
            }
            Block::Subheader { text } => {
                out.push_str(&format!("## {}\n\n", text));
            }
            Block::List { items } => {
                for (i, item) in items.iter().enumerate() {
                    out.push_str(&format!("{}. {}\n", i + 1, item));
                }
                out.push('\n');
            }
        }
    }

    if !snapshot.blocks.is_empty() {
        out.push_str(&format!("_Сформировано: {}_\n", snapshot.generated_at));
    }
    out
}

/// Standalone HTML page laid out for printing.
pub fn format_html(snapshot: &ReportSnapshot) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang='ru'><head><meta charset='UTF-8'>\n");
    out.push_str(&format!("<title>{}</title>\n", sanitize(PAGE_TITLE)));
    out.push_str("<style>\n");
    out.push_str("body { font-family: sans-serif; margin: 20px; }\n");
    out.push_str("h4 { margin: 0 0 12px 0; }\n");
    out.push_str("h5 { margin: 16px 0 6px 0; }\n");
    out.push_str("ul { margin: 0; padding-left: 24px; }\n");
    out.push_str(".generated { color: #666; font-size: 12px; margin-top: 20px; }\n");
    out.push_str("@media print { body { margin: 0; } .generated { display: none; } }\n");
    out.push_str("</style></head><body>\n");

    for block in &snapshot.blocks {
        match block {
            Block::Header { text } => out.push_str(&format!("<h4>{}</h4>\n", sanitize(text))),
            Block::Subheader { text } => out.push_str(&format!("<h5>{}</h5>\n", sanitize(text))),
            Block::List { items } => {
                out.push_str("<ul>\n");
                for item in items {
                    out.push_str(&format!("<li>{}</li>\n", sanitize(item)));
                }
                out.push_str("</ul>\n");
            }
        }
    }

    out.push_str(&format!("<p class='generated'>Сформировано: {}</p>\n", sanitize(&snapshot.generated_at)));
    out.push_str("</body></html>\n");
    out
}

pub fn format_json(snapshot: &ReportSnapshot) -> Result<String, String> {
    serde_json::to_string_pretty(snapshot).map_err(|e| format!("Failed to serialize report: {}", e))
}

/// Escape HTML special characters
pub fn sanitize(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '<' => "&lt;".chars().collect(),
            '>' => "&gt;".chars().collect(),
            '&' => "&amp;".chars().collect(),
            '\'' => "&#39;".chars().collect(),
            '"' => "&quot;".chars().collect(),
            _ => vec![c],
        })
        .collect()
}
