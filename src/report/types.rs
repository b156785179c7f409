//! Report type definitions for the rendering model.
//!
//! A rendered report is an ordered list of blocks: headings, subheadings and
//! item lists. Every output format (console, Markdown, HTML, JSON) is produced
//! from the same blocks.

use serde::Serialize;

/// One element of the results region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    /// Top-level heading naming the selected factors
    Header { text: String },
    /// Section heading, e.g. "Врачи-специалисты"
    Subheader { text: String },
    /// Ordered list of display strings
    List { items: Vec<String> },
}

impl Block {
    pub fn header(text: &str) -> Self {
        Block::Header { text: text.to_string() }
    }

    pub fn subheader(text: &str) -> Self {
        Block::Subheader { text: text.to_string() }
    }
}

/// Which report an action produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Inspections,
    Contraindications,
}

/// Snapshot of the results region for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSnapshot {
    /// Local time the snapshot was taken, "%Y-%m-%d %H:%M"
    pub generated_at: String,
    pub blocks: Vec<Block>,
}

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored text for the terminal
    #[default]
    Console,
    Markdown,
    /// Standalone, print-ready page
    Html,
    Json,
}
