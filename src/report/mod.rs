//! Report generation module - results region and its output formats.
//!
//! This module handles:
//! - Building the results region from headings and item lists
//! - Resolving category blocks through the dataset
//! - Print action visibility
//! - Export to Markdown, HTML and JSON
//!
//! Console rendering is handled by the console_format module.
//!
//! # Module Organization
//!
//! - `types` - Rendering model (Block, ReportKind, ReportSnapshot, OutputFormat)
//! - `renderer` - The results region and category resolution
//! - `export` - Markdown, HTML and JSON output

mod export;
mod renderer;
mod types;

pub use types::{Block, OutputFormat, ReportKind, ReportSnapshot};

pub use renderer::ReportRenderer;

pub use export::{export_report, render_snapshot};
