//! Results region and print action state.
//!
//! The renderer owns the blocks of the current report. Callers append
//! headings and lists; category blocks are resolved through the dataset with
//! ids de-duplicated before lookup.

use super::types::{Block, ReportSnapshot};
use crate::dataset::{Category, Dataset, Factor};
use crate::host::Host;
use log::{debug, warn};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRenderer {
    blocks: Vec<Block>,
    print_visible: bool,
}

impl ReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the results region and hide the print action.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.print_visible = false;
    }

    pub fn add_header(&mut self, text: &str) {
        self.blocks.push(Block::header(text));
    }

    /// Append an optional subheading followed by one list of items.
    pub fn add_values<S: AsRef<str>>(&mut self, items: &[S], subheader: Option<&str>) {
        if let Some(subheader) = subheader {
            self.blocks.push(Block::subheader(subheader));
        }
        self.blocks.push(Block::List { items: items.iter().map(|s| s.as_ref().to_string()).collect() });
    }

    /// Resolve one category for the whole selection and append it.
    ///
    /// Ids are flattened across factors and de-duplicated in first-seen
    /// order before lookup. Nothing is appended when no text remains.
    pub fn render_category_values(
        &mut self,
        subheader: Option<&str>,
        category: Category,
        selection: &[Factor],
        dataset: &Dataset,
    ) {
        let values = category_values(category, selection, dataset);
        debug!("{} block: {} values", category, values.len());
        if !values.is_empty() {
            self.add_values(&values, subheader);
        }
    }

    /// Reveal the print action unless the host is a mobile device.
    pub fn show_print_action(&mut self, host: &dyn Host) {
        if !host.is_mobile() {
            self.print_visible = true;
        }
    }

    pub fn is_print_visible(&self) -> bool {
        self.print_visible
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn snapshot(&self) -> ReportSnapshot {
        ReportSnapshot {
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            blocks: self.blocks.clone(),
        }
    }
}

/// Distinct display texts of one category for the selection.
pub fn category_values(category: Category, selection: &[Factor], dataset: &Dataset) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();

    for id in selection.iter().flat_map(|factor| factor.ids(category)) {
        if !seen.insert(id.as_str()) {
            continue;
        }
        match dataset.lookup(category, id) {
            Ok(text) => values.push(text.to_string()),
            // Rejected at load time by Dataset::validate
            Err(e) => warn!("skipping unresolved reference: {}", e),
        }
    }

    values
}

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;
