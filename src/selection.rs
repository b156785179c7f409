/// Factor selection state
///
/// Holds the searchable option list built from the dataset and the ordered
/// set of chosen factor keys. Every state change notifies the registered
/// observers with the fresh selection.
use crate::dataset::{Dataset, Factor};
use crate::key::compare_factor_keys;
use crate::markers;
use log::debug;

/// Observer invoked after each selection change
pub type ChangeHandler = Box<dyn FnMut(&[Factor])>;

/// One selectable entry of the option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorOption {
    pub key: String,
    /// "<key>. <name>"
    pub label: String,
    pub factor: Factor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    HasSelection,
}

pub struct SelectionControl {
    options: Vec<FactorOption>,
    selected: Vec<String>,
    handlers: Vec<ChangeHandler>,
}

impl SelectionControl {
    /// Build the control with one option per dataset factor
    pub fn new(dataset: &Dataset) -> Self {
        let mut control = SelectionControl { options: Vec::new(), selected: Vec::new(), handlers: Vec::new() };
        control.initialize(dataset.list_factors());
        control
    }

    /// Replace the option list; options are sorted by key whatever the input order
    pub fn initialize<'a, I>(&mut self, factors: I)
    where
        I: IntoIterator<Item = &'a Factor>,
    {
        let mut options: Vec<FactorOption> = factors
            .into_iter()
            .map(|factor| FactorOption { key: factor.key.clone(), label: factor.label(), factor: factor.clone() })
            .collect();
        options.sort_by(|a, b| compare_factor_keys(&a.key, &b.key));

        debug!("selection initialized with {} options", options.len());
        self.options = options;
        self.selected.clear();
    }

    pub fn options(&self) -> &[FactorOption] {
        &self.options
    }

    /// Options whose label contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&FactorOption> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.options.iter().collect();
        }
        self.options.iter().filter(|option| option.label.to_lowercase().contains(&needle)).collect()
    }

    pub fn state(&self) -> SelectionState {
        if self.selected.is_empty() { SelectionState::Empty } else { SelectionState::HasSelection }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Chosen factors in selection order
    pub fn get_selection(&self) -> Vec<Factor> {
        self.selected.iter().filter_map(|key| self.option(key)).map(|option| option.factor.clone()).collect()
    }

    /// Add factors by key, keeping the existing selection
    ///
    /// Unknown keys reject the whole call and leave the selection untouched.
    /// Returns the number of newly added factors.
    pub fn select_keys<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<usize, String> {
        let unknown: Vec<&str> = keys.iter().map(|k| k.as_ref()).filter(|k| self.option(k).is_none()).collect();
        if !unknown.is_empty() {
            return Err(format!("Unknown factor: {}", unknown.join(", ")));
        }

        let mut added = 0;
        for key in keys {
            if self.push_key(key.as_ref()) {
                added += 1;
            }
        }

        debug!("selected {} new factors by key", added);
        self.notify();
        Ok(added)
    }

    /// Remove factors by key; keys that are not selected are ignored
    pub fn remove_keys<S: AsRef<str>>(&mut self, keys: &[S]) -> usize {
        let before = self.selected.len();
        self.selected.retain(|selected| !keys.iter().any(|k| k.as_ref() == selected.as_str()));
        let removed = before - self.selected.len();

        debug!("removed {} factors", removed);
        self.notify();
        removed
    }

    /// Add every factor belonging to the given marker letters
    ///
    /// A factor belongs to a letter when the letter appears inside the
    /// brackets of its name, or when the factor key is the letter itself.
    /// Returns the number of newly added factors.
    pub fn select(&mut self, labels: &[char]) -> usize {
        let keys: Vec<String> = self
            .options
            .iter()
            .filter(|option| {
                labels.iter().any(|letter| {
                    option.key == letter.to_string() || markers::has_marker_letter(&option.factor.name, *letter)
                })
            })
            .map(|option| option.key.clone())
            .collect();

        let mut added = 0;
        for key in &keys {
            if self.push_key(key) {
                added += 1;
            }
        }

        debug!("letters {:?} added {} factors", labels, added);
        self.notify();
        added
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        debug!("selection cleared");
        self.notify();
    }

    /// Register a change observer; registrations accumulate
    pub fn on_change(&mut self, handler: ChangeHandler) {
        self.handlers.push(handler);
    }

    fn option(&self, key: &str) -> Option<&FactorOption> {
        self.options.iter().find(|option| option.key == key)
    }

    fn push_key(&mut self, key: &str) -> bool {
        if self.selected.iter().any(|k| k == key) {
            return false;
        }
        self.selected.push(key.to_string());
        true
    }

    fn notify(&mut self) {
        let selection = self.get_selection();
        for handler in self.handlers.iter_mut() {
            handler(&selection);
        }
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;
