/// Report orchestration
///
/// Wires the selection, the warning panel and the results region together.
/// Every action starts from a cleared results region; the warning panel
/// follows the selection through its change notifications.
use crate::dataset::{Category, ContraindicationKind, Dataset, Factor};
use crate::host::Host;
use crate::key;
use crate::report::{self, OutputFormat, ReportKind, ReportRenderer};
use crate::selection::SelectionControl;
use crate::warning::WarningPanel;
use log::debug;
use std::cell::{Ref, RefCell};
use std::path::Path;
use std::rc::Rc;

pub const INSPECTIONS_HEADER: &str = "Объем обследований для пунктов";
pub const CONTRAINDICATIONS_HEADER: &str = "Противопоказания для пунктов";
pub const DOCTORS_SUBHEADER: &str = "Врачи-специалисты";
pub const EXAMINATIONS_SUBHEADER: &str = "Лабораторные и функциональные исследования";
pub const GENERAL_INSPECTIONS_SUBHEADER: &str = "Общие обследования";
pub const GENERAL_CONTRAINDICATIONS_SUBHEADER: &str = "Общие противопоказания";
pub const RANGE_CONTRAINDICATIONS_SUBHEADER: &str = "Общие противопоказания для пунктов с 1 по 22";

pub struct App {
    dataset: Dataset,
    selection: SelectionControl,
    warning: Rc<RefCell<WarningPanel>>,
    results: ReportRenderer,
    host: Box<dyn Host>,
}

impl App {
    pub fn new(dataset: Dataset, host: Box<dyn Host>) -> Self {
        let mut selection = SelectionControl::new(&dataset);
        let warning = Rc::new(RefCell::new(WarningPanel::new()));

        let panel = Rc::clone(&warning);
        selection.on_change(Box::new(move |factors| panel.borrow_mut().check(factors)));

        App { dataset, selection, warning, results: ReportRenderer::new(), host }
    }

    pub fn selection(&self) -> &SelectionControl {
        &self.selection
    }

    pub fn warning(&self) -> Ref<'_, WarningPanel> {
        self.warning.borrow()
    }

    pub fn results(&self) -> &ReportRenderer {
        &self.results
    }

    pub fn select_keys<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<usize, String> {
        self.selection.select_keys(keys)
    }

    pub fn remove_keys<S: AsRef<str>>(&mut self, keys: &[S]) -> usize {
        self.selection.remove_keys(keys)
    }

    /// Activate the warning button for `letter`
    pub fn add_letter(&mut self, letter: char) -> Result<usize, String> {
        let letter = self.warning.borrow().activate(letter)?;
        Ok(self.selection.select(&[letter]))
    }

    /// Run one of the two report actions
    pub fn run_report(&mut self, kind: ReportKind) -> bool {
        match kind {
            ReportKind::Inspections => self.inspections_report(),
            ReportKind::Contraindications => self.contraindications_report(),
        }
    }

    /// Doctors, examinations and the general examinations for the selection
    ///
    /// Returns false and leaves the region empty when nothing is selected.
    pub fn inspections_report(&mut self) -> bool {
        let Some(selection) = self.begin_report() else {
            return false;
        };

        self.results.add_header(&format!("{}: {}", INSPECTIONS_HEADER, keys_string(&selection)));
        self.results.render_category_values(Some(DOCTORS_SUBHEADER), Category::Doctors, &selection, &self.dataset);
        self.results.render_category_values(
            Some(EXAMINATIONS_SUBHEADER),
            Category::Examinations,
            &selection,
            &self.dataset,
        );

        // General lists are curated upstream and not de-duplicated
        let general: Vec<&String> =
            self.dataset.general_doctors().iter().chain(self.dataset.general_examinations()).collect();
        self.results.add_values(&general, Some(GENERAL_INSPECTIONS_SUBHEADER));

        self.results.show_print_action(self.host.as_ref());
        true
    }

    /// Contraindications for the selection plus the general lists
    ///
    /// The 1-22 block is added only when a selected key sorts before "23".
    pub fn contraindications_report(&mut self) -> bool {
        let Some(selection) = self.begin_report() else {
            return false;
        };

        self.results.add_header(&format!("{}: {}", CONTRAINDICATIONS_HEADER, keys_string(&selection)));
        self.results.render_category_values(None, Category::Contraindications, &selection, &self.dataset);
        self.results.add_values(
            self.dataset.general_contraindications(ContraindicationKind::Absolute),
            Some(GENERAL_CONTRAINDICATIONS_SUBHEADER),
        );

        if selection.iter().any(|factor| key::in_range_1_to_22(&factor.key)) {
            self.results.add_values(
                self.dataset.general_contraindications(ContraindicationKind::From1To22),
                Some(RANGE_CONTRAINDICATIONS_SUBHEADER),
            );
        }

        self.results.show_print_action(self.host.as_ref());
        true
    }

    /// Clear the selection and the results region
    pub fn reset(&mut self) {
        self.selection.clear();
        self.results.clear();
        debug!("reset");
    }

    /// Write the current report as a print-ready page
    pub fn print(&self, path: &Path) -> Result<(), String> {
        if self.results.is_empty() || !self.results.is_print_visible() {
            return Err("Printing is not available for the current view".to_string());
        }
        report::export_report(&self.results.snapshot(), OutputFormat::Html, path)
    }

    fn begin_report(&mut self) -> Option<Vec<Factor>> {
        self.results.clear();
        self.warning.borrow_mut().hide();

        if self.selection.is_empty() {
            debug!("empty selection, nothing to render");
            return None;
        }
        Some(self.selection.get_selection())
    }
}

/// Selected keys joined for report headers
pub fn keys_string(selection: &[Factor]) -> String {
    selection.iter().map(|factor| factor.key.as_str()).collect::<Vec<_>>().join("; ")
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
