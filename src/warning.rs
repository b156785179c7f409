/// Marker letter warning panel
///
/// Shown when any selected factor carries bracketed marker letters. Lists the
/// contributing factors and exposes one action button per present letter;
/// activating a button adds every factor sharing that letter.
use crate::dataset::Factor;
use crate::markers::{self, MARKER_LETTERS, WarningState};
use log::debug;

pub const WARNING_TITLE: &str = "Внимание! Выбранные пункты содержат буквенные обозначения:";
pub const WARNING_HINT: &str = "Добавить пункты с обозначением:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningButton {
    pub letter: char,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningPanel {
    visible: bool,
    factor_lines: Vec<String>,
    buttons: Vec<WarningButton>,
}

impl Default for WarningPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl WarningPanel {
    pub fn new() -> Self {
        WarningPanel {
            visible: false,
            factor_lines: Vec::new(),
            buttons: MARKER_LETTERS.iter().map(|&letter| WarningButton { letter, visible: false }).collect(),
        }
    }

    /// Recompute the panel from the current selection
    pub fn check(&mut self, selection: &[Factor]) {
        self.clear_contents();
        let state = WarningState::derive(selection);
        if !state.needs_warning() {
            self.hide();
            return;
        }

        self.factor_lines = state.factors_with_letters.iter().map(|f| f.label()).collect();
        for button in self.buttons.iter_mut() {
            if state.letters.contains(&button.letter) {
                button.visible = true;
            }
        }
        self.visible = true;
        debug!("warning shown for letters {:?}", state.letters);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.clear_contents();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// "<key>. <name>" of every contributing factor
    pub fn factor_lines(&self) -> &[String] {
        &self.factor_lines
    }

    pub fn buttons(&self) -> &[WarningButton] {
        &self.buttons
    }

    pub fn visible_letters(&self) -> Vec<char> {
        self.buttons.iter().filter(|b| b.visible).map(|b| b.letter).collect()
    }

    /// Letter behind a visible button; hidden or unknown buttons are rejected
    pub fn activate(&self, letter: char) -> Result<char, String> {
        if !markers::is_marker_letter(letter) {
            return Err(format!("'{}' is not a marker letter", letter));
        }
        if !self.visible || !self.visible_letters().contains(&letter) {
            return Err(format!("No warning button for '{}'", letter));
        }
        Ok(letter)
    }

    fn clear_contents(&mut self) {
        self.factor_lines.clear();
        for button in self.buttons.iter_mut() {
            button.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(key: &str, name: &str) -> Factor {
        Factor {
            key: key.to_string(),
            name: name.to_string(),
            doctors: vec![],
            examinations: vec![],
            contraindications: vec![],
        }
    }

    #[test]
    fn test_starts_hidden() {
        let panel = WarningPanel::new();
        assert!(!panel.is_visible());
        assert!(panel.visible_letters().is_empty());
        assert_eq!(panel.buttons().len(), 4);
    }

    #[test]
    fn test_check_shows_present_letters_only() {
        let mut panel = WarningPanel::new();
        panel.check(&[factor("14", "Работа [АК]"), factor("9", "Шум")]);
        assert!(panel.is_visible());
        assert_eq!(panel.factor_lines(), &["14. Работа [АК]".to_string()]);
        assert_eq!(panel.visible_letters(), vec!['А', 'К']);
    }

    #[test]
    fn test_buttons_keep_fixed_order() {
        let mut panel = WarningPanel::new();
        panel.check(&[factor("23", "[Ф]"), factor("1.2", "[А]")]);
        assert_eq!(panel.visible_letters(), vec!['А', 'Ф']);
    }

    #[test]
    fn test_check_without_letters_hides() {
        let mut panel = WarningPanel::new();
        panel.check(&[factor("14", "Работа [АК]")]);
        panel.check(&[factor("25", "Подземные работы [X]")]);
        assert!(!panel.is_visible());
        assert!(panel.factor_lines().is_empty());
        assert!(panel.visible_letters().is_empty());
    }

    #[test]
    fn test_hide_clears_contents() {
        let mut panel = WarningPanel::new();
        panel.check(&[factor("10", "Вибрация [Р]")]);
        panel.hide();
        assert!(!panel.is_visible());
        assert!(panel.factor_lines().is_empty());
        assert!(panel.visible_letters().is_empty());
    }

    #[test]
    fn test_activate_requires_visible_button() {
        let mut panel = WarningPanel::new();
        assert!(panel.activate('К').is_err());

        panel.check(&[factor("1.10", "Канцерогены [К]")]);
        assert_eq!(panel.activate('К'), Ok('К'));
        assert!(panel.activate('Р').is_err());
        assert!(panel.activate('Z').is_err());
    }
}
