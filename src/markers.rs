/// Marker letter extraction
///
/// Some factor names carry bracketed marker letters, e.g.
/// "Работа с лекарственными средствами [АК]". Each marker letter links the
/// factor to a group of related "letter" factors that usually need to be
/// selected together with it.
///
/// Extraction is two pure steps:
/// 1. take every bracketed substring of the name
/// 2. split into characters and keep only the known marker letters
use crate::dataset::Factor;
use lazy_static::lazy_static;
use regex::Regex;

/// Cyrillic marker letters, in button order
pub const MARKER_LETTERS: [char; 4] = ['А', 'К', 'Р', 'Ф'];

lazy_static! {
    // Non-greedy, at least one character between the brackets
    static ref BRACKETED: Regex = Regex::new(r"\[(.+?)\]").expect("valid bracket pattern");
}

pub fn is_marker_letter(c: char) -> bool {
    MARKER_LETTERS.contains(&c)
}

/// Step 1: all substrings enclosed in `[` and `]`
pub fn bracketed_segments(name: &str) -> Vec<&str> {
    BRACKETED.captures_iter(name).filter_map(|caps| caps.get(1)).map(|m| m.as_str()).collect()
}

/// Step 2: marker letters found inside the brackets, in order of appearance
///
/// Repeated letters are kept; callers de-duplicate across a selection.
pub fn marker_letters(name: &str) -> Vec<char> {
    bracketed_segments(name).iter().flat_map(|segment| segment.chars()).filter(|c| is_marker_letter(*c)).collect()
}

pub fn has_marker_letter(name: &str, letter: char) -> bool {
    marker_letters(name).contains(&letter)
}

/// Derived warning state for a selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningState {
    /// Distinct marker letters, first-seen order
    pub letters: Vec<char>,
    /// Selected factors that yielded at least one marker letter
    pub factors_with_letters: Vec<Factor>,
}

impl WarningState {
    pub fn derive(selection: &[Factor]) -> Self {
        let mut letters: Vec<char> = Vec::new();
        let mut factors_with_letters = Vec::new();

        for factor in selection {
            let name_letters = marker_letters(&factor.name);
            if name_letters.is_empty() {
                continue;
            }
            for letter in name_letters {
                if !letters.contains(&letter) {
                    letters.push(letter);
                }
            }
            factors_with_letters.push(factor.clone());
        }

        WarningState { letters, factors_with_letters }
    }

    pub fn needs_warning(&self) -> bool {
        !self.letters.is_empty()
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
    fn test_letters_in_order() {
        assert_eq!(marker_letters("14. Работа [АК]"), vec!['А', 'К']);
        assert_eq!(marker_letters("Аэрозоли [ФА]"), vec!['Ф', 'А']);
    }

    #[test]
    fn test_no_brackets_no_letters() {
        assert!(marker_letters("Производственный шум").is_empty());
        // Marker letters outside brackets do not count
        assert!(marker_letters("Аллергены").is_empty());
    }

    #[test]
    fn test_non_marker_letters_are_dropped() {
        assert!(marker_letters("Подземные работы [X]").is_empty());
        assert!(marker_letters("Подземные работы [Б1]").is_empty());
        assert_eq!(marker_letters("Смесь [А, Б]"), vec!['А']);
    }

    #[test]
    fn test_multiple_bracket_groups() {
        assert_eq!(bracketed_segments("[А] текст [РФ]"), vec!["А", "РФ"]);
        assert_eq!(marker_letters("[А] текст [РФ]"), vec!['А', 'Р', 'Ф']);
    }

    #[test]
    fn test_empty_brackets_ignored() {
        assert!(bracketed_segments("пусто []").is_empty());
    }

    #[test]
    fn test_latin_lookalikes_are_not_markers() {
        // Latin A and K
        assert!(marker_letters("[AK]").is_empty());
    }

    #[test]
    fn test_warning_state_dedups_letters_and_collects_factors() {
        let selection = vec![
            factor("14", "Работа [АК]"),
            factor("9", "Шум"),
            factor("1.2", "Аллергены [А]"),
            factor("25", "Подземные работы [X]"),
        ];
        let state = WarningState::derive(&selection);
        assert!(state.needs_warning());
        assert_eq!(state.letters, vec!['А', 'К']);
        let keys: Vec<&str> = state.factors_with_letters.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["14", "1.2"]);
    }

    #[test]
    fn test_warning_state_empty_selection() {
        let state = WarningState::derive(&[]);
        assert!(!state.needs_warning());
        assert!(state.factors_with_letters.is_empty());
    }
}
