//! Vocabulary tables and case-insensitive code index.

mod beat;
mod lead;
mod wave;

use std::collections::HashMap;

use serde::Serialize;

pub use beat::{beat_terms, lookup_beat};
pub use lead::{lead_terms, lookup_lead};
pub use wave::{lookup_wave, wave_terms};

/// A lead or wave vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Term {
    pub code: &'static str,
    /// Short display label.
    pub label: &'static str,
    pub description: &'static str,
}

/// A beat vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BeatTerm {
    pub code: &'static str,
    /// Beat class letter (MIT-BIH annotation symbol).
    pub class: char,
    pub description: &'static str,
}

/// Maps upper-cased codes to their position in a static table.
///
/// The first entry wins if two codes collide after case folding.
#[derive(Debug)]
pub(crate) struct CodeIndex {
    positions: HashMap<String, usize>,
}

impl CodeIndex {
    pub(crate) fn new<'a, I>(codes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut positions = HashMap::new();
        for (index, code) in codes.into_iter().enumerate() {
            positions.entry(code.to_ascii_uppercase()).or_insert(index);
        }
        Self { positions }
    }

    pub(crate) fn position(&self, code: &str) -> Option<usize> {
        self.positions.get(&code.to_ascii_uppercase()).copied()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_case_insensitive() {
        let index = CodeIndex::new(["MDC_ECG_LEAD_aVR", "MDC_ECG_LEAD_I"]);
        assert_eq!(index.position("mdc_ecg_lead_avr"), Some(0));
        assert_eq!(index.position("MDC_ECG_LEAD_I"), Some(1));
        assert_eq!(index.position("MDC_ECG_LEAD"), None);
    }

    #[test]
    fn first_entry_wins_on_collision() {
        let index = CodeIndex::new(["abc", "ABC"]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.position("Abc"), Some(0));
    }
}
