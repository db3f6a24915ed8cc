// src/draft/visibility.rs

use crate::draft::types::{DraftError, Section};
use std::collections::BTreeMap;

/// Sections open when a drafting session starts.
pub const DEFAULT_OPEN: &[Section] = &[Section::Claims];

/// Expand/collapse state per section. Independent of document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVisibility {
    expanded: BTreeMap<Section, bool>,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self::with_open(DEFAULT_OPEN)
    }
}

impl SectionVisibility {
    pub fn with_open(open: &[Section]) -> Self {
        let expanded = Section::ALL
            .into_iter()
            .map(|s| (s, open.contains(&s)))
            .collect();
        Self { expanded }
    }

    pub fn is_expanded(&self, section: Section) -> bool {
        self.expanded.get(&section).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, section: Section) -> bool {
        let slot = self.expanded.entry(section).or_insert(false);
        *slot = !*slot;
        tracing::debug!(section = section.key(), expanded = *slot, "toggle_section");
        *slot
    }

    /// String-keyed toggle for callers outside the typed UI.
    pub fn toggle_key(&mut self, key: &str) -> Result<bool, DraftError> {
        let section = Section::from_key(key)?;
        Ok(self.toggle(section))
    }

    pub fn expanded_sections(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(|s| self.is_expanded(*s))
    }
}

// ======================================================
// Unit Tests
// ======================================================
