// src/draft/types.rs

use serde::{Deserialize, Serialize};

/// One patent application draft.
///
/// Scalar fields are plain text; `inventors` is a free-text, comma separated
/// line rather than a structured list. Claims are displayed in insertion order
/// and numbered from 1 by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub(crate) title: String,
    pub(crate) inventors: String,
    pub(crate) assignee: String,
    #[serde(rename = "abstract")]
    pub(crate) abstract_text: String,
    pub(crate) background: String,
    pub(crate) summary: String,
    pub(crate) brief_description: String,
    pub(crate) detailed_description: String,
    pub(crate) claims: Vec<String>,
}

/// Scalar (non-claim) fields of a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocField {
    Title,
    Inventors,
    Assignee,
    Abstract,
    Background,
    Summary,
    BriefDescription,
    DetailedDescription,
}

impl DocField {
    pub const ALL: [DocField; 8] = [
        DocField::Title,
        DocField::Inventors,
        DocField::Assignee,
        DocField::Abstract,
        DocField::Background,
        DocField::Summary,
        DocField::BriefDescription,
        DocField::DetailedDescription,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DocField::Title => "title",
            DocField::Inventors => "inventors",
            DocField::Assignee => "assignee",
            DocField::Abstract => "abstract",
            DocField::Background => "background",
            DocField::Summary => "summary",
            DocField::BriefDescription => "brief_description",
            DocField::DetailedDescription => "detailed_description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocField::Title => "Title",
            DocField::Inventors => "Inventors",
            DocField::Assignee => "Assignee",
            DocField::Abstract => "Abstract",
            DocField::Background => "Background",
            DocField::Summary => "Summary",
            DocField::BriefDescription => "Brief Description",
            DocField::DetailedDescription => "Detailed Description",
        }
    }

    /// Single-line fields get a singleline editor.
    pub fn is_single_line(self) -> bool {
        matches!(
            self,
            DocField::Title | DocField::Inventors | DocField::Assignee
        )
    }
}

/// Collapsible regions of the editing view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Title,
    Abstract,
    Claims,
    Background,
    Summary,
    BriefDescription,
    DetailedDescription,
}

impl Section {
    /// Display order of the section grid.
    pub const ALL: [Section; 7] = [
        Section::Title,
        Section::Abstract,
        Section::Claims,
        Section::Background,
        Section::Summary,
        Section::BriefDescription,
        Section::DetailedDescription,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Title => "title",
            Section::Abstract => "abstract",
            Section::Claims => "claims",
            Section::Background => "background",
            Section::Summary => "summary",
            Section::BriefDescription => "brief_description",
            Section::DetailedDescription => "detailed_description",
        }
    }

    pub fn from_key(key: &str) -> Result<Section, DraftError> {
        Section::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .ok_or_else(|| DraftError::UnknownSection(key.to_string()))
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Title => "Title",
            Section::Abstract => "Abstract",
            Section::Claims => "Claims",
            Section::Background => "Background",
            Section::Summary => "Summary",
            Section::BriefDescription => "Brief Description",
            Section::DetailedDescription => "Detailed Description",
        }
    }

    /// Scalar fields edited inside this section. The title block also carries
    /// the bibliographic lines (inventors, assignee).
    pub fn fields(self) -> &'static [DocField] {
        match self {
            Section::Title => &[DocField::Title, DocField::Inventors, DocField::Assignee],
            Section::Abstract => &[DocField::Abstract],
            Section::Claims => &[],
            Section::Background => &[DocField::Background],
            Section::Summary => &[DocField::Summary],
            Section::BriefDescription => &[DocField::BriefDescription],
            Section::DetailedDescription => &[DocField::DetailedDescription],
        }
    }
}

/// Sections a suggestion may target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionTarget {
    Abstract,
    Background,
    Claims,
}

impl SuggestionTarget {
    pub fn label(self) -> &'static str {
        match self {
            SuggestionTarget::Abstract => "Abstract",
            SuggestionTarget::Background => "Background",
            SuggestionTarget::Claims => "Claims",
        }
    }
}

/// A section-tagged block of text offered for one-click insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: u32,
    pub section: SuggestionTarget,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("invalid claim index {index}; claim_count={len}")]
    ClaimIndexOutOfRange { index: usize, len: usize },

    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("unknown suggestion id {0}")]
    UnknownSuggestion(u32),

    #[error("message is empty")]
    EmptyMessage,
}
