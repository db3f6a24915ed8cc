// src/draft/session.rs

//! One editing session: the draft and everything the drafting view owns.
//!
//! A session is created when the drafting view is entered and dropped when the
//! user navigates away. Nothing in it is persisted.

use crate::draft::assistant::Assistant;
use crate::draft::countdown::{Countdown, Remaining};
use crate::draft::preview::{render_preview, Preview, Publication};
use crate::draft::suggestion::apply_suggestion;
use crate::draft::types::{DocField, Document, DraftError, Section, Suggestion};
use crate::draft::visibility::SectionVisibility;
use crate::workspace::WorkspaceFile;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct DraftSession {
    document: Document,
    visibility: SectionVisibility,
    countdown: Countdown,
    assistant: Assistant,
    publication: Publication,
    suggestions: Vec<Suggestion>,
    dismissed: BTreeSet<u32>,
}

impl DraftSession {
    pub fn from_workspace(ws: &WorkspaceFile, now: DateTime<Utc>) -> Self {
        let mut countdown = Countdown::new(ws.deadline_utc);
        countdown.poll(now);

        tracing::info!(
            workspace = ws.workspace_id.as_deref().unwrap_or("(unnamed)"),
            claims = ws.document.claim_count(),
            suggestions = ws.suggestions.len(),
            "drafting session opened"
        );

        Self {
            document: ws.document.clone(),
            visibility: SectionVisibility::default(),
            countdown,
            assistant: Assistant::new(),
            publication: ws.publication.clone(),
            suggestions: ws.suggestions.clone(),
            dismissed: BTreeSet::new(),
        }
    }

    // --------------------------------------------------
    // document
    // --------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn set_field(&mut self, field: DocField, value: impl Into<String>) {
        self.document.set_field(field, value);
    }

    pub fn append_claim(&mut self, text: impl Into<String>) -> usize {
        self.document.append_claim(text)
    }

    pub fn set_claim_at(&mut self, index: usize, text: impl Into<String>) -> Result<(), DraftError> {
        self.document.set_claim_at(index, text)
    }

    // --------------------------------------------------
    // visibility
    // --------------------------------------------------

    pub fn visibility(&self) -> &SectionVisibility {
        &self.visibility
    }

    pub fn toggle_section(&mut self, section: Section) -> bool {
        self.visibility.toggle(section)
    }

    // --------------------------------------------------
    // preview
    // --------------------------------------------------

    pub fn publication(&self) -> &Publication {
        &self.publication
    }

    pub fn preview(&self) -> Preview {
        render_preview(&self.document, &self.publication)
    }

    // --------------------------------------------------
    // suggestions
    // --------------------------------------------------

    /// Suggestions not dismissed in this session, in catalog order.
    pub fn visible_suggestions(&self) -> impl Iterator<Item = &Suggestion> + '_ {
        self.suggestions
            .iter()
            .filter(|s| !self.dismissed.contains(&s.id))
    }

    fn suggestion(&self, id: u32) -> Result<&Suggestion, DraftError> {
        self.suggestions
            .iter()
            .find(|s| s.id == id)
            .ok_or(DraftError::UnknownSuggestion(id))
    }

    /// Apply a catalog suggestion. Accepted suggestions stay visible and can be
    /// applied again.
    pub fn accept_suggestion(&mut self, id: u32) -> Result<(), DraftError> {
        let s = self.suggestion(id)?.clone();
        apply_suggestion(&mut self.document, &s);
        Ok(())
    }

    pub fn dismiss_suggestion(&mut self, id: u32) -> Result<(), DraftError> {
        self.suggestion(id)?;
        self.dismissed.insert(id);
        tracing::debug!(id, "suggestion dismissed");
        Ok(())
    }

    // --------------------------------------------------
    // assistant
    // --------------------------------------------------

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn send_message(&mut self, text: &str, now: Instant) -> Result<(), DraftError> {
        self.assistant.send(text, now)
    }

    // --------------------------------------------------
    // timers
    // --------------------------------------------------

    pub fn remaining(&self) -> Remaining {
        self.countdown.current()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Advance time-driven state. Returns true if anything visible changed.
    pub fn tick(&mut self, wall: DateTime<Utc>, mono: Instant) -> bool {
        let countdown = self.countdown.poll(wall);
        let replies = self.assistant.poll(mono);
        countdown || replies
    }
}

// ======================================================
// Unit Tests
// ======================================================
