// src/draft/assistant.rs

//! Research assistant transcript.
//!
//! There is no model behind it: every user message gets the same canned reply
//! after [`REPLY_DELAY`]. The transcript lives only as long as the session.

use crate::draft::types::DraftError;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const REPLY_DELAY: Duration = Duration::from_secs(2);

pub const GREETING: &str = "I'm your patent research assistant. I can help you research prior art, \
improve claims language, and suggest technical improvements. What would you like to work on?";

pub const CANNED_REPLY: &str = "I'll help you research that topic. Based on your query, I found \
several relevant prior art references and can suggest improvements to your claims language.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Assistant,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct Assistant {
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: VecDeque<Instant>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

impl Assistant {
    pub fn new() -> Self {
        let mut a = Self {
            messages: Vec::new(),
            next_id: 1,
            pending: VecDeque::new(),
        };
        a.push(Role::Assistant, GREETING.to_string());
        a
    }

    fn push(&mut self, role: Role, content: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, role, content });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Time until the next reply is due, if any.
    pub fn next_due_in(&self, now: Instant) -> Option<Duration> {
        self.pending
            .front()
            .map(|due| due.saturating_duration_since(now))
    }

    pub fn send(&mut self, text: &str, now: Instant) -> Result<(), DraftError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DraftError::EmptyMessage);
        }

        self.push(Role::User, text.to_string());
        self.pending.push_back(now + REPLY_DELAY);
        tracing::debug!(pending = self.pending.len(), "assistant message sent");
        Ok(())
    }

    /// Deliver every reply that is due. Returns true if the transcript changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut delivered = false;
        while self.pending.front().is_some_and(|due| *due <= now) {
            self.pending.pop_front();
            self.push(Role::Assistant, CANNED_REPLY.to_string());
            delivered = true;
        }
        delivered
    }
}

// ======================================================
// Unit Tests
// ======================================================
