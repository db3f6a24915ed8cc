// src/error.rs

use crate::draft::DraftError;
use crate::workspace::ConfigError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    #[error("internal state lock poisoned")]
    StateLockPoisoned,

    // --------------------------------------------------
    // workspace file
    // --------------------------------------------------
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --------------------------------------------------
    // draft editing
    // --------------------------------------------------
    #[error(transparent)]
    Draft(#[from] DraftError),

    // --------------------------------------------------
    // export
    // --------------------------------------------------
    #[error("failed to serialize draft: {0}")]
    Export(#[from] serde_json::Error),
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let mut kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            StateLockPoisoned => "Internal state lock failed.",

            Config(ConfigError::Io(_)) => "Could not read workspace file.",
            Config(ConfigError::Parse(_)) => "Workspace file is not valid JSON5.",
            Config(ConfigError::Validation(_)) => "Workspace file failed validation.",

            Draft(DraftError::ClaimIndexOutOfRange { .. }) => "That claim no longer exists.",
            Draft(DraftError::UnknownSection(_)) => "Unknown document section.",
            Draft(DraftError::UnknownSuggestion(_)) => "That suggestion is no longer available.",
            Draft(DraftError::EmptyMessage) => {
                kind = UserMsgKind::Info;
                "Type a message first."
            }

            Export(_) => "Export failed.",
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_index_error_maps_to_error_kind() {
        let e = AppError::from(DraftError::ClaimIndexOutOfRange { index: 7, len: 3 });
        let m = e.user_msg();
        assert_eq!(m.kind, UserMsgKind::Error);
        assert_eq!(m.short, "That claim no longer exists.");
        assert!(m.detail.unwrap().contains("7"));
    }

    #[test]
    fn empty_chat_message_is_info_not_error() {
        let m = AppError::from(DraftError::EmptyMessage).user_msg();
        assert_eq!(m.kind, UserMsgKind::Info);
    }

    #[test]
    fn config_validation_maps_to_short_message() {
        let e = AppError::from(ConfigError::Validation("bad".to_string()));
        assert_eq!(e.user_msg().short, "Workspace file failed validation.");
        assert!(e.to_string().contains("bad"));
    }
}
