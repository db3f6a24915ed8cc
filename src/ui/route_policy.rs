// src/ui/route_policy.rs

use crate::ui::Route;

/// What to do with the drafting session on a route change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPolicy {
    Keep,
    Open,
    Close,
}

/// Session lifecycle is tied to the drafting view (pure)
pub fn session_policy(prev: Route, next: Route) -> SessionPolicy {
    match (prev == Route::Drafting, next == Route::Drafting) {
        (false, true) => SessionPolicy::Open,
        (true, false) => SessionPolicy::Close,
        _ => SessionPolicy::Keep,
    }
}

/// Panel messages are per-visit (pure)
pub fn clears_messages(prev: Route, next: Route) -> bool {
    prev != next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_drafting_opens_session() {
        assert_eq!(
            session_policy(Route::About, Route::Drafting),
            SessionPolicy::Open
        );
    }

    #[test]
    fn leaving_drafting_closes_session() {
        assert_eq!(
            session_policy(Route::Drafting, Route::About),
            SessionPolicy::Close
        );
    }

    #[test]
    fn staying_put_keeps_session() {
        assert_eq!(
            session_policy(Route::Drafting, Route::Drafting),
            SessionPolicy::Keep
        );
        assert_eq!(session_policy(Route::About, Route::About), SessionPolicy::Keep);
        assert!(!clears_messages(Route::About, Route::About));
    }
}
