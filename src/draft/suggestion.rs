// src/draft/suggestion.rs

use crate::draft::types::{DocField, Document, Suggestion, SuggestionTarget};

/// Route one suggestion into the document.
///
/// Abstract and Background replace the field; Claims appends a new claim.
/// The suggestion itself is not consumed and may be applied again.
pub fn apply_suggestion(doc: &mut Document, suggestion: &Suggestion) {
    tracing::debug!(
        id = suggestion.id,
        section = suggestion.section.label(),
        "apply_suggestion"
    );

    match suggestion.section {
        SuggestionTarget::Abstract => doc.set_field(DocField::Abstract, suggestion.text.clone()),
        SuggestionTarget::Background => {
            doc.set_field(DocField::Background, suggestion.text.clone())
        }
        SuggestionTarget::Claims => {
            doc.append_claim(suggestion.text.clone());
        }
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_doc() -> Document {
        let mut d = Document::default();
        d.set_field(DocField::Title, "T");
        d.set_field(DocField::Abstract, "old abstract");
        d.set_field(DocField::Background, "old background");
        d.append_claim("c1");
        d.append_claim("c2");
        d.append_claim("c3");
        d
    }

    fn mk(section: SuggestionTarget, text: &str) -> Suggestion {
        Suggestion {
            id: 1,
            section,
            text: text.to_string(),
        }
    }

    #[test]
    fn claims_suggestion_appends_and_leaves_fields_alone() {
        let before = mk_doc();
        let mut after = before.clone();
        apply_suggestion(&mut after, &mk(SuggestionTarget::Claims, "foo"));

        assert_eq!(after.claim_count(), 4);
        assert_eq!(after.claims()[3], "foo");
        assert_eq!(&after.claims()[..3], before.claims());
        for f in DocField::ALL {
            assert_eq!(after.field(f), before.field(f));
        }
    }

    #[test]
    fn abstract_suggestion_replaces_abstract_only() {
        let before = mk_doc();
        let mut after = before.clone();
        apply_suggestion(&mut after, &mk(SuggestionTarget::Abstract, "new"));

        assert_eq!(after.field(DocField::Abstract), "new");
        assert_eq!(after.field(DocField::Background), "old background");
        assert_eq!(after.claims(), before.claims());
    }

    #[test]
    fn background_suggestion_replaces_background_only() {
        let mut d = mk_doc();
        apply_suggestion(&mut d, &mk(SuggestionTarget::Background, "bg"));
        assert_eq!(d.field(DocField::Background), "bg");
        assert_eq!(d.field(DocField::Abstract), "old abstract");
    }

    #[test]
    fn applying_twice_appends_twice() {
        let mut d = mk_doc();
        let s = mk(SuggestionTarget::Claims, "again");
        apply_suggestion(&mut d, &s);
        apply_suggestion(&mut d, &s);
        assert_eq!(d.claim_count(), 5);
        assert_eq!(d.claims()[3], d.claims()[4]);
    }
}
