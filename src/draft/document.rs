// src/draft/document.rs

use crate::draft::types::{DocField, Document, DraftError};

impl Document {
    pub fn field(&self, field: DocField) -> &str {
        match field {
            DocField::Title => &self.title,
            DocField::Inventors => &self.inventors,
            DocField::Assignee => &self.assignee,
            DocField::Abstract => &self.abstract_text,
            DocField::Background => &self.background,
            DocField::Summary => &self.summary,
            DocField::BriefDescription => &self.brief_description,
            DocField::DetailedDescription => &self.detailed_description,
        }
    }

    fn field_slot(&mut self, field: DocField) -> &mut String {
        match field {
            DocField::Title => &mut self.title,
            DocField::Inventors => &mut self.inventors,
            DocField::Assignee => &mut self.assignee,
            DocField::Abstract => &mut self.abstract_text,
            DocField::Background => &mut self.background,
            DocField::Summary => &mut self.summary,
            DocField::BriefDescription => &mut self.brief_description,
            DocField::DetailedDescription => &mut self.detailed_description,
        }
    }

    /// Replace one scalar field. Empty is a valid value; the preview decides
    /// how to show it.
    pub fn set_field(&mut self, field: DocField, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(field = field.key(), len = value.len(), "set_field");
        *self.field_slot(field) = value;
    }

    pub fn claims(&self) -> &[String] {
        &self.claims
    }

    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }

    /// Append a claim (possibly empty). Returns its display number.
    pub fn append_claim(&mut self, text: impl Into<String>) -> usize {
        self.claims.push(text.into());
        let number = self.claims.len();
        tracing::debug!(number, "append_claim");
        number
    }

    pub fn set_claim_at(&mut self, index: usize, text: impl Into<String>) -> Result<(), DraftError> {
        let len = self.claims.len();
        let slot = self
            .claims
            .get_mut(index)
            .ok_or(DraftError::ClaimIndexOutOfRange { index, len })?;
        *slot = text.into();
        tracing::debug!(index, "set_claim_at");
        Ok(())
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
        for f in DocField::ALL {
            d.set_field(f, format!("{} text", f.label()));
        }
        d.append_claim("A method comprising measuring impedance.");
        d.append_claim("The method of claim 1, wherein the frequency is 1 Hz.");
        d.append_claim("The method of claim 1, further comprising a model.");
        d
    }

    #[test]
    fn set_field_leaves_other_fields_unchanged() {
        for target in DocField::ALL {
            let before = mk_doc();
            let mut after = before.clone();
            after.set_field(target, "changed");

            assert_eq!(after.field(target), "changed");
            for other in DocField::ALL.into_iter().filter(|f| *f != target) {
                assert_eq!(after.field(other), before.field(other), "{other:?}");
            }
            assert_eq!(after.claims(), before.claims());
        }
    }

    #[test]
    fn set_field_accepts_empty_string() {
        let mut d = mk_doc();
        d.set_field(DocField::Abstract, "");
        assert_eq!(d.field(DocField::Abstract), "");
    }

    #[test]
    fn append_claim_grows_by_one_and_returns_number() {
        let mut d = mk_doc();
        let n = d.append_claim("");
        assert_eq!(n, 4);
        assert_eq!(d.claim_count(), 4);
        assert_eq!(d.claims()[3], "");
    }

    #[test]
    fn append_claim_does_not_touch_existing_claims() {
        let mut d = mk_doc();
        let before = d.claims().to_vec();
        d.append_claim("new");
        assert_eq!(&d.claims()[..3], before.as_slice());
    }

    #[test]
    fn set_claim_at_replaces_in_place() {
        let mut d = mk_doc();
        d.set_claim_at(1, "edited").unwrap();
        assert_eq!(d.claims()[1], "edited");
        assert_eq!(d.claim_count(), 3);
    }

    #[test]
    fn set_claim_at_out_of_range_is_error() {
        let mut d = mk_doc();
        let err = d.set_claim_at(3, "nope").unwrap_err();
        assert!(matches!(
            err,
            DraftError::ClaimIndexOutOfRange { index: 3, len: 3 }
        ));
        assert_eq!(d.claim_count(), 3);
    }

    #[test]
    fn set_claim_at_on_empty_claims_is_error() {
        let mut d = Document::default();
        assert!(d.set_claim_at(0, "x").is_err());
    }
}
