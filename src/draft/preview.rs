// src/draft/preview.rs

//! Publication-style rendering of a [`Document`].
//!
//! The renderer is a pure function of its inputs: no caching, no counters, no
//! randomness. Empty fields show [`PLACEHOLDER`]; claims are numbered by
//! position, whatever numbering their text may carry.

use crate::draft::types::{DocField, Document};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const PLACEHOLDER: &str = "(Not yet written)";

/// Fixed publication identifiers shown in the preview header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub pub_no: String,
    pub pub_date: String,
    /// Code 39 payload drawn under the publication number.
    pub barcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub header: PreviewHeader,
    /// INID-coded front-page lines, e.g. `(72) Inventors`.
    pub front_page: Vec<FrontPageLine>,
    pub sections: Vec<PreviewSection>,
    pub claims: Vec<NumberedClaim>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHeader {
    pub heading: &'static str,
    pub country: &'static str,
    pub kind: &'static str,
    pub pub_no: String,
    pub pub_date: String,
    pub barcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontPageLine {
    pub code: &'static str,
    pub label: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSection {
    pub heading: &'static str,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub number: u32,
    pub text: String,
}

impl Paragraph {
    pub fn tag(&self) -> String {
        format!("[{:04}]", self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedClaim {
    pub number: usize,
    pub text: String,
}

const BODY_SECTIONS: [(&str, DocField); 4] = [
    ("BACKGROUND OF THE INVENTION", DocField::Background),
    ("SUMMARY OF THE INVENTION", DocField::Summary),
    ("BRIEF DESCRIPTION OF THE DRAWINGS", DocField::BriefDescription),
    ("DETAILED DESCRIPTION OF THE INVENTION", DocField::DetailedDescription),
];

pub const CLAIMS_HEADING: &str = "CLAIMS";
pub const CLAIMS_PREAMBLE: &str = "What is claimed is:";

fn or_placeholder(s: &str) -> String {
    if s.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        s.to_string()
    }
}

pub fn render_preview(doc: &Document, publication: &Publication) -> Preview {
    let header = PreviewHeader {
        heading: "United States Patent Application Publication",
        country: "(19) United States",
        kind: "(12) Patent Application Publication",
        pub_no: format!("(10) Pub. No.: {}", publication.pub_no),
        pub_date: format!("(43) Pub. Date: {}", publication.pub_date),
        barcode: publication.barcode.clone(),
    };

    let front_page = vec![
        FrontPageLine {
            code: "(54)",
            label: "Title",
            text: or_placeholder(doc.field(DocField::Title)),
        },
        FrontPageLine {
            code: "(72)",
            label: "Inventors",
            text: or_placeholder(doc.field(DocField::Inventors)),
        },
        FrontPageLine {
            code: "(73)",
            label: "Assignee",
            text: or_placeholder(doc.field(DocField::Assignee)),
        },
        FrontPageLine {
            code: "(57)",
            label: "Abstract",
            text: or_placeholder(doc.field(DocField::Abstract)),
        },
    ];

    let sections = BODY_SECTIONS
        .iter()
        .zip(1u32..)
        .map(|(&(heading, field), number)| PreviewSection {
            heading,
            paragraphs: vec![Paragraph {
                number,
                text: or_placeholder(doc.field(field)),
            }],
        })
        .collect();

    let claims = doc
        .claims()
        .iter()
        .enumerate()
        .map(|(i, c)| NumberedClaim {
            number: i + 1,
            text: or_placeholder(c),
        })
        .collect();

    Preview {
        header,
        front_page,
        sections,
        claims,
    }
}

impl Preview {
    /// Title line as printed on the front page.
    pub fn title(&self) -> &str {
        self.front_page
            .first()
            .map(|l| l.text.as_str())
            .unwrap_or(PLACEHOLDER)
    }

    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let h = &self.header;

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", h.heading);
        let _ = writeln!(out, "{}", h.country);
        let _ = writeln!(out, "{}", h.kind);
        let _ = writeln!(out, "{}", h.pub_no);
        let _ = writeln!(out, "{}", h.pub_date);
        out.push('\n');

        for line in &self.front_page {
            let _ = writeln!(out, "{} {}: {}", line.code, line.label, line.text);
        }

        for s in &self.sections {
            out.push('\n');
            let _ = writeln!(out, "{}", s.heading);
            for p in &s.paragraphs {
                let _ = writeln!(out, "{} {}", p.tag(), p.text);
            }
        }

        out.push('\n');
        let _ = writeln!(out, "{CLAIMS_HEADING}");
        let _ = writeln!(out, "{CLAIMS_PREAMBLE}");
        for c in &self.claims {
            let _ = writeln!(out, "{}. {}", c.number, c.text);
        }

        out
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_pub() -> Publication {
        Publication {
            pub_no: "US 2025/0142735 A1".to_string(),
            pub_date: "Dec. 28, 2025".to_string(),
            barcode: "US20250142735A1".to_string(),
        }
    }

    fn mk_doc() -> Document {
        let mut d = Document::default();
        d.set_field(DocField::Title, "Adaptive Cathode Sintering System");
        d.set_field(DocField::Background, "Static schedules drift.");
        d.append_claim("1. A method comprising measuring impedance.");
        d.append_claim("");
        d
    }

    #[test]
    fn empty_fields_render_placeholder() {
        let p = render_preview(&mk_doc(), &mk_pub());
        let summary = &p.sections[1];
        assert_eq!(summary.heading, "SUMMARY OF THE INVENTION");
        assert_eq!(summary.paragraphs[0].text, PLACEHOLDER);

        let abstract_line = p.front_page.iter().find(|l| l.code == "(57)").unwrap();
        assert_eq!(abstract_line.text, PLACEHOLDER);
    }

    #[test]
    fn filled_fields_are_substituted_verbatim() {
        let p = render_preview(&mk_doc(), &mk_pub());
        assert_eq!(p.title(), "Adaptive Cathode Sintering System");
        assert_eq!(p.sections[0].paragraphs[0].text, "Static schedules drift.");
    }

    #[test]
    fn claims_numbered_by_position_not_text() {
        let p = render_preview(&mk_doc(), &mk_pub());
        assert_eq!(p.claims.len(), 2);
        assert_eq!(p.claims[0].number, 1);
        assert_eq!(p.claims[0].text, "1. A method comprising measuring impedance.");
        assert_eq!(p.claims[1].number, 2);
        assert_eq!(p.claims[1].text, PLACEHOLDER);
    }

    #[test]
    fn paragraphs_numbered_sequentially() {
        let p = render_preview(&mk_doc(), &mk_pub());
        let tags: Vec<String> = p
            .sections
            .iter()
            .flat_map(|s| s.paragraphs.iter().map(|p| p.tag()))
            .collect();
        assert_eq!(tags, vec!["[0001]", "[0002]", "[0003]", "[0004]"]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let d = mk_doc();
        let pubn = mk_pub();
        let a = render_preview(&d, &pubn);
        let b = render_preview(&d, &pubn);
        assert_eq!(a, b);
        assert_eq!(a.to_plain_text(), b.to_plain_text());
    }

    #[test]
    fn plain_text_contains_header_and_claims() {
        let text = render_preview(&mk_doc(), &mk_pub()).to_plain_text();
        assert!(text.contains("(10) Pub. No.: US 2025/0142735 A1"));
        assert!(text.contains("What is claimed is:"));
        assert!(text.contains("2. (Not yet written)"));
    }

    #[test]
    fn document_without_claims_renders_empty_claim_list() {
        let p = render_preview(&Document::default(), &mk_pub());
        assert!(p.claims.is_empty());
        assert_eq!(p.title(), PLACEHOLDER);
    }
}
