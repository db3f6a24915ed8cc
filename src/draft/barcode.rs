// src/draft/barcode.rs

//! Code 39 encoding for the publication-number barcode.
//!
//! Each symbol is nine elements (five bars, four spaces), three of them wide.
//! Symbols are separated by one narrow space and the payload is framed by `*`.

pub const NARROW: u8 = 1;
pub const WIDE: u8 = 3;

const START_STOP: char = '*';

/// Bar/space pattern per symbol, `1` = wide.
const PATTERNS: &[(char, &str)] = &[
    ('0', "000110100"),
    ('1', "100100001"),
    ('2', "001100001"),
    ('3', "101100000"),
    ('4', "000110001"),
    ('5', "100110000"),
    ('6', "001110000"),
    ('7', "000100101"),
    ('8', "100100100"),
    ('9', "001100100"),
    ('A', "100001001"),
    ('B', "001001001"),
    ('C', "101001000"),
    ('D', "000011001"),
    ('E', "100011000"),
    ('F', "001011000"),
    ('G', "000001101"),
    ('H', "100001100"),
    ('I', "001001100"),
    ('J', "000011100"),
    ('K', "100000011"),
    ('L', "001000011"),
    ('M', "101000010"),
    ('N', "000010011"),
    ('O', "100010010"),
    ('P', "001010010"),
    ('Q', "000000111"),
    ('R', "100000110"),
    ('S', "001000110"),
    ('T', "000010110"),
    ('U', "110000001"),
    ('V', "011000001"),
    ('W', "111000000"),
    ('X', "010010001"),
    ('Y', "110010000"),
    ('Z', "011010000"),
    ('-', "010000101"),
    ('.', "110000100"),
    (' ', "011000100"),
    ('$', "010101000"),
    ('/', "010100010"),
    ('+', "010001010"),
    ('%', "000101010"),
    ('*', "010010100"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BarcodeError {
    #[error("barcode payload is empty")]
    Empty,
    #[error("character {ch:?} at position {position} is not encodable in Code 39")]
    Unencodable { ch: char, position: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element {
    pub bar: bool,
    pub width: u8,
}

fn pattern(ch: char) -> Option<&'static str> {
    PATTERNS.iter().find(|(c, _)| *c == ch).map(|(_, p)| *p)
}

fn push_symbol(out: &mut Vec<Element>, pat: &str) {
    for (i, b) in pat.bytes().enumerate() {
        out.push(Element {
            bar: i % 2 == 0,
            width: if b == b'1' { WIDE } else { NARROW },
        });
    }
}

/// Check a payload without building the element list.
pub fn validate_code39(data: &str) -> Result<(), BarcodeError> {
    if data.is_empty() {
        return Err(BarcodeError::Empty);
    }
    for (position, ch) in data.chars().enumerate() {
        if ch == START_STOP || pattern(ch).is_none() {
            return Err(BarcodeError::Unencodable { ch, position });
        }
    }
    Ok(())
}

pub fn encode_code39(data: &str) -> Result<Vec<Element>, BarcodeError> {
    validate_code39(data)?;

    let symbols = std::iter::once(START_STOP)
        .chain(data.chars())
        .chain(std::iter::once(START_STOP));

    let mut out = Vec::with_capacity((data.len() + 2) * 10);
    for (i, ch) in symbols.enumerate() {
        if i > 0 {
            out.push(Element {
                bar: false,
                width: NARROW,
            });
        }
        // validated above; start/stop is in the table
        if let Some(pat) = pattern(ch) {
            push_symbol(&mut out, pat);
        }
    }
    Ok(out)
}

/// Total width in narrow modules.
pub fn module_width(elements: &[Element]) -> u32 {
    elements.iter().map(|e| u32::from(e.width)).sum()
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_has_three_wide_elements() {
        for (ch, p) in PATTERNS {
            assert_eq!(p.len(), 9, "{ch:?}");
            assert_eq!(p.bytes().filter(|b| *b == b'1').count(), 3, "{ch:?}");
        }
    }

    #[test]
    fn patterns_are_distinct() {
        for (i, (_, a)) in PATTERNS.iter().enumerate() {
            for (_, b) in &PATTERNS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn framed_width_matches_symbol_count() {
        let data = "US20250142735A1";
        let els = encode_code39(data).unwrap();
        let symbols = data.len() + 2;
        // 6 narrow + 3 wide per symbol, one narrow gap between symbols
        assert_eq!(module_width(&els) as usize, symbols * 15 + (symbols - 1));
        assert_eq!(els.len(), symbols * 9 + (symbols - 1));
    }

    #[test]
    fn starts_and_ends_with_bars() {
        let els = encode_code39("A").unwrap();
        assert!(els.first().unwrap().bar);
        assert!(els.last().unwrap().bar);
    }

    #[test]
    fn lowercase_is_rejected_with_position() {
        let err = encode_code39("US2025a").unwrap_err();
        assert_eq!(
            err,
            BarcodeError::Unencodable {
                ch: 'a',
                position: 6
            }
        );
    }

    #[test]
    fn asterisk_in_payload_is_rejected() {
        assert!(matches!(
            validate_code39("A*B"),
            Err(BarcodeError::Unencodable { ch: '*', .. })
        ));
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert_eq!(encode_code39(""), Err(BarcodeError::Empty));
    }
}
