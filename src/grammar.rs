//! # Chord Symbol Grammar
//!
//! Validates chord symbols and splits them into tonic, quality, and modifier text.
//!
//! ## Grammar
//! ```text
//! symbol     = tonic accidental quality? modifiers
//! tonic      = [A-G]                        (any ASCII case)
//! accidental = ("b"+ | "#"+)?               (lowercase b only, never mixed)
//! quality    = maj | major | min | minor | - | dim | diminished
//!            | aug | augmented | + | dom | dominant | sus | sus2 | sus4   (any ASCII case)
//! modifiers  = premod* postmod*
//! premod     = 6 | 7 | 9 | 11 | 13
//! postmod    = ("b"+ | "#"+) (5 | 7 | 9 | 11 | 13)
//! ```
//!
//! Whitespace is stripped before matching and may appear anywhere, even inside
//! a token (`"G # m i n"` is `G#min`). The match is anchored at both ends.
//!
//! ## Ambiguity
//! The symbol is matched as a whole, and when more than one split exists the
//! longest tonic accidental run that still lets the rest match wins:
//! - `Cb9` is C-flat with an added 9th, `C#7` is C-sharp dominant 7th
//! - `Cb5` is C with a flat 5th, since a bare `5` is not a premodifier
//!
//! ## Example
//! ```rust
//! use chordsmith::grammar::{decompose, is_valid_symbol};
//!
//! assert!(is_valid_symbol("F + 7 #11 b13"));
//! assert!(!is_valid_symbol("Gmaj7##9bb#13"));
//!
//! let parts = decompose("E b b Major7 #11").unwrap();
//! assert_eq!(parts.tonic, "Ebb");
//! assert_eq!(parts.quality.as_deref(), Some("Major"));
//! assert_eq!(parts.modifiers.as_deref(), Some("7#11"));
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::chord::{Alteration, ChordQuality, QualityOrigin};
use crate::pitch::accidental_delta;

pub const TONIC_PATTERN: &str = r"(?i-u:[A-G])";
pub const ACCIDENTAL_PATTERN: &str = r"(?:b+|#+)?";
pub const QUALITY_PATTERN: &str = r"(?i-u:maj|major|min|minor|-|dim|diminished|aug|augmented|\+|dom|dominant|sus|sus2|sus4)?";
pub const MODIFIER_PATTERN: &str = r"(?:6|7|9|11|13)*(?:(?:b+|#+)(?:5|7|9|11|13))*";

lazy_static! {
    static ref SYMBOL_RE: Regex = Regex::new(&format!(
        r"^({}{})({})({})$",
        TONIC_PATTERN, ACCIDENTAL_PATTERN, QUALITY_PATTERN, MODIFIER_PATTERN
    ))
    .expect("symbol pattern is a valid regex");
    static ref MODIFIER_TOKEN_RE: Regex =
        Regex::new(r"(b+|#+)?(13|11|5|6|7|9)").expect("modifier token pattern is a valid regex");
}

/// The three substrings of a valid symbol, whitespace removed, case preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolParts {
    pub tonic: String,
    pub quality: Option<String>,
    pub modifiers: Option<String>,
}

pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn is_valid_symbol(text: &str) -> bool {
    SYMBOL_RE.is_match(&strip_whitespace(text))
}

/// Split a symbol into its parts, or `None` if it is not a legal symbol.
pub fn decompose(text: &str) -> Option<SymbolParts> {
    let stripped = strip_whitespace(text);
    let Some(caps) = SYMBOL_RE.captures(&stripped) else {
        log::debug!("rejected chord symbol '{}'", text);
        return None;
    };

    let non_empty = |i: usize| {
        caps.get(i)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Some(SymbolParts {
        tonic: caps[1].to_string(),
        quality: non_empty(2),
        modifiers: non_empty(3),
    })
}

pub fn symbol_tonic(text: &str) -> Option<String> {
    decompose(text).map(|parts| parts.tonic)
}

pub fn symbol_quality(text: &str) -> Option<String> {
    decompose(text).and_then(|parts| parts.quality)
}

pub fn symbol_modifiers(text: &str) -> Option<String> {
    decompose(text).and_then(|parts| parts.modifiers)
}

/// Alterations of a symbol in written order; empty when it has no modifiers.
pub fn symbol_alterations(text: &str) -> Option<Vec<Alteration>> {
    decompose(text).map(|parts| scan_alterations(parts.modifiers.as_deref().unwrap_or("")))
}

/// Read every `accidentals? numeral` occurrence of a modifier string in order.
///
/// Expects text already accepted by [`MODIFIER_PATTERN`].
pub fn scan_alterations(modifiers: &str) -> Vec<Alteration> {
    MODIFIER_TOKEN_RE
        .captures_iter(modifiers)
        .filter_map(|caps| {
            let delta = caps.get(1).map_or(0, |m| accidental_delta(m.as_str()));
            let degree = caps[2].parse::<u8>().ok()?;
            Some(Alteration::new(degree, delta))
        })
        .collect()
}

/// Decide the chord quality from the written token, the tonic's case, and
/// the alterations.
///
/// An unknown or missing token falls back to the tonic letter's case:
/// uppercase is Major, lowercase is Minor. An uppercase tonic whose first
/// alteration is a bare 7 (`C7`, `G7b9`) is Dominant.
pub fn resolve_quality(
    tonic: &str,
    quality: Option<&str>,
    alterations: &[Alteration],
) -> (ChordQuality, QualityOrigin) {
    if let Some(quality) = quality.and_then(ChordQuality::from_token) {
        return (quality, QualityOrigin::Written);
    }

    let uppercase = tonic.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    if !uppercase {
        return (ChordQuality::Minor, QualityOrigin::LetterCase);
    }

    match alterations.first() {
        Some(first) if first.is_bare() && first.degree == 7 => {
            (ChordQuality::Dominant, QualityOrigin::BareSeventh)
        }
        _ => (ChordQuality::Major, QualityOrigin::LetterCase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_symbol_is_invalid() {
        assert!(!is_valid_symbol(""));
        assert!(!is_valid_symbol("   "));
        assert_eq!(decompose(""), None);
    }

    #[test]
    fn test_bare_tonics() {
        for tonic in ["A", "B", "C", "D", "E", "F", "G", "a", "f"] {
            assert!(is_valid_symbol(tonic), "'{}' should be valid", tonic);
        }
        for symbol in ["Abbb", "A###", "Ab", "A#"] {
            assert!(is_valid_symbol(symbol), "'{}' should be valid", symbol);
        }
    }

    #[test]
    fn test_every_quality_token() {
        for quality in [
            "maj", "major", "min", "minor", "-", "dim", "diminished", "aug", "augmented", "+",
            "dom", "dominant", "sus", "sus2", "sus4",
        ] {
            let symbol = format!("A{}", quality);
            assert!(is_valid_symbol(&symbol), "'{}' should be valid", symbol);
        }
    }

    #[test]
    fn test_premodifiers_and_postmodifiers() {
        for premod in ["6", "7", "9", "11", "13"] {
            let symbol = format!("A{}", premod);
            assert!(is_valid_symbol(&symbol), "'{}' should be valid", symbol);
        }
        for postmod in ["5", "7", "9", "11", "13"] {
            let symbol = format!("Amaj#{}", postmod);
            assert!(is_valid_symbol(&symbol), "'{}' should be valid", symbol);
        }
    }

    #[test]
    fn test_must_start_with_single_tonic() {
        for symbol in ["1A", "Hmajor", "min7", "AAmaj", "AminB", "CBdim", "AB"] {
            assert!(!is_valid_symbol(symbol), "'{}' should be invalid", symbol);
        }
    }

    #[test]
    fn test_whitespace_anywhere() {
        for symbol in ["C major", "G # m i n", "A-7 b5", " Bb min 7 "] {
            assert!(is_valid_symbol(symbol), "'{}' should be valid", symbol);
        }
        assert_eq!(decompose("C major"), decompose("Cmajor"));
    }

    #[test]
    fn test_mixed_accidentals_rejected() {
        for symbol in [
            "Ab#", "E##b", "Cbb#", "Bmin7b5#b9", "Daugbb#7", "Gmaj7##9bb#13",
        ] {
            assert!(!is_valid_symbol(symbol), "'{}' should be invalid", symbol);
        }
    }

    #[test]
    fn test_case_rules() {
        for symbol in ["amin7", "Bmaj6", "aMiNoR7", "BMAJ", "fbdIm", "CSUS4"] {
            assert!(is_valid_symbol(symbol), "'{}' should be valid", symbol);
        }
        for symbol in ["ABminor", "BB6", "Db7b5#9B13"] {
            assert!(!is_valid_symbol(symbol), "'{}' should be invalid", symbol);
        }
    }

    #[test]
    fn test_out_of_range_numerals() {
        for symbol in ["G monir", "F#minormajor", "Emin0", "Dbbdimb10", "C3", "Bmaj7sharp11"] {
            assert!(!is_valid_symbol(symbol), "'{}' should be invalid", symbol);
        }
        for symbol in ["A major", "B-7b5", "Dbbbdim7", "C#6b9b13", "E", "F + 7 #11 b13", "gmin", "C#5"] {
            assert!(is_valid_symbol(symbol), "'{}' should be valid", symbol);
        }
    }

    #[test]
    fn test_tonic_substrings() {
        assert_eq!(symbol_tonic("Amaj").as_deref(), Some("A"));
        assert_eq!(symbol_tonic("B bmin").as_deref(), Some("Bb"));
        assert_eq!(symbol_tonic("D###").as_deref(), Some("D###"));
        assert_eq!(symbol_tonic("E b b Major7 #11").as_deref(), Some("Ebb"));
        assert_eq!(symbol_tonic("fmin11").as_deref(), Some("f"));
        assert_eq!(symbol_tonic("badchord"), None);
    }

    #[test]
    fn test_quality_substrings() {
        assert_eq!(symbol_quality("Cdim7b5").as_deref(), Some("dim"));
        assert_eq!(symbol_quality("Ebb Ma j or7 #11").as_deref(), Some("Major"));
        assert_eq!(symbol_quality("G-6").as_deref(), Some("-"));
        assert_eq!(symbol_quality("a+7#11").as_deref(), Some("+"));
        assert_eq!(symbol_quality("Csus2").as_deref(), Some("sus2"));
        assert_eq!(symbol_quality("C"), None);
    }

    #[test]
    fn test_modifier_substrings() {
        assert_eq!(symbol_modifiers("Amaj"), None);
        assert_eq!(symbol_modifiers("Bbmin7").as_deref(), Some("7"));
        assert_eq!(symbol_modifiers("Daug b9 #11").as_deref(), Some("b9#11"));
        assert_eq!(symbol_modifiers("G-6").as_deref(), Some("6"));
    }

    #[test]
    fn test_accidental_split_prefers_longest_tonic_run() {
        let parts = decompose("Cb9").unwrap();
        assert_eq!(parts.tonic, "Cb");
        assert_eq!(parts.modifiers.as_deref(), Some("9"));

        let parts = decompose("Cb5").unwrap();
        assert_eq!(parts.tonic, "C");
        assert_eq!(parts.modifiers.as_deref(), Some("b5"));

        let parts = decompose("C#9").unwrap();
        assert_eq!(parts.tonic, "C#");
        assert_eq!(parts.modifiers.as_deref(), Some("9"));

        let parts = decompose("F#7b9").unwrap();
        assert_eq!(parts.tonic, "F#");
        assert_eq!(parts.modifiers.as_deref(), Some("7b9"));

        let parts = decompose("C#5").unwrap();
        assert_eq!(parts.tonic, "C");
        assert_eq!(parts.modifiers.as_deref(), Some("#5"));
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        for symbol in ["C\u{17F}us4", "C\u{17F}us2", "C\u{17F}us"] {
            assert!(!is_valid_symbol(symbol), "'{}' should be invalid", symbol);
            assert_eq!(decompose(symbol), None);
        }
        assert!(is_valid_symbol("CSUS4"));
        assert!(is_valid_symbol("cSus2"));
    }

    #[test]
    fn test_scan_alterations() {
        assert_eq!(
            scan_alterations("7b5##9"),
            vec![Alteration::new(7, 0), Alteration::new(5, -1), Alteration::new(9, 2)]
        );
        assert_eq!(
            scan_alterations("6711"),
            vec![Alteration::new(6, 0), Alteration::new(7, 0), Alteration::new(11, 0)]
        );
        assert!(scan_alterations("").is_empty());
        assert_eq!(symbol_alterations("C"), Some(vec![]));
        assert_eq!(symbol_alterations("Cmaj7sharp11"), None);
    }

    #[test]
    fn test_resolve_quality() {
        assert_eq!(
            resolve_quality("C", Some("MIN"), &[]),
            (ChordQuality::Minor, QualityOrigin::Written)
        );
        assert_eq!(
            resolve_quality("C", None, &[]),
            (ChordQuality::Major, QualityOrigin::LetterCase)
        );
        assert_eq!(
            resolve_quality("c", None, &[]),
            (ChordQuality::Minor, QualityOrigin::LetterCase)
        );
        assert_eq!(
            resolve_quality("C#", None, &[Alteration::new(7, 0)]),
            (ChordQuality::Dominant, QualityOrigin::BareSeventh)
        );
        assert_eq!(
            resolve_quality("c", None, &[Alteration::new(7, 0)]),
            (ChordQuality::Minor, QualityOrigin::LetterCase)
        );
        assert_eq!(
            resolve_quality("C", None, &[Alteration::new(6, 0), Alteration::new(7, 0)]),
            (ChordQuality::Major, QualityOrigin::LetterCase)
        );
    }
}
