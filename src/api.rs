//! # Public API
//!
//! This module contains the main entry points for the chordsmith library.
//!
//! ## Functions
//!
//! - [`is_valid_symbol()`] - Grammar check only
//! - [`parse_chord()`] - Parse a symbol, `None` if invalid
//! - [`try_parse_chord()`] - Same, as a `Result` for `?` callers
//! - [`chord_tones()`] - Parse and spell in one step
//! - [`chord_report()`] - Serializable summary of a symbol
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordsmith::parse_chord;
//!
//! let chord = parse_chord("C#sus2").expect("valid symbol");
//! let names: Vec<String> = chord.tones().iter().map(|p| p.render()).collect();
//! assert_eq!(names, ["C#", "D#", "G#"]);
//! ```

use serde::Serialize;

use crate::{grammar, Alteration, Chord, ChordError, ChordQuality, Pitch, QualityOrigin};

/// Whether `text` is a legal chord symbol. Whitespace is ignored.
pub fn is_valid_symbol(text: &str) -> bool {
    grammar::is_valid_symbol(text)
}

/// Parse a chord symbol.
///
/// Every kind of grammar failure (bad letter, mixed accidentals, unsupported
/// numeral, extra tonic) is reported the same way, as `None`.
///
/// # Example
/// ```rust
/// use chordsmith::parse_chord;
///
/// assert!(parse_chord("Dbbbdim7").is_some());
/// assert!(parse_chord("Emin0").is_none());
/// ```
pub fn parse_chord(text: &str) -> Option<Chord> {
    Chord::parse(text)
}

/// Parse a chord symbol, reporting failure as [`ChordError::InvalidSymbol`].
pub fn try_parse_chord(text: &str) -> Result<Chord, ChordError> {
    text.parse()
}

/// Tones of a chord symbol, or `None` if the symbol is invalid.
pub fn chord_tones(text: &str) -> Option<Vec<Pitch>> {
    parse_chord(text).map(|chord| chord.tones())
}

/// Everything known about a parsed symbol, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordReport {
    pub symbol: String,
    pub tonic: Pitch,
    pub quality: ChordQuality,
    pub quality_origin: QualityOrigin,
    pub alterations: Vec<Alteration>,
    pub tones: Vec<Pitch>,
}

impl ChordReport {
    pub fn new(symbol: &str, chord: &Chord) -> Self {
        Self {
            symbol: symbol.to_string(),
            tonic: chord.tonic(),
            quality: chord.quality(),
            quality_origin: chord.quality_origin(),
            alterations: chord.alterations().to_vec(),
            tones: chord.tones(),
        }
    }

    /// Tones rendered as text, e.g. `["C", "E", "G"]`.
    pub fn tone_names(&self) -> Vec<String> {
        self.tones.iter().map(Pitch::render).collect()
    }
}

/// Parse `text` and summarize it.
///
/// # Example
/// ```rust
/// use chordsmith::chord_report;
///
/// let report = chord_report("G7").unwrap();
/// assert_eq!(report.tone_names(), ["G", "B", "D", "F"]);
///
/// let json = serde_json::to_value(&report).unwrap();
/// assert_eq!(json["quality"], "dominant");
/// assert_eq!(json["qualityOrigin"], "bare-seventh");
/// assert_eq!(json["tones"][3], "F");
/// ```
pub fn chord_report(text: &str) -> Option<ChordReport> {
    parse_chord(text).map(|chord| ChordReport::new(text, &chord))
}
