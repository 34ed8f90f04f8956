//! # Chords
//!
//! A parsed chord symbol and the derivation of its tones.
//!
//! ## Types
//! - [`ChordQuality`] - Major, Minor, Diminished, Augmented, Dominant, Sus2, Sus4
//! - [`QualityOrigin`] - Whether the quality was written or inferred
//! - [`Alteration`] - One modifier: a scale degree plus an accidental delta
//! - [`Chord`] - Tonic, quality, and alterations in written order
//!
//! ## Tone Derivation
//! [`Chord::tones`] builds the tonic's major scale and fills a degree -> pitch
//! map, which is returned in ascending degree order:
//! 1. Seed the root, third, and fifth, adjusted for the quality
//!    (sus chords replace the third with the 2nd or 4th, dominant adds a flat 7th)
//! 2. Apply each alteration in written order; a later write to the same
//!    degree replaces the earlier one
//!
//! A bare 7 follows the quality: minor 7th on minor chords, diminished 7th on
//! diminished chords, and nothing extra on dominant chords, which already
//! carry their 7th.
//!
//! ## Example
//! ```rust
//! use chordsmith::parse_chord;
//!
//! let chord = parse_chord("Bbmin7").unwrap();
//! let tones: Vec<String> = chord.tones().iter().map(|p| p.render()).collect();
//! assert_eq!(tones, ["Bb", "Db", "F", "Ab"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChordError;
use crate::grammar;
use crate::pitch::Pitch;
use crate::scale::major_scale;

/// The chord's basic color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Dominant,
    Sus2,
    Sus4,
}

impl ChordQuality {
    /// Look up a written quality token, ignoring case.
    ///
    /// A bare `sus` is a suspended 4th.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "maj" | "major" => Some(ChordQuality::Major),
            "min" | "minor" | "-" => Some(ChordQuality::Minor),
            "dim" | "diminished" => Some(ChordQuality::Diminished),
            "aug" | "augmented" | "+" => Some(ChordQuality::Augmented),
            "dom" | "dominant" => Some(ChordQuality::Dominant),
            "sus2" => Some(ChordQuality::Sus2),
            "sus" | "sus4" => Some(ChordQuality::Sus4),
            _ => None,
        }
    }

    pub fn is_suspended(self) -> bool {
        matches!(self, ChordQuality::Sus2 | ChordQuality::Sus4)
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Augmented => "augmented",
            ChordQuality::Dominant => "dominant",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Sus4 => "sus4",
        };
        f.write_str(name)
    }
}

/// How the chord's quality was decided. Tone derivation ignores this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityOrigin {
    /// A quality token was written (`Cmaj`, `Cmin7`).
    Written,
    /// No token; taken from the tonic letter's case (`C` major, `c` minor).
    LetterCase,
    /// No token; an uppercase tonic followed by a bare 7 (`C7`).
    BareSeventh,
}

/// A single modifier: add or adjust one scale degree.
///
/// `delta` is a signed accidental count; 0 means the degree is added as the
/// quality spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alteration {
    pub degree: u8,
    pub delta: i32,
}

impl Alteration {
    pub fn new(degree: u8, delta: i32) -> Self {
        Self { degree, delta }
    }

    /// A numeral written without an accidental.
    pub fn is_bare(&self) -> bool {
        self.delta == 0
    }
}

impl fmt::Display for Alteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.degree, self.delta)
    }
}

/// A validated chord symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    tonic: Pitch,
    quality: ChordQuality,
    quality_origin: QualityOrigin,
    alterations: Vec<Alteration>,
}

impl Chord {
    pub fn new(tonic: Pitch, quality: ChordQuality, alterations: Vec<Alteration>) -> Self {
        Self {
            tonic,
            quality,
            quality_origin: QualityOrigin::Written,
            alterations,
        }
    }

    /// Parse a chord symbol, or `None` if the grammar rejects it.
    pub fn parse(symbol: &str) -> Option<Self> {
        let parts = grammar::decompose(symbol)?;
        let tonic: Pitch = parts.tonic.parse().ok()?;
        let alterations = grammar::scan_alterations(parts.modifiers.as_deref().unwrap_or(""));
        let (quality, quality_origin) =
            grammar::resolve_quality(&parts.tonic, parts.quality.as_deref(), &alterations);

        Some(Self {
            tonic,
            quality,
            quality_origin,
            alterations,
        })
    }

    pub fn tonic(&self) -> Pitch {
        self.tonic
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    pub fn quality_origin(&self) -> QualityOrigin {
        self.quality_origin
    }

    pub fn alterations(&self) -> &[Alteration] {
        &self.alterations
    }

    /// The chord's pitches in ascending scale-degree order.
    pub fn tones(&self) -> Vec<Pitch> {
        let scale = major_scale(&self.tonic);
        let mut tones: BTreeMap<u8, Pitch> = BTreeMap::new();

        tones.insert(1, scale.degree(1));

        if !self.quality.is_suspended() {
            let third = scale.degree(3);
            let third = match self.quality {
                ChordQuality::Minor | ChordQuality::Diminished => third.flatten(1),
                _ => third,
            };
            tones.insert(3, third);
        }

        let fifth = scale.degree(5);
        let fifth = match self.quality {
            ChordQuality::Diminished => fifth.flatten(1),
            ChordQuality::Augmented => fifth.sharpen(1),
            _ => fifth,
        };
        tones.insert(5, fifth);

        match self.quality {
            ChordQuality::Dominant => {
                tones.insert(7, scale.degree(7).flatten(1));
            }
            ChordQuality::Sus2 => {
                tones.insert(2, scale.degree(2));
            }
            ChordQuality::Sus4 => {
                tones.insert(4, scale.degree(4));
            }
            _ => {}
        }

        for alteration in &self.alterations {
            let target = scale.degree(alteration.degree);
            let target = if alteration.is_bare() && alteration.degree == 7 {
                match self.quality {
                    ChordQuality::Minor => target.flatten(1),
                    ChordQuality::Diminished => target.flatten(2),
                    // Already seeded
                    ChordQuality::Dominant => continue,
                    _ => target,
                }
            } else {
                // Measured from the major scale, so an altered 5th replaces the triad's fifth
                target.alter(alteration.delta)
            };
            tones.insert(alteration.degree, target);
        }

        let tones: Vec<Pitch> = tones.into_values().collect();
        log::debug!(
            "resolved {} {} {:?} -> {}",
            self.tonic,
            self.quality,
            self.alterations,
            render_list(&tones)
        );
        tones
    }
}

/// `[C, E, G]`
pub fn render_list(pitches: &[Pitch]) -> String {
    let names: Vec<String> = pitches.iter().map(Pitch::render).collect();
    format!("[{}]", names.join(", "))
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_list(&self.tones()))
    }
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s).ok_or_else(|| ChordError::InvalidSymbol(s.to_string()))
    }
}
