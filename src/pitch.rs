//! # Spelled Pitches
//!
//! A [`Pitch`] is a letter name plus a signed accidental count. Positive counts
//! are sharps, negative counts are flats, zero is natural. There is no octave.
//!
//! Pitches are plain `Copy` values. [`Pitch::flatten`] and [`Pitch::sharpen`]
//! return a new pitch and leave the receiver untouched, so a scale degree can
//! be handed to several chord slots without one alteration leaking into another.
//!
//! ## Rendering
//! - `C` natural renders as `"C"`
//! - two sharps render as `"C##"`
//! - three flats render as `"Cbbb"`
//!
//! The rendered letter is always uppercase.
//!
//! ## Example
//! ```rust
//! use chordsmith::{Letter, Pitch};
//!
//! let b_flat: Pitch = "Bb".parse()?;
//! assert_eq!(b_flat, Pitch::new(Letter::B, -1));
//! assert_eq!(b_flat.sharpen(2).render(), "B#");
//! assert_eq!(b_flat.render(), "Bb");
//! # Ok::<(), chordsmith::ChordError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::ChordError;
use crate::grammar::{self, ACCIDENTAL_PATTERN, TONIC_PATTERN};

pub const FLAT_CHAR: char = 'b';
pub const SHARP_CHAR: char = '#';

lazy_static! {
    static ref PITCH_RE: Regex = Regex::new(&format!(
        r"^({}){}$",
        TONIC_PATTERN, ACCIDENTAL_PATTERN
    ))
    .expect("pitch pattern is a valid regex");
}

/// The seven natural letter names, in alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    /// Case-insensitive lookup from a single character.
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }

    /// Position within [`Letter::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A spelled note: letter plus signed accidental count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub letter: Letter,
    pub accidentals: i32,
}

impl Pitch {
    pub fn new(letter: Letter, accidentals: i32) -> Self {
        Self {
            letter,
            accidentals,
        }
    }

    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, 0)
    }

    /// Lower by `|n|` semitones, keeping the letter.
    pub fn flatten(self, n: i32) -> Self {
        Self::new(self.letter, self.accidentals.saturating_sub(n.saturating_abs()))
    }

    /// Raise by `|n|` semitones, keeping the letter.
    pub fn sharpen(self, n: i32) -> Self {
        Self::new(self.letter, self.accidentals.saturating_add(n.saturating_abs()))
    }

    /// Shift by a signed accidental delta (negative flattens).
    pub fn alter(self, delta: i32) -> Self {
        Self::new(self.letter, self.accidentals.saturating_add(delta))
    }

    /// Canonical text: uppercase letter followed by the accidental run.
    pub fn render(&self) -> String {
        let accidental = if self.accidentals < 0 {
            FLAT_CHAR
        } else {
            SHARP_CHAR
        };
        let mut out = String::with_capacity(1 + self.accidentals.unsigned_abs() as usize);
        out.push(self.letter.as_char());
        for _ in 0..self.accidentals.unsigned_abs() {
            out.push(accidental);
        }
        out
    }

    /// Whether `text` is exactly one letter plus a single-kind accidental run.
    pub fn is_valid_symbol(text: &str) -> bool {
        PITCH_RE.is_match(&grammar::strip_whitespace(text))
    }
}

/// Signed accidental count of a run such as `"bb"` (-2) or `"#"` (+1).
///
/// Callers pass runs the grammar already accepted, so a run never mixes kinds.
pub(crate) fn accidental_delta(run: &str) -> i32 {
    let count = i32::try_from(run.chars().count()).unwrap_or(i32::MAX);
    if run.contains(FLAT_CHAR) {
        -count
    } else {
        count
    }
}

impl FromStr for Pitch {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = grammar::strip_whitespace(s);
        let caps = PITCH_RE
            .captures(&stripped)
            .ok_or_else(|| ChordError::InvalidPitch(s.to_string()))?;

        let letter = caps[1]
            .chars()
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| ChordError::InvalidPitch(s.to_string()))?;
        let run = &stripped[caps[1].len()..];

        Ok(Pitch::new(letter, accidental_delta(run)))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}
