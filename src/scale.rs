//! # Major Scale Construction
//!
//! Builds the seven-note major scale on any spelled tonic.
//!
//! ## Algorithm
//! 1. Rotate the natural letters so the tonic's letter comes first (the skeleton)
//! 2. Look up the key signature for the tonic's *letter*, ignoring its accidentals
//! 3. Apply that signature's sharps or flats one at a time in circle-of-fifths order
//! 4. Shift every degree by the tonic's own accidental count
//!
//! Step 4 is what spells altered tonics correctly: the scale on `Db` is the
//! scale on `D` with every degree lowered once, and `D##` raises every degree
//! of the `D` scale twice.
//!
//! ## Example
//! ```rust
//! use chordsmith::{major_scale, Pitch};
//!
//! let tonic: Pitch = "F".parse()?;
//! let rendered: Vec<String> = major_scale(&tonic).iter().map(|p| p.render()).collect();
//! assert_eq!(rendered, ["F", "G", "A", "Bb", "C", "D", "E"]);
//! # Ok::<(), chordsmith::ChordError>(())
//! ```

use serde::Serialize;

use crate::key_signature;
use crate::pitch::{Letter, Pitch};

/// Number of degrees in a diatonic scale.
pub const DEGREES: usize = 7;

/// A seven-note major scale, degree 1 first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scale {
    pitches: [Pitch; DEGREES],
}

impl Scale {
    /// The pitch at a 1-indexed scale degree.
    ///
    /// Degrees past 7 wrap to their base-octave counterpart (9 -> 2, 11 -> 4,
    /// 13 -> 6). Degree 0 is treated as degree 7.
    pub fn degree(&self, degree: u8) -> Pitch {
        let position = (degree as usize + DEGREES - 1) % DEGREES;
        self.pitches[position]
    }

    pub fn tonic(&self) -> Pitch {
        self.pitches[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pitch> {
        self.pitches.iter()
    }
}

/// The natural letters rotated to start at `letter`.
pub fn skeleton(letter: Letter) -> [Letter; DEGREES] {
    let mut letters = Letter::ALL;
    letters.rotate_left(letter.index());
    letters
}

/// Build the major scale on `tonic`.
pub fn major_scale(tonic: &Pitch) -> Scale {
    let mut pitches = skeleton(tonic.letter).map(Pitch::natural);

    let key = key_signature::entry_for(tonic.letter);
    for target in key.targets() {
        // One octave holds each letter once
        if let Some(slot) = pitches.iter_mut().find(|p| p.letter == target) {
            *slot = slot.alter(key.direction());
        }
    }

    if tonic.accidentals != 0 {
        pitches = pitches.map(|p| p.alter(tonic.accidentals));
    }

    log::trace!(
        "major scale on {}: {}",
        tonic,
        pitches.iter().map(Pitch::render).collect::<Vec<_>>().join(" ")
    );

    Scale { pitches }
}
