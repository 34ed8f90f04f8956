//! Key signatures of the seven natural-letter major scales.
//!
//! The table is a `const`, read-only for the life of the process.
//! Order of flats: B E A D G C F. Order of sharps: F C G D A E B.

use serde::Serialize;

use crate::pitch::Letter;

/// Which accidental a key signature uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyType {
    Flat,
    Sharp,
    Natural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeySignatureEntry {
    pub letter: Letter,
    pub key_type: KeyType,
    pub accidental_count: u8,
}

pub const ORDER_OF_FLATS: [Letter; 7] = [
    Letter::B,
    Letter::E,
    Letter::A,
    Letter::D,
    Letter::G,
    Letter::C,
    Letter::F,
];

/// Indexed by [`Letter::index`].
pub const FOUNDATION_KEYS: [KeySignatureEntry; 7] = [
    KeySignatureEntry { letter: Letter::A, key_type: KeyType::Sharp, accidental_count: 3 },
    KeySignatureEntry { letter: Letter::B, key_type: KeyType::Sharp, accidental_count: 5 },
    KeySignatureEntry { letter: Letter::C, key_type: KeyType::Natural, accidental_count: 0 },
    KeySignatureEntry { letter: Letter::D, key_type: KeyType::Sharp, accidental_count: 2 },
    KeySignatureEntry { letter: Letter::E, key_type: KeyType::Sharp, accidental_count: 4 },
    KeySignatureEntry { letter: Letter::F, key_type: KeyType::Flat, accidental_count: 1 },
    KeySignatureEntry { letter: Letter::G, key_type: KeyType::Sharp, accidental_count: 1 },
];

/// Key signature of the major scale on the natural `letter`.
pub fn entry_for(letter: Letter) -> &'static KeySignatureEntry {
    &FOUNDATION_KEYS[letter.index()]
}

impl KeySignatureEntry {
    /// The `step`-th letter to receive an accidental, wrapping past seven.
    ///
    /// The order of sharps is the order of flats reversed.
    pub fn target(&self, step: usize) -> Letter {
        let i = step % ORDER_OF_FLATS.len();
        match self.key_type {
            KeyType::Flat => ORDER_OF_FLATS[i],
            KeyType::Sharp | KeyType::Natural => ORDER_OF_FLATS[ORDER_OF_FLATS.len() - 1 - i],
        }
    }

    /// Letters that carry an accidental in this key, in the order they are added.
    pub fn targets(&self) -> impl Iterator<Item = Letter> + '_ {
        (0..self.accidental_count as usize).map(move |step| self.target(step))
    }

    /// +1 for sharp keys, -1 for flat keys, 0 for C.
    pub fn direction(&self) -> i32 {
        match self.key_type {
            KeyType::Flat => -1,
            KeyType::Sharp => 1,
            KeyType::Natural => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_letter() {
        for letter in Letter::ALL {
            assert_eq!(entry_for(letter).letter, letter);
        }
    }

    #[test]
    fn test_sharp_order_is_reversed_flat_order() {
        let e = entry_for(Letter::E);
        let sharps: Vec<Letter> = e.targets().collect();
        assert_eq!(sharps, vec![Letter::F, Letter::C, Letter::G, Letter::D]);

        let f = entry_for(Letter::F);
        assert_eq!(f.targets().collect::<Vec<_>>(), vec![Letter::B]);
        assert_eq!(f.direction(), -1);
    }

    #[test]
    fn test_target_wraps_past_seven() {
        let b = entry_for(Letter::B);
        assert_eq!(b.target(7), b.target(0));
        assert_eq!(b.target(9), Letter::G);
    }

    #[test]
    fn test_c_has_no_accidentals() {
        let c = entry_for(Letter::C);
        assert_eq!(c.targets().count(), 0);
        assert_eq!(c.direction(), 0);
    }
}
