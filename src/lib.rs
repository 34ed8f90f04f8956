pub mod api;
pub mod chord;
pub mod config;
pub mod error;
pub mod grammar;
pub mod key_signature;
pub mod pitch;
pub mod scale;

pub use api::*;
pub use chord::{Alteration, Chord, ChordQuality, QualityOrigin};
pub use config::{OutputFormat, Settings};
pub use error::*;
pub use pitch::{Letter, Pitch};
pub use scale::{major_scale, Scale};

/// Spell the tones of a chord symbol, e.g. `"Bbmin7"` -> `["Bb", "Db", "F", "Ab"]`.
/// This is the main entry point for the library.
pub fn spell(symbol: &str) -> Result<Vec<String>, ChordError> {
    let chord = try_parse_chord(symbol)?;
    Ok(chord.tones().iter().map(Pitch::render).collect())
}
