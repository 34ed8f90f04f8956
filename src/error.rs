//! # Error Types
//!
//! This module defines all error types for the chordsmith library and CLI.
//!
//! The chord core reports a bad symbol as plain absence (`None`). These errors
//! exist for callers that prefer `?`: the `Result`-returning wrappers fold that
//! absence into [`ChordError::InvalidSymbol`] without distinguishing why the
//! grammar rejected the text.
//!
//! ## Error Types
//! - `InvalidSymbol` - The chord symbol does not match the grammar
//! - `InvalidPitch` - A pitch-only string (letter plus accidentals) is malformed
//! - `ConfigError` - Settings YAML could not be read or parsed
//! - `Io` - Reading input or writing output failed
//!
//! ## Usage
//! ```rust
//! use chordsmith::{try_parse_chord, ChordError};
//!
//! match try_parse_chord("Hmaj7") {
//!     Ok(chord) => println!("{}", chord),
//!     Err(ChordError::InvalidSymbol(symbol)) => {
//!         eprintln!("Invalid chord symbol detected!: '{}'", symbol);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    /// The text is not a legal chord symbol.
    ///
    /// # Example
    /// ```
    /// # use chordsmith::ChordError;
    /// let err = ChordError::InvalidSymbol("Ab#".to_string());
    /// assert_eq!(err.to_string(), "Invalid chord symbol: 'Ab#'");
    /// ```
    #[error("Invalid chord symbol: '{0}'")]
    InvalidSymbol(String),

    /// The text is not a single spelled note.
    ///
    /// # Example
    /// ```
    /// # use chordsmith::ChordError;
    /// let err = ChordError::InvalidPitch("H#".to_string());
    /// assert_eq!(err.to_string(), "Invalid pitch: 'H#'");
    /// ```
    #[error("Invalid pitch: '{0}'")]
    InvalidPitch(String),

    /// Settings could not be loaded.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
