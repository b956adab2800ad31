//! Core note types for the notes-to-midi tools
//!
//! - **Fraction**: exact rational quarter-lengths
//! - **Pitch**: pitch+octave tokens (`C4`, `F#5`, `B-`) and their MIDI key numbers

pub mod fraction;
pub mod pitch;

pub use fraction::Fraction;
pub use pitch::{Letter, Pitch, PitchError, DEFAULT_OCTAVE};
