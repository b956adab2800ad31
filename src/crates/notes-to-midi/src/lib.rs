//! Note lines to MIDI converter library
//!
//! Decodes lines such as `C4Q` (pitch+octave token followed by a duration
//! code) into a [`Score`] and writes it as a Standard MIDI File.

pub mod config;
pub mod convert;
pub mod decoder;
pub mod duration;
pub mod encoder;
pub mod error;
pub mod midi;
pub mod player;
pub mod score;

// Re-export main types for convenience
pub use config::Config;
pub use convert::{convert, read_note_lines, Conversion};
pub use decoder::{decode_line, decode_lines, decode_str, Decoded};
pub use duration::{map_duration, DurationCode};
pub use encoder::{encode_event, encode_score};
pub use error::{ConvertError, DecodeWarning, EncodeError, PlaybackError, Result};
pub use midi::{MidiSettings, MidiWriter};
pub use player::{PlaybackLauncher, PlayerConfig};
pub use score::{NoteEvent, Score};
