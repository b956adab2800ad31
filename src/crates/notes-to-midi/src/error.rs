use std::path::PathBuf;
use thiserror::Error;

use note_core::{Fraction, PitchError};

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File {} not found!", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected a pitch token and a duration code, found {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Line {line}: invalid pitch '{token}': {source}")]
    InvalidPitch {
        line: usize,
        token: String,
        #[source]
        source: PitchError,
    },

    #[error("Line {line}: note is too long to encode as a MIDI delta time")]
    DurationOverflow { line: usize },

    #[error("Failed to encode MIDI data")]
    Encode(#[source] std::io::Error),

    #[error("Invalid MIDI setting: {0}")]
    Settings(String),

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

/// Non-fatal problems found while decoding. Decoding continues with a fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    #[error("Line {line}: unexpected duration {code:?}, using a quarter note")]
    UnknownDuration { line: usize, code: char },
}

/// Events that cannot be written back as note lines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Line {line}: pitch token '{token}' is not two characters")]
    PitchToken { line: usize, token: String },

    #[error("Line {line}: no duration code for a length of {quarter_length} quarter(s)")]
    Duration {
        line: usize,
        quarter_length: Fraction,
    },
}

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Failed to launch player '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No player command configured")]
    NoCommand,
}
