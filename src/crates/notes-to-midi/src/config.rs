use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::midi::MidiSettings;
use crate::player::PlayerConfig;

pub const DEFAULT_INPUT_PATH: &str = "notes.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "notes.midi";

/// Everything a conversion run needs. Built once at startup and passed down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source of note lines
    pub input_path: PathBuf,
    /// Destination for the generated MIDI file
    pub output_path: PathBuf,
    pub midi: MidiSettings,
    pub player: PlayerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            midi: MidiSettings::default(),
            player: PlayerConfig::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ConvertError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json).map_err(|e| ConvertError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
