use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::decoder::decode_str;
use crate::error::{ConvertError, DecodeWarning, Result};
use crate::midi::MidiWriter;

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub notes: usize,
    pub warnings: Vec<DecodeWarning>,
    pub output_path: PathBuf,
}

/// Read the whole note file. The handle is closed before this returns.
pub fn read_note_lines(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| ConvertError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(text)
}

/// Read, decode and write one note file as configured.
///
/// Nothing is written when the input is missing or any line fails to decode.
pub fn convert(config: &Config) -> Result<Conversion> {
    let writer = MidiWriter::new(config.midi.clone())?;

    log::info!("Reading notes from {}", config.input_path.display());
    let text = read_note_lines(&config.input_path)?;
    log::debug!("Lines: {:?}", text.lines().collect::<Vec<_>>());

    let decoded = decode_str(&text)?;
    for warning in &decoded.warnings {
        log::warn!("{}", warning);
    }

    writer.write_file(&decoded.score, &config.output_path)?;
    log::info!(
        "Wrote {} note(s), {} quarter(s) long, to {}",
        decoded.score.len(),
        decoded.score.total_quarter_length(),
        config.output_path.display()
    );

    Ok(Conversion {
        notes: decoded.score.len(),
        warnings: decoded.warnings,
        output_path: config.output_path.clone(),
    })
}
