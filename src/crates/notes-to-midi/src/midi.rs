use midly::num::{u15, u24, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use note_core::Pitch;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::score::Score;

/// 120 BPM
pub const TEMPO_MICROS_PER_QUARTER: u32 = 500_000;

const MAX_DELTA: u32 = 0x0FFF_FFFF;

/// Settings for the generated MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MidiSettings {
    pub ticks_per_quarter: u16,
    pub velocity: u8,
    /// Zero-based MIDI channel (0-15)
    pub channel: u8,
    /// General MIDI program; no program change is emitted when unset
    pub program: Option<u8>,
    pub track_name: Option<String>,
}

impl Default for MidiSettings {
    fn default() -> Self {
        Self {
            ticks_per_quarter: 480,
            velocity: 90,
            channel: 0,
            program: None,
            track_name: None,
        }
    }
}

impl MidiSettings {
    pub fn validate(&self) -> Result<()> {
        if self.ticks_per_quarter == 0 || self.ticks_per_quarter > 0x7FFF {
            return Err(ConvertError::Settings(format!(
                "ticks per quarter must be between 1 and 32767, got {}",
                self.ticks_per_quarter
            )));
        }
        if self.velocity == 0 || self.velocity > 127 {
            return Err(ConvertError::Settings(format!(
                "velocity must be between 1 and 127, got {}",
                self.velocity
            )));
        }
        if self.channel > 15 {
            return Err(ConvertError::Settings(format!(
                "channel must be at most 15, got {}",
                self.channel
            )));
        }
        if let Some(program) = self.program {
            if program > 127 {
                return Err(ConvertError::Settings(format!(
                    "program must be at most 127, got {}",
                    program
                )));
            }
        }
        Ok(())
    }
}

/// Serializes a [`Score`] as a single-track Standard MIDI File
pub struct MidiWriter {
    settings: MidiSettings,
}

impl MidiWriter {
    pub fn new(settings: MidiSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Encode the score. Fails without output on the first invalid pitch token.
    pub fn to_bytes(&self, score: &Score) -> Result<Vec<u8>> {
        let ticks_per_quarter = self.settings.ticks_per_quarter;
        let channel = u4::new(self.settings.channel);
        let velocity = u7::new(self.settings.velocity);

        let header = Header::new(Format::SingleTrack, Timing::Metrical(u15::new(ticks_per_quarter)));
        let mut smf = Smf::new(header);
        let mut track = Vec::with_capacity(score.len() * 2 + 5);

        if let Some(name) = &self.settings.track_name {
            track.push(meta(MetaMessage::TrackName(name.as_bytes())));
        }
        track.push(meta(MetaMessage::Tempo(u24::new(TEMPO_MICROS_PER_QUARTER))));
        track.push(meta(MetaMessage::TimeSignature(4, 2, 24, 8)));
        if let Some(program) = self.settings.program {
            track.push(TrackEvent {
                delta: u28::new(0),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::ProgramChange {
                        program: u7::new(program),
                    },
                },
            });
        }

        for event in score {
            let pitch = Pitch::parse(&event.pitch).map_err(|source| ConvertError::InvalidPitch {
                line: event.line,
                token: event.pitch.clone(),
                source,
            })?;
            let ticks = event
                .quarter_length
                .to_ticks(ticks_per_quarter as u32)
                .filter(|&ticks| ticks <= MAX_DELTA)
                .ok_or(ConvertError::DurationOverflow { line: event.line })?;
            let key = u7::new(pitch.midi_key());

            track.push(TrackEvent {
                delta: u28::new(0),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOn { key, vel: velocity },
                },
            });
            track.push(TrackEvent {
                delta: u28::new(ticks),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOff {
                        key,
                        vel: u7::new(0),
                    },
                },
            });
        }

        track.push(meta(MetaMessage::EndOfTrack));
        smf.tracks.push(track);

        let mut bytes = Vec::new();
        smf.write_std(&mut bytes).map_err(ConvertError::Encode)?;
        Ok(bytes)
    }

    /// Encode the score and write it to `path`, replacing any existing file
    pub fn write_file(&self, score: &Score, path: &Path) -> Result<()> {
        let bytes = self.to_bytes(score)?;
        std::fs::write(path, bytes).map_err(|source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Wrote {} note(s) to {}", score.len(), path.display());
        Ok(())
    }
}

fn meta(message: MetaMessage<'_>) -> TrackEvent<'_> {
    TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(message),
    }
}
