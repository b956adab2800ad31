//! Decoding of note lines.
//!
//! Each line holds a two-character pitch+octave token followed by a duration
//! code, e.g. `C4Q` or `G5E`. Anything after the third character is ignored.

use note_core::Fraction;

use crate::duration::DurationCode;
use crate::error::{ConvertError, DecodeWarning, Result};
use crate::score::{NoteEvent, Score};

const PITCH_CHARS: usize = 2;

/// Result of decoding a whole input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub score: Score,
    pub warnings: Vec<DecodeWarning>,
}

/// Decode one line. `line_number` is 1-based and only used for diagnostics.
pub fn decode_line(line_number: usize, line: &str) -> Result<(NoteEvent, Option<DecodeWarning>)> {
    let mut chars = line.chars();
    let pitch: String = chars.by_ref().take(PITCH_CHARS).collect();

    let code = match chars.next() {
        Some(code) if pitch.chars().count() == PITCH_CHARS => code,
        _ => {
            return Err(ConvertError::MalformedLine {
                line: line_number,
                content: line.to_string(),
            })
        }
    };

    // The caller logs the warning with its line number
    let (quarter_length, warning) = match DurationCode::from_char(code) {
        Some(duration) => (duration.quarter_length(), None),
        None => (
            Fraction::one(),
            Some(DecodeWarning::UnknownDuration {
                line: line_number,
                code,
            }),
        ),
    };

    Ok((NoteEvent::new(line_number, pitch, quarter_length), warning))
}

/// Decode every line in order. Lines are neither skipped nor reordered.
pub fn decode_lines<I, S>(lines: I) -> Result<Decoded>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut decoded = Decoded::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let (event, warning) = decode_line(idx + 1, line.as_ref())?;
        decoded.score.push(event);
        decoded.warnings.extend(warning);
    }

    Ok(decoded)
}

/// Decode the full text of a note file
pub fn decode_str(text: &str) -> Result<Decoded> {
    decode_lines(text.lines())
}
