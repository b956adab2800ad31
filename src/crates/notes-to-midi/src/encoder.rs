//! Writing scores back out as note lines.
//!
//! This is the format produced by the sheet reader: one `<letter><octave><code>`
//! line per note, each terminated by a newline.

use crate::duration::DurationCode;
use crate::error::EncodeError;
use crate::score::{NoteEvent, Score};

/// Encode one event as a line without its terminator
pub fn encode_event(event: &NoteEvent) -> Result<String, EncodeError> {
    if event.pitch.chars().count() != 2 {
        return Err(EncodeError::PitchToken {
            line: event.line,
            token: event.pitch.clone(),
        });
    }
    let code = DurationCode::from_quarter_length(event.quarter_length).ok_or(
        EncodeError::Duration {
            line: event.line,
            quarter_length: event.quarter_length,
        },
    )?;

    Ok(format!("{}{}", event.pitch, code.as_char()))
}

/// Encode a whole score, one newline-terminated line per event
pub fn encode_score(score: &Score) -> Result<String, EncodeError> {
    let mut text = String::with_capacity(score.len() * 4);
    for event in score {
        text.push_str(&encode_event(event)?);
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_str;
    use note_core::Fraction;
    use proptest::prelude::*;

    #[test]
    fn test_encode_event() {
        let event = NoteEvent::new(1, "G5", Fraction::new(1, 4));
        assert_eq!(encode_event(&event).unwrap(), "G5S");
    }

    #[test]
    fn test_encode_score_terminates_every_line() {
        let decoded = decode_str("D4Q\nG4E\nA5W").unwrap();
        assert_eq!(encode_score(&decoded.score).unwrap(), "D4Q\nG4E\nA5W\n");
        assert_eq!(encode_score(&Score::default()).unwrap(), "");
    }

    #[test]
    fn test_rejects_unencodable_events() {
        assert_eq!(
            encode_event(&NoteEvent::new(3, "F#5", Fraction::one())),
            Err(EncodeError::PitchToken {
                line: 3,
                token: "F#5".to_string()
            })
        );
        assert_eq!(
            encode_event(&NoteEvent::new(4, "C4", Fraction::new(3, 2))),
            Err(EncodeError::Duration {
                line: 4,
                quarter_length: Fraction::new(3, 2)
            })
        );
    }

    proptest! {
        #[test]
        fn decode_after_encode_is_identity(lines in prop::collection::vec("[A-G][45][WHQES]", 0..48)) {
            let text: String = lines.iter().map(|l| format!("{}\n", l)).collect();
            let decoded = decode_str(&text).unwrap();

            let encoded = encode_score(&decoded.score).unwrap();
            prop_assert_eq!(&encoded, &text);
            prop_assert_eq!(decode_str(&encoded).unwrap(), decoded);
        }
    }
}
