use std::fmt;
use thiserror::Error;

/// Octave used when a token carries no octave digit (e.g. `"C#"`)
pub const DEFAULT_OCTAVE: i8 = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PitchError {
    #[error("empty pitch token")]
    Empty,

    #[error("'{0}' is not a note letter (expected A-G)")]
    InvalidLetter(char),

    #[error("invalid octave '{0}'")]
    InvalidOctave(String),

    #[error("pitch is outside the MIDI key range (computed key {0})")]
    OutOfRange(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Semitone offset above C
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        };
        f.write_str(s)
    }
}

/// A parsed pitch+octave token such as `C4`, `F#5` or `B-`.
///
/// Sharps are written `#` and flats `-`. Accidentals may repeat. A missing
/// octave falls back to [`DEFAULT_OCTAVE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub letter: Letter,
    pub alteration: i8,
    pub octave: i8,
    key: u8,
}

impl Pitch {
    pub fn parse(token: &str) -> Result<Self, PitchError> {
        let mut chars = token.chars().peekable();

        let first = chars.next().ok_or(PitchError::Empty)?;
        let letter = Letter::from_char(first).ok_or(PitchError::InvalidLetter(first))?;

        let mut alteration: i8 = 0;
        while let Some(&c) = chars.peek() {
            match c {
                '#' => alteration = alteration.saturating_add(1),
                '-' => alteration = alteration.saturating_sub(1),
                _ => break,
            }
            chars.next();
        }

        let rest: String = chars.collect();
        let octave = if rest.is_empty() {
            DEFAULT_OCTAVE
        } else if rest.chars().all(|c| c.is_ascii_digit()) {
            rest.parse::<i8>()
                .map_err(|_| PitchError::InvalidOctave(rest.clone()))?
        } else {
            return Err(PitchError::InvalidOctave(rest));
        };

        // (octave + 1) * 12 + semitone + alteration, middle C (C4) = 60
        let key = (octave as i32 + 1) * 12 + letter.semitone() + alteration as i32;
        if !(0..=127).contains(&key) {
            return Err(PitchError::OutOfRange(key));
        }

        Ok(Pitch {
            letter,
            alteration,
            octave,
            key: key as u8,
        })
    }

    /// MIDI key number (0-127)
    pub fn midi_key(&self) -> u8 {
        self.key
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        let accidental = if self.alteration > 0 { '#' } else { '-' };
        for _ in 0..self.alteration.unsigned_abs() {
            write!(f, "{}", accidental)?;
        }
        write!(f, "{}", self.octave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_c() {
        assert_eq!(Pitch::parse("C4").unwrap().midi_key(), 60);
        assert_eq!(Pitch::parse("A4").unwrap().midi_key(), 69); // A440
    }

    #[test]
    fn test_lowercase_letter() {
        assert_eq!(Pitch::parse("g5").unwrap().midi_key(), 79);
    }

    #[test]
    fn test_accidental_without_octave_uses_default() {
        assert_eq!(Pitch::parse("C#").unwrap().midi_key(), 61);
        assert_eq!(Pitch::parse("B-").unwrap().midi_key(), 70);
        assert_eq!(Pitch::parse("E").unwrap().octave, DEFAULT_OCTAVE);
    }

    #[test]
    fn test_accidental_with_octave() {
        assert_eq!(Pitch::parse("F#5").unwrap().midi_key(), 78);
        assert_eq!(Pitch::parse("E--4").unwrap().midi_key(), 62);
    }

    #[test]
    fn test_display_round_trips_spelling() {
        assert_eq!(Pitch::parse("b-").unwrap().to_string(), "B-4");
        assert_eq!(Pitch::parse("D4").unwrap().to_string(), "D4");
    }

    #[test]
    fn test_rejects_bad_tokens() {
        assert_eq!(Pitch::parse(""), Err(PitchError::Empty));
        assert_eq!(Pitch::parse("H4"), Err(PitchError::InvalidLetter('H')));
        assert_eq!(Pitch::parse(" 4"), Err(PitchError::InvalidLetter(' ')));
        assert_eq!(
            Pitch::parse("Cx"),
            Err(PitchError::InvalidOctave("x".to_string()))
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Pitch::parse("G#9"), Err(PitchError::OutOfRange(128)));
        assert_eq!(Pitch::parse("C99"), Err(PitchError::OutOfRange(1200)));
        assert!(matches!(Pitch::parse("C999"), Err(PitchError::InvalidOctave(_))));
    }
}
