use note_core::Fraction;

/// Single-character duration codes used in note lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationCode {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl DurationCode {
    pub const ALL: [DurationCode; 5] = [
        DurationCode::Whole,
        DurationCode::Half,
        DurationCode::Quarter,
        DurationCode::Eighth,
        DurationCode::Sixteenth,
    ];

    pub fn from_char(code: char) -> Option<Self> {
        match code {
            'W' => Some(DurationCode::Whole),
            'H' => Some(DurationCode::Half),
            'Q' => Some(DurationCode::Quarter),
            'E' => Some(DurationCode::Eighth),
            'S' => Some(DurationCode::Sixteenth),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            DurationCode::Whole => 'W',
            DurationCode::Half => 'H',
            DurationCode::Quarter => 'Q',
            DurationCode::Eighth => 'E',
            DurationCode::Sixteenth => 'S',
        }
    }

    /// Inverse of [`DurationCode::quarter_length`]
    pub fn from_quarter_length(quarter_length: Fraction) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|code| code.quarter_length() == quarter_length)
    }

    /// Length in quarter notes
    pub fn quarter_length(self) -> Fraction {
        match self {
            DurationCode::Whole => Fraction::from_int(4),
            DurationCode::Half => Fraction::from_int(2),
            DurationCode::Quarter => Fraction::from_int(1),
            DurationCode::Eighth => Fraction::new(1, 2),
            DurationCode::Sixteenth => Fraction::new(1, 4),
        }
    }
}

/// Map a duration code to its quarter-length.
///
/// Unknown codes are not an error: a warning naming the code is logged and a
/// quarter note is returned.
pub fn map_duration(code: char) -> Fraction {
    match DurationCode::from_char(code) {
        Some(duration) => duration.quarter_length(),
        None => {
            log::warn!("Unexpected duration {:?}, using a quarter note", code);
            Fraction::one()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(map_duration('W'), Fraction::from_int(4));
        assert_eq!(map_duration('H'), Fraction::from_int(2));
        assert_eq!(map_duration('Q'), Fraction::from_int(1));
        assert_eq!(map_duration('E'), Fraction::new(1, 2));
        assert_eq!(map_duration('S'), Fraction::new(1, 4));
    }

    #[test]
    fn test_unknown_code_falls_back_to_quarter() {
        for code in ['X', 'q', ' ', '4', 'é'] {
            assert_eq!(map_duration(code), Fraction::one(), "code {:?}", code);
        }
    }

    #[test]
    fn test_from_quarter_length() {
        assert_eq!(
            DurationCode::from_quarter_length(Fraction::new(1, 2)),
            Some(DurationCode::Eighth)
        );
        assert_eq!(DurationCode::from_quarter_length(Fraction::new(3, 2)), None);
    }

    #[test]
    fn test_char_round_trip() {
        for code in DurationCode::ALL {
            assert_eq!(DurationCode::from_char(code.as_char()), Some(code));
        }
    }
}
