use note_core::Fraction;

/// One decoded note line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEvent {
    /// 1-based line number in the input
    pub line: usize,
    /// Pitch+octave token exactly as written (e.g. "C4")
    pub pitch: String,
    pub quarter_length: Fraction,
}

impl NoteEvent {
    pub fn new(line: usize, pitch: impl Into<String>, quarter_length: Fraction) -> Self {
        Self {
            line,
            pitch: pitch.into(),
            quarter_length,
        }
    }
}

/// A single voice: note events in playback order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    events: Vec<NoteEvent>,
}

impl Score {
    pub fn new(events: Vec<NoteEvent>) -> Self {
        Self { events }
    }

    pub fn push(&mut self, event: NoteEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NoteEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn total_quarter_length(&self) -> Fraction {
        self.events.iter().map(|e| e.quarter_length).sum()
    }
}

impl FromIterator<NoteEvent> for Score {
    fn from_iter<I: IntoIterator<Item = NoteEvent>>(iter: I) -> Self {
        Score::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Score {
    type Item = &'a NoteEvent;
    type IntoIter = std::slice::Iter<'a, NoteEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
