//! Interview session navigation and the read-aloud affordance.

/// Zero-based cursor over an interview's question list.
///
/// Navigation clamps at both ends: there is no wraparound, and a direct
/// jump outside the list is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionCursor {
    active: usize,
    count: usize,
}

impl QuestionCursor {
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    /// Index of the active question.
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn has_previous(&self) -> bool {
        self.active > 0
    }

    pub fn has_next(&self) -> bool {
        self.count > 0 && self.active < self.count - 1
    }

    /// Move to the previous question; no-op at the first question.
    pub fn previous(&mut self) {
        if self.has_previous() {
            self.active -= 1;
        }
    }

    /// Move to the next question; no-op at the last question.
    pub fn next(&mut self) {
        if self.has_next() {
            self.active += 1;
        }
    }

    /// Jump directly to `index`, regardless of the current position.
    /// Out-of-range indices are ignored.
    pub fn jump(&mut self, index: usize) {
        if index < self.count {
            self.active = index;
        }
    }
}

/// Events from the host platform's speech-synthesis capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Synthesis of an utterance has started.
    Started,
    /// Synthesis of an utterance has finished.
    Ended,
}

/// Read-aloud state for the active question.
///
/// When the host has no speech-synthesis capability the user is told once
/// and the affordance stays disabled for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechState {
    supported: bool,
    speaking: bool,
}

impl SpeechState {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            speaking: false,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    /// Ask to read `text` aloud. Returns the utterance to synthesize, or
    /// `None` with the capability missing (the caller surfaces a direct
    /// notification in that case, never a silent failure).
    pub fn request_speech(&self, text: &str) -> Option<String> {
        if self.supported {
            Some(text.to_string())
        } else {
            None
        }
    }

    pub fn apply(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Started => self.speaking = true,
            SpeechEvent::Ended => self.speaking = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_unavailable_at_start() {
        let cursor = QuestionCursor::new(10);
        assert_eq!(cursor.active(), 0);
        assert!(!cursor.has_previous());
        assert!(cursor.has_next());
    }

    #[test]
    fn next_unavailable_at_end() {
        let mut cursor = QuestionCursor::new(10);
        cursor.jump(9);
        assert!(!cursor.has_next());
        assert!(cursor.has_previous());
    }

    #[test]
    fn navigation_clamps_without_wraparound() {
        let mut cursor = QuestionCursor::new(3);
        cursor.previous();
        assert_eq!(cursor.active(), 0);

        cursor.next();
        cursor.next();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.active(), 2);
    }

    #[test]
    fn jump_is_position_independent() {
        let mut cursor = QuestionCursor::new(10);
        cursor.jump(7);
        assert_eq!(cursor.active(), 7);
        cursor.jump(2);
        assert_eq!(cursor.active(), 2);
    }

    #[test]
    fn out_of_range_jump_ignored() {
        let mut cursor = QuestionCursor::new(3);
        cursor.jump(5);
        assert_eq!(cursor.active(), 0);
    }

    #[test]
    fn empty_list_has_no_navigation() {
        let mut cursor = QuestionCursor::new(0);
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        cursor.next();
        assert_eq!(cursor.active(), 0);
    }

    #[test]
    fn speaking_flag_follows_synthesis_events() {
        let mut speech = SpeechState::new(true);
        assert!(!speech.is_speaking());

        assert_eq!(
            speech.request_speech("What is ownership?").as_deref(),
            Some("What is ownership?")
        );
        speech.apply(SpeechEvent::Started);
        assert!(speech.is_speaking());
        speech.apply(SpeechEvent::Ended);
        assert!(!speech.is_speaking());
    }

    #[test]
    fn unsupported_synthesis_yields_no_utterance() {
        let speech = SpeechState::new(false);
        assert_eq!(speech.request_speech("anything"), None);
    }
}
