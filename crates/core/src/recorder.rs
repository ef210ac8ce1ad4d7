//! Answer-recorder state machine.
//!
//! The capture flow (`Idle -> Recording -> Reviewing -> Submitting`) is
//! driven by external events: speech-engine callbacks, user actions, and
//! submission results. Each event is applied to the current state by a
//! pure reducer that returns the effects the host must carry out (start or
//! restart the engine, submit the answer, show a notice). Keeping the
//! reducer pure makes the auto-restart reconciliation and the length
//! gates directly testable.
//!
//! The speech engine is a single long-lived handle. When it ends capture
//! on its own (internal silence timeout) while the recorder still wants to
//! be recording, the reducer emits [`Effect::RestartEngine`]; the user
//! never sees this.

/// Answers must be strictly longer than this many characters once trimmed.
pub const MIN_ANSWER_LEN: usize = 5;

/// Where the recorder currently is in the capture flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Recording,
    /// The transcript is on screen and editable.
    Reviewing,
    /// Scoring/persist in flight; the record button is gated until done.
    Submitting,
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Side effects the host must perform after applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin continuous speech capture.
    StartEngine,
    /// Stop speech capture.
    StopEngine,
    /// The engine stopped on its own while recording; start it again.
    RestartEngine,
    /// Run the scoring/persist operation with the final answer text.
    Submit(String),
    /// Stop the camera's media tracks so the hardware is released.
    ReleaseCameraTracks,
    /// Show a transient notification.
    Notify(Severity, String),
}

/// Events fed into the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// User pressed record.
    StartRequested,
    /// User pressed stop.
    StopRequested,
    /// The engine recognized another segment of speech.
    SegmentRecognized(String),
    /// The engine ended capture (its own timeout or an explicit stop).
    EngineEnded,
    /// Continuous speech recognition is not available on this host.
    EngineUnavailable,
    /// Microphone permission was denied.
    MicPermissionDenied,
    /// User edited the transcript while reviewing.
    DraftEdited(String),
    /// User saved the edited transcript.
    SaveRequested,
    /// The scoring/persist operation finished successfully.
    SubmissionSucceeded,
    /// The scoring/persist operation failed.
    SubmissionFailed(String),
    /// User toggled the camera feed.
    WebcamToggled,
}

/// The recorder's complete state. All mutation goes through [`apply`](Self::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorder {
    phase: Phase,
    /// Recognized segments for the current capture cycle.
    segments: Vec<String>,
    /// Editable draft while reviewing.
    draft: String,
    speech_supported: bool,
    webcam_on: bool,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            segments: Vec::new(),
            draft: String::new(),
            speech_supported: true,
            webcam_on: true,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn webcam_on(&self) -> bool {
        self.webcam_on
    }

    pub fn speech_supported(&self) -> bool {
        self.speech_supported
    }

    /// The transcript as displayed: all recognized segments of the current
    /// cycle joined together.
    pub fn transcript(&self) -> String {
        self.segments.join(" ")
    }

    /// The editable draft shown while reviewing.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Apply one event, returning the effects the host must carry out.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::StartRequested => self.on_start(),
            Event::StopRequested => self.on_stop(),
            Event::SegmentRecognized(text) => {
                if self.phase == Phase::Recording {
                    self.segments.push(text);
                }
                Vec::new()
            }
            Event::EngineEnded => {
                // Reconciliation: desired state is still "recording", so the
                // engine-internal timeout is repaired invisibly.
                if self.phase == Phase::Recording {
                    vec![Effect::RestartEngine]
                } else {
                    Vec::new()
                }
            }
            Event::EngineUnavailable => {
                self.speech_supported = false;
                if self.phase == Phase::Recording {
                    self.phase = Phase::Idle;
                    self.segments.clear();
                }
                vec![Effect::Notify(
                    Severity::Error,
                    "Speech recognition not supported in your browser".into(),
                )]
            }
            Event::MicPermissionDenied => vec![Effect::Notify(
                Severity::Error,
                "Microphone access denied. Please check your browser permissions.".into(),
            )],
            Event::DraftEdited(text) => {
                if self.phase == Phase::Reviewing {
                    self.draft = text;
                }
                Vec::new()
            }
            Event::SaveRequested => self.on_save(),
            Event::SubmissionSucceeded => {
                if self.phase == Phase::Submitting {
                    self.phase = Phase::Idle;
                    self.segments.clear();
                    self.draft.clear();
                    vec![Effect::Notify(
                        Severity::Success,
                        "Answer recorded successfully".into(),
                    )]
                } else {
                    Vec::new()
                }
            }
            Event::SubmissionFailed(reason) => {
                if self.phase == Phase::Submitting {
                    // Keep the draft so the user can retry; in-memory state
                    // stays at the last known good value.
                    self.phase = Phase::Reviewing;
                    vec![Effect::Notify(Severity::Error, reason)]
                } else {
                    Vec::new()
                }
            }
            Event::WebcamToggled => {
                self.webcam_on = !self.webcam_on;
                if self.webcam_on {
                    Vec::new()
                } else {
                    vec![Effect::ReleaseCameraTracks]
                }
            }
        }
    }

    fn on_start(&mut self) -> Vec<Effect> {
        if !self.speech_supported {
            return vec![Effect::Notify(
                Severity::Error,
                "Speech recognition not available".into(),
            )];
        }
        match self.phase {
            Phase::Idle | Phase::Reviewing => {
                self.segments.clear();
                self.draft.clear();
                self.phase = Phase::Recording;
                vec![
                    Effect::StartEngine,
                    Effect::Notify(Severity::Success, "Recording started".into()),
                ]
            }
            // Already recording, or gated by an in-flight submission.
            Phase::Recording | Phase::Submitting => Vec::new(),
        }
    }

    fn on_stop(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Recording {
            return Vec::new();
        }
        let transcript = self.transcript();
        if transcript.trim().len() <= MIN_ANSWER_LEN {
            self.phase = Phase::Idle;
            self.segments.clear();
            return vec![
                Effect::StopEngine,
                Effect::Notify(
                    Severity::Error,
                    "No speech detected or answer too short".into(),
                ),
            ];
        }
        self.draft = transcript;
        self.phase = Phase::Reviewing;
        vec![Effect::StopEngine]
    }

    fn on_save(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Reviewing {
            return Vec::new();
        }
        if self.draft.trim().len() <= MIN_ANSWER_LEN {
            return vec![Effect::Notify(Severity::Error, "Answer is too short".into())];
        }
        self.phase = Phase::Submitting;
        vec![Effect::Submit(self.draft.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_recorder() -> Recorder {
        let mut rec = Recorder::new();
        rec.apply(Event::StartRequested);
        assert_eq!(rec.phase(), Phase::Recording);
        rec
    }

    #[test]
    fn start_clears_previous_transcript() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("left over from before".into()));
        rec.apply(Event::StopRequested);

        rec.apply(Event::StartRequested);
        assert_eq!(rec.transcript(), "");
    }

    #[test]
    fn segments_accumulate_in_order() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("tell me about".into()));
        rec.apply(Event::SegmentRecognized("the borrow checker".into()));
        assert_eq!(rec.transcript(), "tell me about the borrow checker");
    }

    #[test]
    fn short_transcript_never_reaches_review() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("hi".into()));

        let effects = rec.apply(Event::StopRequested);
        assert_eq!(rec.phase(), Phase::Idle);
        assert!(effects.contains(&Effect::Notify(
            Severity::Error,
            "No speech detected or answer too short".into()
        )));
        // Nothing was submitted.
        assert!(!effects.iter().any(|e| matches!(e, Effect::Submit(_))));
    }

    #[test]
    fn exactly_five_chars_is_still_too_short() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("12345".into()));
        rec.apply(Event::StopRequested);
        assert_eq!(rec.phase(), Phase::Idle);
    }

    #[test]
    fn long_transcript_enters_review_prepopulated() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("ownership moves values".into()));
        rec.apply(Event::StopRequested);

        assert_eq!(rec.phase(), Phase::Reviewing);
        assert_eq!(rec.draft(), "ownership moves values");
    }

    #[test]
    fn engine_end_restarts_only_while_recording() {
        let mut rec = recording_recorder();
        assert_eq!(rec.apply(Event::EngineEnded), vec![Effect::RestartEngine]);

        rec.apply(Event::SegmentRecognized("a perfectly fine answer".into()));
        rec.apply(Event::StopRequested);
        assert_eq!(rec.phase(), Phase::Reviewing);
        assert_eq!(rec.apply(Event::EngineEnded), Vec::new());
    }

    #[test]
    fn restart_is_not_user_visible() {
        let mut rec = recording_recorder();
        let effects = rec.apply(Event::EngineEnded);
        assert!(!effects.iter().any(|e| matches!(e, Effect::Notify(..))));
    }

    #[test]
    fn save_too_short_stays_in_review() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("a reasonable answer".into()));
        rec.apply(Event::StopRequested);

        rec.apply(Event::DraftEdited("nope".into()));
        let effects = rec.apply(Event::SaveRequested);

        assert_eq!(rec.phase(), Phase::Reviewing);
        assert_eq!(
            effects,
            vec![Effect::Notify(Severity::Error, "Answer is too short".into())]
        );
    }

    #[test]
    fn save_submits_edited_draft() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("first attempt at an answer".into()));
        rec.apply(Event::StopRequested);

        rec.apply(Event::DraftEdited("a polished final answer".into()));
        let effects = rec.apply(Event::SaveRequested);

        assert_eq!(rec.phase(), Phase::Submitting);
        assert_eq!(
            effects,
            vec![Effect::Submit("a polished final answer".into())]
        );
    }

    #[test]
    fn record_button_gated_while_submitting() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("some valid answer text".into()));
        rec.apply(Event::StopRequested);
        rec.apply(Event::SaveRequested);
        assert_eq!(rec.phase(), Phase::Submitting);

        assert_eq!(rec.apply(Event::StartRequested), Vec::new());
        assert_eq!(rec.phase(), Phase::Submitting);
    }

    #[test]
    fn successful_submission_clears_buffers() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("some valid answer text".into()));
        rec.apply(Event::StopRequested);
        rec.apply(Event::SaveRequested);

        rec.apply(Event::SubmissionSucceeded);
        assert_eq!(rec.phase(), Phase::Idle);
        assert_eq!(rec.transcript(), "");
        assert_eq!(rec.draft(), "");
    }

    #[test]
    fn failed_submission_keeps_draft_for_retry() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("some valid answer text".into()));
        rec.apply(Event::StopRequested);
        rec.apply(Event::SaveRequested);

        let effects = rec.apply(Event::SubmissionFailed("Something went wrong".into()));
        assert_eq!(rec.phase(), Phase::Reviewing);
        assert_eq!(rec.draft(), "some valid answer text");
        assert_eq!(
            effects,
            vec![Effect::Notify(Severity::Error, "Something went wrong".into())]
        );
    }

    #[test]
    fn unsupported_engine_disables_recording() {
        let mut rec = Recorder::new();
        rec.apply(Event::EngineUnavailable);

        let effects = rec.apply(Event::StartRequested);
        assert_eq!(rec.phase(), Phase::Idle);
        assert_eq!(
            effects,
            vec![Effect::Notify(
                Severity::Error,
                "Speech recognition not available".into()
            )]
        );
    }

    #[test]
    fn mic_denial_does_not_corrupt_state() {
        let mut rec = recording_recorder();
        rec.apply(Event::SegmentRecognized("answer in progress".into()));
        rec.apply(Event::MicPermissionDenied);
        assert_eq!(rec.phase(), Phase::Recording);
        assert_eq!(rec.transcript(), "answer in progress");
    }

    #[test]
    fn webcam_is_independent_of_recording() {
        let mut rec = recording_recorder();
        let effects = rec.apply(Event::WebcamToggled);
        assert!(!rec.webcam_on());
        assert_eq!(effects, vec![Effect::ReleaseCameraTracks]);
        assert_eq!(rec.phase(), Phase::Recording);

        let effects = rec.apply(Event::WebcamToggled);
        assert!(rec.webcam_on());
        assert_eq!(effects, Vec::new());
    }
}
