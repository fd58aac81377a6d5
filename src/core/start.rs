use super::audio_gate::AudioGate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartStep {
    /// Start the round now.
    Activate,
    /// Resume the suspended audio context first, then call
    /// [`StartSequence::finish_resume`] and start the round.
    Resume,
    /// A round is running or a start is already waiting on audio.
    Ignore,
}

/// State of the audio context when a start is planned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    Absent,
    Running,
    Suspended,
}

/// Guards the start button across the asynchronous audio resume.
#[derive(Debug, Default)]
pub struct StartSequence {
    pending: bool,
}

impl StartSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether a start gesture should be handled at all (before prompting).
    pub fn accepts(&self, session_active: bool) -> bool {
        !session_active && !self.pending
    }

    pub fn plan(&mut self, session_active: bool, gate: &mut AudioGate, ctx: ContextState) -> StartStep {
        if !self.accepts(session_active) {
            return StartStep::Ignore;
        }
        match ctx {
            ContextState::Suspended if gate.can_play() => {
                self.pending = true;
                StartStep::Resume
            }
            ContextState::Absent => StartStep::Activate,
            _ => {
                gate.on_ready();
                StartStep::Activate
            }
        }
    }

    /// Record the resume result. The round starts either way.
    pub fn finish_resume<E: std::fmt::Debug>(&mut self, gate: &mut AudioGate, resumed: Result<(), E>) {
        self.pending = false;
        gate.on_resumed(resumed);
    }
}
