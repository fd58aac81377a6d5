#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioPhase {
    Uninitialized,
    /// Player said no; the next start asks again.
    Declined,
    /// Context exists and sounds are loading; resume may still be pending.
    Initializing,
    Ready,
    /// Context creation or resume failed. Gameplay continues silently.
    Failed,
}

/// Lifecycle of the audio subsystem.
///
/// Browsers refuse to start audio without a user gesture, so the context is
/// created lazily: either after the player consents on start, or on the first
/// tap when no consent prompt is configured.
pub struct AudioGate {
    phase: AudioPhase,
    ask_consent: bool,
}

impl AudioGate {
    pub fn new(ask_consent: bool) -> Self {
        Self {
            phase: AudioPhase::Uninitialized,
            ask_consent,
        }
    }

    pub fn phase(&self) -> AudioPhase {
        self.phase
    }

    /// Whether a start gesture should prompt the player before the round.
    pub fn wants_consent(&self) -> bool {
        self.ask_consent && matches!(self.phase, AudioPhase::Uninitialized | AudioPhase::Declined)
    }

    /// Record the consent answer. Returns true when the caller should bring
    /// the audio context up now.
    pub fn on_consent(&mut self, granted: bool) -> bool {
        if !self.wants_consent() {
            return false;
        }
        if granted {
            self.phase = AudioPhase::Initializing;
            log::info!("[audio] consent granted");
        } else {
            self.phase = AudioPhase::Declined;
            log::info!("[audio] consent declined, playing silently");
        }
        granted
    }

    /// First-tap lazy initialization. Returns true when the caller should
    /// bring the audio context up now.
    pub fn on_gesture(&mut self) -> bool {
        if self.ask_consent || self.phase != AudioPhase::Uninitialized {
            return false;
        }
        self.phase = AudioPhase::Initializing;
        log::info!("[audio] initializing on first gesture");
        true
    }

    pub fn on_ready(&mut self) {
        if self.phase == AudioPhase::Initializing {
            self.phase = AudioPhase::Ready;
        }
    }

    /// Settle a pending `resume()`. A rejected resume leaves audio off for good.
    pub fn on_resumed<E: std::fmt::Debug>(&mut self, resumed: Result<(), E>) {
        match resumed {
            Ok(()) => self.on_ready(),
            Err(e) => {
                log::warn!("[audio] resume failed: {:?}; continuing without sound", e);
                self.on_failed();
            }
        }
    }

    pub fn on_failed(&mut self) {
        self.phase = AudioPhase::Failed;
    }

    pub fn can_play(&self) -> bool {
        matches!(self.phase, AudioPhase::Initializing | AudioPhase::Ready)
    }
}
