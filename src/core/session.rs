use super::constants::GLOW_PALETTE;
use rand::prelude::*;

/// Snapshot of one timed round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub active: bool,
    pub tap_count: u32,
    pub seconds_remaining: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new round began; the canvas should be cleared and the tick armed.
    Started,
    AlreadyActive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick arrived with no active round.
    Idle,
    Running { seconds_remaining: u32 },
    /// The countdown hit zero. Emitted once per round; the tick must be cancelled.
    Ended { tap_count: u32 },
}

/// A counted tap with the glow color chosen for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    pub tap_count: u32,
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
}

/// Inactive -> Active -> Inactive lifecycle of a round.
pub struct Session {
    state: SessionState,
    duration_secs: u32,
    rng: StdRng,
}

impl Session {
    pub fn new(duration_secs: u32, seed: u64) -> Self {
        Self {
            state: SessionState::default(),
            duration_secs: duration_secs.max(1),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn start(&mut self) -> StartOutcome {
        if self.state.active {
            log::debug!("[session] start ignored, round already active");
            return StartOutcome::AlreadyActive;
        }
        self.state = SessionState {
            active: true,
            tap_count: 0,
            seconds_remaining: self.duration_secs,
        };
        log::info!("[session] started, {}s on the clock", self.duration_secs);
        StartOutcome::Started
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.active {
            return TickOutcome::Idle;
        }
        self.state.seconds_remaining = self.state.seconds_remaining.saturating_sub(1);
        if self.state.seconds_remaining == 0 {
            self.state.active = false;
            log::info!("[session] ended with {} taps", self.state.tap_count);
            TickOutcome::Ended {
                tap_count: self.state.tap_count,
            }
        } else {
            TickOutcome::Running {
                seconds_remaining: self.state.seconds_remaining,
            }
        }
    }

    /// Count a pointer-down at `(x, y)`. Returns `None` outside an active round.
    pub fn tap(&mut self, x: f64, y: f64) -> Option<Tap> {
        if !self.state.active {
            return None;
        }
        self.state.tap_count += 1;
        let color = *GLOW_PALETTE.choose(&mut self.rng).unwrap_or(&GLOW_PALETTE[0]);
        log::debug!(
            "[session] tap {} at ({:.1},{:.1}) color {}",
            self.state.tap_count,
            x,
            y,
            color
        );
        Some(Tap {
            tap_count: self.state.tap_count,
            x,
            y,
            color,
        })
    }
}

/// Text shown when a round ends, doubling as the export prompt.
pub fn end_of_round_message(tap_count: u32) -> String {
    format!(
        "Time's up! You tapped {} times. Would you like to save your masterpiece?",
        tap_count
    )
}

pub fn tap_count_label(tap_count: u32) -> String {
    format!("Taps: {}", tap_count)
}
