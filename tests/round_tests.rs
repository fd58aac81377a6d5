// Host-side end-to-end rounds: session, glow marks and clip rotation wired the
// way the page wires them, with the browser replaced by plain vectors.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod glow {
    include!("../src/core/glow.rs");
}
mod player {
    include!("../src/core/player.rs");
}
mod session {
    include!("../src/core/session.rs");
}
mod sounds {
    include!("../src/core/sounds.rs");
}

use constants::*;
use glow::Glow;
use player::*;
use session::*;
use sounds::*;
use std::cell::RefCell;
use std::rc::Rc;

struct Clip {
    index: usize,
    stopped: Rc<RefCell<Vec<usize>>>,
}

impl ClipHandle for Clip {
    fn stop(&mut self) {
        self.stopped.borrow_mut().push(self.index);
    }
}

/// Stand-in for the page: canvas marks, played clip indices and prompts shown.
struct Page {
    session: Session,
    library: SoundLibrary<usize>,
    player: ClipPlayer<Clip>,
    canvas: Vec<Glow>,
    played: Vec<usize>,
    stopped: Rc<RefCell<Vec<usize>>>,
    prompts: Vec<String>,
}

impl Page {
    fn new(sources: usize) -> Self {
        Self {
            session: Session::new(SESSION_SECONDS, 5),
            library: SoundLibrary::new((0..sources).map(|i| format!("sfx/{i}.wav")).collect()),
            player: ClipPlayer::new(),
            canvas: Vec::new(),
            played: Vec::new(),
            stopped: Rc::default(),
            prompts: Vec::new(),
        }
    }

    fn start(&mut self) {
        if self.session.start() == StartOutcome::Started {
            self.canvas.clear();
        }
    }

    fn pointer_down(&mut self, x: f64, y: f64) {
        let Some(tap) = self.session.tap(x, y) else {
            return;
        };
        self.canvas.push(Glow::new(tap.x, tap.y, tap.color));
        let stopped = self.stopped.clone();
        if let Some(i) = self.player.play_next(&mut self.library, |&index| {
            Ok::<_, ()>(Clip { index, stopped })
        }) {
            self.played.push(i);
        }
    }

    fn pointer_up(&mut self) {
        self.player.stop_current();
    }

    /// Returns whether the export was accepted.
    fn tick(&mut self, accept_export: bool) -> Option<bool> {
        match self.session.tick() {
            TickOutcome::Ended { tap_count } => {
                self.prompts.push(end_of_round_message(tap_count));
                Some(accept_export)
            }
            _ => None,
        }
    }
}

#[test]
fn three_taps_then_time_runs_out_and_export_is_declined() {
    let mut page = Page::new(2);
    page.library.mark_ready(0, 0);
    page.library.mark_ready(1, 1);
    page.start();

    page.pointer_down(10.0, 20.0);
    page.pointer_up();
    assert_eq!(page.tick(false), None);
    page.pointer_down(30.0, 40.0);
    assert_eq!(page.tick(false), None);
    page.pointer_down(50.0, 60.0);
    page.pointer_up();
    assert_eq!(page.tick(false), None);
    assert_eq!(page.tick(false), None);
    assert_eq!(page.session.state().tap_count, 3);

    assert_eq!(page.tick(false), Some(false));
    assert!(!page.session.is_active());
    assert_eq!(page.prompts.len(), 1);
    assert!(page.prompts[0].contains("You tapped 3 times"));

    // Declining keeps the drawing on screen.
    assert_eq!(page.canvas.len(), 3);
    assert_eq!((page.canvas[2].x, page.canvas[2].y), (50.0, 60.0));
    assert_eq!(page.played, vec![0, 1, 0]);
    // The second clip was cut by the third tap, the others by pointer-up.
    assert_eq!(*page.stopped.borrow(), vec![0, 1, 0]);

    // Late taps are ignored.
    page.pointer_down(1.0, 1.0);
    assert_eq!(page.canvas.len(), 3);
    assert_eq!(page.tick(false), None);
    assert_eq!(page.prompts.len(), 1);
}

#[test]
fn one_failed_source_leaves_the_other_playable() {
    let mut page = Page::new(2);
    page.library.mark_failed(
        0,
        &SoundError::Decode {
            path: "sfx/0.wav".to_string(),
            reason: "EncodingError".to_string(),
        },
    );
    page.library.mark_ready(1, 1);
    page.start();
    for i in 0..4 {
        page.pointer_down(i as f64, i as f64);
    }
    assert_eq!(page.played, vec![1, 1, 1, 1]);
    assert_eq!(page.session.state().tap_count, 4);
}

#[test]
fn silent_round_is_fully_playable() {
    let mut page = Page::new(2);
    page.start();
    for i in 0..3 {
        page.pointer_down(i as f64, 0.0);
        page.pointer_up();
    }
    assert!(page.played.is_empty());
    assert!(page.stopped.borrow().is_empty());
    assert_eq!(page.canvas.len(), 3);
    let mut ended = 0;
    for _ in 0..SESSION_SECONDS {
        if page.tick(true).is_some() {
            ended += 1;
        }
    }
    assert_eq!(ended, 1);
}

#[test]
fn restart_clears_the_canvas() {
    let mut page = Page::new(0);
    page.start();
    page.pointer_down(5.0, 5.0);
    page.start();
    assert_eq!(page.canvas.len(), 1, "double start must not clear");
    for _ in 0..SESSION_SECONDS {
        page.tick(false);
    }
    page.start();
    assert!(page.canvas.is_empty());
    assert!(page.session.is_active());
}

#[test]
fn glow_fades_from_palette_color_to_transparent() {
    let g = Glow::new(1.0, 2.0, GLOW_PALETTE[0]);
    assert_eq!(g.radius, GLOW_RADIUS);
    assert_eq!(g.stops[0], (0.0, "#ff80ed".to_string()));
    assert_eq!(g.stops[1], (GLOW_MID_STOP, "#ff80ed55".to_string()));
    assert_eq!(g.stops[2], (1.0, "transparent".to_string()));
}
