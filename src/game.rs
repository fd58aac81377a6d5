use crate::audio::{self, WebClip};
use crate::core::{
    end_of_round_message, tap_count_label, AudioGate, ClipPlayer, ContextState, GameConfig, Glow,
    Session, SoundLibrary, StartOutcome, StartSequence, StartStep, TickOutcome, TICK_INTERVAL_MS,
};
use crate::{dom, overlay, render};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const CONSENT_PROMPT: &str = "Play with sound? Taps will trigger short piano clips.";

pub type GameHandle = Rc<RefCell<Game>>;

/// All page state: one round, the audio stack, and the DOM it draws into.
pub struct Game {
    config: GameConfig,
    session: Session,
    gate: AudioGate,
    library: SoundLibrary<web::AudioBuffer>,
    player: ClipPlayer<WebClip>,
    audio_ctx: Option<web::AudioContext>,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    ctx2d: web::CanvasRenderingContext2d,
    tick_fn: Option<js_sys::Function>,
    interval: Option<i32>,
    start: StartSequence,
}

impl Game {
    pub fn new(
        config: GameConfig,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        ctx2d: web::CanvasRenderingContext2d,
        seed: u64,
    ) -> Self {
        Self {
            session: Session::new(config.session_seconds, seed),
            gate: AudioGate::new(config.ask_audio_consent),
            library: SoundLibrary::new(config.sound_files.clone()),
            player: ClipPlayer::new(),
            audio_ctx: None,
            document,
            canvas,
            ctx2d,
            tick_fn: None,
            interval: None,
            start: StartSequence::new(),
            config,
        }
    }

    pub fn refresh_labels(&self) {
        let state = self.session.state();
        let seconds = if state.active {
            state.seconds_remaining
        } else {
            self.session.duration_secs()
        };
        dom::set_text(&self.document, "tap-count", &tap_count_label(state.tap_count));
        dom::set_text(&self.document, "timer", &seconds.to_string());
    }

    fn activate(&mut self) {
        if self.session.start() != StartOutcome::Started {
            return;
        }
        render::clear(&self.ctx2d, &self.canvas);
        self.refresh_labels();
        self.arm_tick();
    }

    fn arm_tick(&mut self) {
        let (Some(window), Some(tick_fn)) = (web::window(), self.tick_fn.as_ref()) else {
            log::error!("[game] no timer available, round cannot count down");
            return;
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(tick_fn, TICK_INTERVAL_MS) {
            Ok(handle) => self.interval = Some(handle),
            Err(e) => log::error!("[game] set_interval error: {:?}", e),
        }
    }

    fn cancel_tick(&mut self) {
        if let (Some(window), Some(handle)) = (web::window(), self.interval.take()) {
            window.clear_interval_with_handle(handle);
        }
    }

    fn tick(&mut self) -> TickOutcome {
        let outcome = self.session.tick();
        match outcome {
            TickOutcome::Idle => self.cancel_tick(),
            TickOutcome::Running { seconds_remaining } => {
                dom::set_text(&self.document, "timer", &seconds_remaining.to_string());
            }
            TickOutcome::Ended { .. } => {
                self.cancel_tick();
                dom::set_text(&self.document, "timer", "0");
            }
        }
        outcome
    }

    /// Count and draw a tap. Returns false when no round is running.
    fn tap(&mut self, pos: Vec2) -> bool {
        let Some(tap) = self.session.tap(pos.x as f64, pos.y as f64) else {
            return false;
        };
        dom::set_text(&self.document, "tap-count", &tap_count_label(tap.tap_count));
        if let Err(e) = render::draw_glow(&self.ctx2d, &Glow::new(tap.x, tap.y, tap.color)) {
            log::warn!("[render] glow failed: {:?}", e);
        }
        dom::vibrate(self.config.vibrate_ms);
        true
    }

    fn play_next(&mut self) {
        if !self.gate.can_play() {
            return;
        }
        let Some(audio_ctx) = self.audio_ctx.as_ref() else {
            return;
        };
        if let Some(index) = self
            .player
            .play_next(&mut self.library, |buffer| audio::start_clip(audio_ctx, buffer))
        {
            log::debug!("[audio] playing clip {}", index);
        }
    }

    fn stop_current(&mut self) {
        self.player.stop_current();
    }
}

/// Create the shared interval callback once; every round re-arms it.
pub fn install_tick(game: &GameHandle) {
    let game_tick = game.clone();
    let closure = Closure::wrap(Box::new(move || on_tick(&game_tick)) as Box<dyn FnMut()>);
    game.borrow_mut().tick_fn = Some(closure.as_ref().unchecked_ref::<js_sys::Function>().clone());
    closure.forget();
}

pub fn request_start(game: &GameHandle) {
    {
        let g = game.borrow();
        if !g.start.accepts(g.session.is_active()) {
            log::debug!("[game] start ignored, round running or starting");
            return;
        }
    }

    let wants_consent = game.borrow().gate.wants_consent();
    if wants_consent {
        // Modal; no borrow may be held across it.
        let granted = dom::confirm(CONSENT_PROMPT);
        if game.borrow_mut().gate.on_consent(granted) {
            bring_up_audio(game);
        }
    }

    let mut g = game.borrow_mut();
    let g = &mut *g;
    let ctx_state = match g.audio_ctx.as_ref() {
        None => ContextState::Absent,
        Some(ctx) if audio::is_suspended(ctx) => ContextState::Suspended,
        Some(_) => ContextState::Running,
    };
    match g.start.plan(g.session.is_active(), &mut g.gate, ctx_state) {
        StartStep::Ignore => {}
        StartStep::Activate => g.activate(),
        StartStep::Resume => {
            let Some(audio_ctx) = g.audio_ctx.clone() else {
                return;
            };
            let game = game.clone();
            spawn_local(async move {
                let resumed = audio::resume(&audio_ctx).await;
                let mut g = game.borrow_mut();
                let g = &mut *g;
                g.start.finish_resume(&mut g.gate, resumed);
                g.activate();
            });
        }
    }
}

fn on_tick(game: &GameHandle) {
    let outcome = game.borrow_mut().tick();
    if let TickOutcome::Ended { tap_count } = outcome {
        on_session_end(game, tap_count);
    }
}

fn on_session_end(game: &GameHandle, tap_count: u32) {
    if !dom::confirm(&end_of_round_message(tap_count)) {
        log::info!("[game] export declined");
        return;
    }
    let (document, canvas) = {
        let g = game.borrow();
        (g.document.clone(), g.canvas.clone())
    };
    if let Err(e) = render::export_png(&document, &canvas) {
        log::error!("[export] {:?}", e);
    }
}

pub fn on_pointer_down(game: &GameHandle, pos: Vec2) {
    let lazy_init = {
        let mut g = game.borrow_mut();
        if !g.tap(pos) {
            return;
        }
        g.gate.on_gesture()
    };
    if lazy_init {
        bring_up_audio(game);
        resume_in_background(game);
    }
    game.borrow_mut().play_next();
}

pub fn on_pointer_release(game: &GameHandle) {
    game.borrow_mut().stop_current();
}

/// Create the audio context and kick off loading. The round never waits on it.
fn bring_up_audio(game: &GameHandle) {
    let audio_ctx = match audio::create_context() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("[audio] {:?}; continuing without sound", e);
            game.borrow_mut().gate.on_failed();
            return;
        }
    };
    game.borrow_mut().audio_ctx = Some(audio_ctx.clone());
    load_sounds(game, audio_ctx);
}

fn resume_in_background(game: &GameHandle) {
    let Some(audio_ctx) = game.borrow().audio_ctx.clone() else {
        return;
    };
    let game = game.clone();
    spawn_local(async move {
        let resumed = audio::resume(&audio_ctx).await;
        game.borrow_mut().gate.on_resumed(resumed);
    });
}

/// Fetch and decode every clip concurrently. Each settles on its own and
/// updates the progress display; one failure never cancels the others.
fn load_sounds(game: &GameHandle, audio_ctx: web::AudioContext) {
    let (sources, document, progress) = {
        let g = game.borrow();
        (g.library.sources().to_vec(), g.document.clone(), g.library.progress())
    };
    if sources.is_empty() {
        log::info!("[sounds] no sounds configured, playing silently");
        return;
    }
    overlay::show_progress(&document, &progress);

    let game = game.clone();
    spawn_local(async move {
        let loads = sources.into_iter().enumerate().map(|(index, path)| {
            let game = game.clone();
            let audio_ctx = audio_ctx.clone();
            async move {
                let result = audio::load_clip(&audio_ctx, &path).await;
                let mut g = game.borrow_mut();
                let progress = match result {
                    Ok(buffer) => {
                        log::info!("[sounds] loaded {}", path);
                        g.library.mark_ready(index, buffer)
                    }
                    Err(e) => g.library.mark_failed(index, &e),
                };
                overlay::update_progress(&g.document, &progress);
            }
        });
        futures::future::join_all(loads).await;

        let g = game.borrow();
        let progress = g.library.progress();
        log::info!(
            "[sounds] {} of {} loaded, {} failed",
            progress.loaded,
            progress.total,
            progress.failed
        );
        overlay::hide_progress(&g.document);
    });
}
