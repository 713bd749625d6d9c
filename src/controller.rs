use log::debug;

use crate::constants::*;
use crate::drag::{DragSession, PointerEvent, PointerKind, Settle};
use crate::effect::Effect;
use crate::state::CarouselState;

/// Clamps an autoplay interval into the supported range.
pub fn clamp_interval(ms: Millis) -> Millis {
    ms.clamp(AUTOPLAY_MIN_MS, AUTOPLAY_MAX_MS)
}

/// Read-only copy of what projection needs from the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    pub effect: Effect,
    pub active_index: i64,
    pub drag_fraction: f64,
    pub dragging: bool,
}

/// Owns the position of one carousel: the unbounded active index, the open
/// drag session and the autoplay timer.
///
/// Every method takes the current monotonic time instead of reading a
/// clock, so the host decides what "now" is.
#[derive(Debug, Clone)]
pub struct CarouselController {
    total: usize,
    effect: Effect,
    container_width: Option<f64>,

    active_index: i64,
    state: CarouselState,
    drag: Option<DragSession>,

    autoplay_interval: Millis,
    autoplay_due: Option<Millis>,
}

impl CarouselController {
    pub fn new(total: usize, effect: Effect, autoplay_interval: Millis, now: Millis) -> Self {
        let mut controller = Self {
            total,
            effect,
            container_width: None,
            active_index: 0,
            state: CarouselState::Idle,
            drag: None,
            autoplay_interval: clamp_interval(autoplay_interval),
            autoplay_due: None,
        };
        controller.restart_autoplay(now);
        controller
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn active_index(&self) -> i64 {
        self.active_index
    }

    /// Index of the active image within the gallery, for pagination.
    pub fn active_slot(&self) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        Some(self.active_index.rem_euclid(self.total as i64) as usize)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn autoplay_interval(&self) -> Millis {
        self.autoplay_interval
    }

    /// When the next autoplay step fires; `None` while dragging or empty.
    pub fn next_autoplay_at(&self) -> Option<Millis> {
        self.autoplay_due
    }

    pub fn card_width(&self) -> f64 {
        self.effect.card_width(self.container_width)
    }

    /// Live drag in slide units; zero when no session is open.
    pub fn drag_fraction(&self) -> f64 {
        match self.drag {
            Some(session) => session.delta_x() / self.card_width(),
            None => 0.0,
        }
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            effect: self.effect,
            active_index: self.active_index,
            drag_fraction: self.drag_fraction(),
            dragging: self.is_dragging(),
        }
    }

    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = Some(width).filter(|w| w.is_finite() && *w > 0.0);
    }

    /// Switches layout; position, drag and timer carry over.
    pub fn set_effect(&mut self, effect: Effect) {
        self.effect = effect;
    }

    /// Replaces the gallery. Any open drag is dropped and the carousel
    /// starts over from the first image.
    pub fn set_images(&mut self, total: usize, now: Millis) {
        if self.drag.take().is_some() {
            debug!("gallery replaced mid-drag, dropping session");
        }
        self.total = total;
        self.active_index = 0;
        self.state = CarouselState::Idle;
        self.restart_autoplay(now);
        debug!("gallery reset: {} images", total);
    }

    pub fn set_autoplay_interval(&mut self, ms: Millis, now: Millis) {
        self.autoplay_interval = clamp_interval(ms);
        self.restart_autoplay(now);
    }

    /// Advances autoplay. Returns true if a step fired.
    ///
    /// At most one step fires per call; a host that stalled for several
    /// intervals resumes the cadence from `now` instead of catching up.
    pub fn update(&mut self, now: Millis) -> bool {
        let Some(due) = self.autoplay_due else {
            return false;
        };
        if now < due {
            return false;
        }
        self.active_index = self.active_index.saturating_add(1);
        let next = due + self.autoplay_interval;
        self.autoplay_due = Some(if next > now { next } else { now + self.autoplay_interval });
        true
    }

    pub fn next(&mut self) {
        self.shift(1);
    }

    pub fn prev(&mut self) {
        self.shift(-1);
    }

    pub fn handle(&mut self, event: PointerEvent) -> Option<Settle> {
        match event.kind {
            PointerKind::Down => {
                self.pointer_down(event.x, event.at);
                None
            }
            PointerKind::Move => {
                self.pointer_move(event.x);
                None
            }
            PointerKind::Up => self.pointer_up(event.x, event.at),
            PointerKind::Leave => self.pointer_leave(event.x, event.at),
        }
    }

    /// Opens a drag session and suspends autoplay. Ignored while a session
    /// is already open or the gallery is empty.
    pub fn pointer_down(&mut self, x: f64, now: Millis) {
        if self.total == 0 || self.drag.is_some() || !x.is_finite() {
            return;
        }
        self.drag = Some(DragSession::begin(x, now));
        self.state = CarouselState::Dragging;
        self.autoplay_due = None;
        debug!("drag started at x={x:.1}");
    }

    pub fn pointer_move(&mut self, x: f64) {
        if let Some(session) = self.drag.as_mut() {
            session.track(x);
        }
    }

    /// Closes the drag session and commits or discards it.
    pub fn pointer_up(&mut self, x: f64, now: Millis) -> Option<Settle> {
        let mut session = self.drag.take()?;
        session.track(x);
        self.state = CarouselState::Settling;

        let settle = Settle::resolve(session.delta_x(), self.card_width(), session.duration(now));
        self.active_index = self.active_index.saturating_add(settle.move_count);
        debug!(
            "drag settled: dx={:.1} over {}ms -> move {}{}",
            session.delta_x(),
            session.duration(now),
            settle.move_count,
            if settle.flicked { " (flick)" } else { "" }
        );

        self.state = CarouselState::Idle;
        self.restart_autoplay(now);
        Some(settle)
    }

    /// Pointer left the surface: settles exactly like a release.
    pub fn pointer_leave(&mut self, x: f64, now: Millis) -> Option<Settle> {
        self.pointer_up(x, now)
    }

    fn shift(&mut self, by: i64) {
        if self.total == 0 {
            return;
        }
        self.active_index = self.active_index.saturating_add(by);
        if let Some(session) = self.drag.as_mut() {
            session.rebase();
        }
    }

    fn restart_autoplay(&mut self, now: Millis) {
        self.autoplay_due = if self.total > 0 && self.drag.is_none() {
            Some(now + self.autoplay_interval)
        } else {
            None
        };
    }
}
