use crate::constants::*;
use crate::offset::round_half_up;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Leave,
}

/// Pointer input in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f64,
    pub at: Millis,
}

impl PointerEvent {
    pub fn down(x: f64, at: Millis) -> Self {
        Self { kind: PointerKind::Down, x, at }
    }

    pub fn moved(x: f64, at: Millis) -> Self {
        Self { kind: PointerKind::Move, x, at }
    }

    pub fn up(x: f64, at: Millis) -> Self {
        Self { kind: PointerKind::Up, x, at }
    }

    pub fn leave(x: f64, at: Millis) -> Self {
        Self { kind: PointerKind::Leave, x, at }
    }
}

/// An open pointer drag, from press until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    start_x: f64,
    current_x: f64,
    started_at: Millis,
}

impl DragSession {
    pub fn begin(x: f64, at: Millis) -> Self {
        Self { start_x: x, current_x: x, started_at: at }
    }

    pub fn track(&mut self, x: f64) {
        if x.is_finite() {
            self.current_x = x;
        }
    }

    /// Restarts the delta from the current pointer position.
    pub fn rebase(&mut self) {
        self.start_x = self.current_x;
    }

    pub fn delta_x(&self) -> f64 {
        self.current_x - self.start_x
    }

    pub fn duration(&self, now: Millis) -> Millis {
        now.saturating_sub(self.started_at)
    }
}

/// How a released drag resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settle {
    /// Slides to move the active index by; zero means snap back.
    pub move_count: i64,
    /// The step came from the flick rule rather than distance.
    pub flicked: bool,
}

impl Settle {
    /// Resolves a release: whole cards travelled, or one step for a quick
    /// short flick.
    pub fn resolve(delta_x: f64, card_width: f64, duration_ms: Millis) -> Settle {
        let cards = if card_width > 0.0 { delta_x / card_width } else { f64::NAN };
        let travelled = if cards.is_finite() { -round_half_up(cards) as i64 } else { 0 };
        if travelled == 0 && duration_ms < FLICK_MAX_DURATION_MS && delta_x.abs() > FLICK_MIN_DISTANCE_PX {
            let step = if delta_x > 0.0 { -1 } else { 1 };
            return Settle { move_count: step, flicked: true };
        }
        Settle { move_count: travelled, flicked: false }
    }

    pub fn is_snap_back(&self) -> bool {
        self.move_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_cards_travelled() {
        assert_eq!(Settle::resolve(-620.0, 300.0, 900).move_count, 2);
        assert_eq!(Settle::resolve(450.0, 300.0, 900).move_count, -2);
        // half a card rounds up: commits when dragging right only
        assert_eq!(Settle::resolve(150.0, 300.0, 900).move_count, -1);
        assert!(Settle::resolve(-150.0, 300.0, 900).is_snap_back());
    }

    #[test]
    fn unbounded_card_ratio_snaps_back() {
        assert!(Settle::resolve(-1e10, 1e-300, 600).is_snap_back());
        assert!(Settle::resolve(f64::INFINITY, 300.0, 600).is_snap_back());
        assert!(Settle::resolve(120.0, 0.0, 600).is_snap_back());
    }

    #[test]
    fn quick_short_drag_flicks_one_step() {
        let s = Settle::resolve(50.0, 300.0, 150);
        assert_eq!(s, Settle { move_count: -1, flicked: true });
        let s = Settle::resolve(-41.0, 300.0, 299);
        assert_eq!(s, Settle { move_count: 1, flicked: true });
    }

    #[test]
    fn slow_or_tiny_drags_snap_back() {
        assert!(Settle::resolve(120.0, 300.0, 600).is_snap_back());
        assert!(Settle::resolve(50.0, 300.0, 300).is_snap_back());
        assert!(Settle::resolve(40.0, 300.0, 10).is_snap_back());
        assert!(Settle::resolve(0.0, 300.0, 10).is_snap_back());
    }

    #[test]
    fn session_tracks_and_rebases() {
        let mut s = DragSession::begin(100.0, 1_000);
        s.track(160.0);
        assert_eq!(s.delta_x(), 60.0);
        s.track(f64::NAN);
        assert_eq!(s.delta_x(), 60.0);
        s.rebase();
        assert_eq!(s.delta_x(), 0.0);
        assert_eq!(s.duration(1_250), 250);
        assert_eq!(s.duration(900), 0);
    }
}
