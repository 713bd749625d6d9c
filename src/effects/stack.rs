use crate::offset::round_half_up;
use crate::projector::{LayoutProjector, SlideContext, SlideTransform, TransformOrigin};

/// Cards further than this behind the top card are culled.
pub const QUEUE_CUTOFF: f64 = 3.0;
/// Cards that already left are culled past this point.
pub const PEEL_CUTOFF: f64 = -1.5;

// bg-black/40 over queued cards
const QUEUED_SHADE: f64 = 0.4;

/// A deck of cards: passed cards peel off to the left, queued cards wait
/// slightly offset behind the top one.
pub struct Stack;

impl Stack {
    pub fn at_offset(o: f64) -> SlideTransform {
        if o > QUEUE_CUTOFF || o < PEEL_CUTOFF {
            return SlideTransform::HIDDEN;
        }
        if o < 0.0 {
            SlideTransform {
                translate_x_pct: o * 100.0,
                rotate_deg: o * 10.0,
                opacity: (1.0 + o).max(0.0),
                z_index: 100,
                origin: TransformOrigin::Bottom,
                ..SlideTransform::IDENTITY
            }
        } else {
            SlideTransform {
                translate_x_px: o * 8.0,
                translate_y_px: -o * 8.0,
                scale: 1.0 - o * 0.05,
                opacity: (1.0 - o * 0.2).max(0.0),
                shade: if o > 0.0 { QUEUED_SHADE } else { 0.0 },
                z_index: 50 - round_half_up(o) as i32,
                origin: TransformOrigin::Bottom,
                ..SlideTransform::IDENTITY
            }
        }
    }
}

impl LayoutProjector for Stack {
    fn project(&self, slide: &SlideContext) -> SlideTransform {
        slide.offset().map_or(SlideTransform::HIDDEN, Stack::at_offset)
    }
}
