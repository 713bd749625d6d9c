use crate::offset::round_half_up;
use crate::projector::{LayoutProjector, SlideContext, SlideTransform};

pub const CUTOFF: f64 = 4.5;

/// Centre slide in focus, neighbours shrunk and faded behind it.
pub struct ZoomOut;

impl ZoomOut {
    pub fn at_offset(o: f64, dragging: bool) -> SlideTransform {
        let dist = o.abs();
        if dist > CUTOFF {
            return SlideTransform::HIDDEN;
        }
        let near = dist.min(1.0);
        SlideTransform {
            translate_x_pct: o * 60.0,
            scale: 1.1 - near * 0.45,
            opacity: (1.0 - near * 0.6).max(0.4),
            z_index: 20 - round_half_up(dist) as i32,
            highlighted: dist < 0.5 && !dragging,
            ..SlideTransform::IDENTITY
        }
    }
}

impl LayoutProjector for ZoomOut {
    fn project(&self, slide: &SlideContext) -> SlideTransform {
        slide
            .offset()
            .map_or(SlideTransform::HIDDEN, |o| ZoomOut::at_offset(o, slide.dragging))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn active_slide_is_enlarged_and_ringed() {
        let t = ZoomOut::at_offset(0.0, false);
        assert!(close(t.scale, 1.1));
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.z_index, 20);
        assert!(t.highlighted);
        assert!(!ZoomOut::at_offset(0.0, true).highlighted);
    }

    #[test]
    fn neighbours_shrink_and_fade_to_a_floor() {
        let t = ZoomOut::at_offset(-1.0, false);
        assert!(close(t.scale, 0.65));
        assert!(close(t.opacity, 0.4));
        assert_eq!(t.translate_x_pct, -60.0);
        assert_eq!(t.z_index, 19);

        let far = ZoomOut::at_offset(3.0, false);
        assert!(close(far.scale, 0.65));
        assert!(close(far.opacity, 0.4));
        assert_eq!(far.z_index, 17);
        assert!(!ZoomOut::at_offset(4.6, false).visible);
    }
}
