use crate::constants::{COVERFLOW_DEPTH_LAYERS, COVERFLOW_PERSPECTIVE};
use crate::offset::round_half_up;
use crate::projector::{LayoutProjector, SlideContext, SlideTransform, Stage};

pub const CUTOFF: f64 = 4.5;

// bg-black/20 at half opacity
const SIDE_SHADE: f64 = 0.1;

/// Covers fanned out in perspective around the centre one.
pub struct Coverflow;

impl Coverflow {
    pub fn at_offset(o: f64) -> SlideTransform {
        let dist = o.abs();
        if dist > CUTOFF {
            return SlideTransform::HIDDEN;
        }
        SlideTransform {
            translate_x_pct: o * 50.0,
            rotate_y_deg: o * -35.0,
            scale: 1.2 - dist.min(2.0) * 0.2,
            opacity: 1.0 - dist.min(3.0) * 0.15,
            shade: if dist < 0.5 { 0.0 } else { SIDE_SHADE },
            z_index: 20 - round_half_up(dist) as i32,
            depth_layers: COVERFLOW_DEPTH_LAYERS,
            ..SlideTransform::IDENTITY
        }
    }
}

impl LayoutProjector for Coverflow {
    fn project(&self, slide: &SlideContext) -> SlideTransform {
        slide.offset().map_or(SlideTransform::HIDDEN, Coverflow::at_offset)
    }

    fn stage(&self, _total: usize) -> Stage {
        Stage {
            perspective: Some(COVERFLOW_PERSPECTIVE),
            ..Stage::FLAT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn centre_cover_faces_the_viewer() {
        let t = Coverflow::at_offset(0.0);
        assert_eq!(t.rotate_y_deg, 0.0);
        assert!(close(t.scale, 1.2));
        assert_eq!(t.shade, 0.0);
        assert_eq!(t.depth_layers, 5);
    }

    #[test]
    fn side_covers_turn_inwards() {
        let left = Coverflow::at_offset(-1.0);
        assert!(close(left.rotate_y_deg, 35.0));
        assert!(close(left.translate_x_pct, -50.0));
        assert!(close(left.scale, 1.0));
        assert!(close(left.opacity, 0.85));
        assert_eq!(left.z_index, 19);
        assert!(left.shade > 0.0);

        let far = Coverflow::at_offset(4.0);
        assert!(close(far.scale, 0.8));
        assert!(close(far.opacity, 0.55));
        assert!(!Coverflow::at_offset(4.75).visible);
    }
}
