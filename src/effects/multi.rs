use crate::projector::{LayoutProjector, SlideContext, SlideTransform};

pub const CUTOFF: f64 = 3.0;

/// Row of fixed-width cards with a small gutter.
pub struct Multi;

impl Multi {
    pub fn at_offset(o: f64) -> SlideTransform {
        if o.abs() > CUTOFF {
            return SlideTransform::HIDDEN;
        }
        SlideTransform {
            translate_x_pct: o * 110.0,
            ..SlideTransform::IDENTITY
        }
    }
}

impl LayoutProjector for Multi {
    fn project(&self, slide: &SlideContext) -> SlideTransform {
        slide.offset().map_or(SlideTransform::HIDDEN, Multi::at_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_keep_scale_and_opacity() {
        let t = Multi::at_offset(2.0);
        assert_eq!(t.translate_x_pct, 220.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.opacity, 1.0);
        assert!(Multi::at_offset(-3.0).visible);
        assert!(!Multi::at_offset(-3.2).visible);
    }
}
