use crate::projector::{LayoutProjector, SlideContext, SlideTransform};

pub const CUTOFF: f64 = 1.5;

/// Full-bleed panes sliding side by side.
pub struct Standard;

impl Standard {
    pub fn at_offset(o: f64) -> SlideTransform {
        if o.abs() > CUTOFF {
            return SlideTransform::HIDDEN;
        }
        SlideTransform {
            translate_x_pct: o * 100.0,
            ..SlideTransform::IDENTITY
        }
    }
}

impl LayoutProjector for Standard {
    fn project(&self, slide: &SlideContext) -> SlideTransform {
        slide.offset().map_or(SlideTransform::HIDDEN, Standard::at_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_sit_one_pane_apart() {
        assert_eq!(Standard::at_offset(-1.0).translate_x_pct, -100.0);
        assert_eq!(Standard::at_offset(0.25).translate_x_pct, 25.0);
        assert!(Standard::at_offset(1.5).visible);
        assert!(!Standard::at_offset(1.51).visible);
        assert!(!Standard::at_offset(-2.0).visible);
    }
}
