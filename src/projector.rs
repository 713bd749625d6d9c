use crate::offset::dragged_offset;

/// Point a slide rotates and scales around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformOrigin {
    #[default]
    Center,
    Bottom,
}

/// Visual parameters of one slide for one frame.
///
/// Percent translations are relative to the slide's own box, pixel ones are
/// absolute. 3D terms (`rotate_y_deg`, `translate_z_px`) are applied after
/// the 2D translation, in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransform {
    pub translate_x_pct: f64,
    pub translate_x_px: f64,
    pub translate_y_px: f64,
    pub translate_z_px: f64,
    pub rotate_deg: f64,
    pub rotate_y_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    /// Alpha of the black overlay painted over the image.
    pub shade: f64,
    pub z_index: i32,
    pub visible: bool,
    /// Active-slide ring (zoom-out only).
    pub highlighted: bool,
    /// Thickness planes stacked behind the face (coverflow only).
    pub depth_layers: u8,
    pub origin: TransformOrigin,
}

impl SlideTransform {
    pub const IDENTITY: SlideTransform = SlideTransform {
        translate_x_pct: 0.0,
        translate_x_px: 0.0,
        translate_y_px: 0.0,
        translate_z_px: 0.0,
        rotate_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
        opacity: 1.0,
        shade: 0.0,
        z_index: 0,
        visible: true,
        highlighted: false,
        depth_layers: 0,
        origin: TransformOrigin::Center,
    };

    /// Transform of a culled slide.
    pub const HIDDEN: SlideTransform = SlideTransform {
        visible: false,
        opacity: 0.0,
        ..SlideTransform::IDENTITY
    };

    /// Interpolates the continuous terms towards `to`; discrete terms switch
    /// to the target immediately.
    pub fn lerp(&self, to: &SlideTransform, t: f64) -> SlideTransform {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        SlideTransform {
            translate_x_pct: mix(self.translate_x_pct, to.translate_x_pct),
            translate_x_px: mix(self.translate_x_px, to.translate_x_px),
            translate_y_px: mix(self.translate_y_px, to.translate_y_px),
            translate_z_px: mix(self.translate_z_px, to.translate_z_px),
            rotate_deg: mix(self.rotate_deg, to.rotate_deg),
            rotate_y_deg: mix(self.rotate_y_deg, to.rotate_y_deg),
            scale: mix(self.scale, to.scale),
            opacity: mix(self.opacity, to.opacity),
            shade: mix(self.shade, to.shade),
            ..*to
        }
    }
}

/// Everything a projector may know about one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideContext {
    pub index: usize,
    pub active_index: i64,
    pub drag_fraction: f64,
    pub total: usize,
    pub dragging: bool,
}

impl SlideContext {
    /// Circular offset from the active slide with the live drag applied.
    pub fn offset(&self) -> Option<f64> {
        dragged_offset(self.index as i64, self.active_index, self.drag_fraction, self.total)
    }
}

/// Transform applied to the container all slides live in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub perspective: Option<f64>,
    pub translate_z_px: f64,
    pub rotate_x_deg: f64,
}

impl Stage {
    pub const FLAT: Stage = Stage { perspective: None, translate_z_px: 0.0, rotate_x_deg: 0.0 };
}

/// One spatial layout algorithm.
///
/// Implementations are pure: the same context always yields the same
/// transform.
pub trait LayoutProjector {
    fn project(&self, slide: &SlideContext) -> SlideTransform;

    fn stage(&self, _total: usize) -> Stage {
        Stage::FLAT
    }
}
