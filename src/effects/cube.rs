use std::f64::consts::PI;

use crate::constants::*;
use crate::projector::{LayoutProjector, SlideContext, SlideTransform, Stage};

/// Number of polygon sides used for `total` images.
pub fn effective_sides(total: usize) -> usize {
    total.max(CUBE_MIN_SIDES)
}

/// Distance from the polygon centre to each face.
pub fn radius(total: usize) -> f64 {
    let n = effective_sides(total) as f64;
    ((CUBE_FACE_WIDTH + CUBE_FACE_SPACING) / 2.0) / (PI / n).tan()
}

/// Folds an angle into `[-180, 180]`.
pub fn wrap_degrees(angle: f64) -> f64 {
    let mut a = angle % 360.0;
    if a > 180.0 {
        a -= 360.0;
    }
    if a < -180.0 {
        a += 360.0;
    }
    a
}

/// Images laid on the faces of a regular polygon spinning around Y.
pub struct Cube;

impl Cube {
    /// Unwrapped world angle of face `index`.
    pub fn face_angle(index: usize, active_index: i64, drag_fraction: f64, total: usize) -> f64 {
        let step = 360.0 / effective_sides(total) as f64;
        index as f64 * step + (active_index as f64 - drag_fraction) * -step
    }
}

impl LayoutProjector for Cube {
    fn project(&self, slide: &SlideContext) -> SlideTransform {
        if slide.total == 0 || !slide.drag_fraction.is_finite() {
            return SlideTransform::HIDDEN;
        }
        let angle = Cube::face_angle(slide.index, slide.active_index, slide.drag_fraction, slide.total);
        let facing = wrap_degrees(angle);
        if facing.abs() > CUBE_CULL_DEG {
            return SlideTransform::HIDDEN;
        }
        SlideTransform {
            rotate_y_deg: angle,
            translate_z_px: radius(slide.total),
            shade: (facing.abs() / 180.0 * 0.8).min(0.8),
            // no stacking context in 3D; paint back faces first
            z_index: (facing.to_radians().cos() * 100.0).round() as i32,
            ..SlideTransform::IDENTITY
        }
    }

    fn stage(&self, total: usize) -> Stage {
        Stage {
            perspective: Some(CUBE_PERSPECTIVE),
            translate_z_px: -radius(total),
            rotate_x_deg: CUBE_TILT_DEG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(index: usize, active_index: i64, drag_fraction: f64, total: usize) -> SlideContext {
        SlideContext { index, active_index, drag_fraction, total, dragging: false }
    }

    #[test]
    fn small_galleries_still_build_a_triangle() {
        assert_eq!(effective_sides(0), 3);
        assert_eq!(effective_sides(1), 3);
        assert_eq!(effective_sides(2), 3);
        assert_eq!(effective_sides(7), 7);
        assert!((radius(1) - radius(3)).abs() < 1e-9);
        assert!(radius(2).is_finite() && radius(2) > 0.0);
    }

    #[test]
    fn square_radius() {
        // four faces: half of 330 over tan(45°)
        assert!((radius(4) - 165.0).abs() < 1e-9);
    }

    #[test]
    fn angles_wrap_into_half_turns() {
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(-190.0), 170.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
        assert_eq!(wrap_degrees(-540.0), -180.0);
    }

    #[test]
    fn front_face_is_lit_and_back_face_culled() {
        let front = Cube.project(&ctx(0, 0, 0.0, 4));
        assert!(front.visible);
        assert_eq!(front.shade, 0.0);
        assert_eq!(front.z_index, 100);

        let side = Cube.project(&ctx(1, 0, 0.0, 4));
        assert!(side.visible);
        assert!((side.rotate_y_deg - 90.0).abs() < 1e-9);
        assert!((side.shade - 0.4).abs() < 1e-9);

        assert!(!Cube.project(&ctx(2, 0, 0.0, 4)).visible);
    }

    #[test]
    fn rotation_keeps_turning_past_a_full_revolution() {
        let a = Cube::face_angle(0, 4, 0.0, 4);
        assert_eq!(a, -360.0);
        assert!(Cube.project(&ctx(0, 4, 0.0, 4)).visible);
    }

    #[test]
    fn dragging_right_turns_the_previous_face_in() {
        let t = Cube.project(&ctx(3, 0, 0.5, 4));
        assert!((wrap_degrees(t.rotate_y_deg) + 45.0).abs() < 1e-9);
    }

    #[test]
    fn stage_pulls_back_by_the_radius() {
        let stage = Cube.stage(4);
        assert!((stage.translate_z_px + 165.0).abs() < 1e-9);
        assert_eq!(stage.rotate_x_deg, -2.0);
    }
}
