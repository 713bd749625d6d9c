//! Circular offset arithmetic shared by every layout.
//!
//! The controller never wraps the active index. Instead every consumer asks
//! how far a slide sits from the active one on the circle, as a signed value
//! in `(-total/2, total/2]`.

/// Shortest signed circular distance from `active_index` to `slide_index`.
///
/// Computed in integer arithmetic so repeated calls never drift. Returns
/// `0.0` for an empty carousel; callers are expected to bail out earlier.
pub fn normalized_offset(slide_index: i64, active_index: i64, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as i64;
    let r = (slide_index.rem_euclid(total) - active_index.rem_euclid(total)).rem_euclid(total);
    if r * 2 > total {
        (r - total) as f64
    } else {
        r as f64
    }
}

/// Wraps a continuous offset (normalized offset plus drag) back into
/// `(-total/2, total/2]`.
///
/// Returns `None` for an empty carousel or a non-finite offset.
pub fn wrap_offset(offset: f64, total: usize) -> Option<f64> {
    if total == 0 || !offset.is_finite() {
        return None;
    }
    let total = total as f64;
    let r = offset.rem_euclid(total);
    Some(if r > total / 2.0 { r - total } else { r })
}

/// Continuous offset of a slide with the live drag applied.
pub fn dragged_offset(slide_index: i64, active_index: i64, drag_fraction: f64, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    wrap_offset(normalized_offset(slide_index, active_index, total) + drag_fraction, total)
}

/// Rounds half toward positive infinity, the way browser layouts round.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offsets_for_four_slides() {
        assert_eq!(normalized_offset(0, 0, 4), 0.0);
        assert_eq!(normalized_offset(1, 0, 4), 1.0);
        assert_eq!(normalized_offset(2, 0, 4), 2.0);
        assert_eq!(normalized_offset(3, 0, 4), -1.0);
        // -2 is outside the half-open range and maps to +2
        assert_eq!(normalized_offset(0, 2, 4), 2.0);
    }

    #[test]
    fn unbounded_active_index() {
        assert_eq!(normalized_offset(0, 13, 10), -3.0);
        assert_eq!(normalized_offset(9, -1, 10), 0.0);
        assert_eq!(normalized_offset(0, i64::MAX, 10), 3.0);
        assert_eq!(normalized_offset(3, i64::MIN, 10), 1.0);
    }

    #[test]
    fn empty_carousel() {
        assert_eq!(normalized_offset(3, 1, 0), 0.0);
        assert_eq!(wrap_offset(0.5, 0), None);
        assert_eq!(dragged_offset(0, 0, 0.1, 0), None);
    }

    #[test]
    fn drag_crossing_the_seam_wraps() {
        // slide 2 of 4 sits at +2; a further +0.25 pushes it past the seam
        assert_eq!(dragged_offset(2, 0, 0.25, 4), Some(-1.75));
        assert_eq!(dragged_offset(0, 0, -0.25, 4), Some(-0.25));
    }

    #[test]
    fn non_finite_offsets_are_rejected() {
        assert_eq!(wrap_offset(f64::NAN, 4), None);
        assert_eq!(wrap_offset(f64::INFINITY, 4), None);
    }

    #[test]
    fn rounding_matches_browser_layout() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(0.4), 0.0);
    }

    proptest! {
        #[test]
        fn offset_stays_in_half_open_range(
            slide in -1_000i64..1_000,
            active in -100_000i64..100_000,
            total in 1usize..64,
        ) {
            let o = normalized_offset(slide, active, total);
            let half = total as f64 / 2.0;
            prop_assert!(o > -half && o <= half);
        }

        #[test]
        fn offset_ignores_whole_turns(
            slide in 0i64..64,
            active in -10_000i64..10_000,
            total in 1usize..64,
            k in -50i64..50,
        ) {
            let shifted = active + k * total as i64;
            prop_assert_eq!(
                normalized_offset(slide, active, total),
                normalized_offset(slide, shifted, total)
            );
        }

        #[test]
        fn wrapped_drag_stays_in_range(
            slide in 0i64..32,
            active in -1_000i64..1_000,
            drag in -5.0f64..5.0,
            total in 1usize..32,
        ) {
            let o = dragged_offset(slide, active, drag, total).unwrap();
            let half = total as f64 / 2.0;
            prop_assert!(o > -half - 1e-9 && o <= half + 1e-9);
        }
    }
}
