use carousel_playground::effects::cube;
use carousel_playground::{CarouselController, CarouselState, Effect, PointerEvent, normalized_offset, project};

const IMAGES: [&str; 4] = ["A", "B", "C", "D"];

fn controller(effect: Effect) -> CarouselController {
    let mut c = CarouselController::new(IMAGES.len(), effect, 1000, 0);
    c.set_container_width(300.0);
    c
}

#[test]
fn standard_shows_the_active_slide_and_its_neighbours() {
    let c = controller(Effect::Standard);
    let frame = project(&IMAGES, &c.snapshot());
    assert_eq!(frame.visible_indices(), vec![0, 1, 3]);

    let offsets: Vec<f64> = [3, 0, 1].iter().map(|&i| normalized_offset(i, 0, 4)).collect();
    assert_eq!(offsets, vec![-1.0, 0.0, 1.0]);
    assert_eq!(normalized_offset(2, 0, 4), 2.0);

    let images: Vec<&str> = frame.visible().map(|s| *s.image).collect();
    assert_eq!(images, vec!["A", "B", "D"]);
}

#[test]
fn slow_partial_drag_settles_back() {
    let mut c = controller(Effect::Standard);
    c.handle(PointerEvent::down(100.0, 1_000));
    c.handle(PointerEvent::moved(220.0, 1_300));

    // live tracking while the pointer is down
    let live = project(&IMAGES, &c.snapshot());
    assert!(live.transition.is_instant());
    let active = live.slides[0].transform;
    assert!((active.translate_x_pct - 40.0).abs() < 1e-9);

    let settle = c.handle(PointerEvent::up(220.0, 1_600)).unwrap();
    assert_eq!(settle.move_count, 0);
    assert!(!settle.flicked);
    assert_eq!(c.active_index(), 0);
    assert_eq!(c.drag_fraction(), 0.0);
    assert_eq!(c.state(), CarouselState::Idle);

    let settled = project(&IMAGES, &c.snapshot());
    assert_eq!(settled.transition.duration_ms, 700);
    assert_eq!(settled.slides[0].transform.translate_x_pct, 0.0);
}

#[test]
fn flick_steps_back_one_slide() {
    let mut c = controller(Effect::Standard);
    c.handle(PointerEvent::down(0.0, 0));
    c.handle(PointerEvent::moved(50.0, 100));
    c.handle(PointerEvent::up(50.0, 150));
    assert_eq!(c.active_index(), -1);
    assert_eq!(c.active_slot(), Some(3));
}

#[test]
fn leaving_mid_drag_never_leaves_a_session_open() {
    let mut c = controller(Effect::Coverflow);
    c.handle(PointerEvent::down(10.0, 0));
    c.handle(PointerEvent::moved(-400.0, 500));
    let settle = c.handle(PointerEvent::leave(-400.0, 900)).unwrap();
    assert!(settle.move_count > 0);
    assert!(!c.is_dragging());
    assert!(c.next_autoplay_at().is_some());
}

#[test]
fn autoplay_runs_past_the_end_without_wrapping() {
    for total in [1usize, 2, 4, 9] {
        let images: Vec<usize> = (0..total).collect();
        let mut c = CarouselController::new(total, Effect::ZoomOut, 1000, 0);
        for t in [1000, 2000, 3000] {
            c.update(t);
        }
        assert_eq!(c.active_index(), 3);
        let frame = project(&images, &c.snapshot());
        assert_eq!(frame.active_slot, Some(3 % total));
    }
}

#[test]
fn autoplay_pauses_during_drag_and_resumes_after() {
    let mut c = controller(Effect::Stack);
    c.update(1000);
    c.handle(PointerEvent::down(0.0, 1_200));
    for t in [2_000, 3_000, 4_000] {
        assert!(!c.update(t));
    }
    c.handle(PointerEvent::up(0.0, 4_100));
    assert_eq!(c.active_index(), 1);
    assert!(!c.update(5_000));
    assert!(c.update(5_100));
    assert_eq!(c.active_index(), 2);
}

#[test]
fn small_cube_galleries_use_three_sides() {
    for n in [1usize, 2] {
        let images: Vec<usize> = (0..n).collect();
        let c = CarouselController::new(n, Effect::Cube, 1000, 0);
        let frame = project(&images, &c.snapshot());
        assert!(frame.slides[0].visible());
        if n == 2 {
            // second face sits a third of a turn away, beyond the cull angle
            assert!(!frame.slides[1].visible());
        }
        assert!((frame.stage.translate_z_px + cube::radius(3)).abs() < 1e-9);
    }
}

#[test]
fn empty_gallery_renders_nothing() {
    let images: [&str; 0] = [];
    let mut c = CarouselController::new(0, Effect::Coverflow, 1000, 0);
    c.handle(PointerEvent::down(0.0, 0));
    assert!(!c.update(10_000));
    assert!(project(&images, &c.snapshot()).is_empty());
}

#[test]
fn switching_gallery_mid_drag_starts_over() {
    let mut c = controller(Effect::Multi);
    c.next();
    c.handle(PointerEvent::down(0.0, 0));
    c.handle(PointerEvent::moved(150.0, 50));
    c.set_images(6, 80);
    let images: Vec<usize> = (0..6).collect();
    let frame = project(&images, &c.snapshot());
    assert_eq!(frame.active_slot, Some(0));
    assert_eq!(frame.slides[0].transform.translate_x_pct, 0.0);
    assert!(!frame.transition.is_instant());
}
