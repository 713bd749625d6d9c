use std::path::PathBuf;

use carousel_playground::constants::*;
use carousel_playground::geometry::{fit, slide_box};
use carousel_playground::{CarouselController, ContainerRatio, Effect, Size, project};
use log::{info, warn};
use raylib::prelude::*;

use crate::gallery::Gallery;
use crate::renderer::{AnimatedSlide, draw_slide, place};

const HUD_TOP: f32 = 96.0;
const HUD_BOTTOM: f32 = 72.0;
const MARGIN: f32 = 32.0;

const BACKGROUND: Color = Color::new(2, 6, 23, 255);
const PANEL: Color = Color::new(17, 24, 39, 128);
const MUTED: Color = Color::new(100, 116, 139, 255);
const ACCENT: Color = Color::new(129, 140, 248, 255);

pub fn now_ms(rl: &RaylibHandle) -> Millis {
    (rl.get_time() * 1000.0) as Millis
}

fn copy_status<E>(result: &Result<(), E>) -> &'static str {
    match result {
        Ok(()) => "Copied!",
        Err(_) => "Copy failed",
    }
}

// Widest preview each effect is laid out in
fn max_container_width(effect: Effect) -> Option<f32> {
    match effect {
        Effect::ZoomOut | Effect::Standard => Some(896.0),
        Effect::Coverflow => Some(1024.0),
        Effect::Stack => Some(448.0),
        Effect::Multi | Effect::Cube => None,
    }
}

/// The interactive preview: one carousel, its gallery and the controls
/// around it.
pub struct Playground {
    gallery: Gallery,
    controller: CarouselController,
    ratio: ContainerRatio,
    slides: Vec<AnimatedSlide>,
    status: Option<(String, Millis)>,
}

impl Playground {
    pub fn new(gallery: Gallery, effect: Effect, speed: Millis, ratio: ContainerRatio, now: Millis) -> Self {
        let controller = CarouselController::new(gallery.len(), effect, speed, now);
        let slides = (0..gallery.len()).map(|_| AnimatedSlide::new()).collect();
        Self { gallery, controller, ratio, slides, status: None }
    }

    fn set_gallery(&mut self, gallery: Gallery, now: Millis) {
        self.controller.set_images(gallery.len(), now);
        self.slides = (0..gallery.len()).map(|_| AnimatedSlide::new()).collect();
        self.gallery = gallery;
    }

    fn flash(&mut self, message: impl Into<String>, now: Millis) {
        self.status = Some((message.into(), now + 2000));
    }

    /// Preview rectangle for the current window size, effect and ratio.
    pub fn container(&self, screen_w: f32, screen_h: f32) -> Rectangle {
        let mut bounds = Size::new(
            (screen_w - 2.0 * MARGIN) as f64,
            (screen_h - HUD_TOP - HUD_BOTTOM) as f64,
        );
        if let Some(max) = max_container_width(self.controller.effect()) {
            bounds.width = bounds.width.min(max as f64);
        }
        let size = fit(bounds, self.ratio.resolve(self.gallery.aspect()));
        Rectangle::new(
            (screen_w - size.width as f32) * 0.5,
            HUD_TOP + (screen_h - HUD_TOP - HUD_BOTTOM - size.height as f32) * 0.5,
            size.width as f32,
            size.height as f32,
        )
    }

    pub fn handle_input(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let now = now_ms(rl);
        let container = self.container(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        self.controller.set_container_width(container.width as f64);

        // --- Pointer ---
        let mouse = rl.get_mouse_position();
        let x = (mouse.x - container.x) as f64;
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && container.check_collision_point_rec(mouse) {
            self.controller.pointer_down(x, now);
        }
        if self.controller.is_dragging() {
            self.controller.pointer_move(x);
            if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
                self.controller.pointer_up(x, now);
            } else if !rl.is_cursor_on_screen() {
                self.controller.pointer_leave(x, now);
            }
        }

        // --- Keyboard ---
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.controller.next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.controller.prev();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_UP) {
            let speed = self.controller.autoplay_interval() + AUTOPLAY_STEP_MS;
            self.controller.set_autoplay_interval(speed, now);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
            let speed = self.controller.autoplay_interval().saturating_sub(AUTOPLAY_STEP_MS);
            self.controller.set_autoplay_interval(speed, now);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            self.controller.set_effect(self.controller.effect().next());
        }
        let number_keys = [
            KeyboardKey::KEY_ONE,
            KeyboardKey::KEY_TWO,
            KeyboardKey::KEY_THREE,
            KeyboardKey::KEY_FOUR,
            KeyboardKey::KEY_FIVE,
            KeyboardKey::KEY_SIX,
        ];
        for (key, effect) in number_keys.into_iter().zip(Effect::ALL) {
            if rl.is_key_pressed(key) {
                self.controller.set_effect(effect);
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            self.ratio = self.ratio.next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_C) {
            let effect = self.controller.effect();
            let copied = rl.set_clipboard_text(effect.snippet());
            if let Err(e) = &copied {
                warn!("could not copy {} snippet: {}", effect.id(), e);
            } else {
                info!("copied {} snippet to clipboard", effect.id());
            }
            self.flash(copy_status(&copied), now);
        }

        // --- Gallery ---
        if rl.is_file_dropped() {
            let dropped: Vec<PathBuf> = rl.load_dropped_files().paths().iter().map(|p| PathBuf::from(*p)).collect();
            let gallery = Gallery::from_paths(rl, thread, &dropped);
            if gallery.images.is_empty() {
                warn!("none of the {} dropped files could be loaded", dropped.len());
                self.flash("No usable images dropped", now);
            } else {
                info!("showing {} custom images", gallery.len());
                self.set_gallery(gallery, now);
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) && self.gallery.custom {
            match Gallery::placeholders(rl, thread) {
                Ok(gallery) => self.set_gallery(gallery, now),
                Err(e) => warn!("could not restore default gallery: {}", e),
            }
        }
    }

    pub fn update(&mut self, now: Millis, dt: f32) {
        self.controller.update(now);
        if self.status.as_ref().is_some_and(|(_, until)| now >= *until) {
            self.status = None;
        }

        let snapshot = self.controller.snapshot();
        let frame = project(&self.gallery.images, &snapshot);
        for (slide, animated) in frame.slides.iter().zip(self.slides.iter_mut()) {
            animated.retarget(slide.transform, frame.transition);
            animated.advance(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, container: Rectangle) {
        d.clear_background(BACKGROUND);
        d.draw_rectangle_rec(container, PANEL);

        let effect = self.controller.effect();
        if self.gallery.images.is_empty() {
            d.draw_text("No images to display", container.x as i32 + 20, container.y as i32 + 20, 20, MUTED);
        } else {
            let snapshot = self.controller.snapshot();
            let frame = project(&self.gallery.images, &snapshot);
            let aspect = self.gallery.aspect();
            let size = Size::new(container.width as f64, container.height as f64);
            let slide_size = slide_box(effect, size, aspect);

            let mut order: Vec<usize> = (0..self.slides.len()).filter(|i| self.slides[*i].shown().visible).collect();
            order.sort_by_key(|i| self.slides[*i].shown().z_index);

            let mut scissor = d.begin_scissor_mode(
                container.x as i32,
                container.y as i32,
                container.width as i32,
                container.height as i32,
            );
            for i in order {
                let shown = self.slides[i].shown();
                let placement = place(container, slide_size, shown, &frame.stage);
                draw_slide(&mut scissor, &self.gallery.images[i].texture, slide_size, &placement, shown);
            }
            drop(scissor);

            if effect == Effect::Standard {
                self.draw_dots(d, container, frame.active_slot);
            }
        }

        self.draw_hud(d, container);
    }

    fn draw_dots(&self, d: &mut RaylibDrawHandle, container: Rectangle, active: Option<usize>) {
        let count = self.gallery.len();
        let total_w = count as f32 * 14.0 + 24.0;
        let mut x = container.x + (container.width - total_w) * 0.5;
        let y = container.y + container.height - 24.0;
        for i in 0..count {
            let (w, color) = if Some(i) == active { (32.0, Color::WHITE) } else { (8.0, Color::WHITE.fade(0.4)) };
            d.draw_rectangle_rounded(Rectangle::new(x, y, w, 6.0), 1.0, 4, color);
            x += w + 6.0;
        }
    }

    fn draw_hud(&self, d: &mut RaylibDrawHandle, container: Rectangle) {
        let effect = self.controller.effect();
        let aspect = self.gallery.aspect();

        d.draw_text(effect.title(), MARGIN as i32, 20, 30, Color::WHITE);
        d.draw_text(effect.description(), MARGIN as i32, 56, 16, MUTED);

        let header = format!(
            "{}  |  ratio {}  |  auto-play {} ms",
            if aspect.is_portrait() { "Portrait" } else { "Landscape" },
            self.ratio,
            self.controller.autoplay_interval(),
        );
        let header_w = measure_text(&header, 16);
        d.draw_text(&header, d.get_screen_width() - header_w - MARGIN as i32, 28, 16, ACCENT);

        let mut source = if self.gallery.custom {
            format!("Showing {} custom images", self.gallery.len())
        } else {
            "Using default gallery".to_string()
        };
        if let Some(image) = self.controller.active_slot().and_then(|i| self.gallery.images.get(i)) {
            source.push_str(&format!("  |  {}", image.name));
        }
        let bottom = (container.y + container.height) as i32 + 16;
        d.draw_text(&source, MARGIN as i32, bottom, 14, MUTED);
        d.draw_text(
            "drag / arrows: navigate   1-6, tab: effect   up/down: speed   R: ratio   C: copy code   drop files: upload   backspace: reset",
            MARGIN as i32,
            bottom + 22,
            14,
            MUTED,
        );

        if let Some((message, _)) = &self.status {
            d.draw_text(message, container.x as i32 + 16, container.y as i32 + 16, 20, Color::WHITE);
        }
    }
}
