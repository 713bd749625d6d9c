use carousel_playground::{Easing, Size, SlideTransform, Stage, TransformOrigin, Transition};
use raylib::prelude::*;

const DEPTH_COLOR: Color = Color::new(30, 41, 59, 255);
const RING_COLOR: Color = Color::new(99, 102, 241, 255);

fn easer(easing: Easing) -> ease::EaseFn {
    match easing {
        Easing::EaseOut => ease::cubic_out,
        Easing::Ease => ease::sine_in_out,
    }
}

/// Displayed transform of one slide, easing towards its latest target.
pub struct AnimatedSlide {
    shown: SlideTransform,
    from: SlideTransform,
    to: SlideTransform,
    tween: Option<ease::Tween>,
    elapsed: f32,
    duration: f32,
}

impl AnimatedSlide {
    pub fn new() -> Self {
        Self {
            shown: SlideTransform::HIDDEN,
            from: SlideTransform::HIDDEN,
            to: SlideTransform::HIDDEN,
            tween: None,
            elapsed: 0.0,
            duration: 0.0,
        }
    }

    pub fn shown(&self) -> &SlideTransform {
        &self.shown
    }

    pub fn retarget(&mut self, target: SlideTransform, transition: Transition) {
        if target == self.to {
            return;
        }
        // Slides entering or leaving the window jump, like unmounted elements
        if transition.is_instant() || !self.shown.visible || !target.visible {
            self.shown = target;
            self.from = target;
            self.to = target;
            self.tween = None;
            return;
        }
        self.from = self.shown;
        self.to = target;
        self.elapsed = 0.0;
        self.duration = transition.duration_ms as f32 / 1000.0;
        self.tween = Some(ease::Tween::new(easer(transition.easing), 0.0, 1.0, self.duration));
    }

    pub fn advance(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        let t = tween.apply(dt);
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.shown = self.to;
            self.tween = None;
        } else {
            self.shown = self.from.lerp(&self.to, t as f64);
        }
    }
}

/// Where one slide lands on screen.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub pivot: Vector2,
    pub origin: Vector2,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    /// Horizontal direction the face is turned to, for thickness planes.
    pub yaw: f32,
}

impl Placement {
    fn dest(&self) -> Rectangle {
        Rectangle::new(self.pivot.x, self.pivot.y, self.width, self.height)
    }
}

/// Flattens a transform onto the screen with a simple perspective divide.
pub fn place(container: Rectangle, slide: Size, t: &SlideTransform, stage: &Stage) -> Placement {
    let yaw = t.rotate_y_deg.to_radians();
    let mut x = t.translate_x_pct / 100.0 * slide.width + t.translate_x_px;
    let mut y = t.translate_y_px;

    x += t.translate_z_px * yaw.sin();
    let z = t.translate_z_px * yaw.cos() + stage.translate_z_px;
    y += z * stage.rotate_x_deg.to_radians().sin();

    let depth = match stage.perspective {
        Some(p) if p - z > 1.0 => p / (p - z),
        _ => 1.0,
    };
    x *= depth;
    y *= depth;

    let width = (slide.width * t.scale * yaw.cos().abs() * depth) as f32;
    let height = (slide.height * t.scale * depth) as f32;
    let center = Vector2::new(
        container.x + container.width * 0.5 + x as f32,
        container.y + container.height * 0.5 + y as f32,
    );
    let (pivot, origin) = match t.origin {
        TransformOrigin::Center => (center, Vector2::new(width * 0.5, height * 0.5)),
        TransformOrigin::Bottom => (
            Vector2::new(center.x, center.y + height * 0.5),
            Vector2::new(width * 0.5, height),
        ),
    };
    Placement { pivot, origin, width, height, rotation: t.rotate_deg as f32, yaw: yaw as f32 }
}

// Source rectangle that covers `width`x`height` without stretching
fn cover_source(texture: &Texture2D, width: f32, height: f32) -> Rectangle {
    let tex_w = texture.width() as f32;
    let tex_h = texture.height() as f32;
    if width <= 0.0 || height <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_w, tex_h);
    }
    let target = width / height;
    if tex_w / tex_h > target {
        let w = tex_h * target;
        Rectangle::new((tex_w - w) * 0.5, 0.0, w, tex_h)
    } else {
        let h = tex_w / target;
        Rectangle::new(0.0, (tex_h - h) * 0.5, tex_w, h)
    }
}

pub fn draw_slide(d: &mut impl RaylibDraw, texture: &Texture2D, slide: Size, p: &Placement, t: &SlideTransform) {
    if !t.visible || p.width < 1.0 || p.height < 1.0 {
        return;
    }
    let alpha = t.opacity.clamp(0.0, 1.0) as f32;

    // Thickness planes peek out on the side the cover is turned away from
    for n in (1..=t.depth_layers).rev() {
        let mut dest = p.dest();
        dest.x -= n as f32 * p.yaw.sin();
        d.draw_rectangle_pro(dest, p.origin, p.rotation, DEPTH_COLOR.fade(alpha));
    }

    let source = cover_source(texture, slide.width as f32, slide.height as f32);
    d.draw_texture_pro(texture, source, p.dest(), p.origin, p.rotation, Color::WHITE.fade(alpha));

    if t.shade > 0.0 {
        let shade = (t.shade as f32 * alpha).clamp(0.0, 1.0);
        d.draw_rectangle_pro(p.dest(), p.origin, p.rotation, Color::BLACK.fade(shade));
    }
    if t.highlighted {
        let ring = Rectangle::new(p.pivot.x - p.origin.x, p.pivot.y - p.origin.y, p.width, p.height);
        d.draw_rectangle_lines_ex(ring, 2.0, RING_COLOR);
    }
}
