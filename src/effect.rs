use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::*;
use crate::effects::{
    coverflow::Coverflow, cube::Cube, multi::Multi, stack::Stack, standard::Standard, zoom_out::ZoomOut,
};
use crate::projector::LayoutProjector;

/// The six carousel styles the playground can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Effect {
    Standard,
    ZoomOut,
    Multi,
    Coverflow,
    Stack,
    #[default]
    Cube,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown effect '{0}' (expected one of: cube, stack, zoom-out, standard, multiple, coverflow)")]
pub struct ParseEffectError(String);

/// Curve used when a slide animates to a new transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    Ease,
}

/// How long and along which curve slides move to their new transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: Millis,
    pub easing: Easing,
}

impl Transition {
    pub const INSTANT: Transition = Transition { duration_ms: 0, easing: Easing::EaseOut };

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}

impl Effect {
    /// Catalogue order, as presented by the effect picker.
    pub const ALL: [Effect; 6] = [
        Effect::Cube,
        Effect::Stack,
        Effect::ZoomOut,
        Effect::Standard,
        Effect::Multi,
        Effect::Coverflow,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Effect::Standard => "standard",
            Effect::ZoomOut => "zoom-out",
            Effect::Multi => "multiple",
            Effect::Coverflow => "coverflow",
            Effect::Stack => "stack",
            Effect::Cube => "cube",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Effect::Standard => "Standard",
            Effect::ZoomOut => "Zoom Out",
            Effect::Multi => "Carousel",
            Effect::Coverflow => "Coverflow",
            Effect::Stack => "Stack",
            Effect::Cube => "Cube 3D",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Effect::Standard => "Classic Slider",
            Effect::ZoomOut => "Focus Zoom Effect",
            Effect::Multi => "Multi-Item View",
            Effect::Coverflow => "iTunes Style 3D",
            Effect::Stack => "Card Deck Effect",
            Effect::Cube => "360° Infinite Panoramic Rotation",
        }
    }

    /// Pixel width of one slide step, used to turn drag pixels into slides.
    ///
    /// `container_width` is `None` until the host has measured its container;
    /// unusable measurements fall back to a 300px card.
    pub fn card_width(self, container_width: Option<f64>) -> f64 {
        if self == Effect::Cube {
            return CUBE_FACE_WIDTH;
        }
        let Some(w) = container_width.filter(|w| w.is_finite() && *w > 0.0) else {
            return FALLBACK_CARD_WIDTH;
        };
        match self {
            Effect::Standard => w,
            Effect::ZoomOut => w * 0.45,
            Effect::Multi => w * 0.30 + 24.0,
            Effect::Coverflow => w * 0.35,
            Effect::Stack => w * 0.8,
            Effect::Cube => CUBE_FACE_WIDTH,
        }
    }

    pub fn transition(self, dragging: bool) -> Transition {
        if dragging {
            return Transition::INSTANT;
        }
        match self {
            Effect::Standard | Effect::Multi | Effect::Coverflow => {
                Transition { duration_ms: TRANSITION_MS, easing: Easing::EaseOut }
            }
            Effect::Stack => Transition { duration_ms: STACK_TRANSITION_MS, easing: Easing::Ease },
            Effect::ZoomOut | Effect::Cube => Transition { duration_ms: TRANSITION_MS, easing: Easing::Ease },
        }
    }

    pub fn projector(self) -> &'static dyn LayoutProjector {
        match self {
            Effect::Standard => &Standard,
            Effect::ZoomOut => &ZoomOut,
            Effect::Multi => &Multi,
            Effect::Coverflow => &Coverflow,
            Effect::Stack => &Stack,
            Effect::Cube => &Cube,
        }
    }

    /// Copyable keen-slider snippet reproducing this style.
    pub fn snippet(self) -> &'static str {
        crate::snippets::snippet(self)
    }

    pub fn next(self) -> Effect {
        let i = Self::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Effect {
    type Err = ParseEffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Effect::Standard),
            "zoom-out" | "zoomout" | "zoom" => Ok(Effect::ZoomOut),
            "multiple" | "multi" | "carousel" => Ok(Effect::Multi),
            "coverflow" => Ok(Effect::Coverflow),
            "stack" => Ok(Effect::Stack),
            "cube" => Ok(Effect::Cube),
            _ => Err(ParseEffectError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_widths() {
        let w = Some(1000.0);
        assert_eq!(Effect::Standard.card_width(w), 1000.0);
        assert_eq!(Effect::ZoomOut.card_width(w), 450.0);
        assert_eq!(Effect::Multi.card_width(w), 324.0);
        assert_eq!(Effect::Coverflow.card_width(w), 350.0);
        assert_eq!(Effect::Stack.card_width(w), 800.0);
        assert_eq!(Effect::Cube.card_width(w), 280.0);
    }

    #[test]
    fn unmeasured_container_falls_back() {
        assert_eq!(Effect::Standard.card_width(None), 300.0);
        assert_eq!(Effect::Stack.card_width(Some(0.0)), 300.0);
        assert_eq!(Effect::Multi.card_width(Some(f64::NAN)), 300.0);
        assert_eq!(Effect::Cube.card_width(None), 280.0);
    }

    #[test]
    fn dragging_is_instant() {
        for effect in Effect::ALL {
            assert!(effect.transition(true).is_instant());
            assert!(!effect.transition(false).is_instant());
        }
        assert_eq!(Effect::Stack.transition(false).duration_ms, 500);
        assert_eq!(Effect::Cube.transition(false).duration_ms, 700);
        assert_eq!(Effect::Coverflow.transition(false).easing, Easing::EaseOut);
        assert_eq!(Effect::ZoomOut.transition(false).easing, Easing::Ease);
    }

    #[test]
    fn ids_round_trip_through_parsing() {
        for effect in Effect::ALL {
            assert_eq!(effect.id().parse::<Effect>(), Ok(effect));
        }
        assert!("wobble".parse::<Effect>().is_err());
    }

    #[test]
    fn cycling_visits_every_effect() {
        let mut e = Effect::default();
        let mut seen = vec![e];
        for _ in 0..5 {
            e = e.next();
            seen.push(e);
        }
        assert_eq!(seen, Effect::ALL.to_vec());
        assert_eq!(e.next(), Effect::Cube);
    }
}
