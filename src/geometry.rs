use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::CUBE_FACE_WIDTH;
use crate::effect::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Shape class of the gallery, taken from its first image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageAspect {
    Tall,
    Square,
    #[default]
    Wide,
}

impl ImageAspect {
    /// Classifies intrinsic image dimensions. Degenerate sizes count as wide.
    pub fn classify(width: f64, height: f64) -> ImageAspect {
        if !(width > 0.0 && height > 0.0) {
            return ImageAspect::Wide;
        }
        let ratio = width / height;
        if ratio < 0.85 {
            ImageAspect::Tall
        } else if ratio < 1.2 {
            ImageAspect::Square
        } else {
            ImageAspect::Wide
        }
    }

    /// Width over height of a slide box of this class.
    pub fn ratio(self) -> f64 {
        match self {
            ImageAspect::Tall => 3.0 / 4.0,
            ImageAspect::Square => 1.0,
            ImageAspect::Wide => 16.0 / 9.0,
        }
    }

    pub fn is_portrait(self) -> bool {
        matches!(self, ImageAspect::Tall | ImageAspect::Square)
    }
}

/// Aspect constraint of the preview container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerRatio {
    #[default]
    Auto,
    UltraWide,
    Wide,
    Classic,
    Square,
    Portrait,
    Tall,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown container ratio '{0}' (expected auto, 21/9, 16/9, 4/3, 1/1, 3/4 or 9/16)")]
pub struct ParseRatioError(String);

impl ContainerRatio {
    pub const ALL: [ContainerRatio; 7] = [
        ContainerRatio::Auto,
        ContainerRatio::UltraWide,
        ContainerRatio::Wide,
        ContainerRatio::Classic,
        ContainerRatio::Square,
        ContainerRatio::Portrait,
        ContainerRatio::Tall,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContainerRatio::Auto => "auto",
            ContainerRatio::UltraWide => "21/9",
            ContainerRatio::Wide => "16/9",
            ContainerRatio::Classic => "4/3",
            ContainerRatio::Square => "1/1",
            ContainerRatio::Portrait => "3/4",
            ContainerRatio::Tall => "9/16",
        }
    }

    /// Width over height; `auto` follows the gallery's image class.
    pub fn resolve(self, images: ImageAspect) -> f64 {
        match self {
            ContainerRatio::Auto => images.ratio(),
            ContainerRatio::UltraWide => 21.0 / 9.0,
            ContainerRatio::Wide => 16.0 / 9.0,
            ContainerRatio::Classic => 4.0 / 3.0,
            ContainerRatio::Square => 1.0,
            ContainerRatio::Portrait => 3.0 / 4.0,
            ContainerRatio::Tall => 9.0 / 16.0,
        }
    }

    pub fn next(self) -> ContainerRatio {
        let i = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ContainerRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContainerRatio {
    type Err = ParseRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(':', "/");
        Self::ALL
            .into_iter()
            .find(|r| r.label() == key)
            .ok_or_else(|| ParseRatioError(s.to_string()))
    }
}

/// Largest box of `ratio` that fits inside `bounds`.
pub fn fit(bounds: Size, ratio: f64) -> Size {
    if !(ratio > 0.0) || !(bounds.width > 0.0 && bounds.height > 0.0) {
        return Size::default();
    }
    if bounds.width / bounds.height > ratio {
        Size::new(bounds.height * ratio, bounds.height)
    } else {
        Size::new(bounds.width, bounds.width / ratio)
    }
}

/// Size of one slide's box inside a container of `container` size.
pub fn slide_box(effect: Effect, container: Size, images: ImageAspect) -> Size {
    let sized = |fraction: f64| {
        let width = container.width * fraction;
        Size::new(width, width / images.ratio())
    };
    match effect {
        Effect::Standard => container,
        Effect::ZoomOut => sized(0.45),
        Effect::Multi => sized(0.30),
        Effect::Coverflow => sized(0.35),
        Effect::Stack => sized(0.75),
        Effect::Cube => {
            let height = match images {
                ImageAspect::Tall => CUBE_FACE_WIDTH * 1.33,
                ImageAspect::Square => CUBE_FACE_WIDTH,
                ImageAspect::Wide => CUBE_FACE_WIDTH * 0.5625,
            };
            Size::new(CUBE_FACE_WIDTH, height)
        }
    }
}
