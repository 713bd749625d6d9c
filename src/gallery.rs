use std::path::{Path, PathBuf};

use carousel_playground::ImageAspect;
use log::{info, warn};
use rand::Rng;
use raylib::prelude::*;

use crate::error::GalleryError;
use crate::texture_loader::{is_image_path, load_sorted_image_paths, load_texture_with_exif_rotation};

const PLACEHOLDER_COUNT: usize = 10;
const PLACEHOLDER_WIDTH: i32 = 800;
const PLACEHOLDER_HEIGHT: i32 = 500;

pub struct GalleryImage {
    pub texture: Texture2D,
    pub name: String,
}

impl GalleryImage {
    pub fn width(&self) -> f32 {
        self.texture.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.texture.height() as f32
    }
}

/// The image set shown by the playground.
pub struct Gallery {
    pub images: Vec<GalleryImage>,
    /// Loaded from the user's files rather than generated.
    pub custom: bool,
}

impl Gallery {
    /// Generated stand-in cards, one random hue each.
    pub fn placeholders(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Gallery, GalleryError> {
        let mut rng = rand::rng();
        let mut images = Vec::with_capacity(PLACEHOLDER_COUNT);
        for i in 0..PLACEHOLDER_COUNT {
            let hue = rng.random_range(0.0..360.0);
            let mut image = Image::gen_image_color(
                PLACEHOLDER_WIDTH,
                PLACEHOLDER_HEIGHT,
                Color::color_from_hsv(hue, 0.55, 0.75),
            );
            let name = format!("Slide {}", i + 1);
            image.draw_text(&name, 40, PLACEHOLDER_HEIGHT - 100, 60, Color::WHITE);
            let texture = rl
                .load_texture_from_image(thread, &image)
                .map_err(|e| GalleryError::Texture { name: name.clone(), reason: e.to_string() })?;
            images.push(GalleryImage { texture, name });
        }
        Ok(Gallery { images, custom: false })
    }

    pub fn load_dir(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Result<Gallery, GalleryError> {
        let paths = load_sorted_image_paths(dir)?;
        let gallery = Gallery::from_paths(rl, thread, &paths);
        if gallery.images.is_empty() {
            return Err(GalleryError::NoImages(dir.to_path_buf()));
        }
        info!("loaded {} images from {:?}", gallery.images.len(), dir);
        Ok(gallery)
    }

    /// Loads every readable image; unreadable ones are skipped.
    pub fn from_paths(rl: &mut RaylibHandle, thread: &RaylibThread, paths: &[PathBuf]) -> Gallery {
        let mut images = Vec::new();
        for path in paths.iter().filter(|p| is_image_path(p)) {
            match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    images.push(GalleryImage { texture, name });
                }
                Err(e) => warn!("skipping image: {}", e),
            }
        }
        Gallery { images, custom: true }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Shape class from the first image.
    pub fn aspect(&self) -> ImageAspect {
        self.images
            .first()
            .map_or(ImageAspect::default(), |img| ImageAspect::classify(img.width() as f64, img.height() as f64))
    }
}
