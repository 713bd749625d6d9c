use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

use crate::error::GalleryError;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

// --- Collect image files of a directory, sorted by name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, GalleryError> {
    let read_dir_err = |source: std::io::Error| GalleryError::ReadDir { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(GalleryError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

// EXIF orientation of a JPEG; 1 (upright) when absent or unreadable
fn read_orientation(image_path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

// --- Load image, apply EXIF rotation, upload texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, GalleryError> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| GalleryError::ReadFile { path: image_path.to_path_buf(), source })?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| GalleryError::Decode { path: image_path.to_path_buf(), reason: e.to_string() })?;

    // 3 = 180°, 6 = 90° CW, 8 = 90° CCW; mirrored orientations are left as-is
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    rl.load_texture_from_image(thread, &image).map_err(|e| GalleryError::Texture {
        name: image_path.display().to_string(),
        reason: e.to_string(),
    })
}
