/// Preview generation for picked images
/// Decodes the file and shrinks it to a display-sized RGBA buffer
use image::imageops::FilterType;
use image::ImageReader;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::DecodeError;
use crate::state::data::Preview;

/// File extensions offered by the picker (formats the `image` crate decodes)
pub const IMAGE_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

/// Check whether a path looks like an image we can preview
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Generate a preview for one image file
pub async fn decode_preview(path: PathBuf, max_edge: u32) -> Result<Preview, DecodeError> {
    // Spawn blocking task for CPU-bound work
    tokio::task::spawn_blocking(move || decode_preview_blocking(&path, max_edge))
        .await
        .map_err(|e| DecodeError::Worker(e.to_string()))?
}

/// Blocking version of preview generation
pub fn decode_preview_blocking(path: &Path, max_edge: u32) -> Result<Preview, DecodeError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| DecodeError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let img = reader.decode().map_err(|e| DecodeError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // Only shrink; small images are shown at their own size
    let img = if img.width() > max_edge || img.height() > max_edge {
        img.resize(max_edge, max_edge, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    debug!(%name, width, height, "decoded preview");
    Ok(Preview::from_rgba(name, width, height, rgba.into_raw()))
}
