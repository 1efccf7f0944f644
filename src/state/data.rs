/// Shared data structures for the composer state
///
/// These structs represent the data that flows between
/// the preview decoder and the UI layer.

use iced::widget::image::Handle;
use std::path::PathBuf;

/// An image file the user picked for a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Full path on the local disk
    pub path: PathBuf,
    /// Filename only (e.g., "IMG_0001.jpg")
    pub name: String,
}

impl ImageFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self { path, name }
    }
}

/// A decoded, display-ready preview of one selected image
#[derive(Debug, Clone)]
pub struct Preview {
    pub name: String,
    /// Dimensions after downscaling
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

impl Preview {
    /// Wrap already-decoded RGBA pixels
    pub fn from_rgba(name: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            handle: Handle::from_rgba(width, height, pixels),
        }
    }
}

/// Snapshot of what would be shared when the user submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// Caption length in characters
    pub caption_chars: usize,
    /// Decoded images that would be attached
    pub image_count: usize,
}
