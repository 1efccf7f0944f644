/// Image preview module
///
/// This module handles:
/// - Deciding which files the picker offers
/// - Decoding picked files off the UI thread
/// - Downscaling them to a display-sized RGBA handle

pub mod decode;

pub use decode::{decode_preview, is_supported_image, IMAGE_EXTENSIONS};
