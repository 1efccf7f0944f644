/// State management module
///
/// This module handles all composer state, including:
/// - Shared data structures (data.rs)
/// - The bounded caption (caption.rs)
/// - The preview carousel cursor (carousel.rs)
/// - Selected images and their decode slots (selection.rs)
/// - The modal state machine tying them together (composer.rs)

pub mod caption;
pub mod carousel;
pub mod composer;
pub mod data;
pub mod selection;
