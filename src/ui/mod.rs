/// User interface module
///
/// Views are plain functions from state to `Element`:
/// - `shell.rs` - top bar, sidebar and content slot
/// - `composer.rs` - the "create post" modal and its exit confirmation
/// - `overlay.rs` - dimmed backdrop for modals

pub mod composer;
pub mod overlay;
pub mod shell;

use iced::font::{self, Font};

pub(crate) const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};
