/// Native dialogs used by the composer
///
/// The app owns one `Dialogs` handle and asks it to open the image picker
/// or show a blocking alert.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

use crate::preview::IMAGE_EXTENSIONS;

pub trait Dialogs {
    /// Let the user choose images. `None` means the picker was dismissed.
    fn pick_images(&self) -> Option<Vec<PathBuf>>;

    /// Show a blocking warning the user has to acknowledge
    fn alert(&self, title: &str, message: &str);
}

/// Dialogs backed by the desktop's native file picker and message boxes
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_images(&self) -> Option<Vec<PathBuf>> {
        FileDialog::new()
            .set_title("Select photos for your post")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_files()
    }

    fn alert(&self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
