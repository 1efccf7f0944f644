/// One-at-a-time cursor over the published previews
///
/// The cursor does not own the previews; callers pass the current length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self, len: usize) -> bool {
        self.index + 1 < len
    }

    /// Step back one image. Returns false at the first image.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one image. Returns false at the last image.
    pub fn next(&mut self, len: usize) -> bool {
        if !self.can_next(len) {
            return false;
        }
        self.index += 1;
        true
    }

    /// Re-clamp after the preview collection changed
    pub fn sync(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
