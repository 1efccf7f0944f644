use crate::error::ComposerError;

/// Maximum caption length, counted in characters
pub const MAX_CAPTION_CHARS: usize = 2200;

/// Post caption that never exceeds [`MAX_CAPTION_CHARS`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caption {
    text: String,
    chars: usize,
}

impl Caption {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters, as shown by the counter
    pub fn len(&self) -> usize {
        self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    /// Replace the caption with `candidate` if it fits.
    ///
    /// On rejection the previous text is kept untouched.
    pub fn set(&mut self, candidate: &str) -> Result<(), ComposerError> {
        let chars = candidate.chars().count();
        if chars > MAX_CAPTION_CHARS {
            return Err(ComposerError::CaptionTooLong {
                attempted: chars,
                limit: MAX_CAPTION_CHARS,
            });
        }

        candidate.clone_into(&mut self.text);
        self.chars = chars;
        Ok(())
    }
}
