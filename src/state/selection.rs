/// The set of images chosen for a post and their decode slots
///
/// Every file gets a slot at selection time. Decodes complete in any
/// order, each writing only its own slot, and the previews are published
/// in selection order once every slot has settled.

use std::path::PathBuf;

use super::data::{ImageFile, Preview};
use crate::error::{ComposerError, DecodeError};

/// Most images a single post can carry
pub const MAX_IMAGES: usize = 10;

/// Identifies which slot of which selection a decode result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeTicket {
    /// Composer instance that issued the job
    pub session: u64,
    /// Selection generation within that composer
    pub generation: u64,
    pub slot: usize,
}

/// Work item handed to the preview decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeJob {
    pub ticket: DecodeTicket,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
enum Slot {
    Pending,
    Ready(Preview),
    Failed,
}

#[derive(Debug, Clone)]
pub struct Selection {
    files: Vec<ImageFile>,
    slots: Vec<Slot>,
    /// Empty until every slot has settled
    previews: Vec<Preview>,
}

impl Selection {
    /// Build a selection, rejecting more than [`MAX_IMAGES`] files
    pub fn new(files: Vec<ImageFile>) -> Result<Self, ComposerError> {
        if files.len() > MAX_IMAGES {
            return Err(ComposerError::TooManyImages {
                selected: files.len(),
                limit: MAX_IMAGES,
            });
        }

        let slots = vec![Slot::Pending; files.len()];
        Ok(Self {
            files,
            slots,
            previews: Vec::new(),
        })
    }

    pub fn files(&self) -> &[ImageFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// One decode job per file, tagged for the given session and generation
    pub fn jobs(&self, session: u64, generation: u64) -> Vec<DecodeJob> {
        self.files
            .iter()
            .enumerate()
            .map(|(slot, file)| DecodeJob {
                ticket: DecodeTicket {
                    session,
                    generation,
                    slot,
                },
                path: file.path.clone(),
            })
            .collect()
    }

    /// Record a decode outcome for `slot`.
    ///
    /// Returns false if the slot does not exist or has already settled.
    pub fn fill(&mut self, slot: usize, result: Result<Preview, DecodeError>) -> bool {
        let Some(entry) = self.slots.get_mut(slot) else {
            return false;
        };
        if !matches!(entry, Slot::Pending) {
            return false;
        }

        *entry = match result {
            Ok(preview) => Slot::Ready(preview),
            Err(_) => Slot::Failed,
        };

        if self.is_ready() {
            self.previews = self
                .slots
                .iter()
                .filter_map(|slot| match slot {
                    Slot::Ready(preview) => Some(preview.clone()),
                    _ => None,
                })
                .collect();
        }

        true
    }

    /// Number of slots that have a result, successful or not
    pub fn settled(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !matches!(slot, Slot::Pending))
            .count()
    }

    pub fn is_ready(&self) -> bool {
        self.settled() == self.slots.len()
    }

    pub fn failed(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Failed))
            .count()
    }

    /// Previews in selection order, empty while decodes are outstanding
    pub fn previews(&self) -> &[Preview] {
        &self.previews
    }
}
