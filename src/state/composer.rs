/// State machine behind the "create post" modal
///
/// A composer lives exactly as long as the post page is shown. It owns
/// the selected images, their previews, the caption and the carousel
/// cursor, plus the two visibility flags (modal, exit confirmation).
///
/// Decode results are matched against the live ticket (session and
/// generation), so results for a cleared or replaced selection, or for a
/// composer that has since closed, are dropped.

use tracing::debug;

use super::caption::Caption;
use super::carousel::Carousel;
use super::data::{ImageFile, PostDraft, Preview};
use super::selection::{DecodeJob, DecodeTicket, Selection};
use crate::error::{ComposerError, DecodeError};
use crate::route::Route;

/// Observable state of the modal, derived from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Modal shown, no images chosen
    Empty,
    /// Modal shown with a selection (decoding or decoded)
    Previewing,
    /// Exit confirmation shown over either of the above
    ConfirmingExit,
    /// Modal dismissed; terminal
    Closed,
}

/// What the back arrow did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// A selection existed and was discarded
    ClearedSelection,
    /// Nothing to discard, so the exit confirmation was opened
    ConfirmRequested,
}

#[derive(Debug)]
pub struct Composer {
    session: u64,
    generation: u64,
    modal_open: bool,
    confirm_open: bool,
    selection: Option<Selection>,
    caption: Caption,
    carousel: Carousel,
}

impl Composer {
    /// Open a fresh composer. `session` must be unique per instance.
    pub fn new(session: u64) -> Self {
        Self {
            session,
            generation: 0,
            modal_open: true,
            confirm_open: false,
            selection: None,
            caption: Caption::default(),
            carousel: Carousel::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.modal_open {
            Phase::Closed
        } else if self.confirm_open {
            Phase::ConfirmingExit
        } else if self.selection.is_some() {
            Phase::Previewing
        } else {
            Phase::Empty
        }
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_confirming(&self) -> bool {
        self.confirm_open
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    // ========== Images ==========

    /// Replace the selection with `files` and return the decode jobs to run.
    ///
    /// More than the allowed number of files is rejected and the current
    /// selection is left as it was. An empty pick changes nothing.
    pub fn select_files(&mut self, files: Vec<ImageFile>) -> Result<Vec<DecodeJob>, ComposerError> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let selection = Selection::new(files)?;

        self.generation += 1;
        let jobs = selection.jobs(self.session, self.generation);
        debug!(
            session = self.session,
            generation = self.generation,
            count = selection.len(),
            "selection accepted"
        );

        self.selection = Some(selection);
        self.carousel.reset();
        Ok(jobs)
    }

    /// Apply a decode result. Returns false if the result was stale.
    pub fn decode_finished(&mut self, ticket: DecodeTicket, result: Result<Preview, DecodeError>) -> bool {
        if !self.modal_open || ticket.session != self.session || ticket.generation != self.generation {
            debug!(?ticket, live_generation = self.generation, "dropping stale preview");
            return false;
        }

        let Some(selection) = self.selection.as_mut() else {
            return false;
        };

        let applied = selection.fill(ticket.slot, result);
        self.carousel.sync(selection.previews().len());
        applied
    }

    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    pub fn selected_files(&self) -> &[ImageFile] {
        self.selection.as_ref().map(Selection::files).unwrap_or_default()
    }

    /// Published previews; empty until every selected file has decoded
    pub fn previews(&self) -> &[Preview] {
        self.selection.as_ref().map(Selection::previews).unwrap_or_default()
    }

    /// `(settled, total)` while a selection is still decoding
    pub fn decode_progress(&self) -> Option<(usize, usize)> {
        self.selection
            .as_ref()
            .filter(|s| !s.is_ready())
            .map(|s| (s.settled(), s.len()))
    }

    /// Files whose decode failed in the current selection
    pub fn failed_previews(&self) -> usize {
        self.selection.as_ref().map_or(0, Selection::failed)
    }

    // ========== Carousel ==========

    pub fn carousel_index(&self) -> usize {
        self.carousel.index()
    }

    pub fn current_preview(&self) -> Option<&Preview> {
        self.previews().get(self.carousel.index())
    }

    pub fn can_show_previous(&self) -> bool {
        self.carousel.can_previous()
    }

    pub fn can_show_next(&self) -> bool {
        self.carousel.can_next(self.previews().len())
    }

    pub fn show_previous(&mut self) -> bool {
        self.carousel.previous()
    }

    pub fn show_next(&mut self) -> bool {
        let len = self.previews().len();
        self.carousel.next(len)
    }

    // ========== Caption ==========

    pub fn caption(&self) -> &Caption {
        &self.caption
    }

    /// Replace the caption; over-long text is refused and the old text kept
    pub fn edit_caption(&mut self, text: &str) -> Result<(), ComposerError> {
        self.caption.set(text)
    }

    // ========== Leaving ==========

    /// Back arrow: discard the selection if there is one, otherwise ask to leave
    pub fn go_back(&mut self) -> BackOutcome {
        if self.selection.is_some() {
            self.clear_selection();
            BackOutcome::ClearedSelection
        } else {
            self.request_close();
            BackOutcome::ConfirmRequested
        }
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        // Outstanding decodes belong to the discarded selection
        self.generation += 1;
        self.carousel.reset();
        debug!(session = self.session, "selection cleared");
    }

    pub fn request_close(&mut self) {
        if self.modal_open {
            self.confirm_open = true;
        }
    }

    pub fn cancel_close(&mut self) {
        self.confirm_open = false;
    }

    /// Dismiss the modal for good and return where to navigate
    pub fn confirm_close(&mut self) -> Route {
        self.confirm_open = false;
        self.modal_open = false;
        self.generation += 1;
        debug!(session = self.session, "composer closed");
        Route::Home
    }

    // ========== Submit ==========

    /// Snapshot of the post as it stands; does not change any state
    pub fn draft(&self) -> PostDraft {
        PostDraft {
            caption_chars: self.caption.len(),
            image_count: self.previews().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::caption::MAX_CAPTION_CHARS;
    use crate::state::selection::MAX_IMAGES;
    use std::path::PathBuf;

    fn files(names: &[&str]) -> Vec<ImageFile> {
        names
            .iter()
            .map(|n| ImageFile::from_path(PathBuf::from(format!("/photos/{n}"))))
            .collect()
    }

    fn many_files(n: usize) -> Vec<ImageFile> {
        (0..n)
            .map(|i| ImageFile::from_path(PathBuf::from(format!("/photos/{i}.jpg"))))
            .collect()
    }

    fn preview_for(job: &DecodeJob) -> Preview {
        let name = job.path.file_name().unwrap().to_string_lossy().to_string();
        Preview::from_rgba(name, 1, 1, vec![255, 255, 255, 255])
    }

    fn finish_all(composer: &mut Composer, jobs: &[DecodeJob]) {
        for job in jobs {
            assert!(composer.decode_finished(job.ticket, Ok(preview_for(job))));
        }
    }

    fn preview_names(composer: &Composer) -> Vec<String> {
        composer.previews().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_starts_open_and_empty() {
        let composer = Composer::new(1);
        assert_eq!(composer.phase(), Phase::Empty);
        assert!(composer.previews().is_empty());
        assert_eq!(composer.carousel_index(), 0);
        assert!(composer.caption().is_empty());
    }

    #[test]
    fn test_accepted_selection_yields_one_preview_per_file() {
        for n in [1, 4, MAX_IMAGES] {
            let mut composer = Composer::new(1);
            let jobs = composer.select_files(many_files(n)).unwrap();
            assert_eq!(jobs.len(), n);
            assert_eq!(composer.phase(), Phase::Previewing);

            finish_all(&mut composer, &jobs);
            assert_eq!(composer.previews().len(), n);
            assert_eq!(composer.decode_progress(), None);
        }
    }

    #[test]
    fn test_too_many_files_keeps_previous_selection() {
        let mut composer = Composer::new(1);
        let jobs = composer.select_files(files(&["a.jpg", "b.jpg"])).unwrap();
        finish_all(&mut composer, &jobs);

        let err = composer.select_files(many_files(MAX_IMAGES + 1)).unwrap_err();

        assert!(matches!(err, ComposerError::TooManyImages { selected: 11, .. }));
        assert_eq!(composer.selected_files().len(), 2);
        assert_eq!(preview_names(&composer), ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_too_many_files_from_empty() {
        let mut composer = Composer::new(1);
        assert!(composer.select_files(many_files(12)).is_err());
        assert_eq!(composer.phase(), Phase::Empty);
    }

    #[test]
    fn test_empty_pick_is_ignored() {
        let mut composer = Composer::new(1);
        assert!(composer.select_files(Vec::new()).unwrap().is_empty());
        assert_eq!(composer.phase(), Phase::Empty);
    }

    #[test]
    fn test_previews_follow_selection_order() {
        let mut composer = Composer::new(1);
        let jobs = composer
            .select_files(files(&["first.png", "second.png", "third.png"]))
            .unwrap();

        for job in jobs.iter().rev() {
            composer.decode_finished(job.ticket, Ok(preview_for(job)));
        }

        assert_eq!(preview_names(&composer), ["first.png", "second.png", "third.png"]);
    }

    #[test]
    fn test_progress_while_decoding() {
        let mut composer = Composer::new(1);
        let jobs = composer.select_files(many_files(3)).unwrap();
        assert_eq!(composer.decode_progress(), Some((0, 3)));

        composer.decode_finished(jobs[1].ticket, Ok(preview_for(&jobs[1])));
        assert_eq!(composer.decode_progress(), Some((1, 3)));
        assert!(composer.previews().is_empty());
        assert!(composer.current_preview().is_none());
    }

    #[test]
    fn test_failed_decode_still_completes_selection() {
        let mut composer = Composer::new(1);
        let jobs = composer.select_files(files(&["ok.png", "broken.png"])).unwrap();

        composer.decode_finished(jobs[0].ticket, Ok(preview_for(&jobs[0])));
        composer.decode_finished(
            jobs[1].ticket,
            Err(DecodeError::Decode {
                path: jobs[1].path.clone(),
                message: "truncated".to_string(),
            }),
        );

        assert_eq!(composer.decode_progress(), None);
        assert_eq!(composer.failed_previews(), 1);
        assert_eq!(preview_names(&composer), ["ok.png"]);
    }

    #[test]
    fn test_results_for_replaced_selection_are_dropped() {
        let mut composer = Composer::new(1);
        let old = composer.select_files(files(&["old.png"])).unwrap();
        let new = composer.select_files(files(&["new.png"])).unwrap();

        assert!(!composer.decode_finished(old[0].ticket, Ok(preview_for(&old[0]))));
        assert_eq!(composer.decode_progress(), Some((0, 1)));

        finish_all(&mut composer, &new);
        assert_eq!(preview_names(&composer), ["new.png"]);
    }

    #[test]
    fn test_results_after_clear_are_dropped() {
        let mut composer = Composer::new(1);
        let jobs = composer.select_files(files(&["a.png"])).unwrap();
        assert_eq!(composer.go_back(), BackOutcome::ClearedSelection);

        assert!(!composer.decode_finished(jobs[0].ticket, Ok(preview_for(&jobs[0]))));
        assert!(!composer.has_selection());
    }

    #[test]
    fn test_results_from_other_session_are_dropped() {
        let mut first = Composer::new(1);
        let jobs = first.select_files(files(&["a.png"])).unwrap();

        let mut second = Composer::new(2);
        second.select_files(files(&["b.png"])).unwrap();

        assert!(!second.decode_finished(jobs[0].ticket, Ok(preview_for(&jobs[0]))));
    }

    #[test]
    fn test_results_after_close_are_dropped() {
        let mut composer = Composer::new(1);
        let jobs = composer.select_files(files(&["a.png"])).unwrap();
        composer.request_close();
        composer.confirm_close();

        assert!(!composer.decode_finished(jobs[0].ticket, Ok(preview_for(&jobs[0]))));
    }

    #[test]
    fn test_carousel_clamps() {
        let mut composer = Composer::new(1);
        let jobs = composer.select_files(many_files(3)).unwrap();
        finish_all(&mut composer, &jobs);

        assert!(!composer.can_show_previous());
        assert!(!composer.show_previous());
        assert!(composer.show_next());
        assert!(composer.show_next());
        assert!(!composer.can_show_next());
        assert!(!composer.show_next());
        assert_eq!(composer.carousel_index(), 2);
    }

    #[test]
    fn test_carousel_disabled_without_previews() {
        let mut composer = Composer::new(1);
        assert!(!composer.can_show_next());
        assert!(!composer.show_next());
        assert_eq!(composer.carousel_index(), 0);
    }

    #[test]
    fn test_back_clears_previews_and_resets_index() {
        let mut composer = Composer::new(1);
        let jobs = composer.select_files(many_files(4)).unwrap();
        finish_all(&mut composer, &jobs);
        composer.show_next();
        composer.show_next();
        composer.edit_caption("keep me").unwrap();

        assert_eq!(composer.go_back(), BackOutcome::ClearedSelection);

        assert_eq!(composer.phase(), Phase::Empty);
        assert!(composer.previews().is_empty());
        assert_eq!(composer.carousel_index(), 0);
        assert!(composer.is_open());
        assert_eq!(composer.caption().as_str(), "keep me");
    }

    #[test]
    fn test_back_without_selection_asks_to_leave() {
        let mut composer = Composer::new(1);
        assert_eq!(composer.go_back(), BackOutcome::ConfirmRequested);
        assert_eq!(composer.phase(), Phase::ConfirmingExit);
        assert!(composer.is_open());
    }

    #[test]
    fn test_cancel_close_restores_previous_state() {
        let mut composer = Composer::new(1);
        let jobs = composer.select_files(many_files(3)).unwrap();
        finish_all(&mut composer, &jobs);
        composer.show_next();
        composer.edit_caption("draft").unwrap();

        composer.request_close();
        assert_eq!(composer.phase(), Phase::ConfirmingExit);
        composer.cancel_close();

        assert_eq!(composer.phase(), Phase::Previewing);
        assert_eq!(composer.previews().len(), 3);
        assert_eq!(composer.selected_files().len(), 3);
        assert_eq!(composer.carousel_index(), 1);
        assert_eq!(composer.caption().as_str(), "draft");
    }

    #[test]
    fn test_confirm_close_hides_everything() {
        let mut composer = Composer::new(1);
        composer.request_close();

        assert_eq!(composer.confirm_close(), Route::Home);
        assert_eq!(composer.phase(), Phase::Closed);
        assert!(!composer.is_open());
        assert!(!composer.is_confirming());
    }

    #[test]
    fn test_request_close_after_close_does_nothing() {
        let mut composer = Composer::new(1);
        composer.request_close();
        composer.confirm_close();
        composer.request_close();
        assert!(!composer.is_confirming());
    }

    #[test]
    fn test_draft_does_not_change_state() {
        let mut composer = Composer::new(1);
        let jobs = composer.select_files(files(&["a.png", "b.png"])).unwrap();
        finish_all(&mut composer, &jobs);
        composer.edit_caption("two photos").unwrap();

        let draft = composer.draft();

        assert_eq!(
            draft,
            PostDraft {
                caption_chars: 10,
                image_count: 2,
            }
        );
        assert_eq!(composer.phase(), Phase::Previewing);
        assert_eq!(composer.previews().len(), 2);
    }

    #[test]
    fn test_full_compose_flow() {
        let mut composer = Composer::new(1);

        let jobs = composer
            .select_files(files(&["one.jpg", "two.jpg", "three.jpg"]))
            .unwrap();
        finish_all(&mut composer, &jobs);
        assert_eq!(composer.previews().len(), 3);
        assert_eq!(composer.carousel_index(), 0);

        composer.show_next();
        composer.show_next();
        assert_eq!(composer.carousel_index(), 2);
        assert!(!composer.can_show_next());

        for _ in 0..3 {
            composer.show_previous();
        }
        assert_eq!(composer.carousel_index(), 0);
        assert!(!composer.can_show_previous());

        let mut typed = String::new();
        for _ in 0..=MAX_CAPTION_CHARS {
            typed.push('k');
            let _ = composer.edit_caption(&typed);
        }
        assert_eq!(composer.caption().len(), MAX_CAPTION_CHARS);

        composer.request_close();
        assert!(composer.is_confirming());
        composer.cancel_close();
        assert!(!composer.is_confirming());
        assert_eq!(composer.previews().len(), 3);
        assert_eq!(composer.caption().len(), MAX_CAPTION_CHARS);

        composer.request_close();
        assert_eq!(composer.confirm_close(), Route::Home);
        assert!(!composer.is_open());
    }
}
