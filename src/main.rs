use iced::widget::text_editor;
use iced::{Element, Size, Task, Theme};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod platform;
mod preview;
mod route;
mod state;
mod ui;

use config::{Settings, DEFAULT_LOG_FILTER};
use error::DecodeError;
use platform::{Dialogs, NativeDialogs};
use route::Route;
use state::composer::{BackOutcome, Composer};
use state::data::{ImageFile, Preview};
use state::selection::DecodeTicket;

/// Main application state
struct Instakgram {
    settings: Settings,
    /// Page currently shown in the content slot
    route: Route,
    /// Present while the post page is shown
    composer: Option<Composer>,
    /// Editor buffer behind the caption; the composer holds the accepted text
    caption_editor: text_editor::Content,
    dialogs: Box<dyn Dialogs>,
    /// Last composer session handed out
    sessions: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A shell link was activated
    Navigate(Route),
    /// User clicked the empty image area
    OpenPicker,
    /// Background decode finished for one slot
    PreviewDecoded(DecodeTicket, Result<Preview, DecodeError>),
    PreviousImage,
    NextImage,
    CaptionEdited(text_editor::Action),
    /// Back arrow in the modal header
    GoBack,
    /// Close button in the modal header
    RequestClose,
    ConfirmClose,
    CancelClose,
    SubmitPost,
}

impl Instakgram {
    /// Create a new instance of the application
    fn new(settings: Settings, dialogs: Box<dyn Dialogs>) -> (Self, Task<Message>) {
        let start = settings.start_route;
        let mut app = Instakgram {
            settings,
            route: Route::Home,
            composer: None,
            caption_editor: text_editor::Content::new(),
            dialogs,
            sessions: 0,
        };
        app.navigate(start);

        info!(route = %app.route, "InstaKgram initialized");
        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                self.navigate(route);
                Task::none()
            }
            Message::OpenPicker => self.pick_images(),
            Message::PreviewDecoded(ticket, result) => {
                if let Err(err) = &result {
                    warn!(error = %err, slot = ticket.slot, "preview failed");
                }
                if let Some(composer) = self.composer.as_mut() {
                    composer.decode_finished(ticket, result);
                }
                Task::none()
            }
            Message::PreviousImage => {
                if let Some(composer) = self.composer.as_mut() {
                    composer.show_previous();
                }
                Task::none()
            }
            Message::NextImage => {
                if let Some(composer) = self.composer.as_mut() {
                    composer.show_next();
                }
                Task::none()
            }
            Message::CaptionEdited(action) => {
                self.edit_caption(action);
                Task::none()
            }
            Message::GoBack => {
                if let Some(composer) = self.composer.as_mut() {
                    let outcome = composer.go_back();
                    debug!(?outcome, "back");
                    if outcome == BackOutcome::ClearedSelection {
                        info!("Selection discarded");
                    }
                }
                Task::none()
            }
            Message::RequestClose => {
                if let Some(composer) = self.composer.as_mut() {
                    composer.request_close();
                    debug!(phase = ?composer.phase(), "close requested");
                }
                Task::none()
            }
            Message::CancelClose => {
                if let Some(composer) = self.composer.as_mut() {
                    composer.cancel_close();
                    debug!(phase = ?composer.phase(), "close cancelled");
                }
                Task::none()
            }
            Message::ConfirmClose => {
                if let Some(composer) = self.composer.as_mut() {
                    let route = composer.confirm_close();
                    self.navigate(route);
                }
                Task::none()
            }
            Message::SubmitPost => {
                if let Some(composer) = self.composer.as_ref() {
                    // No backend yet: sharing only leaves a trace
                    let draft = composer.draft();
                    info!(
                        session = composer.session(),
                        has_caption = !composer.caption().is_empty(),
                        caption_chars = draft.caption_chars,
                        images = draft.image_count,
                        "Post created"
                    );
                }
                Task::none()
            }
        }
    }

    /// Switch the content slot. The post page always starts a fresh composer.
    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }

        debug!(from = %self.route, to = %route, "navigate");
        self.route = route;

        if route == Route::Post {
            self.sessions += 1;
            self.caption_editor = text_editor::Content::new();
            self.composer = Some(Composer::new(self.sessions));
        } else {
            // Dropping the composer orphans its pending decodes
            self.composer = None;
        }
    }

    /// Open the native picker and start decoding whatever it returns
    fn pick_images(&mut self) -> Task<Message> {
        let Some(composer) = self.composer.as_mut() else {
            return Task::none();
        };
        let Some(paths) = self.dialogs.pick_images() else {
            return Task::none();
        };

        let files: Vec<ImageFile> = paths
            .into_iter()
            .filter(|path| {
                let supported = preview::is_supported_image(path);
                if !supported {
                    warn!(path = %path.display(), "skipping non-image file");
                }
                supported
            })
            .map(ImageFile::from_path)
            .collect();

        match composer.select_files(files) {
            Ok(jobs) if jobs.is_empty() => Task::none(),
            Ok(jobs) => {
                info!(count = composer.selected_files().len(), "Decoding previews");
                let max_edge = self.settings.preview_max_edge;
                Task::batch(jobs.into_iter().map(|job| {
                    let ticket = job.ticket;
                    Task::perform(preview::decode_preview(job.path, max_edge), move |result| {
                        Message::PreviewDecoded(ticket, result)
                    })
                }))
            }
            Err(err) => {
                warn!(error = %err, "selection rejected");
                self.dialogs.alert("Too many images", &err.to_string());
                Task::none()
            }
        }
    }

    /// Apply an editor action, keeping the caption within its limit
    fn edit_caption(&mut self, action: text_editor::Action) {
        let Some(composer) = self.composer.as_mut() else {
            return;
        };

        let is_edit = action.is_edit();
        let cursor = self.caption_editor.cursor_position();
        self.caption_editor.perform(action);
        if !is_edit {
            return;
        }

        let text = editor_text(&self.caption_editor);
        if composer.edit_caption(&text).is_err() {
            // Rebuild from the last accepted caption, cursor where it was
            let accepted = composer.caption().as_str();
            self.caption_editor = text_editor::Content::with_text(accepted);
            restore_cursor(&mut self.caption_editor, accepted, cursor);
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let content = ui::shell::placeholder(self.route);
        let mut page = ui::shell::shell(self.route, content);

        if let Some(composer) = self.composer.as_ref().filter(|c| c.is_open()) {
            page = ui::overlay::modal(page, ui::composer::card(composer, &self.caption_editor));
            if composer.is_confirming() {
                page = ui::overlay::modal(page, ui::composer::confirm_exit());
            }
        }

        page
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.settings.theme.theme()
    }
}

/// Editor contents exactly as shown, lines joined by '\n'
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = String::new();
    for (i, line) in content.lines().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(&line);
    }
    text
}

/// Put the cursor back at `(line, byte index)` within `text`
fn restore_cursor(content: &mut text_editor::Content, text: &str, (line, index): (usize, usize)) {
    use text_editor::{Action, Motion};

    // Characters before the cursor, counting one per line break
    let offset: usize = text
        .split('\n')
        .take(line)
        .map(|l| l.chars().count() + 1)
        .sum::<usize>()
        + text
            .split('\n')
            .nth(line)
            .map_or(0, |l| l.get(..index).unwrap_or(l).chars().count());

    content.perform(Action::Move(Motion::DocumentStart));
    for _ in 0..offset {
        content.perform(Action::Move(Motion::Right));
    }
}

fn init_tracing(filter: &str) {
    // RUST_LOG takes precedence over the settings file
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let (settings, load_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    init_tracing(&settings.log_filter);

    match load_error {
        Some(err) => warn!(error = %err, "Falling back to default settings"),
        None => {
            // First run: leave an editable settings file behind
            if let Some(path) = Settings::default_path().filter(|path| !path.exists()) {
                match settings.save_to(&path) {
                    Ok(()) => info!(path = %path.display(), "Wrote default settings"),
                    Err(err) => warn!(error = %err, "Could not write default settings"),
                }
            }
        }
    }

    let window_size = Size::new(settings.window_width, settings.window_height);

    iced::application("InstaKgram", Instakgram::update, Instakgram::view)
        .theme(Instakgram::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Instakgram::new(settings, Box::new(NativeDialogs)))
}
