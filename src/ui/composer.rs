/// "Create post" modal
/// Renders a [`Composer`]; every control maps to one composer operation
use iced::alignment::Horizontal;
use iced::widget::{
    button, center, column, container, horizontal_rule, horizontal_space, image, row, scrollable,
    stack, text, text_editor,
};
use iced::{Alignment, ContentFit, Element, Length};

use super::BOLD;
use crate::state::caption::MAX_CAPTION_CHARS;
use crate::state::composer::Composer;
use crate::Message;

/// Outer bounds of the modal card
pub const MODAL_WIDTH: f32 = 1000.0;
pub const MODAL_HEIGHT: f32 = 800.0;

/// Height of the image area (picker, loading notice, or carousel)
const STAGE_HEIGHT: f32 = 500.0;

/// Height of the caption editor
const EDITOR_HEIGHT: f32 = 150.0;

pub fn card<'a>(composer: &'a Composer, editor: &'a text_editor::Content) -> Element<'a, Message> {
    let header = row![
        button(text("←").size(28))
            .style(button::text)
            .on_press(Message::GoBack),
        text("Create new post")
            .size(20)
            .font(BOLD)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        button(text("Share").font(BOLD))
            .style(button::text)
            .on_press(Message::SubmitPost),
        button(text("✕").size(22))
            .style(button::text)
            .on_press(Message::RequestClose),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let counter = text(format!(
        "{} / {}",
        composer.caption().len(),
        MAX_CAPTION_CHARS
    ))
    .size(14);

    let caption = column![
        text_editor(editor)
            .placeholder("Write a caption...")
            .height(Length::Fixed(EDITOR_HEIGHT))
            .on_action(Message::CaptionEdited),
        container(counter)
            .width(Length::Fill)
            .align_x(Horizontal::Right),
    ]
    .spacing(4);

    let body = column![header, horizontal_rule(2), stage(composer), caption].spacing(16);

    container(scrollable(body))
        .padding(24)
        .max_width(MODAL_WIDTH)
        .max_height(MODAL_HEIGHT)
        .style(container::rounded_box)
        .into()
}

/// Image area: picker when empty, progress while decoding, else the carousel
fn stage(composer: &Composer) -> Element<'_, Message> {
    if let Some(preview) = composer.current_preview() {
        let picture = image(preview.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);

        let controls = row![
            button(text("<").size(20)).on_press_maybe(
                composer
                    .can_show_previous()
                    .then_some(Message::PreviousImage)
            ),
            horizontal_space(),
            button(text(">").size(20))
                .on_press_maybe(composer.can_show_next().then_some(Message::NextImage)),
        ]
        .padding(16)
        .height(Length::Fill)
        .align_y(Alignment::Center);

        let mut caption = format!(
            "{} / {}  {}  {}x{}",
            composer.carousel_index() + 1,
            composer.previews().len(),
            preview.name,
            preview.width,
            preview.height
        );
        let failed = composer.failed_previews();
        if failed > 0 {
            caption.push_str(&format!("  ({failed} could not be opened)"));
        }

        column![
            container(stack![picture, controls])
                .width(Length::Fill)
                .height(Length::Fixed(STAGE_HEIGHT))
                .style(container::rounded_box),
            text(caption).size(14),
        ]
        .spacing(8)
        .into()
    } else if let Some((settled, total)) = composer.decode_progress() {
        framed(format!("Loading previews... {settled} / {total}"))
    } else if !composer.has_selection() {
        button(center(text("+").size(64)))
            .width(Length::Fill)
            .height(Length::Fixed(STAGE_HEIGHT))
            .style(button::secondary)
            .on_press(Message::OpenPicker)
            .into()
    } else {
        framed("None of the selected images could be opened. Go back to pick others.".to_string())
    }
}

fn framed<'a>(message: String) -> Element<'a, Message> {
    container(center(text(message).size(18)))
        .width(Length::Fill)
        .height(Length::Fixed(STAGE_HEIGHT))
        .style(container::rounded_box)
        .into()
}

/// "Do you really want to leave?" dialog
pub fn confirm_exit<'a>() -> Element<'a, Message> {
    let buttons = row![
        button(text("Leave"))
            .padding([8, 16])
            .style(button::danger)
            .on_press(Message::ConfirmClose),
        button(text("Cancel"))
            .padding([8, 16])
            .style(button::secondary)
            .on_press(Message::CancelClose),
    ]
    .spacing(16);

    container(
        column![
            text("Do you really want to leave?").size(18).font(BOLD),
            text("Your photos and caption will be discarded.").size(14),
            buttons,
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .style(container::rounded_box)
    .into()
}
