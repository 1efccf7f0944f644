use iced::widget::{center, container, opaque, stack};
use iced::{Color, Element};

use crate::Message;

/// Dim `base` and show `content` centered above it.
///
/// The backdrop swallows clicks, so nothing underneath reacts while an
/// overlay is up.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(center(opaque(content)).style(|_theme| container::Style {
            background: Some(
                Color {
                    a: 0.55,
                    ..Color::BLACK
                }
                .into()
            ),
            ..container::Style::default()
        }))
    ]
    .into()
}
