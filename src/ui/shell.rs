/// Application shell
/// Top bar with the brand and account links, left sidebar with the
/// primary navigation, and a slot for the page content
use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, row, text, vertical_rule, Column,
    Row,
};
use iced::{Alignment, Element, Length};

use super::BOLD;
use crate::route::Route;
use crate::Message;

/// Width of the sidebar in pixels
pub const SIDEBAR_WIDTH: f32 = 256.0;

/// Wrap page `content` in the persistent chrome
pub fn shell<'a>(current: Route, content: Element<'a, Message>) -> Element<'a, Message> {
    let brand = button(text("InstaKgram").size(22).font(BOLD))
        .style(button::text)
        .on_press(Message::Navigate(Route::Home));

    let account = Route::ACCOUNT
        .into_iter()
        .fold(Row::new().spacing(16), |links, route| {
            links.push(
                button(text(route.label()))
                    .style(button::text)
                    .on_press(Message::Navigate(route)),
            )
        });

    let top_bar = row![brand, horizontal_space(), account]
        .align_y(Alignment::Center)
        .padding(16);

    let sidebar = Route::SIDEBAR.into_iter().fold(
        Column::new().spacing(16).padding(16).width(SIDEBAR_WIDTH),
        |links, route| links.push(nav_link(route, current)),
    );

    let main = container(content)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill);

    column![
        top_bar,
        horizontal_rule(1),
        row![sidebar, vertical_rule(1), main].height(Length::Fill),
    ]
    .into()
}

/// Sidebar entry; the current page is highlighted
fn nav_link<'a>(route: Route, current: Route) -> Element<'a, Message> {
    let style = if route == current {
        button::secondary
    } else {
        button::text
    };

    button(text(route.label()).size(16))
        .width(Length::Fill)
        .padding(8)
        .style(style)
        .on_press(Message::Navigate(route))
        .into()
}

/// Content for pages that have no functionality in the client yet
pub fn placeholder<'a>(route: Route) -> Element<'a, Message> {
    column![
        text(route.label()).size(28).font(BOLD),
        text("Nothing to show here yet.").size(16),
    ]
    .spacing(12)
    .into()
}
