// Header with the shop title and one tab per page
use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::widgets::style::{header_appearance, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::app_state::AppState;
use crate::client::models::messages::Message;

fn tab<'a>(label: &'a str, target: AppState, current: AppState, on_press: Message) -> Element<'a, Message> {
    let style = if target == current {
        iced::theme::Button::Primary
    } else {
        iced::theme::Button::Secondary
    };
    Button::new(Text::new(label).font(BOLD_FONT).size(14))
        .style(style)
        .on_press(on_press)
        .padding([10, 18])
        .into()
}

pub fn view<'a>(current: AppState) -> Element<'a, Message> {
    let title = Column::new()
        .spacing(4)
        .push(Text::new("Bottega").font(BOLD_FONT).size(28).style(TEXT_PRIMARY))
        .push(Text::new("Design, software and animation on request").size(14).style(TEXT_SECONDARY));

    let tabs = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(tab("Catalog", AppState::Catalog, current, Message::OpenCatalog))
        .push(tab("Custom Order", AppState::CustomOrder, current, Message::OpenCustomOrder))
        .push(tab("Admin", AppState::Admin, current, Message::OpenAdmin));

    Container::new(
        Row::new()
            .align_items(Alignment::Center)
            .push(title)
            .push(Space::with_width(Length::Fill))
            .push(tabs),
    )
    .padding([20, 24])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(header_appearance)))
    .into()
}
