use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::widgets::style::{
    bg_main_appearance, card_appearance, ACCENT_COLOR, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::client::gui::widgets::{alert, nav};
use crate::client::models::app_state::ShopAppState;
use crate::client::models::messages::Message;
use crate::common::models::{CategoryFilter, Listing, Notice, Product, PRODUCTS_EMPTY, PRODUCTS_ERROR};

const CARDS_PER_ROW: usize = 3;

fn filter_bar<'a>(active: &CategoryFilter) -> Element<'a, Message> {
    let buttons = CategoryFilter::choices().into_iter().map(|choice| {
        let style = if &choice == active {
            iced::theme::Button::Primary
        } else {
            iced::theme::Button::Secondary
        };
        Button::new(Text::new(choice.as_str().to_string()).size(14))
            .style(style)
            .padding([8, 14])
            .on_press(Message::FilterSelected(choice))
            .into()
    });
    Row::with_children(buttons.collect::<Vec<Element<'a, Message>>>())
        .spacing(8)
        .into()
}

fn product_card(product: &Product) -> Element<'_, Message> {
    let body = Column::new()
        .spacing(8)
        .push(Text::new(&product.name).font(BOLD_FONT).size(18).style(TEXT_PRIMARY))
        .push(Text::new(&product.description).size(14).style(TEXT_SECONDARY))
        .push(Text::new(product.price_label()).font(BOLD_FONT).size(20).style(ACCENT_COLOR))
        .push(Text::new(product.category.as_str()).size(12).style(TEXT_SECONDARY));

    Container::new(body)
        .padding(20)
        .width(Length::FillPortion(1))
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

fn product_grid(products: &[Product]) -> Element<'_, Message> {
    let rows = products.chunks(CARDS_PER_ROW).map(|chunk| {
        let mut row = Row::new().spacing(16);
        for product in chunk {
            row = row.push(product_card(product));
        }
        // keep card widths even on a short last row
        for _ in chunk.len()..CARDS_PER_ROW {
            row = row.push(Space::with_width(Length::FillPortion(1)));
        }
        row.into()
    });
    Column::with_children(rows.collect::<Vec<Element<'_, Message>>>())
        .spacing(16)
        .into()
}

pub fn view(state: &ShopAppState) -> Element<Message> {
    let products: Element<Message> = match &state.products {
        None => Text::new("Loading products...").style(TEXT_SECONDARY).into(),
        Some(Listing::Failed) => alert::view(&Notice::error(PRODUCTS_ERROR)),
        Some(Listing::Empty) => alert::view(&Notice::info(PRODUCTS_EMPTY)),
        Some(Listing::Loaded(products)) => product_grid(products),
    };

    let content = Column::new()
        .spacing(20)
        .padding([24, 24])
        .push(
            Row::new()
                .spacing(16)
                .align_items(Alignment::Center)
                .push(Text::new("Our Services").font(BOLD_FONT).size(22))
                .push(filter_bar(&state.active_filter)),
        )
        .push(products);

    let page = Column::new()
        .push(nav::view(state.app_state))
        .push(iced::widget::scrollable(content).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
