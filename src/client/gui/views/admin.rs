use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::widgets::style::{
    bg_main_appearance, card_appearance, status_color, ACCENT_COLOR, BOLD_FONT, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::client::gui::widgets::{alert, nav};
use crate::client::models::app_state::ShopAppState;
use crate::client::models::messages::Message;
use crate::common::models::{Listing, Notice, Order, ORDERS_EMPTY, ORDERS_ERROR};

fn stat_card<'a>(label: &'a str, value: usize) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(4)
            .align_items(Alignment::Center)
            .push(Text::new(value.to_string()).font(BOLD_FONT).size(32).style(ACCENT_COLOR))
            .push(Text::new(label).size(14).style(TEXT_SECONDARY)),
    )
    .padding(16)
    .width(Length::FillPortion(1))
    .center_x()
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

fn detail<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(6)
        .push(Text::new(label).font(BOLD_FONT).size(14))
        .push(Text::new(value).size(14).style(TEXT_SECONDARY))
        .into()
}

fn order_item(order: &Order) -> Element<'_, Message> {
    let header = Row::new()
        .align_items(Alignment::Center)
        .push(
            Text::new(format!("{} - {}", order.customer_name, order.product_category))
                .font(BOLD_FONT)
                .size(18)
                .style(TEXT_PRIMARY),
        )
        .push(Space::with_width(Length::Fill))
        .push(Text::new(order.status.as_str()).font(BOLD_FONT).size(14).style(status_color(order.status.as_str())));

    Container::new(
        Column::new()
            .spacing(6)
            .push(header)
            .push(detail("Email:", order.customer_email.clone()))
            .push(detail("Budget:", order.budget.clone()))
            .push(detail("Deadline:", order.deadline_label().to_string()))
            .push(detail("Details:", order.product_details.clone()))
            .push(detail("Order Date:", order.order_date_label())),
    )
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

pub fn view(state: &ShopAppState) -> Element<Message> {
    let stats = Row::new()
        .spacing(16)
        .push(stat_card("Total Orders", state.stats.total))
        .push(stat_card("Pending", state.stats.pending))
        .push(stat_card("Completed", state.stats.completed));

    let mut seed = Button::new(Text::new(if state.seeding { "Adding..." } else { "Add Sample Products" }).size(14))
        .style(iced::theme::Button::Secondary)
        .padding([10, 16]);
    if !state.seeding {
        seed = seed.on_press(Message::SeedSamples);
    }
    let actions = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("Orders").font(BOLD_FONT).size(22))
        .push(Space::with_width(Length::Fill))
        .push(
            Button::new(Text::new("Reload").size(14))
                .style(iced::theme::Button::Primary)
                .padding([10, 16])
                .on_press(Message::ReloadOrders),
        )
        .push(seed);

    let orders: Element<Message> = match &state.orders {
        None => Text::new("Loading orders...").style(TEXT_SECONDARY).into(),
        Some(Listing::Failed) => alert::view(&Notice::error(ORDERS_ERROR)),
        Some(Listing::Empty) => alert::view(&Notice::info(ORDERS_EMPTY)),
        Some(Listing::Loaded(orders)) => Column::with_children(orders.iter().map(order_item).collect::<Vec<_>>())
            .spacing(12)
            .into(),
    };

    let mut content = Column::new().spacing(20).padding(24).push(stats).push(actions);
    if let Some(notice) = &state.seed_notice {
        content = content.push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(alert::view(notice))
                .push(
                    Button::new(Text::new("OK").size(14))
                        .style(iced::theme::Button::Secondary)
                        .on_press(Message::DismissSeedNotice),
                ),
        );
    }
    content = content.push(orders);

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
