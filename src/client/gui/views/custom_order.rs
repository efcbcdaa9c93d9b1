use iced::widget::{Button, Column, Container, PickList, Text, TextInput};
use iced::{Element, Length};

use crate::client::gui::widgets::style::{bg_main_appearance, card_appearance, BOLD_FONT, TEXT_SECONDARY};
use crate::client::gui::widgets::{alert, nav};
use crate::client::models::app_state::ShopAppState;
use crate::client::models::messages::Message;
use crate::common::models::Category;

fn field<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Column<'a, Message> {
    Column::new()
        .spacing(6)
        .push(Text::new(label).size(14).style(TEXT_SECONDARY))
        .push(input)
}

fn input<'a>(placeholder: &'a str, value: &'a str, on_input: fn(String) -> Message) -> TextInput<'a, Message> {
    TextInput::new(placeholder, value)
        .on_input(on_input)
        .padding(10)
        .size(16)
}

pub fn view(state: &ShopAppState) -> Element<Message> {
    let form = &state.order_form;
    let selected = Some(form.product_category.as_str())
        .filter(|raw| !raw.is_empty())
        .map(Category::from);

    let category = PickList::new(Category::KNOWN.to_vec(), selected, Message::ProductCategorySelected)
        .placeholder("Select a category")
        .padding(10)
        .width(Length::Fill);

    let mut submit = Button::new(
        Text::new(if state.submitting { "Sending..." } else { "Place Order" })
            .font(BOLD_FONT)
            .size(16),
    )
    .style(iced::theme::Button::Primary)
    .padding([12, 24]);
    let mut deadline = input("YYYY-MM-DD", &form.deadline, Message::DeadlineChanged);
    if !state.submitting {
        submit = submit.on_press(Message::SubmitOrder);
        deadline = deadline.on_submit(Message::SubmitOrder);
    }

    let mut body = Column::new()
        .spacing(16)
        .padding(24)
        .max_width(640)
        .push(Text::new("Request a Custom Order").font(BOLD_FONT).size(22))
        .push(field("Your name", input("Jane Doe", &form.customer_name, Message::CustomerNameChanged)))
        .push(field("Email", input("jane@example.com", &form.customer_email, Message::CustomerEmailChanged)))
        .push(field("Category", category))
        .push(field(
            "Project details",
            input("Describe what you need", &form.product_details, Message::ProductDetailsChanged),
        ))
        .push(field("Budget", input("e.g. 500", &form.budget, Message::BudgetChanged)))
        .push(field("Deadline (optional)", deadline))
        .push(submit);

    if let Some(notice) = &state.order_notice {
        body = body.push(alert::view(notice));
    }

    let card = Container::new(body)
        .width(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let page = Column::new()
        .push(nav::view(state.app_state))
        .push(
            iced::widget::scrollable(Container::new(card).padding(24).width(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
