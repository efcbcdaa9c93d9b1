// Message bar for notices (order outcome, list errors, seeding)
use iced::widget::{Container, Row, Text};
use iced::{Color, Element, Length};

use crate::client::models::messages::Message;
use crate::common::models::{Notice, NoticeLevel};

fn color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => Color::from_rgb(0.2, 0.8, 0.4),
        NoticeLevel::Error => Color::from_rgb(1.0, 0.2, 0.2),
        NoticeLevel::Info => Color::from_rgb(0.2, 0.6, 1.0),
    }
}

fn symbol(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "✔",
        NoticeLevel::Error => "✖",
        NoticeLevel::Info => "ℹ",
    }
}

pub fn view<'a>(notice: &Notice) -> Element<'a, Message> {
    let bg_color = color(notice.level);
    Container::new(
        Row::new()
            .spacing(12)
            .push(Text::new(symbol(notice.level)).size(18).style(Color::WHITE))
            .push(Text::new(notice.text).size(16).style(Color::WHITE)),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(bg_color)),
            text_color: Some(Color::WHITE),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            },
        }
    })))
    .into()
}
