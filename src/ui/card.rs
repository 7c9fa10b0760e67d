use iced::widget::image::Handle;
use iced::widget::{column, container, image, text};
use iced::{Color, Element, Length};

use crate::state::show::Show;
use crate::Message;

pub const CARD_WIDTH: f32 = 160.0;
const POSTER_HEIGHT: f32 = 240.0;

/// One title card: poster artwork (or a flat placeholder block while the
/// artwork is missing), title, and year when known.
pub fn view(show: &Show, poster: Option<&Handle>) -> Element<'static, Message> {
    let artwork: Element<'static, Message> = match poster {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(POSTER_HEIGHT))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(text(""))
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(POSTER_HEIGHT))
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(Color::from_rgb8(0x23, 0x23, 0x2b))),
                border: iced::Border {
                    radius: 6.0.into(),
                    ..iced::Border::default()
                },
                ..container::Style::default()
            })
            .into(),
    };

    let mut details = column![text(show.title.clone()).size(14)].spacing(2);
    if let Some(year) = show.year {
        details = details.push(
            text(year.to_string())
                .size(12)
                .color(Color::from_rgb8(0x9a, 0x9a, 0xa5)),
        );
    }

    column![artwork, details]
        .spacing(8)
        .width(Length::Fixed(CARD_WIDTH))
        .into()
}
