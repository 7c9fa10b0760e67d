use iced::widget::image::Handle;
use iced::widget::{column, container, image, stack, text, text_input};
use iced::{Color, ContentFit, Element, Length};

use crate::Message;

/// Backdrop shown behind the hero copy, fetched through the artwork cache.
pub const HERO_BACKDROP_URL: &str =
    "https://image.tmdb.org/t/p/original/swxhEJsAWms6X1fDZ4HdbvYBSf9.jpg";

const HERO_HEIGHT: f32 = 340.0;

const HERO_TITLE: &str = "Anaconda";
const HERO_TAGLINE: &str = "A group of friends facing mid-life crises head to the rainforest, \
     only to find themselves in a fight for their lives.";

/// Hero banner: featured title, tagline and the search box.
///
/// The search input forwards every keystroke; any debouncing happens
/// further down, inside the optimized row.
pub fn view(query: &str, backdrop: Option<&Handle>) -> Element<'static, Message> {
    let copy = column![
        text(HERO_TITLE).size(44),
        text(HERO_TAGLINE)
            .size(15)
            .color(Color::from_rgb8(0xc9, 0xc9, 0xd1)),
        text_input("Search titles…", query)
            .on_input(Message::QueryChanged)
            .padding(10)
            .size(16),
    ]
    .spacing(12)
    .max_width(560.0);

    let overlay = container(copy)
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fixed(HERO_HEIGHT))
        .align_y(iced::alignment::Vertical::Bottom);

    match backdrop {
        Some(handle) => stack![
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(HERO_HEIGHT))
                .content_fit(ContentFit::Cover),
            overlay,
        ]
        .into(),
        None => container(overlay)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(Color::from_rgb8(0x15, 0x15, 0x1c))),
                ..container::Style::default()
            })
            .into(),
    }
}
