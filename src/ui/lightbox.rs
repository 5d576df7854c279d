//! Full-window lightbox overlay
//!
//! The backdrop is a mouse area that closes the overlay. Buttons capture
//! their own presses and the figure is opaque, so neither reaches it.

use iced::widget::{button, column, container, image, mouse_area, opaque, row, text, Column};
use iced::{Alignment, Color, ContentFit, Element, Length};

use crate::state::lightbox::Display;
use crate::state::source::LoadedSource;
use crate::Message;

const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.85,
};

pub fn view<'a>(display: &Display, source: &LoadedSource) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match source.resolve(&display.address) {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Shrink)
            .height(Length::Fill)
            .into(),
        None => text("Image unavailable").size(16).into(),
    };

    let mut figure: Column<'a, Message> = column![picture]
        .spacing(12)
        .max_width(1100.0)
        .align_x(Alignment::Center);
    if !display.caption.is_empty() {
        figure = figure.push(text(display.caption.clone()).size(14));
    }

    let previous = button(text("‹").size(28))
        .on_press(Message::Previous)
        .padding([4, 14])
        .style(button::secondary);
    let next = button(text("›").size(28))
        .on_press(Message::Next)
        .padding([4, 14])
        .style(button::secondary);
    let close = button("Close")
        .on_press(Message::CloseLightbox)
        .padding([4, 12])
        .style(button::secondary);

    let stage = row![
        previous,
        container(opaque(figure))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        next,
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let layout = column![container(close).align_right(Length::Fill), stage]
        .spacing(8)
        .padding(24);

    let backdrop = container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(BACKDROP.into()),
            ..container::Style::default()
        });

    mouse_area(backdrop).on_press(Message::CloseLightbox).into()
}
