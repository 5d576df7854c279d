//! iced views for the gallery
//!
//! - `grid.rs` renders the tile grid, "Load More" and the status line
//! - `lightbox.rs` renders the full-window overlay
//!
//! Views only read state; every interaction becomes a `Message`.

pub mod grid;
pub mod lightbox;

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::state::keys::LightboxKey;
use crate::Message;

/// Map a native key press to a lightbox message
///
/// Only installed as a subscription while the lightbox holds its binding.
pub fn map_key(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    lightbox_key(key.as_ref()).map(Message::Key)
}

fn lightbox_key(key: Key<&str>) -> Option<LightboxKey> {
    match key {
        Key::Named(Named::Escape) => Some(LightboxKey::Escape),
        Key::Named(Named::ArrowRight) => Some(LightboxKey::ArrowRight),
        Key::Named(Named::ArrowLeft) => Some(LightboxKey::ArrowLeft),
        _ => None,
    }
}

/// Shown before any source is loaded, or when a source has no photos
pub fn empty_state<'a>() -> Element<'a, Message> {
    let content = column![
        text("No photos yet").size(28),
        text("Open a folder of images or a gallery manifest to get started.").size(16),
        button("Open Folder")
            .on_press(Message::OpenFolder)
            .padding(10),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightbox_keys() {
        assert_eq!(
            lightbox_key(Key::Named(Named::Escape)),
            Some(LightboxKey::Escape)
        );
        assert_eq!(
            lightbox_key(Key::Named(Named::ArrowRight)),
            Some(LightboxKey::ArrowRight)
        );
        assert_eq!(
            lightbox_key(Key::Named(Named::ArrowLeft)),
            Some(LightboxKey::ArrowLeft)
        );
        assert_eq!(lightbox_key(Key::Named(Named::Enter)), None);
        assert_eq!(lightbox_key(Key::Character("l")), None);
    }
}
