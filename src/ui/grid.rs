//! Tile grid with progressive "Load More" paging

use iced::widget::{button, column, container, image, scrollable, text, Column};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::config::Settings;
use crate::state::gallery::{Gallery, Tile};
use crate::state::source::LoadedSource;
use crate::Message;

const TILE_SPACING: f32 = 8.0;

/// Grid of visible tiles, the "Load More" control and the status line
pub fn view<'a>(
    gallery: &Gallery,
    source: &LoadedSource,
    settings: &Settings,
) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = gallery
        .visible_tiles()
        .into_iter()
        .map(|tile| tile_view(tile, source, settings.tile_size))
        .collect();

    // Cap the row width so the grid wraps at the configured column count
    let columns = settings.columns.max(1) as f32;
    let max_width = columns * (settings.tile_size + TILE_SPACING);

    let grid = container(
        Wrap::with_elements(tiles)
            .spacing(TILE_SPACING)
            .line_spacing(TILE_SPACING),
    )
    .max_width(max_width);

    let mut footer: Column<'a, Message> = column![].spacing(8).align_x(Alignment::Center);
    if gallery.has_more() {
        footer = footer.push(
            button("Load More")
                .on_press(Message::LoadMore)
                .padding([8, 24]),
        );
    }
    footer = footer.push(text(gallery.status()).size(14));

    let content = column![grid, footer]
        .spacing(24)
        .padding(24)
        .width(Length::Fill)
        .align_x(Alignment::Center);

    scrollable(content).height(Length::Fill).into()
}

/// A single clickable tile with an optional caption underneath
fn tile_view<'a>(tile: Tile, source: &LoadedSource, size: f32) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match source.resolve(&tile.address) {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        // Unusable address: keep the slot so the grid stays aligned
        None => container(text(""))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(container::bordered_box)
            .into(),
    };

    let mut content: Column<'a, Message> =
        column![picture].spacing(4).width(Length::Fixed(size));
    if let Some(caption) = tile.caption {
        content = content.push(text(caption).size(13));
    }

    button(content)
        .on_press(Message::OpenLightbox(tile.index))
        .padding(0)
        .style(button::text)
        .into()
}
