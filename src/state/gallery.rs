//! The gallery component: ordered items plus paging and lightbox state
//!
//! All state is created when the gallery is built and dropped with it.
//! Dropping an open gallery releases its key listener.

use std::rc::Rc;

use super::data::ImageItem;
use super::keys::{KeyEventSource, LightboxKey};
use super::lightbox::{Display, Lightbox};
use super::normalize::normalize;
use super::paging::Paging;

/// A tile ready for the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub address: String,
    pub caption: Option<String>,
}

#[derive(Debug)]
pub struct Gallery {
    items: Vec<ImageItem>,
    paging: Paging,
    lightbox: Lightbox,
}

impl Gallery {
    pub fn new(
        items: Vec<ImageItem>,
        initial_load_count: usize,
        keys: Rc<dyn KeyEventSource>,
    ) -> Self {
        Self {
            items,
            paging: Paging::new(initial_load_count),
            lightbox: Lightbox::new(keys),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========== Paging ==========

    pub fn visible_count(&self) -> usize {
        self.paging.visible_count()
    }

    pub fn visible_images(&self) -> &[ImageItem] {
        self.paging.visible(&self.items)
    }

    /// Visible items resolved to display addresses
    pub fn visible_tiles(&self) -> Vec<Tile> {
        self.visible_images()
            .iter()
            .enumerate()
            .map(|(index, item)| Tile {
                index,
                address: normalize(&item.address),
                caption: item.caption.clone().filter(|caption| !caption.is_empty()),
            })
            .collect()
    }

    pub fn has_more(&self) -> bool {
        self.paging.has_more(self.items.len())
    }

    pub fn load_more(&mut self) {
        self.paging.load_more(self.items.len());
    }

    pub fn status(&self) -> String {
        self.paging.status(self.items.len())
    }

    // ========== Lightbox ==========

    pub fn lightbox(&self) -> &Display {
        self.lightbox.display()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.lightbox.current_index()
    }

    pub fn open(&mut self, index: usize) -> bool {
        self.lightbox.open(&self.items, index)
    }

    pub fn close(&mut self) {
        self.lightbox.close();
    }

    pub fn next(&mut self) {
        self.lightbox.next(&self.items);
    }

    pub fn previous(&mut self) {
        self.lightbox.previous(&self.items);
    }

    pub fn handle_key(&mut self, key: LightboxKey) {
        self.lightbox.handle_key(&self.items, key);
    }
}
