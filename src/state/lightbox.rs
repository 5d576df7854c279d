//! Lightbox controller
//!
//! Open/closed state, the current index and what is on screen. While open
//! the controller holds a [`KeySubscription`]; it is re-acquired on every
//! index change and released on close or when the controller is dropped.

use std::rc::Rc;

use tracing::debug;

use super::data::ImageItem;
use super::keys::{KeyEventSource, KeySubscription, LightboxKey};
use super::normalize::normalize;

/// What the lightbox currently displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Display {
    pub open: bool,
    pub address: String,
    pub caption: String,
}

pub struct Lightbox {
    display: Display,
    current_index: Option<usize>,
    keys: Rc<dyn KeyEventSource>,
    binding: Option<KeySubscription>,
}

impl Lightbox {
    pub fn new(keys: Rc<dyn KeyEventSource>) -> Self {
        Self {
            display: Display::default(),
            current_index: None,
            keys,
            binding: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.display.open
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Whether the key binding is currently held
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Open on `items[index]`; out-of-range indices are ignored
    pub fn open(&mut self, items: &[ImageItem], index: usize) -> bool {
        if index >= items.len() {
            debug!(index, total = items.len(), "ignoring out-of-range lightbox open");
            return false;
        }
        self.display.open = true;
        self.show(items, index);
        debug!(
            index,
            address = %self.display.address,
            listener = ?self.binding.as_ref().map(KeySubscription::id),
            "lightbox opened"
        );
        true
    }

    /// Hide the overlay, keeping the last shown image
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.display.open = false;
        self.binding = None;
        debug!(index = ?self.current_index, "lightbox closed");
    }

    /// Step forward, wrapping to the first image
    pub fn next(&mut self, items: &[ImageItem]) {
        let len = items.len();
        if let Some(current) = self.navigable_index(len) {
            self.show(items, (current + 1) % len);
        }
    }

    /// Step back, wrapping to the last image
    pub fn previous(&mut self, items: &[ImageItem]) {
        let len = items.len();
        if let Some(current) = self.navigable_index(len) {
            self.show(items, (current + len - 1) % len);
        }
    }

    /// Apply a key press; ignored unless the binding is held
    pub fn handle_key(&mut self, items: &[ImageItem], key: LightboxKey) {
        if !self.is_bound() {
            return;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowRight => self.next(items),
            LightboxKey::ArrowLeft => self.previous(items),
        }
    }

    /// Current index usable for modular stepping, None when there is
    /// nothing to step over
    fn navigable_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.current_index.map(|index| index.min(len - 1))
    }

    fn show(&mut self, items: &[ImageItem], index: usize) {
        let item = &items[index];
        self.current_index = Some(index);
        self.display.address = normalize(&item.address);
        self.display.caption = item.caption_text().to_owned();
        if self.display.open {
            self.rebind();
        }
    }

    fn rebind(&mut self) {
        // Release before acquiring so at most one listener is ever held
        self.binding = None;
        self.binding = Some(KeySubscription::acquire(&self.keys));
    }
}

impl std::fmt::Debug for Lightbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lightbox")
            .field("display", &self.display)
            .field("current_index", &self.current_index)
            .field("binding", &self.binding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::keys::CountingKeys;
    use proptest::prelude::*;

    fn items(count: usize) -> Vec<ImageItem> {
        (0..count)
            .map(|i| ImageItem::new(format!("photo-{i}.jpg")).with_caption(format!("Photo {i}")))
            .collect()
    }

    fn lightbox() -> (Rc<CountingKeys>, Lightbox) {
        let counting = Rc::new(CountingKeys::default());
        let lightbox = Lightbox::new(counting.clone());
        (counting, lightbox)
    }

    #[test]
    fn test_open_shows_item() {
        let items = items(3);
        let (_, mut lightbox) = lightbox();

        assert!(lightbox.open(&items, 1));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), Some(1));
        assert_eq!(lightbox.display().address, "photo-1.jpg");
        assert_eq!(lightbox.display().caption, "Photo 1");
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let items = items(3);
        let (counting, mut lightbox) = lightbox();

        assert!(!lightbox.open(&items, 3));
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current_index(), None);
        assert_eq!(counting.added.get(), 0);
    }

    #[test]
    fn test_missing_caption_is_empty() {
        let items = vec![ImageItem::new("plain.jpg")];
        let (_, mut lightbox) = lightbox();
        lightbox.open(&items, 0);
        assert_eq!(lightbox.display().caption, "");
    }

    #[test]
    fn test_wraps_in_both_directions() {
        let items = items(3);
        let (_, mut lightbox) = lightbox();
        lightbox.open(&items, 0);

        lightbox.previous(&items);
        assert_eq!(lightbox.current_index(), Some(2));
        assert_eq!(lightbox.display().address, "photo-2.jpg");

        lightbox.next(&items);
        assert_eq!(lightbox.current_index(), Some(0));
        assert_eq!(lightbox.display().address, "photo-0.jpg");
    }

    #[test]
    fn test_close_keeps_last_image() {
        let items = items(3);
        let (_, mut lightbox) = lightbox();
        lightbox.open(&items, 2);
        lightbox.close();

        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current_index(), Some(2));
        assert_eq!(lightbox.display().address, "photo-2.jpg");
        assert_eq!(lightbox.display().caption, "Photo 2");
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let (_, mut lightbox) = lightbox();
        lightbox.next(&[]);
        lightbox.previous(&[]);
        assert_eq!(lightbox.current_index(), None);
        assert_eq!(lightbox.display(), &Display::default());
    }

    #[test]
    fn test_keys_drive_navigation() {
        let items = items(4);
        let (_, mut lightbox) = lightbox();
        lightbox.open(&items, 1);

        lightbox.handle_key(&items, LightboxKey::ArrowRight);
        assert_eq!(lightbox.current_index(), Some(2));
        lightbox.handle_key(&items, LightboxKey::ArrowLeft);
        lightbox.handle_key(&items, LightboxKey::ArrowLeft);
        assert_eq!(lightbox.current_index(), Some(0));
        lightbox.handle_key(&items, LightboxKey::Escape);
        assert!(!lightbox.is_open());

        lightbox.handle_key(&items, LightboxKey::ArrowRight);
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn test_listener_lifecycle() {
        let items = items(3);
        let (counting, mut lightbox) = lightbox();

        lightbox.open(&items, 0);
        assert_eq!(counting.active(), 1);
        lightbox.next(&items);
        lightbox.next(&items);
        assert_eq!(counting.active(), 1);

        lightbox.close();
        assert_eq!(counting.active(), 0);
        assert_eq!(counting.added.get(), counting.removed.get());
        assert_eq!(counting.peak.get(), 1);

        lightbox.close();
        assert_eq!(counting.active(), 0);
    }

    #[test]
    fn test_drop_releases_listener() {
        let items = items(2);
        let (counting, mut lightbox) = lightbox();
        lightbox.open(&items, 1);
        drop(lightbox);

        assert_eq!(counting.active(), 0);
        assert_eq!(counting.added.get(), counting.removed.get());
    }

    proptest! {
        #[test]
        fn next_then_previous_round_trips(len in 2usize..50, start in 0usize..50) {
            let start = start % len;
            let items = items(len);
            let (_, mut lightbox) = lightbox();
            lightbox.open(&items, start);

            lightbox.next(&items);
            lightbox.previous(&items);
            prop_assert_eq!(lightbox.current_index(), Some(start));

            lightbox.previous(&items);
            lightbox.next(&items);
            prop_assert_eq!(lightbox.current_index(), Some(start));
        }

        #[test]
        fn listeners_balance_over_any_key_sequence(
            len in 1usize..10,
            keys in proptest::collection::vec(0u8..4, 0..40),
        ) {
            let items = items(len);
            let (counting, mut lightbox) = lightbox();
            for key in keys {
                match key {
                    0 => { lightbox.open(&items, 0); }
                    1 => lightbox.handle_key(&items, LightboxKey::Escape),
                    2 => lightbox.handle_key(&items, LightboxKey::ArrowRight),
                    _ => lightbox.handle_key(&items, LightboxKey::ArrowLeft),
                }
                prop_assert_eq!(counting.active(), usize::from(lightbox.is_open()));
                prop_assert!(counting.peak.get() <= 1);
            }
            lightbox.close();
            prop_assert_eq!(counting.added.get(), counting.removed.get());
        }
    }
}
