//! "Load more" paging over the ordered image list

use tracing::debug;

/// Number of items revealed by the default initial page and by each
/// `load_more` call
pub const PAGE_STEP: usize = 6;

/// Tracks how many items of the list are currently visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    visible_count: usize,
}

impl Paging {
    /// Start with `initial` items visible
    ///
    /// The value is kept as given even when it exceeds the list length;
    /// slicing clamps it when rendering. Zero is raised to one.
    pub fn new(initial: usize) -> Self {
        Self {
            visible_count: initial.max(1),
        }
    }

    /// Raw visible count, possibly larger than the list
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Visible count clamped to `len`
    pub fn shown(&self, len: usize) -> usize {
        self.visible_count.min(len)
    }

    /// Reveal the next page, capped at `len`
    ///
    /// Never shrinks the window: when the initial value already exceeds
    /// `len`, this is a no-op instead of lowering the count to `len`.
    pub fn load_more(&mut self, len: usize) {
        let next = (self.visible_count + PAGE_STEP).min(len);
        if next > self.visible_count {
            debug!(from = self.visible_count, to = next, total = len, "revealing more photos");
            self.visible_count = next;
        }
    }

    /// Whether `load_more` would reveal anything
    pub fn has_more(&self, len: usize) -> bool {
        self.visible_count < len
    }

    /// The visible prefix of `items`
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.shown(items.len())]
    }

    /// Status line shown under the grid
    pub fn status(&self, len: usize) -> String {
        format!("Showing {} of {} photos", self.shown(len), len)
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::new(PAGE_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fourteen_items_in_three_pages() {
        let items: Vec<u32> = (0..14).collect();
        let mut paging = Paging::default();

        assert_eq!(paging.visible(&items).len(), 6);
        assert!(paging.has_more(items.len()));
        assert_eq!(paging.status(items.len()), "Showing 6 of 14 photos");

        paging.load_more(items.len());
        assert_eq!(paging.visible(&items).len(), 12);
        assert!(paging.has_more(items.len()));

        paging.load_more(items.len());
        assert_eq!(paging.visible_count(), 14);
        assert!(!paging.has_more(items.len()));
        assert_eq!(paging.status(items.len()), "Showing 14 of 14 photos");

        paging.load_more(items.len());
        assert_eq!(paging.visible_count(), 14);
    }

    #[test]
    fn test_oversized_initial_is_clamped_for_display() {
        let items = ["a", "b", "c"];
        let mut paging = Paging::new(6);

        assert_eq!(paging.visible(&items), &items[..]);
        assert!(!paging.has_more(items.len()));
        assert_eq!(paging.status(items.len()), "Showing 3 of 3 photos");

        paging.load_more(items.len());
        assert_eq!(paging.visible_count(), 6);
    }

    #[test]
    fn test_empty_list() {
        let items: [u8; 0] = [];
        let mut paging = Paging::default();
        paging.load_more(0);

        assert!(paging.visible(&items).is_empty());
        assert!(!paging.has_more(0));
        assert_eq!(paging.status(0), "Showing 0 of 0 photos");
    }

    #[test]
    fn test_zero_initial_is_raised() {
        assert_eq!(Paging::new(0).visible_count(), 1);
    }

    proptest! {
        #[test]
        fn load_more_is_monotonic_and_capped(
            len in 0usize..200,
            initial in 1usize..20,
            calls in 0usize..50,
        ) {
            let mut paging = Paging::new(initial);
            let mut prev = paging.visible_count();
            for _ in 0..calls {
                paging.load_more(len);
                prop_assert!(paging.visible_count() >= prev);
                prop_assert!(paging.visible_count() <= len.max(initial));
                prev = paging.visible_count();
            }
        }

        #[test]
        fn load_more_reaches_len_in_expected_calls(len in 1usize..200, initial in 1usize..20) {
            prop_assume!(len > initial);
            let mut paging = Paging::new(initial);
            let needed = (len - initial).div_ceil(PAGE_STEP);
            for _ in 0..needed - 1 {
                paging.load_more(len);
                prop_assert!(paging.has_more(len));
            }
            paging.load_more(len);
            prop_assert_eq!(paging.visible_count(), len);
        }
    }
}
