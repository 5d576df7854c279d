//! State management module
//!
//! This module holds everything the gallery knows, independent of iced:
//! - Shared data structures (data.rs)
//! - Image reference normalization (normalize.rs)
//! - Load-more paging (paging.rs)
//! - The lightbox controller and its key binding (lightbox.rs, keys.rs)
//! - The gallery component tying them together (gallery.rs)
//! - Gallery sources: manifests and folders (source.rs)

pub mod data;
pub mod gallery;
pub mod keys;
pub mod lightbox;
pub mod normalize;
pub mod paging;
pub mod source;
