//! Shared data structures for the gallery state
//!
//! These structs represent the data model that flows from a gallery
//! source (manifest or folder) into the controllers and the UI layer.

use serde::Deserialize;
use serde_json::Value;

/// A single image in the gallery
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageItem {
    /// Where the image lives (plain address or structured asset reference)
    #[serde(default, alias = "src", alias = "url")]
    pub address: ImageRef,
    /// Optional caption shown under the tile and in the lightbox
    #[serde(default)]
    pub caption: Option<String>,
}

impl ImageItem {
    /// Create an item from a plain address string
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: ImageRef::Address(address.into()),
            caption: None,
        }
    }

    /// Attach a caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Caption text, empty when absent
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }
}

/// A reference to an image as it enters the system
///
/// Manifests may describe an image either as a plain string or as an
/// asset object (`{ address = ... }`, `{ default = ... }`). The shape is
/// resolved once, here, and everything downstream matches on the variant.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum ImageRef {
    /// Nothing was given
    #[default]
    Missing,
    /// A plain address (path or URL)
    Address(String),
    /// A structured asset object
    Asset(AssetRef),
    /// Any other scalar or container value
    Opaque(Value),
}

/// Structured asset reference
///
/// Only string-valued fields are kept; a number under `address` is the
/// same as no address at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetRef {
    pub address: Option<String>,
    pub default: Option<String>,
}

impl From<Value> for ImageRef {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ImageRef::Missing,
            Value::String(address) => ImageRef::Address(address),
            Value::Object(fields) => {
                let string_field = |names: &[&str]| {
                    names
                        .iter()
                        .find_map(|name| fields.get(*name).and_then(Value::as_str))
                        .map(str::to_owned)
                };
                ImageRef::Asset(AssetRef {
                    address: string_field(&["address", "src", "url"]),
                    default: string_field(&["default"]),
                })
            }
            other => ImageRef::Opaque(other),
        }
    }
}
