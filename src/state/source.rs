//! Gallery sources: where the ordered image list comes from
//!
//! A source is either a TOML manifest listing images (with optional
//! captions and asset-style references) or a folder of image files.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::task;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::data::ImageItem;
use crate::error::{GalleryError, Result};

/// File extensions picked up when scanning a folder
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// On-disk manifest layout
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    initial_load_count: Option<usize>,
    #[serde(default)]
    images: Vec<ImageItem>,
}

/// A loaded source, ready to build a gallery from
#[derive(Debug, Clone)]
pub struct LoadedSource {
    /// Short name shown in the toolbar
    pub label: String,
    /// Directory relative addresses are resolved against
    pub base_dir: PathBuf,
    pub items: Vec<ImageItem>,
    /// Manifest override for the first page size
    pub initial_load_count: Option<usize>,
}

impl LoadedSource {
    /// Turn a display address into a path for the image widget
    ///
    /// Empty addresses stay unresolved so the tile renders empty.
    pub fn resolve(&self, address: &str) -> Option<PathBuf> {
        if address.is_empty() {
            return None;
        }
        let path = Path::new(address);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(self.base_dir.join(path))
        }
    }
}

/// Load a manifest or scan a folder, off the UI thread
///
/// Errors are flattened to text so the result can travel in a message.
pub async fn load_source_async(path: PathBuf) -> std::result::Result<LoadedSource, String> {
    task::spawn_blocking(move || load_source(&path))
        .await
        .map_err(|e| GalleryError::Task(e.to_string()).to_string())?
        .map_err(|e| e.to_string())
}

/// Load whatever `path` points at
pub fn load_source(path: &Path) -> Result<LoadedSource> {
    if path.is_dir() {
        scan_folder(path)
    } else if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml")) {
        load_manifest(path)
    } else {
        Err(GalleryError::UnsupportedSource(path.to_path_buf()))
    }
}

/// Parse a TOML manifest
pub fn load_manifest(path: &Path) -> Result<LoadedSource> {
    let content = std::fs::read_to_string(path).map_err(|e| GalleryError::io(path, e))?;
    let manifest: Manifest = toml::from_str(&content).map_err(|source| GalleryError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), images = manifest.images.len(), "loaded manifest");

    Ok(LoadedSource {
        label: label_for(path),
        base_dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        items: manifest.images,
        initial_load_count: manifest.initial_load_count,
    })
}

/// Collect image files under `folder`, sorted by path
///
/// Addresses are stored relative to `folder`, which becomes the base
/// directory. Each file's stem becomes its caption.
pub fn scan_folder(folder: &Path) -> Result<LoadedSource> {
    debug!(folder = %folder.display(), "scanning folder");

    let mut paths: Vec<PathBuf> = WalkDir::new(folder)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_image(path))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(GalleryError::NoPhotos(folder.to_path_buf()));
    }

    let items: Vec<ImageItem> = paths
        .iter()
        .map(|path| {
            let address = path.strip_prefix(folder).unwrap_or(path);
            let item = ImageItem::new(address.to_string_lossy());
            match path.file_stem() {
                Some(stem) => item.with_caption(stem.to_string_lossy()),
                None => item,
            }
        })
        .collect();

    info!(folder = %folder.display(), images = items.len(), "scanned folder");

    Ok(LoadedSource {
        label: label_for(folder),
        base_dir: folder.to_path_buf(),
        items,
        initial_load_count: None,
    })
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn label_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
