use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a gallery source or the settings file
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid settings: {0}")]
    Settings(#[from] toml::ser::Error),

    #[error("no photos found in {0}")]
    NoPhotos(PathBuf),

    #[error("{0} is neither a folder nor a .toml manifest")]
    UnsupportedSource(PathBuf),

    #[error("background task failed: {0}")]
    Task(String),
}

impl GalleryError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GalleryError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
