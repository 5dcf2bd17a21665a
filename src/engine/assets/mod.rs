// Asset management system
//
// Loads numbered sprite frames from disk and hands them out by frame index.

mod library;
mod loader;
pub mod sprites;

pub use library::SpriteLibrary;
pub use loader::AssetLoader;
pub use sprites::FrameNaming;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
