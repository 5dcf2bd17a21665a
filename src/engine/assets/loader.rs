// Asset path resolution and raw loading

use super::AssetError;
use std::path::{Path, PathBuf};

/// Directory under the asset root holding sprite images
const TEXTURE_DIRECTORY: &str = "textures";

/// Finds and reads asset files under a base directory
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Full path of a texture in `directory`
    pub fn resolve_texture(&self, directory: &str, file_name: &str) -> PathBuf {
        self.base_path
            .join(TEXTURE_DIRECTORY)
            .join(directory)
            .join(file_name)
    }

    /// Read a texture's bytes from disk
    pub fn load_texture_bytes(&self, directory: &str, file_name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_texture(directory, file_name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        Ok(std::fs::read(&path)?)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
