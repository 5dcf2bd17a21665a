// Named collection of sprite frame sets

use super::loader::AssetLoader;
use super::sprites::{FrameNaming, SpriteFrame, SpriteFrames};
use log::info;
use std::collections::HashMap;

/// Every animation's frames, looked up by animation name
#[derive(Debug, Default)]
pub struct SpriteLibrary {
    sets: HashMap<&'static str, SpriteFrames>,
}

impl SpriteLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load each named set, keeping whatever frames are readable
    pub fn load_lenient(loader: &AssetLoader, sets: &[(&'static str, FrameNaming)]) -> Self {
        let mut library = Self::new();
        for (name, naming) in sets {
            let frames = SpriteFrames::load_lenient(loader, naming);
            info!(
                "Loaded {}/{} frames for '{}'",
                frames.loaded_count(),
                naming.frame_count,
                name
            );
            library.insert(name, frames);
        }
        library
    }

    pub fn insert(&mut self, name: &'static str, frames: SpriteFrames) {
        self.sets.insert(name, frames);
    }

    /// Frame `index` of animation `name`, if both exist
    pub fn frame(&self, name: &str, index: usize) -> Option<&SpriteFrame> {
        self.sets.get(name).and_then(|set| set.get_frame(index))
    }

    /// Frames loaded across every set
    pub fn loaded_frames(&self) -> usize {
        self.sets.values().map(SpriteFrames::loaded_count).sum()
    }
}
