// Numbered sprite frame sets

use super::loader::AssetLoader;
use super::AssetError;
use image::io::Reader as ImageReader;
use log::warn;
use std::io::Cursor;

/// How the frame files of one animation are named on disk
///
/// Frames are numbered from `start_index`, either plainly (`skeleton_1.png`)
/// or zero-padded to three digits (`Minotaur_01_Walking_000.png`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameNaming {
    /// Directory under `textures/`
    pub directory: &'static str,
    /// File name up to the frame number
    pub prefix: &'static str,
    pub frame_count: usize,
    pub start_index: usize,
    pub zero_padded: bool,
}

impl FrameNaming {
    /// File name for frame `number`
    pub fn file_name(&self, number: usize) -> String {
        if self.zero_padded {
            format!("{}{:03}.png", self.prefix, number)
        } else {
            format!("{}{}.png", self.prefix, number)
        }
    }

    /// Frame numbers in file order
    pub fn numbers(&self) -> std::ops::Range<usize> {
        self.start_index..self.start_index + self.frame_count
    }
}

/// Size of one sprite frame
///
/// Only the image header is read. Pixel data belongs to whatever backend
/// paints the scene; placement needs nothing beyond width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    width: u32,
    height: u32,
}

impl SpriteFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// All frames of one animation, stored at the slot matching their file number
///
/// A 1-based set of 12 frames has 13 slots with slot 0 empty, so the frame
/// index from an animation sequence can be used directly.
#[derive(Debug, Clone, Default)]
pub struct SpriteFrames {
    frames: Vec<Option<SpriteFrame>>,
}

impl SpriteFrames {
    /// Build a set from known frames, numbered from `start_index`
    #[cfg(test)]
    pub fn from_frames(start_index: usize, frames: Vec<SpriteFrame>) -> Self {
        let mut slots: Vec<Option<SpriteFrame>> = vec![None; start_index];
        slots.extend(frames.into_iter().map(Some));
        Self { frames: slots }
    }

    /// Load what can be loaded, leaving gaps for frames that fail
    pub fn load_lenient(loader: &AssetLoader, naming: &FrameNaming) -> Self {
        let mut slots: Vec<Option<SpriteFrame>> = vec![None; naming.start_index];
        for number in naming.numbers() {
            match Self::load_frame(loader, naming, number) {
                Ok(frame) => slots.push(Some(frame)),
                Err(e) => {
                    warn!("Skipping sprite frame: {}", e);
                    slots.push(None);
                }
            }
        }
        Self { frames: slots }
    }

    fn load_frame(
        loader: &AssetLoader,
        naming: &FrameNaming,
        number: usize,
    ) -> Result<SpriteFrame, AssetError> {
        let file_name = naming.file_name(number);
        let bytes = loader.load_texture_bytes(naming.directory, &file_name)?;
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_dimensions()
            .map_err(|source| AssetError::Decode {
                path: file_name,
                source,
            })?;
        Ok(SpriteFrame::new(width, height))
    }

    /// Frame at `index`, or `None` if out of range or never loaded
    pub fn get_frame(&self, index: usize) -> Option<&SpriteFrame> {
        self.frames.get(index).and_then(Option::as_ref)
    }

    /// Number of frames actually loaded
    pub fn loaded_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_some()).count()
    }
}
