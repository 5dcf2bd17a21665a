// Play-once sprite animation sequences

use std::time::Duration;

use crate::engine::clock::{FrameClock, Timestamp};

/// Errors raised when building an animation sequence
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation sequence needs at least one frame")]
    NoFrames,

    #[error("Animation frame duration must be non-zero")]
    ZeroFrameDuration,

    #[error("Animation frames {start}..+{total} overflow the frame index range")]
    FrameRangeOverflow { start: usize, total: usize },
}

/// Frame numbering of one sprite sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceLayout {
    /// Number of frames in the sequence
    pub total_frames: usize,
    /// Index of the first frame (sprite files are numbered from 0 or 1)
    pub start_frame: usize,
}

impl SequenceLayout {
    pub const fn new(total_frames: usize, start_frame: usize) -> Self {
        Self {
            total_frames,
            start_frame,
        }
    }

    /// Skeleton attack: `skeleton_1.png` .. `skeleton_12.png`
    pub const SKELETON_ATTACK: SequenceLayout = SequenceLayout::new(12, 1);

    /// Minotaur walk cycle: `Minotaur_01_Walking_000.png` .. `_017.png`
    pub const MINOTAUR_WALK: SequenceLayout = SequenceLayout::new(18, 0);

    /// Minotaur attack: `Minotaur_01_Attacking_000.png` .. `_017.png`
    pub const MINOTAUR_ATTACK: SequenceLayout = SequenceLayout::new(18, 0);
}

/// Runs once through a bounded frame range at a fixed frame rate
///
/// Timing is delegated to a `FrameClock`. When the last frame is reached the
/// sequence reports completion and holds on that frame until `reset`. Looping
/// is left to the caller (reset on completion).
#[derive(Debug, Clone)]
pub struct AnimationSequence {
    clock: FrameClock,
    start_frame: usize,
    last_frame: usize,
    current_frame: usize,
    complete: bool,
}

impl AnimationSequence {
    /// Create a sequence stepping once per `frame_duration`
    ///
    /// The whole frame range must be addressable, so a layout whose end
    /// index would overflow is rejected here rather than on some later tick.
    pub fn with_frame_duration(
        layout: SequenceLayout,
        frame_duration: Duration,
    ) -> Result<Self, AnimationError> {
        if layout.total_frames == 0 {
            return Err(AnimationError::NoFrames);
        }
        if frame_duration.is_zero() {
            return Err(AnimationError::ZeroFrameDuration);
        }
        let end = layout
            .start_frame
            .checked_add(layout.total_frames)
            .ok_or(AnimationError::FrameRangeOverflow {
                start: layout.start_frame,
                total: layout.total_frames,
            })?;

        Ok(Self {
            clock: FrameClock::new(frame_duration),
            start_frame: layout.start_frame,
            last_frame: end - 1,
            current_frame: layout.start_frame,
            complete: false,
        })
    }

    /// Step the sequence at `now`
    ///
    /// Returns `true` if the displayed frame changed and a redraw is needed.
    pub fn advance(&mut self, now: Timestamp) -> bool {
        if !self.clock.advance(now) {
            return false;
        }

        // Holds on the last frame once finished
        if self.complete {
            return false;
        }

        // Stepping past the last frame completes the run
        if self.current_frame >= self.last_frame {
            self.complete = true;
        } else {
            self.current_frame += 1;
        }

        true
    }

    /// Whether every frame has been shown since the last reset
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Rewind to the first frame so the sequence can be replayed
    ///
    /// The frame clock goes back to the epoch, so the first advance after a
    /// reset is judged against the epoch rather than the previous run.
    pub fn reset(&mut self) {
        self.current_frame = self.start_frame;
        self.complete = false;
        self.clock.rewind();
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }
}
