// Character system
//
// This module contains everything related to the two duelists:
// - Actor data and the damage rule
// - Combat stats
// - Play-once animation sequences for sprites

pub mod actor;
pub mod animation;
pub mod stats;

// Re-export commonly used types
pub use actor::{Actor, ActorKind};
pub use animation::{AnimationError, AnimationSequence, SequenceLayout};
pub use stats::{ActorStats, ENEMY_STATS, PLAYER_STATS};
