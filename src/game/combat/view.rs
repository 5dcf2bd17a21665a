// Read-only snapshot of the duel for rendering

use glam::Vec2;

use super::phase::CombatPhase;
use crate::engine::assets::FrameNaming;
use crate::game::characters::{Actor, SequenceLayout};

/// Which sprite sheet an actor is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSet {
    SkeletonAttack,
    MinotaurWalk,
    MinotaurAttack,
}

impl SpriteSet {
    pub const ALL: [SpriteSet; 3] = [
        SpriteSet::SkeletonAttack,
        SpriteSet::MinotaurWalk,
        SpriteSet::MinotaurAttack,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SkeletonAttack => "skeleton_attack",
            Self::MinotaurWalk => "minotaur_walk",
            Self::MinotaurAttack => "minotaur_attack",
        }
    }

    /// Frame files backing this set, matching the sequence layout
    pub fn naming(&self) -> FrameNaming {
        let (directory, prefix, zero_padded, layout) = match self {
            Self::SkeletonAttack => ("skeleton", "skeleton_", false, SequenceLayout::SKELETON_ATTACK),
            Self::MinotaurWalk => (
                "minotaur",
                "Minotaur_01_Walking_",
                true,
                SequenceLayout::MINOTAUR_WALK,
            ),
            Self::MinotaurAttack => (
                "minotaur",
                "Minotaur_01_Attacking_",
                true,
                SequenceLayout::MINOTAUR_ATTACK,
            ),
        };
        FrameNaming {
            directory,
            prefix,
            frame_count: layout.total_frames,
            start_index: layout.start_frame,
            zero_padded,
        }
    }
}

/// What the renderer needs to draw one actor
#[derive(Debug, Clone, PartialEq)]
pub struct ActorView {
    pub name: String,
    pub position: Vec2,
    pub sprite: SpriteSet,
    pub frame_index: usize,
    pub alive: bool,
    pub hit_points: i32,
    pub max_hit_points: i32,
    /// Remaining health in [0, 1]
    pub health: f32,
}

impl ActorView {
    pub(crate) fn capture(actor: &Actor, position: Vec2, sprite: SpriteSet, frame_index: usize) -> Self {
        Self {
            name: actor.name().to_string(),
            position,
            sprite,
            frame_index,
            alive: actor.is_alive(),
            hit_points: actor.hit_points(),
            max_hit_points: actor.max_hit_points(),
            health: actor.health_fraction(),
        }
    }
}

/// Full scene snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct BattleView {
    pub phase: CombatPhase,
    pub player: ActorView,
    pub enemy: ActorView,
}

impl BattleView {
    pub fn actors(&self) -> [&ActorView; 2] {
        [&self.player, &self.enemy]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_matches_layout() {
        let skeleton = SpriteSet::SkeletonAttack.naming();
        assert_eq!(skeleton.numbers(), 1..13);
        assert_eq!(skeleton.file_name(1), "skeleton_1.png");

        let walk = SpriteSet::MinotaurWalk.naming();
        assert_eq!(walk.numbers(), 0..18);
        assert_eq!(walk.file_name(5), "Minotaur_01_Walking_005.png");
    }

    #[test]
    fn test_names_are_unique() {
        let names: std::collections::HashSet<_> =
            SpriteSet::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), SpriteSet::ALL.len());
    }
}
