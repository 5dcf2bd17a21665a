// Duel configuration
//
// All tuning lives here as compile-time constants; nothing is read from disk.

use std::time::Duration;

use glam::Vec2;

use super::CombatError;
use crate::engine::clock::FRAME_DURATION;
use crate::game::characters::{ActorStats, SequenceLayout, ENEMY_STATS, PLAYER_STATS};

/// Distance below which the two actors are in melee range
pub const ATTACK_RANGE: f32 = 225.0;

/// Distance the enemy walks per accepted walk frame
pub const WALK_STEP: f32 = 3.0;

/// Where the skeleton stands
pub const PLAYER_START: Vec2 = Vec2::new(500.0, 350.0);

/// Where the minotaur enters from
pub const ENEMY_START: Vec2 = Vec2::new(-100.0, 350.0);

/// Everything needed to set up a duel
#[derive(Debug, Clone)]
pub struct CombatConfig {
    pub frame_duration: Duration,
    pub attack_range: f32,
    pub walk_step: f32,
    pub player_start: Vec2,
    pub enemy_start: Vec2,
    pub player_stats: ActorStats,
    pub enemy_stats: ActorStats,
    pub player_attack: SequenceLayout,
    pub enemy_walk: SequenceLayout,
    pub enemy_attack: SequenceLayout,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            frame_duration: FRAME_DURATION,
            attack_range: ATTACK_RANGE,
            walk_step: WALK_STEP,
            player_start: PLAYER_START,
            enemy_start: ENEMY_START,
            player_stats: PLAYER_STATS,
            enemy_stats: ENEMY_STATS,
            player_attack: SequenceLayout::SKELETON_ATTACK,
            enemy_walk: SequenceLayout::MINOTAUR_WALK,
            enemy_attack: SequenceLayout::MINOTAUR_ATTACK,
        }
    }
}

impl CombatConfig {
    /// Reject configurations the duel could never finish under
    pub fn validate(&self) -> Result<(), CombatError> {
        if self.frame_duration.is_zero() {
            return Err(CombatError::InvalidConfig(
                "frame duration must be non-zero".to_string(),
            ));
        }
        if !(self.attack_range > 0.0) {
            return Err(CombatError::InvalidConfig(format!(
                "attack range must be positive, got {}",
                self.attack_range
            )));
        }
        if !(self.walk_step > 0.0) {
            return Err(CombatError::InvalidConfig(format!(
                "walk step must be positive, got {}",
                self.walk_step
            )));
        }
        if !self.player_stats.is_valid() {
            return Err(CombatError::InvalidConfig(format!(
                "invalid player stats: {:?}",
                self.player_stats
            )));
        }
        if !self.enemy_stats.is_valid() {
            return Err(CombatError::InvalidConfig(format!(
                "invalid enemy stats: {:?}",
                self.enemy_stats
            )));
        }
        Ok(())
    }

    /// Number of accepted walk frames until the enemy is in range
    pub fn walk_frames_to_range(&self) -> u32 {
        let gap = (self.player_start.x - self.enemy_start.x).abs();
        if gap < self.attack_range {
            return 1;
        }
        ((gap - self.attack_range) / self.walk_step).floor() as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CombatConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_duration, Duration::from_millis(50));
        assert_eq!(config.attack_range, 225.0);
        assert_eq!(config.walk_step, 3.0);
    }

    #[test]
    fn test_default_approach_length() {
        // 600 units apart, range 225, 3 units per frame
        assert_eq!(CombatConfig::default().walk_frames_to_range(), 126);
    }

    #[test]
    fn test_rejects_zero_walk_step() {
        let config = CombatConfig {
            walk_step: 0.0,
            ..CombatConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CombatError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_nan_range() {
        let config = CombatConfig {
            attack_range: f32::NAN,
            ..CombatConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_frame_duration() {
        let config = CombatConfig {
            frame_duration: Duration::ZERO,
            ..CombatConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_dead_actor() {
        let config = CombatConfig {
            enemy_stats: ActorStats {
                max_hit_points: 0,
                attack_points: 20,
                defense: 15,
            },
            ..CombatConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
