// Turn-based combat
//
// The duel is a small state machine pumped by the host once per display
// frame. Animations gate the turns: damage lands only when an attack
// animation finishes, and the enemy always answers with its own attack.

pub mod config;
pub mod events;
pub mod orchestrator;
pub mod phase;
pub mod view;

pub use config::CombatConfig;
pub use events::CombatEvent;
pub use orchestrator::CombatOrchestrator;
pub use phase::CombatPhase;
pub use view::{ActorView, BattleView, SpriteSet};

use crate::game::characters::AnimationError;

/// Errors raised while setting up a duel
#[derive(Debug, thiserror::Error)]
pub enum CombatError {
    #[error("Invalid combat configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid animation: {0}")]
    Animation(#[from] AnimationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combat_error_display() {
        let err = CombatError::from(AnimationError::NoFrames);
        assert_eq!(
            err.to_string(),
            "Invalid animation: Animation sequence needs at least one frame"
        );
    }
}
