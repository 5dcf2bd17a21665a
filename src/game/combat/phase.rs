// Turn phases of the duel

/// Where the duel currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CombatPhase {
    /// Enemy is walking in; no attacks allowed yet
    #[default]
    Approaching,
    /// In range, waiting for the player to attack
    Idle,
    /// Player attack animation is playing
    PlayerAttacking,
    /// Enemy retaliation animation is playing
    EnemyAttacking,
    /// One side is dead
    Over,
}

impl CombatPhase {
    /// Check if the player may start an attack
    pub fn accepts_attack(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check if the duel has ended
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Over)
    }

    /// Short text for the status line
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approaching => "Enemy approaching",
            Self::Idle => "Your turn",
            Self::PlayerAttacking => "Attacking",
            Self::EnemyAttacking => "Enemy turn",
            Self::Over => "Battle over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        assert_eq!(CombatPhase::default(), CombatPhase::Approaching);
    }

    #[test]
    fn test_only_idle_accepts_attack() {
        assert!(CombatPhase::Idle.accepts_attack());
        assert!(!CombatPhase::Approaching.accepts_attack());
        assert!(!CombatPhase::PlayerAttacking.accepts_attack());
        assert!(!CombatPhase::EnemyAttacking.accepts_attack());
        assert!(!CombatPhase::Over.accepts_attack());
    }

    #[test]
    fn test_only_over_is_terminal() {
        assert!(CombatPhase::Over.is_terminal());
        assert!(!CombatPhase::Idle.is_terminal());
        assert!(!CombatPhase::EnemyAttacking.is_terminal());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CombatPhase::Idle.label(), "Your turn");
        assert_eq!(CombatPhase::Over.label(), "Battle over");
    }
}
