// Combat stats for the two duelists

/// Fixed combat stats, set at spawn and never changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorStats {
    /// Maximum and starting health
    pub max_hit_points: i32,
    /// Damage dealt by one attack
    pub attack_points: i32,
    /// Damage reduction rating; not part of the damage formula yet
    pub defense: i32,
}

/// The skeleton the player controls
pub const PLAYER_STATS: ActorStats = ActorStats {
    max_hit_points: 200,
    attack_points: 35,
    defense: 25,
};

/// The approaching minotaur
pub const ENEMY_STATS: ActorStats = ActorStats {
    max_hit_points: 150,
    attack_points: 20,
    defense: 15,
};

impl ActorStats {
    /// Stats usable by an actor: positive health, non-negative attack and defense
    pub fn is_valid(&self) -> bool {
        self.max_hit_points > 0 && self.attack_points >= 0 && self.defense >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_stats() {
        assert_eq!(PLAYER_STATS.max_hit_points, 200);
        assert_eq!(PLAYER_STATS.attack_points, 35);
        assert_eq!(ENEMY_STATS.max_hit_points, 150);
        assert_eq!(ENEMY_STATS.attack_points, 20);
    }

    #[test]
    fn test_validity() {
        assert!(PLAYER_STATS.is_valid());
        assert!(ENEMY_STATS.is_valid());

        let dead_on_arrival = ActorStats {
            max_hit_points: 0,
            ..PLAYER_STATS
        };
        assert!(!dead_on_arrival.is_valid());

        let negative_attack = ActorStats {
            attack_points: -1,
            ..ENEMY_STATS
        };
        assert!(!negative_attack.is_valid());
    }
}
