// Combat entity shared by the player and the enemy

use super::stats::ActorStats;

/// Which side of the duel an actor fights on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Enemy,
}

impl ActorKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Enemy => "enemy",
        }
    }
}

/// A combatant with health and fixed attack/defense ratings
///
/// Health only ever goes down. An actor that reaches zero hit points is
/// marked dead but stays around so the scene can keep drawing it.
#[derive(Debug, Clone)]
pub struct Actor {
    name: String,
    kind: ActorKind,
    stats: ActorStats,
    hit_points: i32,
    alive: bool,
}

impl Actor {
    /// Spawn an actor at full health
    pub fn new(name: &str, kind: ActorKind, stats: ActorStats) -> Self {
        Self {
            name: name.to_string(),
            kind,
            hit_points: stats.max_hit_points,
            alive: stats.max_hit_points > 0,
            stats,
        }
    }

    /// Subtract `amount` from health, flooring at zero
    ///
    /// Defense is not applied: the attacker's raw attack points come off.
    /// Negative amounts are ignored since there is no healing.
    pub fn apply_damage(&mut self, amount: i32) {
        let amount = amount.max(0);
        self.hit_points = (self.hit_points - amount).max(0);

        if self.hit_points == 0 {
            self.alive = false;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    pub fn max_hit_points(&self) -> i32 {
        self.stats.max_hit_points
    }

    pub fn attack_points(&self) -> i32 {
        self.stats.attack_points
    }

    pub fn defense(&self) -> i32 {
        self.stats.defense
    }

    /// Remaining health in [0, 1], for health bars
    pub fn health_fraction(&self) -> f32 {
        if self.stats.max_hit_points <= 0 {
            return 0.0;
        }
        crate::core::math::clamp(
            self.hit_points as f32 / self.stats.max_hit_points as f32,
            0.0,
            1.0,
        )
    }
}
