// Turn state machine tying animations to damage

use glam::Vec2;
use log::{debug, info};

use super::config::CombatConfig;
use super::events::CombatEvent;
use super::phase::CombatPhase;
use super::view::{ActorView, BattleView, SpriteSet};
use super::CombatError;
use crate::core::math::{distance_1d, step_toward, within_range};
use crate::engine::clock::Timestamp;
use crate::game::characters::{Actor, ActorKind, AnimationSequence};

/// Runs one skeleton-versus-minotaur duel
///
/// Flow: the minotaur walks in until it is within attack range, then the
/// player may attack. Each player attack plays to completion, deals damage,
/// and is answered by an enemy attack that does the same. The duel ends as
/// soon as either side dies.
///
/// Only one attack animation runs at a time. The walk cycle loops on its
/// own while the enemy approaches and while the player decides.
#[derive(Debug)]
pub struct CombatOrchestrator {
    config: CombatConfig,
    phase: CombatPhase,

    player: Actor,
    enemy: Actor,
    player_position: Vec2,
    enemy_position: Vec2,

    player_attack: AnimationSequence,
    enemy_walk: AnimationSequence,
    enemy_attack: AnimationSequence,
    /// Sequence the enemy sprite is drawn from
    enemy_sprite: SpriteSet,

    events: Vec<CombatEvent>,
}

impl CombatOrchestrator {
    /// Set up a duel with both actors at full health and the enemy out of range
    pub fn new(config: CombatConfig) -> Result<Self, CombatError> {
        config.validate()?;

        let frame_duration = config.frame_duration;
        let player_attack =
            AnimationSequence::with_frame_duration(config.player_attack, frame_duration)?;
        let enemy_walk = AnimationSequence::with_frame_duration(config.enemy_walk, frame_duration)?;
        let enemy_attack =
            AnimationSequence::with_frame_duration(config.enemy_attack, frame_duration)?;

        let player = Actor::new("Skeleton", ActorKind::Player, config.player_stats);
        let enemy = Actor::new("Minotaur", ActorKind::Enemy, config.enemy_stats);
        for actor in [&player, &enemy] {
            info!(
                "{}: {} HP, {} attack, {} defense",
                actor.name(),
                actor.max_hit_points(),
                actor.attack_points(),
                actor.defense()
            );
        }
        info!(
            "{} enters {:.0} units away, {} walk frames from range",
            enemy.name(),
            distance_1d(config.player_start.x, config.enemy_start.x),
            config.walk_frames_to_range()
        );

        Ok(Self {
            phase: CombatPhase::Approaching,
            player,
            enemy,
            player_position: config.player_start,
            enemy_position: config.enemy_start,
            player_attack,
            enemy_walk,
            enemy_attack,
            enemy_sprite: SpriteSet::MinotaurWalk,
            events: Vec::new(),
            config,
        })
    }

    /// Advance whatever is animating in the current phase
    ///
    /// Returns `true` when a displayed frame changed and the scene should be
    /// redrawn. Does nothing once the duel is over.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        match self.phase {
            CombatPhase::Approaching | CombatPhase::Idle => self.tick_walk(now),
            CombatPhase::PlayerAttacking => self.tick_player_attack(now),
            CombatPhase::EnemyAttacking => self.tick_enemy_attack(now),
            CombatPhase::Over => false,
        }
    }

    /// Start the player's attack
    ///
    /// Only accepted while idle (enemy in range, no animation mid-flight) and
    /// the enemy is alive. Anything else is ignored. Returns whether the
    /// attack started.
    pub fn start_player_attack(&mut self) -> bool {
        if !self.phase.accepts_attack() {
            debug!("Attack ignored during phase {:?}", self.phase);
            return false;
        }
        if !self.enemy.is_alive() {
            debug!("Attack ignored: {} is already dead", self.enemy.name());
            return false;
        }

        self.player_attack.reset();
        self.transition(CombatPhase::PlayerAttacking);
        true
    }

    fn tick_walk(&mut self, now: Timestamp) -> bool {
        if !self.enemy_walk.advance(now) {
            return false;
        }

        if self.phase == CombatPhase::Approaching {
            self.enemy_position.x = step_toward(
                self.enemy_position.x,
                self.player_position.x,
                self.config.walk_step,
            );

            if within_range(
                self.player_position.x,
                self.enemy_position.x,
                self.config.attack_range,
            ) {
                info!(
                    "{} in range at distance {:.0}",
                    self.enemy.name(),
                    self.distance()
                );
                self.transition(CombatPhase::Idle);
            }
        }

        // Walk cycle loops forever
        if self.enemy_walk.is_complete() {
            self.enemy_walk.reset();
        }

        true
    }

    fn tick_player_attack(&mut self, now: Timestamp) -> bool {
        if !self.player_attack.advance(now) {
            return false;
        }

        if self.player_attack.is_complete() {
            self.resolve_player_attack();
        }
        true
    }

    fn tick_enemy_attack(&mut self, now: Timestamp) -> bool {
        if !self.enemy_attack.advance(now) {
            return false;
        }

        if self.enemy_attack.is_complete() {
            self.resolve_enemy_attack();
        }
        true
    }

    fn resolve_player_attack(&mut self) {
        let amount = self.player.attack_points();
        Self::strike(&mut self.enemy, amount, &mut self.events);

        if !self.enemy.is_alive() {
            self.transition(CombatPhase::Over);
            return;
        }

        // Enemy always retaliates
        self.player_attack.reset();
        self.enemy_attack.reset();
        self.enemy_sprite = SpriteSet::MinotaurAttack;
        self.transition(CombatPhase::EnemyAttacking);
    }

    fn resolve_enemy_attack(&mut self) {
        let amount = self.enemy.attack_points();
        Self::strike(&mut self.player, amount, &mut self.events);

        if !self.player.is_alive() {
            self.transition(CombatPhase::Over);
            return;
        }

        self.enemy_attack.reset();
        self.enemy_sprite = SpriteSet::MinotaurWalk;
        self.transition(CombatPhase::Idle);
    }

    fn strike(target: &mut Actor, amount: i32, events: &mut Vec<CombatEvent>) {
        target.apply_damage(amount);
        info!(
            "{} takes {} damage ({}/{} HP left)",
            target.name(),
            amount,
            target.hit_points(),
            target.max_hit_points()
        );
        events.push(CombatEvent::Damage {
            target: target.kind(),
            amount,
            remaining: target.hit_points(),
        });

        if !target.is_alive() {
            info!("{} is defeated", target.name());
            events.push(CombatEvent::Defeated {
                target: target.kind(),
            });
        }
    }

    fn transition(&mut self, to: CombatPhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        debug!("Phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.events.push(CombatEvent::PhaseChanged { from, to });
    }

    /// Check if the host can stop pumping ticks
    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Separation along the approach axis
    pub fn distance(&self) -> f32 {
        distance_1d(self.player_position.x, self.enemy_position.x)
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot for the renderer
    pub fn view(&self) -> BattleView {
        let enemy_frame = match self.enemy_sprite {
            SpriteSet::MinotaurAttack => self.enemy_attack.current_frame_index(),
            _ => self.enemy_walk.current_frame_index(),
        };

        BattleView {
            phase: self.phase,
            player: ActorView::capture(
                &self.player,
                self.player_position,
                SpriteSet::SkeletonAttack,
                self.player_attack.current_frame_index(),
            ),
            enemy: ActorView::capture(
                &self.enemy,
                self.enemy_position,
                self.enemy_sprite,
                enemy_frame,
            ),
        }
    }
}
