// Draws the duel from a read-only snapshot

use std::sync::Arc;

use log::{trace, warn};
use winit::window::Window;

use crate::engine::assets::{AssetLoader, SpriteLibrary};
use crate::engine::renderer::{SceneRenderer, SpriteRect, SPRITE_SCALE};
use crate::game::combat::{ActorView, BattleView, CombatPhase, SpriteSet};

const WINDOW_TITLE: &str = "Minotaur Skirmish";

/// One sprite blit produced by the last draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteSet,
    pub frame_index: usize,
    pub rect: SpriteRect,
}

/// Renders sprite placements and publishes the HP status line
///
/// Placements are computed from frame sizes and handed to the log at trace
/// level; painting pixels is left to a graphics backend. The window title is
/// the visible output. Missing sprite frames are skipped rather than treated
/// as errors, so the game runs (as a status line only) even without any art
/// on disk.
pub struct BattleRenderer {
    sprites: SpriteLibrary,
    window: Option<Arc<Window>>,
    status: String,
    draws: Vec<DrawCommand>,
}

impl BattleRenderer {
    pub fn new(sprites: SpriteLibrary, window: Option<Arc<Window>>) -> Self {
        Self {
            sprites,
            window,
            status: String::new(),
            draws: Vec::new(),
        }
    }

    /// Load every sprite set the duel uses, tolerating missing files
    pub fn load(loader: &AssetLoader, window: Option<Arc<Window>>) -> Self {
        let sets: Vec<_> = SpriteSet::ALL
            .iter()
            .map(|set| (set.name(), set.naming()))
            .collect();
        let sprites = SpriteLibrary::load_lenient(loader, &sets);
        if sprites.loaded_frames() == 0 {
            warn!(
                "No sprite frames found under {}, showing the status line only",
                loader.base_path().display()
            );
        }
        Self::new(sprites, window)
    }

    /// Text shown in the window title
    pub fn status_line(scene: &BattleView) -> String {
        let outcome = match scene.phase {
            CombatPhase::Over if scene.player.alive => "Victory!",
            CombatPhase::Over => "Defeat",
            phase => phase.label(),
        };
        format!(
            "{} | {} | {}",
            Self::hp_label(&scene.player),
            Self::hp_label(&scene.enemy),
            outcome
        )
    }

    fn hp_label(actor: &ActorView) -> String {
        format!(
            "{} HP {}/{} ({:.0}%)",
            actor.name,
            actor.hit_points,
            actor.max_hit_points,
            actor.health * 100.0
        )
    }

    #[cfg(test)]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Sprite blits issued by the most recent draw
    #[cfg(test)]
    pub fn last_draws(&self) -> &[DrawCommand] {
        &self.draws
    }
}

impl SceneRenderer<BattleView> for BattleRenderer {
    fn draw(&mut self, scene: &BattleView) {
        self.draws.clear();

        for actor in scene.actors() {
            let Some(frame) = self.sprites.frame(actor.sprite.name(), actor.frame_index) else {
                trace!(
                    "No frame {} in '{}', skipping {}",
                    actor.frame_index,
                    actor.sprite.name(),
                    actor.name
                );
                continue;
            };

            let command = DrawCommand {
                sprite: actor.sprite,
                frame_index: actor.frame_index,
                rect: SpriteRect::centered(actor.position, frame.width(), frame.height(), SPRITE_SCALE),
            };
            trace!(
                "Blit '{}' frame {} into {:?}..{:?}",
                command.sprite.name(),
                command.frame_index,
                command.rect.min,
                command.rect.max()
            );
            self.draws.push(command);
        }

        let status = Self::status_line(scene);
        if status != self.status {
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {}", WINDOW_TITLE, status));
            }
            self.status = status;
        }
    }
}
