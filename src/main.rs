use std::sync::Arc;

use anyhow::Result;
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::AssetLoader;
use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use engine::renderer::SceneRenderer;
use game::combat::{CombatConfig, CombatEvent, CombatOrchestrator};
use game::scene::BattleRenderer;

/// Root directory for sprite images
const ASSET_ROOT: &str = "assets";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Minotaur Skirmish...");

    let mut battle = CombatOrchestrator::new(CombatConfig::default())?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Minotaur Skirmish")
            .with_inner_size(winit::dpi::LogicalSize::new(1000, 700))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = BattleRenderer::load(&AssetLoader::new(ASSET_ROOT), Some(window.clone()));
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    renderer.draw(&battle.view());
    event_loop.set_control_flow(ControlFlow::Poll);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => input.process_keyboard_event(&event),
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => input.process_mouse_button(state, button),
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let now = game_loop.begin_frame();

                // Commands first, then the tick, all on this thread
                let mut redraw = false;
                for action in input.drain() {
                    if action == Action::Quit {
                        info!("Quit requested, shutting down...");
                        elwt.exit();
                    } else {
                        redraw |= apply_action(action, &mut battle, &mut game_loop);
                    }
                }

                if !game_loop.is_paused() {
                    redraw |= battle.tick(now);
                }

                for event in battle.drain_events() {
                    match event {
                        CombatEvent::PhaseChanged { from, to } => {
                            debug!("Turn: {} -> {}", from.label(), to.label())
                        }
                        CombatEvent::Damage {
                            target,
                            amount,
                            remaining,
                        } => debug!("Hit on the {}: -{} ({} left)", target.label(), amount, remaining),
                        CombatEvent::Defeated { target } => {
                            info!("Battle over: the {} fell", target.label())
                        }
                    }
                }

                if redraw {
                    renderer.draw(&battle.view());
                }

                if game_loop.frame_count() % 300 == 0 {
                    debug!("FPS: {:.1}", game_loop.fps());
                }

                if battle.is_finished() {
                    // Nothing left to animate; wake only for window events
                    elwt.set_control_flow(ControlFlow::Wait);
                }
            }
            Event::AboutToWait => {
                if !battle.is_finished() || input.pending() > 0 {
                    window.request_redraw();
                }
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Apply one queued action, returning whether the scene changed
///
/// Attacks are dropped while paused so a paused duel stays frozen.
fn apply_action(action: Action, battle: &mut CombatOrchestrator, game_loop: &mut GameLoop) -> bool {
    match action {
        Action::Attack if game_loop.is_paused() => {
            debug!("Attack ignored while paused");
            false
        }
        Action::Attack => battle.start_player_attack(),
        Action::Pause => {
            game_loop.toggle_pause();
            false
        }
        Action::Quit => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::{Timestamp, FRAME_DURATION};
    use crate::game::combat::CombatPhase;
    use glam::Vec2;

    /// A duel that starts in range and is idle after one walk frame
    fn idle_battle() -> CombatOrchestrator {
        let mut battle = CombatOrchestrator::new(CombatConfig {
            enemy_start: Vec2::new(400.0, 350.0),
            ..CombatConfig::default()
        })
        .unwrap();
        battle.tick(Timestamp::ZERO.after(FRAME_DURATION));
        assert_eq!(battle.view().phase, CombatPhase::Idle);
        battle
    }

    #[test]
    fn test_attack_ignored_while_paused() {
        let mut battle = idle_battle();
        let mut game_loop = GameLoop::new();

        assert!(!apply_action(Action::Pause, &mut battle, &mut game_loop));
        assert!(game_loop.is_paused());

        let before = battle.view();
        assert!(!apply_action(Action::Attack, &mut battle, &mut game_loop));
        assert_eq!(battle.view(), before);

        apply_action(Action::Pause, &mut battle, &mut game_loop);
        assert!(!game_loop.is_paused());
        assert!(apply_action(Action::Attack, &mut battle, &mut game_loop));
        assert_eq!(battle.view().phase, CombatPhase::PlayerAttacking);
    }

    #[test]
    fn test_quit_leaves_battle_untouched() {
        let mut battle = idle_battle();
        let mut game_loop = GameLoop::new();
        let before = battle.view();

        assert!(!apply_action(Action::Quit, &mut battle, &mut game_loop));
        assert_eq!(battle.view(), before);
        assert!(!game_loop.is_paused());
    }
}
