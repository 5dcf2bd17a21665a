// Input manager - turns window events into queued commands

use super::action::{default_bindings, Action, InputSource};
use std::collections::{HashMap, VecDeque};
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Maps raw input to actions and queues them for the game thread
///
/// Window events arrive whenever the OS delivers them; the host drains the
/// queue once per frame and applies each action in order, so game state has
/// a single writer.
pub struct InputManager {
    bindings: HashMap<InputSource, Action>,
    queue: VecDeque<Action>,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    pub fn with_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            queue: VecDeque::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle(InputSource::key(key_code), event.state, event.repeat);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        self.handle(InputSource::mouse(button), state, false);
    }

    /// Queue the bound action on a fresh press
    fn handle(&mut self, source: InputSource, state: ElementState, repeat: bool) {
        if state != ElementState::Pressed || repeat {
            return;
        }
        if let Some(&action) = self.bindings.get(&source) {
            log::debug!("Input {:?} -> {:?}", source, action);
            self.queue.push_back(action);
        }
    }

    /// Take all queued actions in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Action> + '_ {
        self.queue.drain(..)
    }

    /// Number of actions waiting
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
