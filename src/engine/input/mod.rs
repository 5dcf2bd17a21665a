// Input handling system
//
// Keyboard and mouse presses are mapped to game actions and queued. The
// host drains the queue once per frame, before pumping the combat tick.
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In your event loop
// input.process_keyboard_event(&key_event);
//
// // Once per frame
// for action in input.drain() {
//     match action {
//         Action::Attack => { battle.start_player_attack(); }
//         _ => {}
//     }
// }
// ```

pub mod action;
pub mod manager;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
