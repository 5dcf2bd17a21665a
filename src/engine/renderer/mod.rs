// Rendering seam
//
// The game hands a read-only scene snapshot to whatever renderer the host
// installed. Renderers only read the snapshot; they never reach back into
// game state.

mod sprite;

pub use sprite::{SpriteRect, SPRITE_SCALE};

/// Something that can paint a scene snapshot of type `S`
pub trait SceneRenderer<S> {
    fn draw(&mut self, scene: &S);
}
