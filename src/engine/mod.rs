// Engine modules: timing, input, assets, renderer

pub mod assets;
pub mod clock;
pub mod game_loop;
pub mod input;
pub mod renderer;
