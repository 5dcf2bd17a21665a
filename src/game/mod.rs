// Game logic: the two duelists, the turn state machine, and scene drawing

pub mod characters;
pub mod combat;
pub mod scene;
