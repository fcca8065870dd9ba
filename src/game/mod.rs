pub mod engine;
pub mod scheduler;

pub use engine::{FallingItem, GameState, ItemKind, Phase};
pub use scheduler::Scheduler;
