use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine fields for new games and resets.
pub trait MineFieldGenerator {
    fn generate(&mut self, profile: &DifficultyProfile) -> Result<MineField>;
}
