use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Produces a finalized board for a config. Generators are single use.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}
