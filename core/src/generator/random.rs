use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement with no first-move safety: any tile may hold a mine.
///
/// Successive calls continue the same random stream, so a sequence of games
/// is reproducible from the initial seed.
#[derive(Clone, Debug)]
pub struct RandomMineFieldGenerator {
    rng: SmallRng,
}

impl RandomMineFieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineFieldGenerator for RandomMineFieldGenerator {
    fn generate(&mut self, profile: &DifficultyProfile) -> Result<MineField> {
        MineField::generate(profile.tile_count(), profile.mine_count(), &mut self.rng)
    }
}
