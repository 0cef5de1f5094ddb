use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::tictactoe::Mark;

/// Seedable random source owned by a single player thread.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn random_seed() -> u64 {
        rand::rng().random()
    }

    /// Each player gets its own stream derived from the game seed.
    pub fn for_player(game_seed: u64, mark: Mark) -> Self {
        let offset = match mark {
            Mark::X => 1,
            Mark::O => 2,
            Mark::Empty => 0,
        };
        Self::new(game_seed.wrapping_add(offset))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.random_range(0..len))
    }
}
