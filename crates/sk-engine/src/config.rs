//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for a reproducible world and dice.
    pub seed: u64,
    /// Side length of the square grid.
    pub grid_size: u32,
    /// Independent per-cell probability of water.
    pub water_chance: f64,
    /// Number of wandering NPCs to spawn.
    pub npc_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_size: 20,
            water_chance: 0.3,
            npc_count: 5,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the grid side length (minimum 1).
    pub fn with_grid_size(mut self, size: u32) -> Self {
        self.grid_size = size.max(1);
        self
    }

    /// Set the per-cell water probability (clamped to 0.0..=1.0).
    pub fn with_water_chance(mut self, chance: f64) -> Self {
        self.water_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the number of NPCs.
    pub fn with_npc_count(mut self, count: usize) -> Self {
        self.npc_count = count;
        self
    }
}
