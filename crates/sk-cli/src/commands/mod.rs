pub mod map;
pub mod play;

use sk_engine::GameConfig;

/// Build a session config from the shared CLI flags.
fn config(seed: u64, size: u32, water: f64, npcs: usize) -> GameConfig {
    GameConfig::default()
        .with_seed(seed)
        .with_grid_size(size)
        .with_water_chance(water)
        .with_npc_count(npcs)
}
