use sk_engine::GameSession;

use crate::render;

pub fn run(seed: u64, size: u32, water: f64) -> Result<(), String> {
    let config = super::config(seed, size, water, 0);
    let session = GameSession::new(&config);

    print!(
        "{}",
        render::map(session.grid(), session.player(), session.npcs())
    );
    println!();
    println!("  Seed {seed}: {size}x{size} map, player spawn at {}", session.player().position);

    Ok(())
}
