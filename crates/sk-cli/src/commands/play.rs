use std::io::{self, BufRead, Write};

use colored::Colorize;

use sk_engine::GameSession;

use crate::render;

pub fn run(seed: u64, npcs: usize, size: u32, water: f64) -> Result<(), String> {
    let config = super::config(seed, size, water, npcs);
    let mut session = GameSession::new(&config);

    println!("  {} Seven Kingdoms", "Starting".bold());
    println!("  Seed: {seed} | Map: {size}x{size} | NPCs: {npcs}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", session.welcome());
    print!(
        "{}",
        render::map(session.grid(), session.player(), session.npcs())
    );
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        // Display-only commands never touch the turn protocol, but they
        // step aside while a choice is pending so the prompt stays firm.
        if session.pending_prompt().is_none() {
            match input.to_lowercase().as_str() {
                "map" => {
                    print!(
                        "{}",
                        render::map(session.grid(), session.player(), session.npcs())
                    );
                    println!();
                    continue;
                }
                "stats" => {
                    println!("{}\n", render::stats(session.player()));
                    continue;
                }
                "inventory" | "inv" => {
                    println!("{}\n", render::inventory(&session.inventory_counts()));
                    continue;
                }
                "clear" => {
                    print!("\x1B[2J\x1B[1;1H");
                    continue;
                }
                _ => {}
            }
        }

        match session.submit_command(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }

        if session.is_game_over() {
            break;
        }
    }

    Ok(())
}
