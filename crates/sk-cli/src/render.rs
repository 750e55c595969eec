//! Terminal rendering of session snapshots: the tile map, the character
//! sheet, and the inventory.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sk_core::{Attribute, Character, Grid, Item, Position, Terrain};

/// Render the map with the player (`@`), NPCs (`N`), water (`~`), and
/// land (`.`). The player wins the cell when characters overlap.
pub fn map(grid: &Grid, player: &Character, npcs: &[Character]) -> String {
    let mut out = String::new();
    for y in 0..grid.size() {
        for x in 0..grid.size() {
            let pos = Position::new(x, y);
            let tile = if player.position == pos {
                "@".yellow().bold()
            } else if npcs.iter().any(|npc| npc.position == pos) {
                "N".red()
            } else if grid.terrain(pos) == Some(Terrain::Water) {
                "~".blue()
            } else {
                ".".green()
            };
            out.push_str(&tile.to_string());
        }
        out.push('\n');
    }
    out
}

/// Render the character sheet as a table.
pub fn stats(player: &Character) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Value"]);

    table.add_row(vec!["Name".to_string(), player.name.clone()]);
    table.add_row(vec!["Race".to_string(), player.race.to_string()]);
    table.add_row(vec!["Gender".to_string(), player.gender.to_string()]);
    table.add_row(vec!["Level".to_string(), player.level.to_string()]);
    table.add_row(vec![
        "Health".to_string(),
        format!("{}/{}", player.health(), player.max_health()),
    ]);
    table.add_row(vec!["Magic".to_string(), player.magic().to_string()]);
    table.add_row(vec!["Money".to_string(), format!("{} gold", player.money())]);

    for attribute in Attribute::all() {
        table.add_row(vec![
            attribute.to_string(),
            player.attributes.get(*attribute).to_string(),
        ]);
    }

    format!("{table}")
}

/// Render the inventory as one `item xN` line per distinct item.
pub fn inventory(counts: &[(Item, usize)]) -> String {
    if counts.is_empty() {
        return "Inventory is empty.".to_string();
    }
    counts
        .iter()
        .map(|(item, count)| format!("{item} x{count}"))
        .collect::<Vec<_>>()
        .join("\n")
}
