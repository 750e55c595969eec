//! Text command parsing.
//!
//! Input is normalized (trimmed, lowercased) before matching, so
//! `"  MOVE Up "` parses the same as `"move up"`. A bare number is a
//! choice selection; anything unrecognized is kept verbatim so the
//! session can echo it back.

use sk_core::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the available commands.
    Help,
    /// Clear the host's display.
    Clear,
    /// Describe the player's surroundings.
    Look,
    /// Drink a healing potion from the inventory.
    UsePotion,
    /// Step one cell in the given direction.
    Move(Direction),
    /// Select a numbered option of a pending event.
    Choice(usize),
    /// Anything that matched no command.
    Unknown(String),
}

/// Parse one line of player input into a [`Command`].
pub fn parse_command(input: &str) -> Command {
    let normalized = input.trim().to_lowercase();

    match normalized.as_str() {
        "help" => return Command::Help,
        "clear" => return Command::Clear,
        "look" => return Command::Look,
        "use potion" => return Command::UsePotion,
        _ => {}
    }

    let direction_word = normalized
        .strip_prefix("move ")
        .map_or(normalized.as_str(), str::trim);
    if let Some(direction) = Direction::parse(direction_word) {
        return Command::Move(direction);
    }

    if let Ok(number) = normalized.parse::<usize>() {
        return Command::Choice(number);
    }

    Command::Unknown(normalized)
}
