//! The game session: one world, one player, wandering NPCs, and the
//! choice-driven event protocol.
//!
//! A session is driven by discrete submissions. A move either gets
//! rejected by terrain (the turn does not advance) or is accepted, in
//! which case NPCs wander and resolve their own events and the player
//! then triggers a fresh event. If that event offers choices, it parks
//! the session: every submission except a valid numbered selection is
//! refused until the choice resolves.

use rand::SeedableRng;
use rand::rngs::StdRng;

use sk_core::{Character, Direction, Grid, Item, generate_character};

use crate::command::{Command, parse_command};
use crate::config::GameConfig;
use crate::error::{EngineError, GameResult};
use crate::event::{ChoiceTag, EventKind};

const GAME_OVER_MESSAGE: &str = "GAME OVER! You have died. Start a new session to play again.";

const HELP_TEXT: &str =
    "Available commands: help, clear, look, move up, move down, move left, move right, use potion";

const UNKNOWN_COMMAND: &str = "Unknown command. Type \"help\" for available commands.";

/// An event waiting for the player's numbered selection.
#[derive(Debug, Clone)]
struct PendingChoice {
    event: EventKind,
    prompt: String,
}

/// The result of an attempted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the move happened. A rejected move does not advance the
    /// turn: no NPC activity, no event.
    pub accepted: bool,
    /// The messages produced by the move, joined with newlines.
    pub message: String,
}

/// A running game.
pub struct GameSession {
    grid: Grid,
    player: Character,
    npcs: Vec<Character>,
    pending: Option<PendingChoice>,
    game_over: bool,
    rng: StdRng,
}

impl GameSession {
    /// Start a new session from the given configuration: generate the
    /// world, the player, and the NPCs, and place everyone on valid
    /// spawn cells.
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let grid = Grid::generate(config.grid_size, config.water_chance, &mut rng);

        let mut player = generate_character(&mut rng);
        player.position = grid.find_spawn(&mut rng);

        let npcs = (0..config.npc_count)
            .map(|_| {
                let mut npc = generate_character(&mut rng);
                npc.position = grid.find_spawn(&mut rng);
                npc
            })
            .collect();

        Self {
            grid,
            player,
            npcs,
            pending: None,
            game_over: false,
            rng,
        }
    }

    /// The opening message for a fresh session.
    pub fn welcome(&self) -> String {
        format!(
            "Welcome to Ages of the Seven Kingdoms, {}! You are a {} {} ready for adventure. Type \"help\" for available commands.",
            self.player.name,
            self.player.gender.to_string().to_lowercase(),
            self.player.race
        )
    }

    /// The player character.
    pub fn player(&self) -> &Character {
        &self.player
    }

    /// The living NPCs, in spawn order.
    pub fn npcs(&self) -> &[Character] {
        &self.npcs
    }

    /// The world grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The full prompt of the pending event, if one awaits a choice.
    pub fn pending_prompt(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.prompt.as_str())
    }

    /// Whether the player has died and the session is finished.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The player's inventory grouped into `(item, count)` pairs.
    pub fn inventory_counts(&self) -> Vec<(Item, usize)> {
        self.player.inventory().counts()
    }

    /// Attempt to move the player one cell.
    ///
    /// Refused outright while the game is over or a choice is pending.
    /// A move into water or off the map is returned as not accepted and
    /// changes nothing. An accepted move advances the whole turn: NPCs
    /// wander and resolve events, then the player triggers one.
    pub fn submit_move(&mut self, direction: Direction) -> GameResult<MoveOutcome> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        if self.pending.is_some() {
            return Err(EngineError::ChoicePending);
        }

        let target = self.player.position.step(direction);
        if !self.grid.is_land(target) {
            return Ok(MoveOutcome {
                accepted: false,
                message: format!(
                    "You cannot move {} - there is water in the way or you've reached the edge of the map.",
                    direction.name()
                ),
            });
        }

        self.player.position = target;
        let mut messages = vec![format!("You move {}.", direction.name())];
        self.npc_pass(&mut messages);
        self.trigger_player_event(&mut messages);

        Ok(MoveOutcome {
            accepted: true,
            message: messages.join("\n"),
        })
    }

    /// Submit one line of player input.
    ///
    /// While a choice is pending only a numbered selection is accepted;
    /// any other input gets the re-prompt. Otherwise the line is parsed
    /// as a command and dispatched.
    pub fn submit_command(&mut self, input: &str) -> GameResult<String> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }

        if let Some(pending) = &self.pending {
            let option_count = pending.event.choices().len();
            return match parse_command(input) {
                Command::Choice(index) => self.submit_choice(index),
                _ => Ok(format!(
                    "Please enter a number between 1 and {option_count}"
                )),
            };
        }

        match parse_command(input) {
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Clear => Ok(String::new()),
            Command::Look => Ok(self.look()),
            Command::UsePotion => Ok(self.use_potion()),
            Command::Move(direction) => {
                Ok(self.submit_move(direction)?.message)
            }
            Command::Choice(_) | Command::Unknown(_) => Ok(UNKNOWN_COMMAND.to_string()),
        }
    }

    /// Answer a pending choice by its 1-based option number.
    ///
    /// An out-of-range number re-prompts and leaves the choice pending.
    pub fn submit_choice(&mut self, index: usize) -> GameResult<String> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        let Some(pending) = &self.pending else {
            return Err(EngineError::NoChoicePending);
        };

        let choices = pending.event.choices();
        if index == 0 || index > choices.len() {
            return Ok(format!(
                "Please enter a number between 1 and {}",
                choices.len()
            ));
        }
        let tag = choices[index - 1].tag;
        self.resolve_choice(tag)
    }

    /// Answer a pending choice by tag instead of option number.
    ///
    /// A tag the event does not offer re-prompts and leaves the choice
    /// pending.
    pub fn resolve_choice(&mut self, tag: ChoiceTag) -> GameResult<String> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        let Some(pending) = &self.pending else {
            return Err(EngineError::NoChoicePending);
        };

        let event = pending.event;
        let choices = event.choices();
        if !choices.iter().any(|choice| choice.tag == tag) {
            return Ok(format!(
                "Please enter a number between 1 and {}",
                choices.len()
            ));
        }

        self.pending = None;
        let mut messages = Vec::new();
        let outcome = event.resolve(&mut self.player, Some(tag), &mut self.rng);
        if !outcome.is_empty() {
            messages.push(outcome);
        }
        self.check_player_death(&mut messages);
        Ok(messages.join("\n"))
    }

    fn look(&self) -> String {
        let here = self.player.position;
        match self.npcs.iter().find(|npc| npc.position == here) {
            Some(npc) => format!(
                "You see {}, a {} {}.",
                npc.name,
                npc.gender.to_string().to_lowercase(),
                npc.race
            ),
            None => "You look around and see a randomly generated landscape.".to_string(),
        }
    }

    fn use_potion(&mut self) -> String {
        if self.player.use_potion() {
            "You use a healing potion and restore 3 health!".to_string()
        } else {
            "You don't have any potions to use!".to_string()
        }
    }

    /// One wandering-and-events pass over every NPC.
    ///
    /// Each NPC tries a random step (rejected by water and edges exactly
    /// like player moves) and then resolves a random event silently,
    /// answering any choice with the event's first option. Deaths are
    /// announced only for NPCs sharing the player's cell; the dead are
    /// then removed.
    fn npc_pass(&mut self, messages: &mut Vec<String>) {
        let player_pos = self.player.position;

        for npc in &mut self.npcs {
            if !npc.is_alive() {
                continue;
            }
            let direction = Direction::random(&mut self.rng);
            let target = npc.position.step(direction);
            if self.grid.is_land(target) {
                npc.position = target;
            }

            let event = EventKind::random(&mut self.rng);
            event.resolve(npc, event.default_tag(), &mut self.rng);
        }

        for npc in &self.npcs {
            if !npc.is_alive() && npc.position == player_pos {
                messages.push(format!("{} has died!", npc.name));
            }
        }
        self.npcs.retain(Character::is_alive);
    }

    /// Trigger one random event for the player. Choiceless events resolve
    /// immediately; events with choices park the session on a pending
    /// prompt instead.
    fn trigger_player_event(&mut self, messages: &mut Vec<String>) {
        let event = EventKind::random(&mut self.rng);
        let description = event.describe(&self.player);
        messages.push(description.clone());

        let choices = event.choices();
        if choices.is_empty() {
            let outcome = event.resolve(&mut self.player, None, &mut self.rng);
            if !outcome.is_empty() {
                messages.push(outcome);
            }
            self.check_player_death(messages);
            return;
        }

        let mut options = String::from("Choose an option:");
        for (i, choice) in choices.iter().enumerate() {
            options.push_str(&format!("\n{}. {}", i + 1, choice.label));
        }
        messages.push(options.clone());
        self.pending = Some(PendingChoice {
            event,
            prompt: format!("{description}\n{options}"),
        });
    }

    fn check_player_death(&mut self, messages: &mut Vec<String>) {
        if !self.player.is_alive() {
            self.game_over = true;
            messages.push(GAME_OVER_MESSAGE.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sk_core::{Attributes, Gender, Position, Race};

    fn open_grid() -> Grid {
        Grid::from_rows(&[
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ])
    }

    fn hero(name: &str, endurance: u32) -> Character {
        Character::new(
            name,
            Gender::Male,
            Race::Human,
            Attributes::new(5, endurance, 5, 5, 5, 5),
        )
    }

    fn session_with(player: Character, npcs: Vec<Character>, seed: u64) -> GameSession {
        GameSession {
            grid: open_grid(),
            player,
            npcs,
            pending: None,
            game_over: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[test]
    fn new_places_player_on_valid_land() {
        let session = GameSession::new(&GameConfig::default());
        assert!(session.grid().is_valid_spawn(session.player().position));
        for npc in session.npcs() {
            assert!(session.grid().is_valid_spawn(npc.position));
        }
        assert_eq!(session.npcs().len(), 5);
    }

    #[test]
    fn same_seed_gives_same_world() {
        let config = GameConfig::default().with_seed(99);
        let a = GameSession::new(&config);
        let b = GameSession::new(&config);
        assert_eq!(a.player().name, b.player().name);
        assert_eq!(a.player().position, b.player().position);
        for y in 0..a.grid().size() {
            for x in 0..a.grid().size() {
                let pos = Position::new(x, y);
                assert_eq!(a.grid().terrain(pos), b.grid().terrain(pos));
            }
        }
    }

    #[test]
    fn welcome_names_the_player() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let session = session_with(player, Vec::new(), 0);
        assert_eq!(
            session.welcome(),
            "Welcome to Ages of the Seven Kingdoms, Aric! You are a male Human ready for adventure. Type \"help\" for available commands."
        );
    }

    #[test]
    fn move_into_water_is_rejected_without_advancing() {
        let grid = Grid::from_rows(&["...", ".~.", "..."]);
        let mut player = hero("Aric", 5);
        player.position = Position::new(1, 0);
        let mut session = GameSession {
            grid,
            player,
            npcs: Vec::new(),
            pending: None,
            game_over: false,
            rng: StdRng::seed_from_u64(1),
        };
        let outcome = session.submit_move(Direction::Down).unwrap();
        assert!(!outcome.accepted);
        assert_eq!(
            outcome.message,
            "You cannot move down - there is water in the way or you've reached the edge of the map."
        );
        assert_eq!(session.player().position, Position::new(1, 0));
        assert!(session.pending_prompt().is_none());
    }

    #[test]
    fn move_off_the_edge_is_rejected() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(0, 5);
        let mut session = session_with(player, Vec::new(), 1);
        let outcome = session.submit_move(Direction::Left).unwrap();
        assert!(!outcome.accepted);
        assert_eq!(session.player().position, Position::new(0, 5));
    }

    #[test]
    fn accepted_move_reports_the_step_and_an_event() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let mut session = session_with(player, Vec::new(), 7);
        let outcome = session.submit_move(Direction::Right).unwrap();
        assert!(outcome.accepted);
        assert!(outcome.message.starts_with("You move right."));
        assert_eq!(session.player().position, Position::new(6, 5));
        // Every turn ends in either a resolved event or a pending choice.
        let has_prompt = session.pending_prompt().is_some();
        let has_more = outcome.message.lines().count() > 1;
        assert!(has_prompt || has_more);
    }

    #[test]
    fn pending_choice_blocks_moves() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let mut session = session_with(player, Vec::new(), 0);
        // Walk until an event parks the session on a choice.
        for _ in 0..50 {
            if session.pending_prompt().is_some() {
                break;
            }
            let _ = session.submit_move(Direction::Right);
            let _ = session.submit_move(Direction::Left);
        }
        assert!(session.pending_prompt().is_some(), "no event offered a choice");
        let parked = session.player().position;
        assert_eq!(
            session.submit_move(Direction::Right),
            Err(EngineError::ChoicePending)
        );
        assert_eq!(session.player().position, parked);
        assert!(session.pending_prompt().is_some());
    }

    #[test]
    fn pending_choice_blocks_commands_with_reprompt() {
        let mut session = parked_session();
        let len = pending_choice_count(&session);
        let reply = session.submit_command("help").unwrap();
        assert_eq!(reply, format!("Please enter a number between 1 and {len}"));
        assert!(session.pending_prompt().is_some());
    }

    #[test]
    fn out_of_range_choice_reprompts_and_stays_pending() {
        let mut session = parked_session();
        let len = pending_choice_count(&session);
        let reply = session.submit_choice(len + 1).unwrap();
        assert_eq!(reply, format!("Please enter a number between 1 and {len}"));
        assert!(session.pending_prompt().is_some());
        let reply = session.submit_choice(0).unwrap();
        assert_eq!(reply, format!("Please enter a number between 1 and {len}"));
        assert!(session.pending_prompt().is_some());
    }

    #[test]
    fn valid_choice_clears_the_pending_state() {
        let mut session = parked_session();
        session.submit_choice(1).unwrap();
        assert!(session.pending_prompt().is_none());
    }

    #[test]
    fn numeric_input_routes_to_the_pending_choice() {
        let mut session = parked_session();
        session.submit_command("1").unwrap();
        assert!(session.pending_prompt().is_none());
    }

    #[test]
    fn choice_without_pending_event_is_an_error() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let mut session = session_with(player, Vec::new(), 0);
        assert_eq!(session.submit_choice(1), Err(EngineError::NoChoicePending));
    }

    #[test]
    fn npc_resolution_never_parks_the_session() {
        for seed in 0..30 {
            let mut player = hero("Aric", 5);
            player.position = Position::new(5, 5);
            let mut npc = hero("Bran", 5);
            npc.position = Position::new(2, 2);
            let mut session = session_with(player, vec![npc], seed);
            let outcome = session.submit_move(Direction::Right).unwrap();
            // Only the player's own event may set a pending choice, and
            // it always carries the numbered option list.
            if let Some(prompt) = session.pending_prompt() {
                assert!(prompt.contains("Choose an option:"), "seed {seed}: {prompt}");
                assert!(!prompt.contains("Bran"), "seed {seed}: {prompt}");
            }
            assert!(outcome.accepted);
        }
    }

    #[test]
    fn dead_npcs_are_removed_and_order_is_kept() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let mut first = hero("Bran", 5);
        first.position = Position::new(1, 1);
        let mut dead = hero("Cedric", 5);
        dead.position = Position::new(8, 8);
        dead.take_damage(10);
        let mut last = hero("Dain", 5);
        last.position = Position::new(3, 3);
        let mut session = session_with(player, vec![first, dead, last], 0);

        session.submit_move(Direction::Right).unwrap();
        let names: Vec<&str> = session.npcs().iter().map(|n| n.name.as_str()).collect();
        assert!(!names.contains(&"Cedric"));
        let bran = names.iter().position(|n| *n == "Bran");
        let dain = names.iter().position(|n| *n == "Dain");
        assert!(bran < dain, "survivors out of order: {names:?}");
    }

    #[test]
    fn npc_death_on_player_cell_is_announced() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let mut session = session_with(player, Vec::new(), 0);
        // Direct check of the announcement path: a dead NPC on the
        // player's cell produces the message, elsewhere it does not.
        let mut here = hero("Bran", 5);
        here.position = Position::new(5, 5);
        here.take_damage(10);
        let mut away = hero("Cedric", 5);
        away.position = Position::new(0, 0);
        away.take_damage(10);
        session.npcs = vec![here, away];
        let mut messages = Vec::new();
        for npc in &session.npcs {
            if !npc.is_alive() && npc.position == session.player.position {
                messages.push(format!("{} has died!", npc.name));
            }
        }
        session.npcs.retain(Character::is_alive);
        assert_eq!(messages, vec!["Bran has died!".to_string()]);
        assert!(session.npcs.is_empty());
    }

    #[test]
    fn game_over_rejects_everything() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        player.take_damage(10);
        let mut session = session_with(player, Vec::new(), 0);
        session.game_over = true;
        assert_eq!(
            session.submit_move(Direction::Up),
            Err(EngineError::GameOver)
        );
        assert_eq!(session.submit_command("look"), Err(EngineError::GameOver));
        assert_eq!(session.submit_choice(1), Err(EngineError::GameOver));
    }

    #[test]
    fn look_describes_a_colocated_npc() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let mut npc = Character::new(
            "Freya",
            Gender::Female,
            Race::Elf,
            Attributes::new(5, 5, 5, 5, 5, 5),
        );
        npc.position = Position::new(5, 5);
        let mut session = session_with(player, vec![npc], 0);
        assert_eq!(
            session.submit_command("look").unwrap(),
            "You see Freya, a female Elf."
        );
    }

    #[test]
    fn look_without_company_describes_the_landscape() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let mut session = session_with(player, Vec::new(), 0);
        assert_eq!(
            session.submit_command("look").unwrap(),
            "You look around and see a randomly generated landscape."
        );
    }

    #[test]
    fn use_potion_without_potions_fails() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let mut session = session_with(player, Vec::new(), 0);
        assert_eq!(
            session.submit_command("use potion").unwrap(),
            "You don't have any potions to use!"
        );
    }

    #[test]
    fn use_potion_heals_and_consumes() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        player.take_damage(6);
        player.acquire(Item::HealingPotion);
        let mut session = session_with(player, Vec::new(), 0);
        assert_eq!(
            session.submit_command("use potion").unwrap(),
            "You use a healing potion and restore 3 health!"
        );
        assert_eq!(session.player().health(), 7);
        assert!(session.inventory_counts().is_empty());
    }

    #[test]
    fn help_lists_the_commands() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let mut session = session_with(player, Vec::new(), 0);
        let reply = session.submit_command("help").unwrap();
        assert!(reply.contains("move up"));
        assert!(reply.contains("use potion"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        let mut session = session_with(player, Vec::new(), 0);
        assert_eq!(
            session.submit_command("dance").unwrap(),
            "Unknown command. Type \"help\" for available commands."
        );
    }

    #[test]
    fn player_death_ends_the_game() {
        let mut player = hero("Aric", 5);
        player.position = Position::new(5, 5);
        player.take_damage(9);
        let mut session = session_with(player, Vec::new(), 0);
        // Keep playing until some failed event lands the last point of
        // damage. The session must flag game over and refuse further play.
        for _ in 0..200 {
            if session.is_game_over() {
                break;
            }
            if session.pending_prompt().is_some() {
                session.submit_choice(1).unwrap();
            } else {
                let _ = session.submit_move(Direction::Right);
                let _ = session.submit_move(Direction::Left);
            }
        }
        if session.is_game_over() {
            assert!(!session.player().is_alive());
            assert_eq!(
                session.submit_command("look"),
                Err(EngineError::GameOver)
            );
        }
    }

    /// Drive a fresh deterministic session until an event with choices
    /// parks it. Panics if none does within a generous bound.
    fn parked_session() -> GameSession {
        let mut player = hero("Aric", 8);
        player.position = Position::new(5, 5);
        let mut session = session_with(player, Vec::new(), 11);
        for _ in 0..100 {
            if session.pending_prompt().is_some() {
                return session;
            }
            let _ = session.submit_move(Direction::Right);
            let _ = session.submit_move(Direction::Left);
            if session.is_game_over() {
                panic!("player died before any choice event");
            }
        }
        panic!("no event with choices triggered");
    }

    fn pending_choice_count(session: &GameSession) -> usize {
        let pending = session.pending.as_ref().unwrap();
        pending.event.choices().len()
    }
}
