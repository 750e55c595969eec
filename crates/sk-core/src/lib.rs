//! Core types for the Seven Kingdoms tile RPG: characters and their
//! attributes, items and inventories, the randomly generated tile world,
//! and the random character generator.
//!
//! This crate holds no game-loop logic; turn ordering, event resolution,
//! and the command protocol live in `sk-engine`.

pub mod attributes;
pub mod character;
pub mod generator;
pub mod grid;
pub mod item;

pub use attributes::{ATTRIBUTE_MAX, Attribute, Attributes};
pub use character::{Character, DamageOutcome, Gender, POTION_HEAL, Race};
pub use generator::generate_character;
pub use grid::{Direction, Grid, Position, Terrain};
pub use item::{Inventory, Item};
