//! The character state container shared by the player and NPCs.

use serde::{Deserialize, Serialize};

use crate::attributes::{Attribute, Attributes};
use crate::grid::Position;
use crate::item::{Inventory, Item};

/// Health restored by drinking one healing potion.
pub const POTION_HEAL: u32 = 3;

/// Freshly created characters never start with less health than this,
/// regardless of endurance.
const MIN_STARTING_HEALTH: u32 = 5;

/// A character's gender, used only for name selection and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// The playable races of the seven kingdoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Race {
    /// Human.
    Human,
    /// Elf.
    Elf,
    /// Dwarf.
    Dwarf,
    /// Orc.
    Orc,
    /// Halfling.
    Halfling,
    /// Gnome.
    Gnome,
}

impl Race {
    /// All races, in generator-table order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Human,
            Self::Elf,
            Self::Dwarf,
            Self::Orc,
            Self::Halfling,
            Self::Gnome,
        ]
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "Human"),
            Self::Elf => write!(f, "Elf"),
            Self::Dwarf => write!(f, "Dwarf"),
            Self::Orc => write!(f, "Orc"),
            Self::Halfling => write!(f, "Halfling"),
            Self::Gnome => write!(f, "Gnome"),
        }
    }
}

/// What a hit did to the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The character is still alive.
    Survived,
    /// Health reached zero.
    Died,
}

/// The player character or an NPC.
///
/// Health, magic, money, and inventory change only through the methods
/// below. Attribute training and position updates are session-level state
/// transitions, so those two fields stay public.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Gender.
    pub gender: Gender,
    /// Race.
    pub race: Race,
    /// Experience level, starting at 1.
    pub level: u32,
    /// The six core attributes.
    pub attributes: Attributes,
    /// Current cell on the grid; assigned by the session at spawn time.
    pub position: Position,
    health: u32,
    magic: u32,
    money: u32,
    inventory: Inventory,
    alive: bool,
}

impl Character {
    /// Create a level-1 character.
    ///
    /// Starting health is `max(5, 2 x endurance)` and starting magic equals
    /// intelligence. The position defaults to the origin until the session
    /// places the character on a spawn cell.
    pub fn new(
        name: impl Into<String>,
        gender: Gender,
        race: Race,
        attributes: Attributes,
    ) -> Self {
        let health = (attributes.get(Attribute::Endurance) * 2).max(MIN_STARTING_HEALTH);
        let magic = attributes.get(Attribute::Intelligence);
        Self {
            name: name.into(),
            gender,
            race,
            level: 1,
            attributes,
            position: Position::default(),
            health,
            magic,
            money: 0,
            inventory: Inventory::new(),
            alive: true,
        }
    }

    /// Current health.
    pub fn health(&self) -> u32 {
        self.health
    }

    /// The healing cap: twice the character's endurance.
    ///
    /// For endurance below 3 this is lower than the starting health, so a
    /// damaged low-endurance character can never heal back to full. Kept
    /// as-is pending a ruling on which of the two formulas should move.
    pub fn max_health(&self) -> u32 {
        self.attributes.get(Attribute::Endurance) * 2
    }

    /// Current magic. Starts equal to intelligence and can only grow.
    pub fn magic(&self) -> u32 {
        self.magic
    }

    /// Gold carried.
    pub fn money(&self) -> u32 {
        self.money
    }

    /// Items carried.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Whether the character is alive. False exactly when health is zero.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Apply damage, clamping health at zero.
    ///
    /// Reaching zero marks the character dead; further damage keeps health
    /// at zero and keeps reporting [`DamageOutcome::Died`].
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
            DamageOutcome::Died
        } else {
            DamageOutcome::Survived
        }
    }

    /// Restore health, clamped to [`Character::max_health`]. Dead
    /// characters are never revived.
    pub fn heal(&mut self, amount: u32) {
        if !self.alive {
            return;
        }
        self.health = (self.health + amount).min(self.max_health());
    }

    /// Receive gold.
    pub fn add_money(&mut self, amount: u32) {
        self.money += amount;
    }

    /// Spend gold. Returns false, without mutation, when funds are short.
    pub fn spend_money(&mut self, amount: u32) -> bool {
        if self.money >= amount {
            self.money -= amount;
            true
        } else {
            false
        }
    }

    /// Put an item into the inventory.
    pub fn acquire(&mut self, item: Item) {
        self.inventory.add(item);
    }

    /// Drink one healing potion from the inventory, restoring
    /// [`POTION_HEAL`] health. Returns false if none is carried.
    pub fn use_potion(&mut self) -> bool {
        if !self.inventory.remove_first(Item::HealingPotion) {
            return false;
        }
        self.heal(POTION_HEAL);
        true
    }

    /// Permanently raise magic.
    pub fn gain_magic(&mut self, amount: u32) {
        self.magic += amount;
    }
}
