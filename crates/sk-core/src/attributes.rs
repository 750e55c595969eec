//! Character attributes and training.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// The highest value any attribute can reach.
pub const ATTRIBUTE_MAX: u32 = 10;

/// The six core attributes of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Raw physical power. Rolled when fighting.
    Strength,
    /// Toughness. Determines maximum health.
    Endurance,
    /// Speed and reflexes. Rolled when fleeing.
    Agility,
    /// Awareness. Rolled when searching for treasure.
    Perception,
    /// Reasoning. Rolled for riddles; determines starting magic.
    Intelligence,
    /// Judgement. Earns discounts when bartering.
    Wisdom,
}

impl Attribute {
    /// All attributes in their canonical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Strength,
            Self::Endurance,
            Self::Agility,
            Self::Perception,
            Self::Intelligence,
            Self::Wisdom,
        ]
    }

    /// Parse an attribute from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "strength" => Some(Self::Strength),
            "endurance" => Some(Self::Endurance),
            "agility" => Some(Self::Agility),
            "perception" => Some(Self::Perception),
            "intelligence" => Some(Self::Intelligence),
            "wisdom" => Some(Self::Wisdom),
            _ => None,
        }
    }

    /// Lowercase name, as used in game messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::Agility => "agility",
            Self::Perception => "perception",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strength => write!(f, "Strength"),
            Self::Endurance => write!(f, "Endurance"),
            Self::Agility => write!(f, "Agility"),
            Self::Perception => write!(f, "Perception"),
            Self::Intelligence => write!(f, "Intelligence"),
            Self::Wisdom => write!(f, "Wisdom"),
        }
    }
}

/// A character's attribute block.
///
/// Every value is kept within `[0, ATTRIBUTE_MAX]`. Values change only
/// through [`Attributes::train`]; the shape is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    strength: u32,
    endurance: u32,
    agility: u32,
    perception: u32,
    intelligence: u32,
    wisdom: u32,
}

impl Attributes {
    /// Create an attribute block, clamping each value to the valid range.
    pub fn new(
        strength: u32,
        endurance: u32,
        agility: u32,
        perception: u32,
        intelligence: u32,
        wisdom: u32,
    ) -> Self {
        Self {
            strength: strength.min(ATTRIBUTE_MAX),
            endurance: endurance.min(ATTRIBUTE_MAX),
            agility: agility.min(ATTRIBUTE_MAX),
            perception: perception.min(ATTRIBUTE_MAX),
            intelligence: intelligence.min(ATTRIBUTE_MAX),
            wisdom: wisdom.min(ATTRIBUTE_MAX),
        }
    }

    /// Roll a fresh attribute block, each value uniform in `0..=ATTRIBUTE_MAX`.
    pub fn random(rng: &mut StdRng) -> Self {
        Self::new(
            rng.random_range(0..=ATTRIBUTE_MAX),
            rng.random_range(0..=ATTRIBUTE_MAX),
            rng.random_range(0..=ATTRIBUTE_MAX),
            rng.random_range(0..=ATTRIBUTE_MAX),
            rng.random_range(0..=ATTRIBUTE_MAX),
            rng.random_range(0..=ATTRIBUTE_MAX),
        )
    }

    /// Get the current value of an attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Endurance => self.endurance,
            Attribute::Agility => self.agility,
            Attribute::Perception => self.perception,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
        }
    }

    /// Raise an attribute by one, capped at `ATTRIBUTE_MAX`.
    pub fn train(&mut self, attribute: Attribute) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Endurance => &mut self.endurance,
            Attribute::Agility => &mut self.agility,
            Attribute::Perception => &mut self.perception,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
        };
        *slot = (*slot + 1).min(ATTRIBUTE_MAX);
    }
}
