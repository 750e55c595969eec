//! The event catalog and dice-roll resolution.
//!
//! Events are a closed set of kinds, each pairing a description and an
//! optional choice set with pure resolution rules. A resolution rolls a
//! d(stat+1)-style die — uniform in `0..=stat` — against a fixed
//! threshold, then applies the success or failure outcome to the actor
//! and returns the message to surface.
//!
//! The roll is drawn separately from the pass/fail decision
//! ([`EventKind::check_with_roll`]) so tests can force an outcome without
//! steering the RNG.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use sk_core::{Attribute, Character, Item};

/// Base price of the merchant's healing potion before the wisdom discount.
const POTION_BASE_PRICE: u32 = 5;

/// A selectable option attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the player.
    pub label: &'static str,
    /// The value submitted when this option is picked.
    pub tag: ChoiceTag,
}

/// The value behind a choice, independent of its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceTag {
    /// Stand and fight.
    Fight,
    /// Try to flee.
    Run,
    /// Accept the offer or challenge.
    Yes,
    /// Decline the offer or challenge.
    No,
    /// Train the given attribute.
    Train(Attribute),
}

const COMBAT_CHOICES: [Choice; 2] = [
    Choice {
        label: "Fight the creature",
        tag: ChoiceTag::Fight,
    },
    Choice {
        label: "Try to run away",
        tag: ChoiceTag::Run,
    },
];

const MERCHANT_CHOICES: [Choice; 2] = [
    Choice {
        label: "Buy the potion",
        tag: ChoiceTag::Yes,
    },
    Choice {
        label: "Decline the offer",
        tag: ChoiceTag::No,
    },
];

const TRAINING_CHOICES: [Choice; 6] = [
    Choice {
        label: "Strength",
        tag: ChoiceTag::Train(Attribute::Strength),
    },
    Choice {
        label: "Endurance",
        tag: ChoiceTag::Train(Attribute::Endurance),
    },
    Choice {
        label: "Agility",
        tag: ChoiceTag::Train(Attribute::Agility),
    },
    Choice {
        label: "Perception",
        tag: ChoiceTag::Train(Attribute::Perception),
    },
    Choice {
        label: "Intelligence",
        tag: ChoiceTag::Train(Attribute::Intelligence),
    },
    Choice {
        label: "Wisdom",
        tag: ChoiceTag::Train(Attribute::Wisdom),
    },
];

const RIDDLE_CHOICES: [Choice; 2] = [
    Choice {
        label: "Attempt to solve the riddle",
        tag: ChoiceTag::Yes,
    },
    Choice {
        label: "Decline the challenge",
        tag: ChoiceTag::No,
    },
];

const FOUNTAIN_CHOICES: [Choice; 2] = [
    Choice {
        label: "Drink from the fountain",
        tag: ChoiceTag::Yes,
    },
    Choice {
        label: "Leave it alone",
        tag: ChoiceTag::No,
    },
];

/// A kind of randomized encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A hostile creature; fight (strength) or flee (agility).
    Combat,
    /// A treasure chest; a perception roll decides if it holds gold.
    Treasure,
    /// A traveling merchant selling a healing potion, discounted by wisdom.
    Merchant,
    /// A training dummy; raise one attribute of the actor's choosing.
    Training,
    /// A riddle; an intelligence roll for gold, with a price for failing.
    Riddle,
    /// A magical fountain; a magic roll to grow one's power.
    MagicFountain,
}

impl EventKind {
    /// Every event in the catalog.
    pub fn all() -> &'static [Self] {
        &[
            Self::Combat,
            Self::Treasure,
            Self::Merchant,
            Self::Training,
            Self::Riddle,
            Self::MagicFountain,
        ]
    }

    /// Pick an event uniformly at random.
    pub fn random(rng: &mut StdRng) -> Self {
        let all = Self::all();
        all[rng.random_range(0..all.len())]
    }

    /// Catalog name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Combat => "Combat",
            Self::Treasure => "Treasure",
            Self::Merchant => "Merchant",
            Self::Training => "Training",
            Self::Riddle => "Riddle",
            Self::MagicFountain => "Magic Fountain",
        }
    }

    /// The description surfaced when the event triggers. The merchant's
    /// line quotes the price for this particular actor.
    pub fn describe(&self, actor: &Character) -> String {
        match self {
            Self::Combat => "You encounter a hostile creature! What will you do?".to_string(),
            Self::Treasure => "You find a treasure chest!".to_string(),
            Self::Merchant => format!(
                "A traveling merchant offers you a healing potion for {} gold.",
                Self::merchant_price(actor)
            ),
            Self::Training => {
                "You find a training dummy. Which attribute would you like to train?".to_string()
            }
            Self::Riddle => "A mysterious figure challenges you with a riddle.".to_string(),
            Self::MagicFountain => "You find a magical fountain.".to_string(),
        }
    }

    /// The choices this event offers; empty for non-interactive events.
    pub fn choices(&self) -> &'static [Choice] {
        match self {
            Self::Combat => &COMBAT_CHOICES,
            Self::Treasure => &[],
            Self::Merchant => &MERCHANT_CHOICES,
            Self::Training => &TRAINING_CHOICES,
            Self::Riddle => &RIDDLE_CHOICES,
            Self::MagicFountain => &FOUNTAIN_CHOICES,
        }
    }

    /// The tag used when no actual choice is made: NPC resolution and
    /// choiceless events. By rule this is the first declared choice.
    pub fn default_tag(&self) -> Option<ChoiceTag> {
        self.choices().first().map(|choice| choice.tag)
    }

    /// The merchant's potion price for this actor: the base price of 5,
    /// less half the actor's wisdom, never below 1 gold.
    pub fn merchant_price(actor: &Character) -> u32 {
        let discount = actor.attributes.get(Attribute::Wisdom) / 2;
        POTION_BASE_PRICE.saturating_sub(discount).max(1)
    }

    /// The stat pool a resolution rolls against, if this event and tag
    /// call for a roll at all. The roll is uniform in `0..=pool`.
    pub fn roll_pool(&self, actor: &Character, tag: Option<ChoiceTag>) -> Option<u32> {
        match (self, tag) {
            (Self::Combat, Some(ChoiceTag::Run)) => {
                Some(actor.attributes.get(Attribute::Agility))
            }
            (Self::Combat, _) => Some(actor.attributes.get(Attribute::Strength)),
            (Self::Treasure, _) => Some(actor.attributes.get(Attribute::Perception)),
            (Self::Merchant, _) | (Self::Training, _) => None,
            (Self::Riddle, Some(ChoiceTag::Yes)) => {
                Some(actor.attributes.get(Attribute::Intelligence))
            }
            (Self::Riddle, _) => None,
            (Self::MagicFountain, Some(ChoiceTag::Yes)) => Some(actor.magic()),
            (Self::MagicFountain, _) => None,
        }
    }

    /// Decide success or failure given an already-drawn roll.
    ///
    /// `roll` must be `Some` exactly when [`EventKind::roll_pool`] asks
    /// for one; a missing roll fails the check.
    pub fn check_with_roll(
        &self,
        actor: &Character,
        tag: Option<ChoiceTag>,
        roll: Option<u32>,
    ) -> bool {
        match self {
            Self::Combat => roll.is_some_and(|r| r > 3),
            Self::Treasure => roll.is_some_and(|r| r > 2),
            Self::Merchant => {
                matches!(tag, Some(ChoiceTag::Yes))
                    && actor.money() >= Self::merchant_price(actor)
            }
            Self::Training => matches!(tag, Some(ChoiceTag::Train(_))),
            Self::Riddle => matches!(tag, Some(ChoiceTag::Yes)) && roll.is_some_and(|r| r > 4),
            Self::MagicFountain => {
                matches!(tag, Some(ChoiceTag::Yes)) && roll.is_some_and(|r| r > 2)
            }
        }
    }

    /// Roll the dice and decide success or failure.
    pub fn check(&self, actor: &Character, tag: Option<ChoiceTag>, rng: &mut StdRng) -> bool {
        let roll = self
            .roll_pool(actor, tag)
            .map(|pool| rng.random_range(0..=pool));
        self.check_with_roll(actor, tag, roll)
    }

    /// Apply the success outcome and return its message.
    pub fn apply_success(
        &self,
        actor: &mut Character,
        tag: Option<ChoiceTag>,
        rng: &mut StdRng,
    ) -> String {
        match self {
            Self::Combat => match tag {
                Some(ChoiceTag::Run) => "You successfully escape the creature!".to_string(),
                _ => {
                    actor.attributes.train(Attribute::Strength);
                    "You win the fight and feel stronger!".to_string()
                }
            },
            Self::Treasure => {
                let gold = rng.random_range(1..=10);
                actor.add_money(gold);
                format!("You find {gold} gold pieces!")
            }
            Self::Merchant => {
                let price = Self::merchant_price(actor);
                if actor.spend_money(price) {
                    actor.acquire(Item::HealingPotion);
                    format!("You buy a healing potion for {price} gold!")
                } else {
                    "You don't have enough money...".to_string()
                }
            }
            Self::Training => match tag {
                Some(ChoiceTag::Train(attribute)) => {
                    actor.attributes.train(attribute);
                    format!("You practice and improve your {}!", attribute.name())
                }
                _ => String::new(),
            },
            Self::Riddle => {
                let gold = rng.random_range(5..=19);
                actor.add_money(gold);
                format!("You solve the riddle and earn {gold} gold!")
            }
            Self::MagicFountain => {
                actor.gain_magic(1);
                "The fountain's magic enhances your magical abilities!".to_string()
            }
        }
    }

    /// Apply the failure outcome and return its message. Declining an
    /// optional event counts as failure but costs nothing.
    pub fn apply_failure(&self, actor: &mut Character, tag: Option<ChoiceTag>) -> String {
        match self {
            Self::Combat => match tag {
                Some(ChoiceTag::Run) => {
                    actor.take_damage(1);
                    "You fail to escape and take 1 damage!".to_string()
                }
                _ => {
                    actor.take_damage(2);
                    "You lose the fight and take 2 damage!".to_string()
                }
            },
            Self::Treasure => "The chest is empty...".to_string(),
            Self::Merchant => "You decide not to buy the potion.".to_string(),
            Self::Training => String::new(),
            Self::Riddle => match tag {
                Some(ChoiceTag::No) => "You decide not to attempt the riddle.".to_string(),
                _ => {
                    actor.take_damage(1);
                    "You fail to solve the riddle and take 1 damage from frustration!".to_string()
                }
            },
            Self::MagicFountain => match tag {
                Some(ChoiceTag::No) => "You leave the magic fountain alone.".to_string(),
                _ => {
                    actor.take_damage(1);
                    "The fountain's magic backfires and you take 1 damage!".to_string()
                }
            },
        }
    }

    /// Resolve the event against the actor: roll, then apply the success
    /// or failure outcome. Returns the message to surface; the caller is
    /// responsible for the post-resolution death check.
    pub fn resolve(
        &self,
        actor: &mut Character,
        tag: Option<ChoiceTag>,
        rng: &mut StdRng,
    ) -> String {
        if self.check(actor, tag, rng) {
            self.apply_success(actor, tag, rng)
        } else {
            self.apply_failure(actor, tag)
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
