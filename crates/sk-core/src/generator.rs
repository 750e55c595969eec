//! Random character generation.
//!
//! Draws gender, a name from the matching table, a race, and a fresh
//! attribute block. Starting health, magic, and money follow from the
//! attributes via [`Character::new`].

use rand::Rng;
use rand::rngs::StdRng;

use crate::attributes::Attributes;
use crate::character::{Character, Gender, Race};

const MALE_NAMES: [&str; 10] = [
    "Aric", "Bran", "Cedric", "Dain", "Erik", "Finn", "Gareth", "Hakon", "Ivar", "Jorn",
];

const FEMALE_NAMES: [&str; 10] = [
    "Aria", "Brienne", "Cara", "Dana", "Eira", "Freya", "Gwen", "Hilda", "Iris", "Jade",
];

/// Generate a random level-1 character.
///
/// The caller is responsible for placing the character on the grid; the
/// position starts at the origin.
pub fn generate_character(rng: &mut StdRng) -> Character {
    let gender = if rng.random_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };
    let names: &[&str] = match gender {
        Gender::Male => &MALE_NAMES,
        Gender::Female => &FEMALE_NAMES,
    };
    let name = names[rng.random_range(0..names.len())];
    let races = Race::all();
    let race = races[rng.random_range(0..races.len())];
    let attributes = Attributes::random(rng);

    Character::new(name, gender, race, attributes)
}
