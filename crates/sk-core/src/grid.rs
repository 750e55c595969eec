//! The generated tile world: terrain, positions, directions, and spawn
//! placement.
//!
//! The grid is generated once per session and never mutated afterwards.
//! Each cell is an independent Bernoulli draw between land and water.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// How many uniform random draws [`Grid::find_spawn`] makes before falling
/// back to an exhaustive scan.
const MAX_SPAWN_ATTEMPTS: u32 = 100;

/// How many orthogonal land neighbors a cell needs to be a valid spawn.
const SPAWN_LAND_NEIGHBORS: usize = 3;

/// Terrain of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    /// Walkable ground.
    Land,
    /// Impassable water.
    Water,
}

/// A cell coordinate on the grid.
///
/// Signed so that direction deltas compose without underflow; positions
/// outside the grid are simply rejected by [`Grid::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column, 0 at the left edge.
    pub x: i32,
    /// Row, 0 at the top edge.
    pub y: i32,
}

impl Position {
    /// Create a position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent position one step in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Towards smaller y.
    Up,
    /// Towards larger y.
    Down,
    /// Towards smaller x.
    Left,
    /// Towards larger x.
    Right,
}

impl Direction {
    /// All four directions.
    pub fn all() -> &'static [Self] {
        &[Self::Up, Self::Down, Self::Left, Self::Right]
    }

    /// Parse a direction from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "l" | "left" => Some(Self::Left),
            "r" | "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Display name of this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// The unit delta `(dx, dy)` of one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Pick a direction uniformly at random.
    pub fn random(rng: &mut StdRng) -> Self {
        let all = Self::all();
        all[rng.random_range(0..all.len())]
    }
}

/// A fixed square grid of terrain, immutable after generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
    cells: Vec<Terrain>,
}

impl Grid {
    /// Generate a `size` x `size` grid. Each cell is water with the given
    /// probability, independently of its neighbors.
    pub fn generate(size: u32, water_chance: f64, rng: &mut StdRng) -> Self {
        let size = size as i32;
        let cells = (0..size * size)
            .map(|_| {
                if rng.random_bool(water_chance.clamp(0.0, 1.0)) {
                    Terrain::Water
                } else {
                    Terrain::Land
                }
            })
            .collect();
        Self { size, cells }
    }

    /// Build a grid from a text sketch, one string per row, where `'~'`
    /// marks water and any other character marks land. Rows shorter than
    /// the grid are padded with land. Useful for deterministic setups.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len() as i32;
        let mut cells = Vec::with_capacity((size * size) as usize);
        for row in rows {
            let mut chars = row.chars();
            for _ in 0..size {
                let terrain = match chars.next() {
                    Some('~') => Terrain::Water,
                    _ => Terrain::Land,
                };
                cells.push(terrain);
            }
        }
        Self { size, cells }
    }

    /// Side length of the grid.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether the position lies within the grid bounds.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    /// Terrain at a position, or `None` if out of bounds.
    pub fn terrain(&self, pos: Position) -> Option<Terrain> {
        if self.contains(pos) {
            Some(self.cells[(pos.y * self.size + pos.x) as usize])
        } else {
            None
        }
    }

    /// Whether the position is an in-bounds land cell.
    pub fn is_land(&self, pos: Position) -> bool {
        self.terrain(pos) == Some(Terrain::Land)
    }

    /// The center cell, used as the last-resort spawn fallback.
    pub fn center(&self) -> Position {
        Position::new(self.size / 2, self.size / 2)
    }

    /// Whether a cell qualifies as a spawn point: it is land, and at least
    /// three of its four orthogonal neighbors are in-bounds land cells.
    ///
    /// The count is absolute, so corner cells (two neighbors) can never
    /// qualify and edge cells need all three of theirs.
    pub fn is_valid_spawn(&self, pos: Position) -> bool {
        if !self.is_land(pos) {
            return false;
        }
        let land_neighbors = Direction::all()
            .iter()
            .filter(|dir| self.is_land(pos.step(**dir)))
            .count();
        land_neighbors >= SPAWN_LAND_NEIGHBORS
    }

    /// Find a spawn position.
    ///
    /// Samples uniform random cells up to 100 times; if none qualifies,
    /// scans the grid in row-major order for the first valid cell; if the
    /// grid has no valid cell at all, returns the center, which may itself
    /// be invalid on sufficiently watery maps. Callers accept that
    /// degenerate case.
    pub fn find_spawn(&self, rng: &mut StdRng) -> Position {
        if self.size == 0 {
            return self.center();
        }
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let pos = Position::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            if self.is_valid_spawn(pos) {
                return pos;
            }
        }
        for y in 0..self.size {
            for x in 0..self.size {
                let pos = Position::new(x, y);
                if self.is_valid_spawn(pos) {
                    return pos;
                }
            }
        }
        self.center()
    }
}
