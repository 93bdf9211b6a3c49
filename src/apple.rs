use rand::Rng;

use crate::grid::{GridSize, Position};

/// The single apple currently on the board.
///
/// Eating replaces the whole value with a fresh respawn; an apple is never
/// mutated in place.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    /// Creates an apple at a fixed position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns an apple at a uniformly random cell anywhere on the grid.
    ///
    /// Snake occupancy is deliberately not checked: an apple may land under
    /// the snake and stay hidden until the snake moves off it. The draw is
    /// over a finite non-empty domain and cannot fail.
    #[must_use]
    pub fn respawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self {
            position: Position {
                x: rng.gen_range(0..i32::from(bounds.width)),
                y: rng.gen_range(0..i32::from(bounds.height)),
            },
        }
    }
}
