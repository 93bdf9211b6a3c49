use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::apple::Apple;
use crate::grid::{GridSize, Position};
use crate::input::Direction;

/// Mutable snake state: body segments, heading, and growth target.
///
/// The body holds cell positions head-first. `target_length` is the length
/// the body is allowed to reach; eating raises it by one and the tail is
/// popped whenever the body exceeds it, so growth shows up on the same tick
/// the apple is eaten.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided heading.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: None,
            target_length: 1,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        let target_length = segments.len();

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            target_length,
        }
    }

    /// Advances the snake one cell and resolves apple consumption.
    ///
    /// Returns the apple that is on the board after this tick: a fresh
    /// respawn when the apple was eaten, otherwise `apple` unchanged. A
    /// self-collision resets the snake in place and also returns `apple`
    /// unchanged, even when the colliding cell coincides with it; the
    /// growth bump is discarded along with the rest of the run.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        apple: Apple,
    ) -> Apple {
        let next_head = self.head().stepped(self.direction).wrapped(bounds);

        let mut ate_apple = false;
        if next_head == apple.position {
            self.target_length += 1;
            ate_apple = true;
        }

        self.body.push_front(next_head);

        // Collision scan skips the segment just inserted; a hit anywhere in
        // the pre-insertion body ends the run.
        if self.body.iter().skip(1).any(|segment| *segment == next_head) {
            self.reset(rng, bounds);
            return apple;
        }

        if self.body.len() > self.target_length {
            let _ = self.body.pop_back();
        }

        if ate_apple {
            return Apple::respawn(rng, bounds);
        }

        apple
    }

    /// Reinitializes the snake after a self-collision.
    ///
    /// The body becomes the single center cell, the growth target drops back
    /// to one, and a fresh heading is drawn at random. Any pending direction
    /// request is left in place and will still be committed next tick.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize) {
        self.body.clear();
        self.body.push_front(bounds.center());
        self.target_length = 1;
        self.direction = *Direction::ALL
            .choose(rng)
            .expect("direction list is never empty");
    }

    /// Stores a direction request to be committed at the next tick.
    ///
    /// Validation against the current heading happens at request time in the
    /// input mapper; later requests within the same tick overwrite earlier
    /// ones.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Adopts the pending direction, if any. No-op when none is queued.
    pub fn commit_pending_direction(&mut self) {
        if let Some(next) = self.pending_direction.take() {
            self.direction = next;
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never holds between ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
