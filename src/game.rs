use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::apple::Apple;
use crate::grid::GridSize;
use crate::input::{self, Direction, GameInput};
use crate::snake::Snake;

/// Complete mutable game state for one session.
///
/// Owns the snake, the apple, and the RNG that feeds respawns, so a seed
/// pins down an entire run. There is no terminal game-over state: a
/// self-collision resets the snake in place and play continues.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::from_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::from_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(bounds.center(), Direction::Right);
        let apple = Apple::respawn(&mut rng, bounds);

        Self {
            snake,
            apple,
            tick_count: 0,
            bounds,
            rng,
        }
    }

    /// Returns the grid dimensions for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Commits whatever direction was requested since the last tick, then
    /// moves the snake and resolves apple consumption. Input for this tick
    /// must already be drained when this is called.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        self.snake.commit_pending_direction();
        self.apple = self.snake.advance(&mut self.rng, self.bounds, self.apple);
    }

    /// Applies one external input event.
    ///
    /// Direction requests pass through the reversal gate against the snake's
    /// committed heading; rejected requests are dropped without trace. Quit
    /// is owned by the game loop and ignored here.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(requested) => {
                if let Some(direction) =
                    input::request_direction(self.snake.direction(), requested)
                {
                    self.snake.set_pending_direction(direction);
                }
            }
            GameInput::Quit => {}
        }
    }
}
