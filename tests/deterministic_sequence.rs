use classic_snake::apple::Apple;
use classic_snake::game::GameState;
use classic_snake::grid::{GridSize, Position};
use classic_snake::input::{Direction, GameInput};
use classic_snake::snake::Snake;

const BOUNDS: GridSize = GridSize {
    width: 32,
    height: 24,
};

#[test]
fn stepwise_growth_turn_and_self_collision_reset() {
    let mut state = GameState::new_with_seed(BOUNDS, 42);
    state.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
    state.apple = Apple::at(Position { x: 6, y: 5 });

    // Eat the apple: the body grows on the same tick and a fresh apple is
    // drawn somewhere on the grid.
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
    assert_eq!(state.snake.len(), 2);
    assert!(state.apple.position.is_within_bounds(BOUNDS));

    // Plant the next apple on the path and eat it too.
    state.apple = Apple::at(Position { x: 7, y: 5 });
    state.tick();
    assert_eq!(state.snake.len(), 3);

    // Park the apple far from the path so the remaining steps are pure moves.
    state.apple = Apple::at(Position { x: 20, y: 20 });

    // Steer upward; the turn is committed at the next tick.
    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 7, y: 4 });
    assert_eq!(state.snake.len(), 3);

    // A reversal request is dropped while the turn before it sticks.
    state.apply_input(GameInput::Direction(Direction::Down));
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 7, y: 3 });

    assert_eq!(state.tick_count, 4);
}

#[test]
fn wrapping_across_the_right_edge_continues_the_run() {
    let mut state = GameState::new_with_seed(BOUNDS, 7);
    state.snake = Snake::new(Position { x: 31, y: 12 }, Direction::Right);
    state.apple = Apple::at(Position { x: 9, y: 9 });

    state.tick();

    assert_eq!(state.snake.head(), Position { x: 0, y: 12 });
    assert_eq!(state.snake.len(), 1);
}

#[test]
fn collision_into_own_tail_resets_and_keeps_the_apple_in_place() {
    let mut state = GameState::new_with_seed(BOUNDS, 99);
    state.snake = Snake::from_segments(
        vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 3, y: 5 },
        ],
        Direction::Left,
    );
    state.apple = Apple::at(Position { x: 4, y: 5 });

    // Candidate head (4, 5) is both the apple cell and a body cell: the
    // collision wins and the apple survives untouched.
    state.tick();

    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Position { x: 16, y: 12 });
    assert_eq!(state.apple.position, Position { x: 4, y: 5 });

    // Play continues immediately after the reset.
    state.tick();
    assert_eq!(state.snake.len(), 1);
}
