use std::process::ExitCode;

use clap::Parser;
use classic_snake::clock::TickClock;
use classic_snake::config::{DEFAULT_TICKS_PER_SECOND, GRID_HEIGHT, GRID_WIDTH, THEME_CLASSIC};
use classic_snake::error::GameError;
use classic_snake::game::GameState;
use classic_snake::grid::GridSize;
use classic_snake::input::{self, GameInput};
use classic_snake::renderer;
use classic_snake::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
struct Cli {
    /// Simulation ticks per second.
    #[arg(long = "tick-rate", default_value_t = DEFAULT_TICKS_PER_SECOND)]
    tick_rate: u32,

    /// Seed the RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<(), GameError> {
    if cli.tick_rate == 0 {
        return Err(GameError::ZeroTickRate);
    }

    install_panic_hook();
    let mut session = TerminalSession::enter("Snake")?;

    let bounds = GridSize {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
    };
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };
    let mut clock = TickClock::new(cli.tick_rate);
    let theme = THEME_CLASSIC;

    loop {
        clock.wait();

        let mut quit = false;
        while let Some(game_input) = input::poll_event()? {
            match game_input {
                GameInput::Quit => quit = true,
                other => state.apply_input(other),
            }
        }
        if quit {
            break;
        }

        state.tick();

        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &theme))?;
    }

    Ok(())
}
