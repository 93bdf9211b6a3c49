use std::io;

use thiserror::Error;

/// Fatal errors surfaced to the user at the process edge.
///
/// The simulation itself is total; everything here comes from terminal
/// setup, event polling, or command-line validation.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("tick rate must be at least 1")]
    ZeroTickRate,
}
