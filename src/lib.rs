//! Classic wrap-around snake for the terminal.
//!
//! The snake moves on a fixed 32×24 toroidal grid, grows by eating a single
//! randomly placed apple, and resets in place on self-collision. The
//! simulation core ([`game`], [`snake`], [`apple`], [`grid`]) is pure
//! in-memory state driven by [`GameState::tick`](game::GameState::tick);
//! the terminal edge ([`input`], [`renderer`], [`terminal_runtime`],
//! [`clock`]) feeds it key events and paces it at a fixed tick rate.

pub mod apple;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
