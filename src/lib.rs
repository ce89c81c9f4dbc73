//! # Connect Four
//!
//! Connect Four for two or more players, played in the terminal.
//! The game engine is independent of the UI: a [`game::GameHandle`] owns the
//! board, the turn order and the outcome, and the Ratatui front end drives it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win/tie detection, players, game session
//! - [`ui`] — Terminal UI: board view, key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
