//! # Connect Four TUI
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! Columns are picked with the mouse (hover to aim, click to drop) or the
//! keyboard.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, gravity drops, win detection, session
//! - [`ui`] — Terminal UI: event loop and game screen
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
