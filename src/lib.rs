//! # Connect-N
//!
//! A generalised Connect Four: 4-in-a-row on a 6×7 board or 5-in-a-row on a
//! 7×9 board, played by two humans or by one human against a random bot, and
//! served over HTTP.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, variant, state, engine
//! - [`ai`] — Agent trait and the uniform-random bot
//! - [`web`] — Axum router, form handlers, HTML view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod web;
