//! # Connect Four
//!
//! A terminal Connect Four game built with Ratatui. Two humans can play on
//! one keyboard, or one human can face a computer opponent driven by a
//! tiered greedy heuristic (win, block, develop, random fallback).
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn-taking session
//! - [`agents`] — The "choose a column" abstraction: human and heuristic players
//! - [`ui`] — Terminal UI: mode menu, column selector, board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod agents;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
