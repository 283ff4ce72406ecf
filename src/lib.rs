//! Sakuseikan - a terminal planetarium.
//!
//! Pick one of three star cards, answer the question it carries, and watch
//! the answer fly away while the stars send a reply.
//!
//! This library exposes modules for use in the binary and integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod state;
pub mod terminal;
pub mod ui;
