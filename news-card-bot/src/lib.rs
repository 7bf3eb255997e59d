//! # News card bot
//!
//! Wires the Telegram transport, the handler chain, article extraction and card composition.
//! Config comes from the environment (optionally `.env`); `run_bot` starts the REPL and
//! `render_once` produces a single card locally.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_composer, build_handler_chain};
pub use config::{BotConfig, CardConfig};
pub use runner::{render_once, run_bot};
