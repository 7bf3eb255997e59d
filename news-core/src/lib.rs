//! # news-core
//!
//! Core types and traits for the news card bot: [`Bot`], [`Handler`], message and user types,
//! errors, and tracing initialization. Transport-agnostic; used by news-telegram, handler-chain
//! and card-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, Document};
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
