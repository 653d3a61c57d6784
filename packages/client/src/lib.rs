//! Terminal client for GuessMe, a word guessing game played over WebSocket.
//!
//! The client keeps one session with the game server, forwards what the
//! player types and renders every answer into a response region and a
//! newest-first history using string templates.

pub mod config;
pub mod connection;
pub mod controller;
pub mod domain;
pub mod error;
pub mod input;
pub mod runner;
pub mod session;
pub mod template;
#[cfg(test)]
mod testing;
pub mod view;

pub use config::{ClientConfig, ResetPolicy};
pub use controller::ChatController;
pub use error::{ClientError, ConnectionError};
pub use runner::run_client;
