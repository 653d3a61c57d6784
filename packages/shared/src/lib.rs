//! Code shared across the GuessMe packages.

pub mod logger;
pub mod protocol;
