//! Core domain + application logic for the homework status watcher.
//!
//! This crate is intentionally transport-agnostic. The Practicum status API
//! and Telegram live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod ports;
pub mod status;
pub mod watcher;

pub use errors::{Error, Result};
