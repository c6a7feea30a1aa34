//! Procmod core - platform-independent process facade
//!
//! This crate provides the adapter traits, configuration, error types and
//! the facade itself that are shared across platform-specific
//! implementations.

mod config;
mod error;
mod facade;
mod process;
mod tracked;

pub use config::*;
pub use error::*;
pub use facade::*;
pub use process::*;
pub use tracked::*;
