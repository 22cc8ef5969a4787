//! Fire probability service library.
//!
//! This module exposes the internal modules for testing purposes.

pub mod config;
pub mod pipeline;
pub mod server;
