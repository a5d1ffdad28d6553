//! # Stability Calculator Library
//!
//! This library exposes the Stability Calculator modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod webhook;

// Re-export stability_core for convenience
pub use stability_core;
