//! Trellis Kernel Library
//!
//! Content graph and navigation model for the documentation site, the
//! content it ships with, and the theme and HTTP layers that render it.
//! The main entry point for running the site is the `trellis` binary.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod menu;
pub mod routes;
pub mod search;
pub mod state;
pub mod theme;

pub use config::Config;
pub use state::AppState;
