//! goxunit library
//!
//! This module exports the command-line configuration and the conversion
//! pipeline for use in integration tests and as a library.

pub mod app;
pub mod config;
