//! # homesim — smart-home controller simulation
//!
//! Composition root that wires the house service to the console.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Seed the random source
//! - Run the interactive menu session over stdin/stdout
//! - Map the session outcome to a process exit code
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod menu;
pub mod session;
