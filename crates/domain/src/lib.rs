//! # homesim-domain
//!
//! Pure domain model for the homesim smart-home controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, room numbering
//! - Define **Rooms** (light, temperature, motion, and lock state)
//! - Define the **House** (the fixed set of rooms under control)
//! - Define the **auto-lock** streak counter
//! - Define **Notices** (user-facing records of what happened)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or the binary. Randomness is
//! injected as a [`rand::Rng`] so callers control seeding.

pub mod error;

pub mod auto_lock;
pub mod house;
pub mod notice;
pub mod room;
