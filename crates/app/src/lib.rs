//! # homesim-app
//!
//! Application layer — the use-cases behind the controller menu.
//!
//! ## Responsibilities
//! - `HouseService` — initialize, toggle light/lock, read temperature,
//!   scan motion, summarize
//! - `HouseRules` — per-cycle auto-lock tick and energy check
//! - Return [`Notice`](homesim_domain::notice::Notice)s instead of printing,
//!   so the caller owns presentation
//!
//! ## Dependency rule
//! Depends on `homesim-domain` only (plus `rand` for the injected random
//! source). Never imports the binary crate.

pub mod house_rules;
pub mod services;
