//! Application services — use-case implementations.
//!
//! Each service struct accepts its collaborators via generic parameters
//! (constructor injection), keeping this layer decoupled from the console
//! and from any particular random source.

pub mod house_service;
