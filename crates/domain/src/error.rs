//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HomeError`]
//! via `#[from]`.

use std::collections::TryReserveError;

/// Base error for every house operation.
#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    /// The caller supplied a value outside the accepted range.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Room storage could not be reserved.
    #[error("Memory allocation failed!")]
    Allocation(#[from] TryReserveError),
}

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The requested number of rooms is outside `1..=max`.
    #[error("Invalid number of rooms! Max allowed is {max}.")]
    RoomCountOutOfRange { count: i64, max: usize },

    /// The requested room does not exist in this house.
    #[error("Invalid room number!")]
    RoomOutOfRange { room: i64, room_count: usize },
}
