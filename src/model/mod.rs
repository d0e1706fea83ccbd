//! API DTOs and operation parameter types.

pub mod api;
pub mod booking;
pub mod content;
