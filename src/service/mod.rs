//! Business logic orchestrating the stores, the patcher and the blob store.

pub mod booking;
pub mod content;
