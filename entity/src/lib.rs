//! SeaORM entity models for the content aggregates and their translations.

pub mod prelude;

pub mod service;
pub mod service_translation;
pub mod team_member;
pub mod team_member_translation;
