//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and `create_*` convenience functions for quick default
//! creation. Factories handle foreign keys, so translation helpers take
//! the owning entity's id.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let service = factory::service::create_service(&db).await?;
//!     let translation =
//!         factory::service::create_service_translation(&db, service.id, "en").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod service;
pub mod team_member;

// Re-export commonly used factory functions for concise usage
pub use service::{create_service, create_service_translation};
pub use team_member::{create_team_member, create_team_member_translation};
