//! Shared testing utilities for the content backend.
//!
//! Provides a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for the
//! content entities.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Service;
//!
//! #[tokio::test]
//! async fn test_service_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Service)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
