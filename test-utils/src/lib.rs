//! Tahwisa Test Utils
//!
//! Shared testing utilities for the registration backend. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases and factories for
//! seeding entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Builder-style factories for every entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn registers_employee() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_registration_tables()
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (periode, session) = factory::helpers::create_open_session(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
