//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories do not create their foreign-key dependencies; use
//! `helpers` for complete hierarchies.
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let periode = factory::periode::PeriodeFactory::new(&db)
//!     .registration_deadline(yesterday)
//!     .status("closed")
//!     .build()
//!     .await?;
//! ```

pub mod destination;
pub mod employee;
pub mod helpers;
pub mod inscription;
pub mod periode;
pub mod resultat_selection;
pub mod session;

pub use destination::create_destination;
pub use employee::create_employee;
pub use inscription::create_inscription;
pub use periode::create_periode;
pub use resultat_selection::create_resultat_selection;
pub use session::create_session;
