//! SeaORM entity models for the registration and selection schema.

pub mod prelude;

pub mod destination;
pub mod employee;
pub mod inscription;
pub mod periode;
pub mod resultat_selection;
pub mod session;
