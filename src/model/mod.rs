//! Wire-level request and response DTOs.
//!
//! These types define the JSON contract of the HTTP API. Server-side domain models
//! convert to and from them at the controller boundary.

pub mod api;
pub mod inscription;
pub mod periode;
pub mod selection;
pub mod session;
