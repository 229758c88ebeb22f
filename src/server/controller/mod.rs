//! HTTP request handlers.
//!
//! Controllers authenticate the caller, convert DTOs to domain parameters, call the
//! service layer, and convert the results back to DTOs.

pub mod inscription;
pub mod periode;
pub mod selection;
pub mod session;
