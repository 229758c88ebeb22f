//! Recurring background jobs.

pub mod expiry_sweep;
