//! Request authentication and authorization guards.

pub mod auth;

#[cfg(test)]
mod test;
