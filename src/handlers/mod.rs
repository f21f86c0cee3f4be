//! Front-end route handlers.

pub mod health;
pub mod setup;
