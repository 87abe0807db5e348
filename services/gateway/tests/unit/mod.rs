//! Unit tests module organization

pub mod health;
pub mod upload_handlers;

// Test utilities and helpers
pub mod helpers;
