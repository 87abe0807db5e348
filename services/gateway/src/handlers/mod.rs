//! API handlers for the gateway endpoints

pub mod auth;
pub mod health;
pub mod pages;
pub mod upload;

pub use auth::AuthHandlers;
pub use health::HealthHandlers;
pub use pages::PageHandlers;
pub use upload::UploadHandlers;
