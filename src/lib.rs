//! Palette Snoop
//!
//! Matches the colors of a palette to artist paints and print inks.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;

pub use error::AppError;
