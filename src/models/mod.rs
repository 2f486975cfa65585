//! Data models for palette versions, colors, and picks.
//!
//! This module contains the core data structures used throughout the application.
//! Models are designed to be independent of UI and storage.

pub mod palette_version;
pub mod pick;
pub mod rgb;

// Re-export all model types
pub use palette_version::PaletteVersion;
pub use pick::PickRecord;
pub use rgb::RgbColor;
