//! Tailwind Colors Library
//!
//! Core functionality behind the `twcolors` binary: the color catalogs of
//! three Tailwind CSS generations, conversion of hex colors into CSS
//! notations, the persisted selection, and the history of copied colors.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod history;
pub mod models;
pub mod notation;
pub mod picker;
pub mod render;
pub mod theme;
