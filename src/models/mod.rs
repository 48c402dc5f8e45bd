// src/models/mod.rs

//! Domain models for the catalog application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod filter;
mod project;
mod raw;

// Re-export all public types
pub use config::{Config, ContactConfig, ImageConfig, RenderConfig, SourceConfig};
pub use filter::{ALL, FilterState};
pub use project::{ImageRef, ProjectEntity, UNKNOWN_LANGUAGE, language_breakdown};
pub use raw::RawProjectRecord;
