// src/services/mod.rs

//! Service layer for the catalog application.
//!
//! This module contains the outward-facing integrations:
//! - Project feed fetching (`ProjectSource`)
//! - Image resolution (`ImageResolver`)
//! - Contact submission (`ContactRelay`)

mod contact;
mod images;
mod source;

pub use contact::{ContactRelay, Submission};
pub use images::{ImageResolver, LanguageStyle, style_for};
pub use source::ProjectSource;
