//! Catalog rendering.
//!
//! Stateless projection from entity subsets to card views and from card
//! views to the full page. Every render regenerates the whole catalog
//! section; there is no incremental diffing.

mod cards;
mod page;

pub use cards::{CardView, DescriptionView, render_cards};
pub use page::render_page;
