//! Data pipeline for an interactive mobile-phone catalog explorer.
//!
//! The crate turns a messy comma-delimited product feed into typed records,
//! filters them by a price threshold and a brand selection, and derives the
//! three aggregate views a front end draws from: per-brand means for a bar
//! chart, dual means for a scatter plot, and a stars-weighted hierarchy for
//! a treemap. Rendering is the consumer's job; this crate ships values,
//! never pixels.

pub mod data;
pub mod state;

pub use data::filter::{BrandSelection, FilterParams};
pub use data::model::{CatalogStore, NumericField, Record};
pub use state::ViewState;
