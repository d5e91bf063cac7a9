//! Analytical queries over the in-memory title catalog.
//!
//! This crate provides:
//! - QueryEngine, the read-only query interface over a loaded Catalog
//! - Ordering policies for ranking (by votes; by the ratings' natural order)
//! - QueryError for unrecognized boundary tags
//!
//! ## Architecture
//! The engine borrows the catalog built by the `catalog` crate and answers
//! five kinds of questions over it: substring search, id lookup, year/genre
//! filtering, per-year genre counts, and the two top-N rankings. Everything
//! is a pure read; results are fresh containers of borrowed records.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::Catalog;
//! use queries::QueryEngine;
//!
//! let catalog = Catalog::load_from_files(&basics, &ratings)?;
//! let engine = QueryEngine::new(&catalog);
//!
//! let noir = engine.find_by_year_and_genre("MOVIE", 1946, "Film-Noir")?;
//! let popular = engine.top_by_votes(10, "TV_SERIES")?;
//! ```

pub mod engine;
pub mod error;
pub mod order;

// Re-export main types
pub use engine::{QueryEngine, MIN_VOTES_FOR_TOP_RATED};
pub use error::{QueryError, Result};
