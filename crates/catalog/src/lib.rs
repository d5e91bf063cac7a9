//! # Catalog Crate
//!
//! This crate handles loading and indexing the IMDb title catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (TitleType, Genre, Rating, Movie, Catalog)
//! - **parser**: Parse the TSV exports into Rust structs
//! - **ingest**: Join the files, build the id index, validate invariants
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! // Load the entire dataset once, up front
//! let catalog = Catalog::load_from_files(
//!     Path::new("data/title.basics.tsv"),
//!     Path::new("data/title.ratings.tsv"),
//! )?;
//!
//! // O(1) lookup through the id index
//! let movie = catalog.get("tt0111161").unwrap();
//! println!("{} ({}) rated {}", movie.title, movie.year, movie.rating.score);
//! ```
//!
//! The catalog is populated once and never mutated afterwards, so it can be
//! shared freely across readers.

// Public modules
pub mod error;
pub mod ingest;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    TitleId,
    // Core types
    Catalog,
    Movie,
    Rating,
    // Enums
    Genre,
    TitleType,
};
