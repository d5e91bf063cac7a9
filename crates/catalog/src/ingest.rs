//! Catalog construction from the data files.
//!
//! This module joins the two parsed files into a validated Catalog:
//! - Parse basics and ratings in parallel
//! - Attach each ratings row to its title by tconst
//! - Build the id index and check the catalog invariants

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;

impl Catalog {
    /// Load the catalog from the basics and ratings files.
    ///
    /// This is the one entry point for loading data; the returned Catalog is
    /// never mutated afterwards.
    pub fn load_from_files(basics_path: &Path, ratings_path: &Path) -> Result<Self> {
        tracing::info!(
            basics = %basics_path.display(),
            ratings = %ratings_path.display(),
            "loading title catalog"
        );

        // Parse both files in parallel; each returns Result<Vec<_>>
        let (movies, ratings) = rayon::join(
            || parser::parse_basics(basics_path),
            || parser::parse_ratings(ratings_path),
        );
        let mut movies = movies?;
        let ratings = ratings?;

        tracing::info!(
            titles = movies.len(),
            ratings = ratings.len(),
            "parsed catalog files"
        );

        // Attach ratings by tconst. Titles with no ratings row keep their
        // zero placeholder; a ratings row with no title is a broken dataset.
        let mut by_title: HashMap<TitleId, Rating> = ratings
            .into_iter()
            .map(|rating| (rating.id.clone(), rating))
            .collect();

        for movie in &mut movies {
            if let Some(rating) = by_title.remove(&movie.id) {
                movie.rating = rating;
            }
        }

        if let Some(id) = by_title.into_keys().next() {
            return Err(CatalogError::MissingReference {
                entity: "title".to_string(),
                id,
            });
        }

        // Build the catalog in file order and index by id
        let mut catalog = Catalog::new();
        for movie in movies {
            catalog.insert_movie(movie);
        }

        catalog.validate()?;

        tracing::info!(titles = catalog.len(), "catalog built and validated");
        Ok(catalog)
    }

    /// Check the catalog invariants.
    ///
    /// - the index holds exactly one entry per record, each mapping back to
    ///   its own position (catches duplicate tconsts)
    /// - every record's rating carries the record's own id
    /// - scores are within 0.0-10.0
    pub fn validate(&self) -> Result<()> {
        if self.by_id.len() != self.movies.len() {
            return Err(CatalogError::ValidationError(format!(
                "index covers {} ids for {} records (duplicate tconst?)",
                self.by_id.len(),
                self.movies.len()
            )));
        }

        for (pos, movie) in self.movies.iter().enumerate() {
            match self.by_id.get(&movie.id) {
                Some(&indexed) if indexed == pos => {}
                _ => {
                    return Err(CatalogError::ValidationError(format!(
                        "duplicate or unindexed tconst {}",
                        movie.id
                    )));
                }
            }

            if movie.rating.id != movie.id {
                return Err(CatalogError::ValidationError(format!(
                    "record {} carries rating for {}",
                    movie.id, movie.rating.id
                )));
            }

            if !(0.0..=10.0).contains(&movie.rating.score) {
                return Err(CatalogError::InvalidValue {
                    field: "score".to_string(),
                    value: movie.rating.score.to_string(),
                });
            }
        }

        Ok(())
    }
}
