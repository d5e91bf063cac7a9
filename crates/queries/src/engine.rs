//! The query engine: read-only analytical queries over the catalog.
//!
//! The engine borrows the catalog at construction and never mutates it;
//! every query is a single pass that allocates a fresh result container.
//! Unrecognized type/genre tags are rejected at the boundary instead of
//! silently matching nothing.

use crate::error::{QueryError, Result};
use crate::order;
use catalog::{Catalog, Genre, Movie, TitleType};
use std::collections::{BTreeMap, BTreeSet};

/// Minimum number of votes a title needs to be considered for top ranking
pub const MIN_VOTES_FOR_TOP_RATED: u32 = 1000;

fn parse_type_tag(tag: &str) -> Result<TitleType> {
    TitleType::from_tag(tag).ok_or_else(|| QueryError::InvalidType {
        tag: tag.to_string(),
    })
}

fn parse_genre_tag(tag: &str) -> Result<Genre> {
    Genre::from_tag(tag).ok_or_else(|| QueryError::InvalidGenre {
        tag: tag.to_string(),
    })
}

/// Read-only query interface over a loaded [`Catalog`].
///
/// Holds the record list and id index by shared reference for its lifetime.
/// All methods take `&self` and the underlying data is immutable, so an
/// engine can serve any number of concurrent readers without locks.
pub struct QueryEngine<'c> {
    catalog: &'c Catalog,
}

impl<'c> QueryEngine<'c> {
    /// Create an engine over an already-loaded catalog.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Find all titles of a type whose name contains `needle` as a literal,
    /// case-sensitive substring.
    ///
    /// Results keep the catalog's ingestion order. An empty needle matches
    /// every title of the type.
    pub fn find_by_type_and_substring(
        &self,
        type_tag: &str,
        needle: &str,
    ) -> Result<Vec<&'c Movie>> {
        let title_type = parse_type_tag(type_tag)?;

        let matches: Vec<&Movie> = self
            .catalog
            .movies()
            .iter()
            .filter(|movie| movie.title_type == title_type && movie.title.contains(needle))
            .collect();

        tracing::debug!(
            type_tag,
            needle,
            matches = matches.len(),
            "substring search complete"
        );
        Ok(matches)
    }

    /// Look up a single title by its tconst id, in expected O(1) time.
    ///
    /// Absence is a normal outcome, never an error.
    pub fn find_by_id(&self, id: &str) -> Option<&'c Movie> {
        self.catalog.get(id)
    }

    /// Find titles of a type, from one year, carrying a genre.
    ///
    /// The set enumerates in the records' natural order (ascending title,
    /// with year and id keeping it total) and cannot contain duplicates.
    pub fn find_by_year_and_genre(
        &self,
        type_tag: &str,
        year: u16,
        genre_tag: &str,
    ) -> Result<BTreeSet<&'c Movie>> {
        let title_type = parse_type_tag(type_tag)?;
        let genre = parse_genre_tag(genre_tag)?;

        let matches: BTreeSet<&Movie> = self
            .catalog
            .movies()
            .iter()
            .filter(|movie| {
                movie.title_type == title_type
                    && movie.year == year
                    && movie.genres.contains(&genre)
            })
            .collect();

        tracing::debug!(
            type_tag,
            year,
            genre_tag,
            matches = matches.len(),
            "year/genre search complete"
        );
        Ok(matches)
    }

    /// For every year in `[start, end]`, count titles of a type per genre.
    ///
    /// A record increments the count of each genre it carries, under its
    /// year. Every year in the range gets an entry, even with no matches;
    /// an inverted range yields an empty map rather than an error.
    pub fn count_by_genre_per_year(
        &self,
        type_tag: &str,
        start: u16,
        end: u16,
    ) -> Result<BTreeMap<u16, BTreeMap<Genre, u32>>> {
        let title_type = parse_type_tag(type_tag)?;

        let mut counts: BTreeMap<u16, BTreeMap<Genre, u32>> =
            (start..=end).map(|year| (year, BTreeMap::new())).collect();

        for movie in self.catalog.movies() {
            if movie.title_type != title_type {
                continue;
            }
            let Some(per_genre) = counts.get_mut(&movie.year) else {
                continue; // outside the requested range
            };
            for genre in &movie.genres {
                *per_genre.entry(*genre).or_insert(0) += 1;
            }
        }

        Ok(counts)
    }

    /// The `count` most-voted titles of a type, ordered by descending votes
    /// with ties broken alphabetically by title.
    ///
    /// Clamped: asking for more titles than exist returns all of them.
    pub fn top_by_votes(&self, count: usize, type_tag: &str) -> Result<Vec<&'c Movie>> {
        let title_type = parse_type_tag(type_tag)?;

        let mut matches: Vec<&Movie> = self
            .catalog
            .movies()
            .iter()
            .filter(|movie| movie.title_type == title_type)
            .collect();
        matches.sort_by(|a, b| order::by_votes(a, b));
        matches.truncate(count);

        tracing::debug!(type_tag, count, returned = matches.len(), "top-by-votes complete");
        Ok(matches)
    }

    /// For every year in `[start, end]`, up to `count` top-rated titles of a
    /// type, ranked by the ratings' natural order.
    ///
    /// Only titles with more than [`MIN_VOTES_FOR_TOP_RATED`] votes are
    /// eligible. Because the ranking sorts the ratings themselves, ties on
    /// equal score fall to descending votes and then ascending id, not to
    /// the title. Every year in the range appears, even with no eligible
    /// titles.
    pub fn top_rated_per_year(
        &self,
        count: usize,
        type_tag: &str,
        start: u16,
        end: u16,
    ) -> Result<BTreeMap<u16, Vec<&'c Movie>>> {
        let title_type = parse_type_tag(type_tag)?;

        let mut top: BTreeMap<u16, Vec<&Movie>> =
            (start..=end).map(|year| (year, Vec::new())).collect();

        let mut eligible: Vec<&Movie> = self
            .catalog
            .movies()
            .iter()
            .filter(|movie| {
                movie.rating.votes > MIN_VOTES_FOR_TOP_RATED
                    && movie.title_type == title_type
                    && (start..=end).contains(&movie.year)
            })
            .collect();
        eligible.sort_by(|a, b| a.rating.cmp(&b.rating));

        for movie in eligible {
            // the filter above guarantees the year entry exists
            if let Some(ranked) = top.get_mut(&movie.year) {
                if ranked.len() < count {
                    ranked.push(movie);
                }
            }
        }

        Ok(top)
    }
}
