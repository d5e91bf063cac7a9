//! Parser for the IMDb flat TSV exports.
//!
//! This module handles the two input files:
//! - basics: tconst, titleType, primaryTitle, originalTitle, isAdult,
//!   startYear, endYear, runtimeMinutes, genres
//! - ratings: tconst, averageRating, numVotes
//!
//! Both are tab-separated with a header line; `\N` marks an absent value.
//! Title types use IMDb's lowerCamel tags ("movie", "tvSeries", ...) and
//! genres are comma-separated.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a whole data file into lines.
///
/// The exports are UTF-8; reading everything up front keeps line numbers
/// trivially available for error reporting.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            CatalogError::IoError(e)
        }
    })?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Parse a titleType tag as spelled in the basics file
fn parse_title_type(s: &str) -> Result<TitleType> {
    match s {
        "audiobook" => Ok(TitleType::AudioBook),
        "episode" => Ok(TitleType::Episode),
        "movie" => Ok(TitleType::Movie),
        "radioSeries" => Ok(TitleType::RadioSeries),
        "short" => Ok(TitleType::Short),
        "tvEpisode" => Ok(TitleType::TvEpisode),
        "tvMiniSeries" => Ok(TitleType::TvMiniSeries),
        "tvMovie" => Ok(TitleType::TvMovie),
        "tvSeries" => Ok(TitleType::TvSeries),
        "tvShort" => Ok(TitleType::TvShort),
        "tvSpecial" => Ok(TitleType::TvSpecial),
        "video" => Ok(TitleType::Video),
        "videoGame" => Ok(TitleType::VideoGame),
        _ => Err(CatalogError::InvalidValue {
            field: "titleType".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parse a comma-separated genre list; `\N` is the empty set
fn parse_genres(s: &str) -> Result<BTreeSet<Genre>> {
    let mut genres = BTreeSet::new();
    if s == "\\N" {
        return Ok(genres);
    }
    for genre_str in s.split(',') {
        let genre = Genre::from_tag(genre_str).ok_or_else(|| CatalogError::InvalidValue {
            field: "genres".to_string(),
            value: genre_str.to_string(),
        })?;
        genres.insert(genre);
    }
    Ok(genres)
}

/// Parse one basics row into a Movie with a placeholder rating.
///
/// Returns `Ok(None)` for rows whose startYear is `\N`; titles without a
/// year cannot participate in year queries and are dropped at ingestion.
fn parse_basics_row(file: &str, line_no: usize, line: &str) -> Result<Option<Movie>> {
    let mut parts = line.split('\t');

    let id = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing tconst".to_string(),
    })?;

    let title_type = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing titleType".to_string(),
    })?;

    let title = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing primaryTitle".to_string(),
    })?;

    // originalTitle and isAdult are not part of the record model
    let _original_title = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing originalTitle".to_string(),
    })?;
    let _is_adult = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing isAdult".to_string(),
    })?;

    let start_year = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing startYear".to_string(),
    })?;

    // endYear and runtimeMinutes are not part of the record model either
    let _end_year = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing endYear".to_string(),
    })?;
    let _runtime = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing runtimeMinutes".to_string(),
    })?;

    let genres_str = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing genres".to_string(),
    })?;

    if start_year == "\\N" {
        return Ok(None);
    }

    let movie = Movie {
        id: id.to_string(),
        title: title.to_string(),
        title_type: parse_title_type(title_type)?,
        genres: parse_genres(genres_str)?,
        year: start_year.parse().map_err(|e| CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: format!("Invalid startYear: {}", e),
        })?,
        rating: Rating::unrated(id.to_string()),
    };

    Ok(Some(movie))
}

/// Parse one ratings row
fn parse_ratings_row(file: &str, line_no: usize, line: &str) -> Result<Rating> {
    let mut parts = line.split('\t');

    let id = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing tconst".to_string(),
    })?;

    let score = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing averageRating".to_string(),
    })?;

    let votes = parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: "Missing numVotes".to_string(),
    })?;

    Ok(Rating::new(
        id.to_string(),
        score.parse().map_err(|e| CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: format!("Invalid averageRating: {}", e),
        })?,
        votes.parse().map_err(|e| CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: format!("Invalid numVotes: {}", e),
        })?,
    ))
}

/// Parse the basics file into movies in file order.
///
/// Every movie carries a placeholder rating until ingestion joins the
/// ratings file in.
pub fn parse_basics(path: &Path) -> Result<Vec<Movie>> {
    let file = path.display().to_string();
    let lines = read_lines(path)?;
    let mut movies = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        if line.is_empty() {
            continue; // Skip empty lines
        }
        if line_no == 1 && line.starts_with("tconst") {
            continue; // Skip the header
        }

        if let Some(movie) = parse_basics_row(&file, line_no, line)? {
            movies.push(movie);
        }
    }

    Ok(movies)
}

/// Parse the ratings file
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    let file = path.display().to_string();
    let lines = read_lines(path)?;
    let mut ratings = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        if line.is_empty() {
            continue;
        }
        if line_no == 1 && line.starts_with("tconst") {
            continue;
        }

        ratings.push(parse_ratings_row(&file, line_no, line)?);
    }

    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_type() {
        assert_eq!(parse_title_type("movie").unwrap(), TitleType::Movie);
        assert_eq!(parse_title_type("tvSeries").unwrap(), TitleType::TvSeries);
        assert_eq!(parse_title_type("videoGame").unwrap(), TitleType::VideoGame);
        assert!(matches!(
            parse_title_type("MOVIE"),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_genres() {
        let genres = parse_genres("Crime,Drama,Sci-Fi").unwrap();
        assert_eq!(genres.len(), 3);
        assert!(genres.contains(&Genre::SciFi));

        assert!(parse_genres("\\N").unwrap().is_empty());
        assert!(matches!(
            parse_genres("Crime,Dramedy"),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_basics_row() {
        let line = "tt0111161\tmovie\tThe Shawshank Redemption\tThe Shawshank Redemption\t0\t1994\t\\N\t142\tDrama";
        let movie = parse_basics_row("basics.tsv", 2, line).unwrap().unwrap();

        assert_eq!(movie.id, "tt0111161");
        assert_eq!(movie.title, "The Shawshank Redemption");
        assert_eq!(movie.title_type, TitleType::Movie);
        assert_eq!(movie.year, 1994);
        assert!(movie.genres.contains(&Genre::Drama));
        assert_eq!(movie.rating.votes, 0);
        assert_eq!(movie.rating.id, movie.id);
    }

    #[test]
    fn test_parse_basics_row_without_year_is_skipped() {
        let line = "tt0000001\tshort\tCarmencita\tCarmencita\t0\t\\N\t\\N\t1\tDocumentary,Short";
        assert!(parse_basics_row("basics.tsv", 2, line).unwrap().is_none());
    }

    #[test]
    fn test_parse_basics_row_with_missing_fields() {
        let line = "tt0111161\tmovie\tThe Shawshank Redemption";
        assert!(matches!(
            parse_basics_row("basics.tsv", 2, line),
            Err(CatalogError::ParseError { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_ratings_row() {
        let rating = parse_ratings_row("ratings.tsv", 2, "tt0111161\t9.3\t2500000").unwrap();
        assert_eq!(rating.id, "tt0111161");
        assert_eq!(rating.score, 9.3);
        assert_eq!(rating.votes, 2_500_000);
    }

    #[test]
    fn test_parse_ratings_row_with_bad_votes() {
        assert!(matches!(
            parse_ratings_row("ratings.tsv", 3, "tt0111161\t9.3\tmany"),
            Err(CatalogError::ParseError { line: 3, .. })
        ));
    }
}
