//! Integration tests for the query engine.
//!
//! These drive the engine end-to-end over a hand-built catalog the way a
//! front end would, covering all query operations together.

use catalog::{Catalog, Genre, Movie, Rating, TitleType};
use queries::{QueryEngine, QueryError};

fn movie(
    id: &str,
    title: &str,
    title_type: TitleType,
    year: u16,
    genres: &[Genre],
    score: f32,
    votes: u32,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        title_type,
        genres: genres.iter().copied().collect(),
        year,
        rating: Rating::new(id.to_string(), score, votes),
    }
}

/// A two-record dataset shared by these tests: Zorro (500 votes) and
/// Amelie (2000 votes), both Drama movies from 2000.
fn create_walkthrough_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert_movie(movie(
        "t1",
        "Zorro",
        TitleType::Movie,
        2000,
        &[Genre::Drama],
        7.0,
        500,
    ));
    catalog.insert_movie(movie(
        "t2",
        "Amelie",
        TitleType::Movie,
        2000,
        &[Genre::Drama, Genre::Comedy],
        8.0,
        2000,
    ));
    catalog
}

#[test]
fn test_walkthrough_year_genre_is_alphabetical() {
    let catalog = create_walkthrough_catalog();
    let engine = QueryEngine::new(&catalog);

    let found = engine.find_by_year_and_genre("MOVIE", 2000, "Drama").unwrap();
    let titles: Vec<&str> = found.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Amelie", "Zorro"]);
}

#[test]
fn test_walkthrough_top_votes_clamps_to_two() {
    let catalog = create_walkthrough_catalog();
    let engine = QueryEngine::new(&catalog);

    let top = engine.top_by_votes(5, "MOVIE").unwrap();
    let titles: Vec<&str> = top.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Amelie", "Zorro"]);
}

#[test]
fn test_walkthrough_top_rated_applies_vote_threshold() {
    let catalog = create_walkthrough_catalog();
    let engine = QueryEngine::new(&catalog);

    let top = engine.top_rated_per_year(5, "MOVIE", 2000, 2000).unwrap();
    let titles: Vec<&str> = top[&2000].iter().map(|m| m.title.as_str()).collect();
    // Zorro's 500 votes are under the 1000-vote ranking threshold
    assert_eq!(titles, vec!["Amelie"]);
}

#[test]
fn test_every_record_is_findable_by_id() {
    let catalog = create_walkthrough_catalog();
    let engine = QueryEngine::new(&catalog);

    for record in catalog.movies() {
        let found = engine.find_by_id(&record.id).unwrap();
        assert_eq!(found, record);
    }
    assert!(engine.find_by_id("nonexistent").is_none());
}

#[test]
fn test_counts_sum_to_record_genre_pairs() {
    let catalog = create_walkthrough_catalog();
    let engine = QueryEngine::new(&catalog);

    let counts = engine.count_by_genre_per_year("MOVIE", 1999, 2001).unwrap();
    assert_eq!(counts.len(), 3);

    // Zorro contributes 1 pair, Amelie 2
    let total: u32 = counts[&2000].values().sum();
    assert_eq!(total, 3);
    assert_eq!(counts[&2000][&Genre::Drama], 2);
    assert_eq!(counts[&2000][&Genre::Comedy], 1);
    assert!(counts[&1999].is_empty());
    assert!(counts[&2001].is_empty());
}

#[test]
fn test_invalid_tags_are_rejected_by_every_filtering_query() {
    let catalog = create_walkthrough_catalog();
    let engine = QueryEngine::new(&catalog);

    assert!(matches!(
        engine.find_by_type_and_substring("NOT_A_TYPE", ""),
        Err(QueryError::InvalidType { .. })
    ));
    assert!(matches!(
        engine.find_by_year_and_genre("NOT_A_TYPE", 2000, "Drama"),
        Err(QueryError::InvalidType { .. })
    ));
    assert!(matches!(
        engine.find_by_year_and_genre("MOVIE", 2000, "NotAGenre"),
        Err(QueryError::InvalidGenre { .. })
    ));
    assert!(matches!(
        engine.count_by_genre_per_year("NOT_A_TYPE", 2000, 2001),
        Err(QueryError::InvalidType { .. })
    ));
    assert!(matches!(
        engine.top_by_votes(3, "NOT_A_TYPE"),
        Err(QueryError::InvalidType { .. })
    ));
    assert!(matches!(
        engine.top_rated_per_year(3, "NOT_A_TYPE", 2000, 2001),
        Err(QueryError::InvalidType { .. })
    ));
}

#[test]
fn test_queries_do_not_disturb_the_catalog() {
    let catalog = create_walkthrough_catalog();
    let before: Vec<Movie> = catalog.movies().to_vec();

    let engine = QueryEngine::new(&catalog);
    let _ = engine.find_by_type_and_substring("MOVIE", "o").unwrap();
    let _ = engine.find_by_year_and_genre("MOVIE", 2000, "Drama").unwrap();
    let _ = engine.count_by_genre_per_year("MOVIE", 1990, 2010).unwrap();
    let _ = engine.top_by_votes(10, "MOVIE").unwrap();
    let _ = engine.top_rated_per_year(10, "MOVIE", 1990, 2010).unwrap();

    assert_eq!(catalog.movies(), before.as_slice());
}

#[test]
fn test_engine_supports_concurrent_readers() {
    let catalog = create_walkthrough_catalog();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let engine = QueryEngine::new(&catalog);
                let top = engine.top_by_votes(5, "MOVIE").unwrap();
                assert_eq!(top.len(), 2);
                assert_eq!(engine.find_by_id("t1").unwrap().title, "Zorro");
            });
        }
    });
}
