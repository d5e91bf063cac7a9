//! Core domain types for the IMDb title catalog.
//!
//! This module defines the data structures the rest of the system queries:
//! - Type alias for the opaque tconst identifier (TitleId)
//! - Closed enums for title types and genres
//! - Immutable Rating and Movie values with their orderings
//! - The Catalog, an in-memory record list plus id index

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a title (the tconst string, e.g. "tt0111161")
pub type TitleId = String;

// =============================================================================
// Closed Enumerations
// =============================================================================

/// The category of a title record.
///
/// Closed set: query parameters naming a type outside this set are rejected
/// at the boundary rather than silently matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleType {
    AudioBook,
    Episode,
    Movie,
    RadioSeries,
    Short,
    TvEpisode,
    TvMiniSeries,
    TvMovie,
    TvSeries,
    TvShort,
    TvSpecial,
    Video,
    VideoGame,
}

impl TitleType {
    /// Parse a boundary tag such as `"MOVIE"` or `"TV_SERIES"`.
    ///
    /// Returns `None` for tags outside the closed set; callers decide how to
    /// surface that (the query layer turns it into an invalid-type error).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AUDIO_BOOK" => Some(Self::AudioBook),
            "EPISODE" => Some(Self::Episode),
            "MOVIE" => Some(Self::Movie),
            "RADIO_SERIES" => Some(Self::RadioSeries),
            "SHORT" => Some(Self::Short),
            "TV_EPISODE" => Some(Self::TvEpisode),
            "TV_MINI_SERIES" => Some(Self::TvMiniSeries),
            "TV_MOVIE" => Some(Self::TvMovie),
            "TV_SERIES" => Some(Self::TvSeries),
            "TV_SHORT" => Some(Self::TvShort),
            "TV_SPECIAL" => Some(Self::TvSpecial),
            "VIDEO" => Some(Self::Video),
            "VIDEO_GAME" => Some(Self::VideoGame),
            _ => None,
        }
    }

    /// The boundary tag for this title type
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::AudioBook => "AUDIO_BOOK",
            Self::Episode => "EPISODE",
            Self::Movie => "MOVIE",
            Self::RadioSeries => "RADIO_SERIES",
            Self::Short => "SHORT",
            Self::TvEpisode => "TV_EPISODE",
            Self::TvMiniSeries => "TV_MINI_SERIES",
            Self::TvMovie => "TV_MOVIE",
            Self::TvSeries => "TV_SERIES",
            Self::TvShort => "TV_SHORT",
            Self::TvSpecial => "TV_SPECIAL",
            Self::Video => "VIDEO",
            Self::VideoGame => "VIDEO_GAME",
        }
    }
}

/// Title genres from the IMDb vocabulary.
///
/// Variants are declared in tag-alphabetical order, so the derived `Ord`
/// enumerates genres the same way the data files spell them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    FilmNoir,
    GameShow,
    History,
    Horror,
    Music,
    Musical,
    Mystery,
    News,
    RealityTv,
    Romance,
    SciFi,
    Short,
    Sport,
    TalkShow,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// Parse a genre tag as it appears in the data files and at the query
    /// boundary (`"Sci-Fi"`, `"Film-Noir"`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Action" => Some(Self::Action),
            "Adventure" => Some(Self::Adventure),
            "Animation" => Some(Self::Animation),
            "Biography" => Some(Self::Biography),
            "Comedy" => Some(Self::Comedy),
            "Crime" => Some(Self::Crime),
            "Documentary" => Some(Self::Documentary),
            "Drama" => Some(Self::Drama),
            "Family" => Some(Self::Family),
            "Fantasy" => Some(Self::Fantasy),
            "Film-Noir" => Some(Self::FilmNoir),
            "Game-Show" => Some(Self::GameShow),
            "History" => Some(Self::History),
            "Horror" => Some(Self::Horror),
            "Music" => Some(Self::Music),
            "Musical" => Some(Self::Musical),
            "Mystery" => Some(Self::Mystery),
            "News" => Some(Self::News),
            "Reality-TV" => Some(Self::RealityTv),
            "Romance" => Some(Self::Romance),
            "Sci-Fi" => Some(Self::SciFi),
            "Short" => Some(Self::Short),
            "Sport" => Some(Self::Sport),
            "Talk-Show" => Some(Self::TalkShow),
            "Thriller" => Some(Self::Thriller),
            "War" => Some(Self::War),
            "Western" => Some(Self::Western),
            _ => None,
        }
    }

    /// The data-file tag for this genre
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Animation => "Animation",
            Self::Biography => "Biography",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Documentary => "Documentary",
            Self::Drama => "Drama",
            Self::Family => "Family",
            Self::Fantasy => "Fantasy",
            Self::FilmNoir => "Film-Noir",
            Self::GameShow => "Game-Show",
            Self::History => "History",
            Self::Horror => "Horror",
            Self::Music => "Music",
            Self::Musical => "Musical",
            Self::Mystery => "Mystery",
            Self::News => "News",
            Self::RealityTv => "Reality-TV",
            Self::Romance => "Romance",
            Self::SciFi => "Sci-Fi",
            Self::Short => "Short",
            Self::Sport => "Sport",
            Self::TalkShow => "Talk-Show",
            Self::Thriller => "Thriller",
            Self::War => "War",
            Self::Western => "Western",
        }
    }
}

// =============================================================================
// Rating
// =============================================================================

/// The vote-weighted score attached to a title.
///
/// Immutable once constructed. The natural order is the one used wherever
/// "top rated" ranking is required: descending score, then descending vote
/// count, then ascending id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Id of the owning title (matches `Movie::id`)
    pub id: TitleId,
    /// Score between 0.0 and 10.0
    pub score: f32,
    /// Total number of votes received
    pub votes: u32,
}

impl Rating {
    /// Create a rating for a title.
    pub fn new(id: TitleId, score: f32, votes: u32) -> Self {
        Self { id, score, votes }
    }

    /// The zero rating attached to titles that have no ratings row.
    ///
    /// Zero votes can never clear the minimum-votes ranking threshold, so
    /// unrated titles are invisible to top-rated queries.
    pub fn unrated(id: TitleId) -> Self {
        Self {
            id,
            score: 0.0,
            votes: 0,
        }
    }
}

// Scores are parsed from finite decimal text, never NaN, so the derived
// field-wise equality is a real equivalence and consistent with `cmp`.
impl Eq for Rating {}

impl Ord for Rating {
    /// Descending score, then descending votes, then ascending id.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.votes.cmp(&self.votes))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A single title record.
///
/// Immutable once constructed. Invariant: `rating.id == id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: TitleId,
    pub title: String,
    pub title_type: TitleType,
    /// Genre tags; absence of genres is the empty set
    pub genres: BTreeSet<Genre>,
    /// Release year (titles without one are dropped at ingestion)
    pub year: u16,
    pub rating: Rating,
}

impl Ord for Movie {
    /// Natural order: ascending title, then year, then id.
    ///
    /// The id keeps the order total for titles that collide (remakes,
    /// same-name episodes).
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.year.cmp(&other.year))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// Catalog - The In-Memory Record Store
// =============================================================================

/// The full record list plus the id index, built once at load time.
///
/// Records keep their ingestion (file) order, which is externally observable
/// through substring search results. The index maps each tconst to its
/// position for expected O(1) lookup. Nothing here is mutated after loading,
/// so any number of readers can share a `Catalog` without coordination.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) by_id: HashMap<TitleId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// All records in ingestion order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a record by its tconst id.
    ///
    /// Absence is a normal outcome, not an error.
    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.by_id.get(id).map(|&pos| &self.movies[pos])
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Append a record and index it by id.
    ///
    /// Used during loading; a duplicate id leaves a stale list entry behind,
    /// which `validate` reports.
    pub fn insert_movie(&mut self, movie: Movie) {
        let pos = self.movies.len();
        self.by_id.insert(movie.id.clone(), pos);
        self.movies.push(movie);
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
