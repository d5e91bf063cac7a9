//! Ordering policies for ranking records.
//!
//! `Rating`'s natural order (score, then votes, then id) lives on the type
//! itself in the catalog crate; the comparator here is the separate, simpler
//! policy used for "most voted" queries.

use catalog::Movie;
use std::cmp::Ordering;

/// Order movies by descending vote count, ties broken by ascending title.
///
/// Score is deliberately ignored; a much-voted mediocre title outranks a
/// barely-voted masterpiece under this policy.
pub fn by_votes(a: &Movie, b: &Movie) -> Ordering {
    b.rating
        .votes
        .cmp(&a.rating.votes)
        .then_with(|| a.title.cmp(&b.title))
}
