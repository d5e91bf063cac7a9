//! Benchmarks for the query operations
//!
//! Run with: cargo bench --package queries
//!
//! Uses a synthetic catalog so the bench needs no data files on disk.

use catalog::{Catalog, Genre, Movie, Rating, TitleType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use queries::QueryEngine;

const GENRES: [Genre; 5] = [
    Genre::Action,
    Genre::Comedy,
    Genre::Crime,
    Genre::Drama,
    Genre::SciFi,
];

fn build_synthetic_catalog(size: u32) -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..size {
        let id = format!("tt{:07}", i);
        let title_type = if i % 4 == 0 {
            TitleType::TvSeries
        } else {
            TitleType::Movie
        };
        catalog.insert_movie(Movie {
            id: id.clone(),
            title: format!("Synthetic Title {}", i),
            title_type,
            genres: [
                GENRES[(i % 5) as usize],
                GENRES[(i % 3) as usize],
            ]
            .into_iter()
            .collect(),
            year: 1950 + (i % 75) as u16,
            rating: Rating::new(id, (i % 100) as f32 / 10.0, i % 50_000),
        });
    }
    catalog
}

fn bench_substring_search(c: &mut Criterion) {
    let catalog = build_synthetic_catalog(50_000);
    let engine = QueryEngine::new(&catalog);

    c.bench_function("find_by_type_and_substring", |b| {
        b.iter(|| {
            let found = engine
                .find_by_type_and_substring(black_box("MOVIE"), black_box("Title 4"))
                .unwrap();
            black_box(found)
        })
    });
}

fn bench_genre_counts(c: &mut Criterion) {
    let catalog = build_synthetic_catalog(50_000);
    let engine = QueryEngine::new(&catalog);

    c.bench_function("count_by_genre_per_year", |b| {
        b.iter(|| {
            let counts = engine
                .count_by_genre_per_year(black_box("MOVIE"), black_box(1960), black_box(2020))
                .unwrap();
            black_box(counts)
        })
    });
}

fn bench_top_rated_per_year(c: &mut Criterion) {
    let catalog = build_synthetic_catalog(50_000);
    let engine = QueryEngine::new(&catalog);

    c.bench_function("top_rated_per_year", |b| {
        b.iter(|| {
            let top = engine
                .top_rated_per_year(black_box(10), black_box("MOVIE"), black_box(1960), black_box(2020))
                .unwrap();
            black_box(top)
        })
    });
}

criterion_group!(
    benches,
    bench_substring_search,
    bench_genre_counts,
    bench_top_rated_per_year
);
criterion_main!(benches);
