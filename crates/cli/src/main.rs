use anyhow::{Context, Result};
use catalog::{Catalog, Movie};
use clap::{Parser, Subcommand};
use colored::Colorize;
use queries::QueryEngine;
use std::path::PathBuf;
use std::time::Instant;

/// title-stats - analytical queries over an IMDb title catalog
#[derive(Parser)]
#[command(name = "title-stats")]
#[command(about = "Filter, group, and rank an in-memory IMDb title catalog", long_about = None)]
struct Cli {
    /// Path to the title basics TSV file
    #[arg(long, default_value = "data/title.basics.tsv")]
    basics: PathBuf,

    /// Path to the title ratings TSV file
    #[arg(long, default_value = "data/title.ratings.tsv")]
    ratings: PathBuf,

    /// Emit results as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find titles of a type containing words (case-sensitive substring)
    Search {
        /// Title type tag, e.g. MOVIE or TV_SERIES
        #[arg(long = "type")]
        title_type: String,

        /// Words the title must contain
        #[arg(long, default_value = "")]
        words: String,
    },

    /// Look up a single title by its tconst id
    Lookup {
        /// The tconst id, e.g. tt0111161
        #[arg(long)]
        id: String,
    },

    /// Find titles of a type from one year carrying a genre
    YearGenre {
        #[arg(long = "type")]
        title_type: String,

        #[arg(long)]
        year: u16,

        /// Genre tag, e.g. Drama or Sci-Fi
        #[arg(long)]
        genre: String,
    },

    /// Count titles of a type per genre for each year in a range
    GenreCounts {
        #[arg(long = "type")]
        title_type: String,

        #[arg(long)]
        start: u16,

        #[arg(long)]
        end: u16,
    },

    /// The most-voted titles of a type
    TopVotes {
        #[arg(long, default_value = "10")]
        count: usize,

        #[arg(long = "type")]
        title_type: String,
    },

    /// The top-rated titles of a type for each year in a range
    TopRated {
        #[arg(long, default_value = "10")]
        count: usize,

        #[arg(long = "type")]
        title_type: String,

        #[arg(long)]
        start: u16,

        #[arg(long)]
        end: u16,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog once up front (this may take a moment)
    let start = Instant::now();
    let catalog = Catalog::load_from_files(&cli.basics, &cli.ratings)
        .context("Failed to load title catalog")?;
    if !cli.json {
        println!(
            "{} Loaded {} titles in {:?}",
            "✓".green(),
            catalog.len(),
            start.elapsed()
        );
    }

    let engine = QueryEngine::new(&catalog);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Search { title_type, words } => {
            handle_search(&engine, &title_type, &words, cli.json)?
        }
        Commands::Lookup { id } => handle_lookup(&engine, &id, cli.json)?,
        Commands::YearGenre {
            title_type,
            year,
            genre,
        } => handle_year_genre(&engine, &title_type, year, &genre, cli.json)?,
        Commands::GenreCounts {
            title_type,
            start,
            end,
        } => handle_genre_counts(&engine, &title_type, start, end, cli.json)?,
        Commands::TopVotes { count, title_type } => {
            handle_top_votes(&engine, count, &title_type, cli.json)?
        }
        Commands::TopRated {
            count,
            title_type,
            start,
            end,
        } => handle_top_rated(&engine, count, &title_type, start, end, cli.json)?,
    }

    Ok(())
}

/// Handle the 'search' command
fn handle_search(engine: &QueryEngine, title_type: &str, words: &str, json: bool) -> Result<()> {
    let found = engine.find_by_type_and_substring(title_type, words)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("{} {} titles containing '{}':", found.len(), title_type, words)
            .bold()
            .blue()
    );
    for movie in found {
        print_movie(movie);
    }
    Ok(())
}

/// Handle the 'lookup' command
fn handle_lookup(engine: &QueryEngine, id: &str, json: bool) -> Result<()> {
    match engine.find_by_id(id) {
        Some(movie) if json => println!("{}", serde_json::to_string_pretty(movie)?),
        Some(movie) => print_movie(movie),
        // absence is a normal result; report it without failing
        None if json => println!("null"),
        None => println!("{}", format!("No title with id {}", id).yellow()),
    }
    Ok(())
}

/// Handle the 'year-genre' command
fn handle_year_genre(
    engine: &QueryEngine,
    title_type: &str,
    year: u16,
    genre: &str,
    json: bool,
) -> Result<()> {
    let found = engine.find_by_year_and_genre(title_type, year, genre)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("{} {} {} titles from {}:", found.len(), genre, title_type, year)
            .bold()
            .blue()
    );
    for movie in found {
        print_movie(movie);
    }
    Ok(())
}

/// Handle the 'genre-counts' command
fn handle_genre_counts(
    engine: &QueryEngine,
    title_type: &str,
    start: u16,
    end: u16,
    json: bool,
) -> Result<()> {
    let counts = engine.count_by_genre_per_year(title_type, start, end)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("{} titles per genre, {}-{}:", title_type, start, end)
            .bold()
            .blue()
    );
    for (year, per_genre) in counts {
        println!("{}", year.to_string().green());
        for (genre, count) in per_genre {
            println!("  {:<12} {}", genre.as_tag(), count);
        }
    }
    Ok(())
}

/// Handle the 'top-votes' command
fn handle_top_votes(engine: &QueryEngine, count: usize, title_type: &str, json: bool) -> Result<()> {
    let top = engine.top_by_votes(count, title_type)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&top)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Top {} {} titles by votes:", top.len(), title_type)
            .bold()
            .blue()
    );
    for (rank, movie) in top.iter().enumerate() {
        print!("{:>3}. ", (rank + 1).to_string().green());
        print_movie(movie);
    }
    Ok(())
}

/// Handle the 'top-rated' command
fn handle_top_rated(
    engine: &QueryEngine,
    count: usize,
    title_type: &str,
    start: u16,
    end: u16,
    json: bool,
) -> Result<()> {
    let top = engine.top_rated_per_year(count, title_type, start, end)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&top)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Top {} rated {} titles per year, {}-{}:", count, title_type, start, end)
            .bold()
            .blue()
    );
    for (year, ranked) in top {
        println!("{}", year.to_string().green());
        if ranked.is_empty() {
            println!("  (no eligible titles)");
        }
        for movie in ranked {
            print!("  ");
            print_movie(movie);
        }
    }
    Ok(())
}

/// Print one title on a single line
fn print_movie(movie: &Movie) {
    let genres = movie
        .genres
        .iter()
        .map(|g| g.as_tag())
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "{} {} ({}) [{}] {:.1} from {} votes",
        movie.id.cyan(),
        movie.title,
        movie.year,
        genres,
        movie.rating.score,
        movie.rating.votes
    );
}
