//! Cinegraph CLI — bulk-load the movie graph and run the query catalog.
//!
//! Connection parameters come from the environment (`NEO4J_URI`,
//! `NEO4J_USER`, `NEO4J_PASSWORD`, optional `NEO4J_DATABASE`); they are
//! never accepted as flags.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use cinegraph::{etl, queries, updates, GraphClient, GraphConfig};

#[derive(Parser)]
#[command(name = "cinegraph", version, about = "Movie property-graph ETL and queries")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full ETL: read, normalize and load both CSV tables
    Load {
        /// Path to the movies CSV
        movies: PathBuf,
        /// Path to the credits CSV
        credits: PathBuf,
    },
    /// Check connectivity to the store
    Ping,
    /// Top actor/director pairs by shared-movie count
    Collaborators {
        #[arg(long, default_value_t = 5)]
        limit: i64,
    },
    /// Genres with the most movies
    Genres {
        #[arg(long, default_value_t = 5)]
        limit: i64,
    },
    /// Actors with the most distinct co-star connections
    Connections {
        #[arg(long, default_value_t = 1)]
        limit: i64,
    },
    /// Movies directed by the named person, ascending by year
    ByDirector {
        /// Director name
        name: String,
    },
    /// Distinct co-stars of the named actor
    Coactors {
        /// Actor name
        name: String,
    },
    /// Movies of a genre released strictly after a year
    ByGenre {
        /// Genre name
        genre: String,

        #[arg(long, default_value_t = 2010)]
        after: i64,
    },
    /// Add an ACTED_IN edge, creating endpoints if absent
    AddActor {
        actor: String,
        movie: String,
    },
    /// Add a HAS_GENRE edge, creating endpoints if absent
    AddGenre {
        movie: String,
        genre: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinegraph=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = GraphConfig::from_env()?;
    let client = GraphClient::connect(&config).await?;

    let result = dispatch(&client, cli.command, &cli.format).await;
    client.close();
    result
}

async fn dispatch(
    client: &GraphClient,
    command: Commands,
    format: &OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Load { movies, credits } => {
            let summary = etl::run_load(client, &movies, &credits).await?;
            println!(
                "Loaded {} movies and {} relationships",
                summary.movies, summary.relationships
            );
        }
        Commands::Ping => {
            // connect() already forced a round-trip; getting here means
            // the store answered.
            println!("PONG");
        }
        Commands::Collaborators { limit } => {
            let rows = queries::most_frequent_collaborators(client, limit).await?;
            render(&rows, &["actor", "director", "collaborations"], format, |c| {
                vec![
                    c.actor.clone(),
                    c.director.clone(),
                    c.collaborations.to_string(),
                ]
            })?;
        }
        Commands::Genres { limit } => {
            let rows = queries::most_popular_genres(client, limit).await?;
            render(&rows, &["genre", "movie_count"], format, |g| {
                vec![g.genre.clone(), g.movie_count.to_string()]
            })?;
        }
        Commands::Connections { limit } => {
            let rows = queries::actors_with_most_connections(client, limit).await?;
            render(&rows, &["actor", "connections"], format, |a| {
                vec![a.actor.clone(), a.connections.to_string()]
            })?;
        }
        Commands::ByDirector { name } => {
            let rows = queries::movies_by_director(client, &name).await?;
            render(&rows, &["title", "year"], format, movie_year_cells)?;
        }
        Commands::Coactors { name } => {
            let rows = queries::coactors_of(client, &name).await?;
            render(&rows, &["coactor", "movie"], format, |c| {
                vec![c.coactor.clone(), c.movie.clone()]
            })?;
        }
        Commands::ByGenre { genre, after } => {
            let rows = queries::movies_by_genre_after(client, &genre, after).await?;
            render(&rows, &["title", "year"], format, movie_year_cells)?;
        }
        Commands::AddActor { actor, movie } => {
            let confirmation = updates::add_actor_to_movie(client, &actor, &movie).await?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&confirmation)?);
                }
                OutputFormat::Table => println!(
                    "Merged ({})-[:ACTED_IN]->({})",
                    confirmation.actor, confirmation.movie
                ),
            }
        }
        Commands::AddGenre { movie, genre } => {
            let confirmation = updates::add_genre_to_movie(client, &movie, &genre).await?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&confirmation)?);
                }
                OutputFormat::Table => println!(
                    "Merged ({})-[:HAS_GENRE]->({})",
                    confirmation.movie, confirmation.genre
                ),
            }
        }
    }

    Ok(())
}

fn movie_year_cells(m: &queries::MovieYear) -> Vec<String> {
    vec![m.title.clone(), m.year.to_string()]
}

fn render<T: Serialize>(
    items: &[T],
    headers: &[&str],
    format: &OutputFormat,
    to_cells: impl Fn(&T) -> Vec<String>,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
        OutputFormat::Table => {
            if items.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(headers.to_vec());

            for item in items {
                table.add_row(to_cells(item));
            }

            println!("{table}");
            println!("{} row(s)", items.len());
        }
    }

    Ok(())
}
