// src/main.rs

mod cli;

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;

use cinehub::application::commands::*;
use cinehub::application::dto::{CategoryPageDto, MovieCardDto, MovieDetailDto};
use cinehub::application::state::AppState;
use cinehub::config::CatalogConfig;
use cinehub::db::{create_connection_pool, get_database_path};

use cli::{Cli, Commands, FavoritesCommand};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    // 1. INFRASTRUCTURE
    let db_path = match &cli.db_path {
        Some(path) => path.clone(),
        None => get_database_path()?,
    };
    log::info!("Using database at {}", db_path.display());

    let pool = Arc::new(
        create_connection_pool(&db_path)
            .with_context(|| format!("opening {}", db_path.display()))?,
    );

    // 2. APPLICATION STATE
    let state = AppState::new(CatalogConfig::from_env(), pool)?;
    let json = cli.format == "json";

    // 3. DISPATCH
    match cli.command {
        Commands::List { category, page } => {
            let dto = list_category(&state, &category, page)
                .await
                .map_err(|e| anyhow!("{}", e))?;
            emit(json, &dto, print_page)?;
        }
        Commands::Show { movie_id } => {
            let dto = show_movie(&state, movie_id)
                .await
                .map_err(|e| anyhow!("{}", e))?;
            emit(json, &dto, print_detail)?;
        }
        Commands::Favorites { command } => match command {
            FavoritesCommand::List => {
                let cards = list_favorites(&state);
                emit(json, &cards, print_favorites)?;
            }
            FavoritesCommand::Add { movie_id } => {
                let change = add_favorite(&state, movie_id)
                    .await
                    .map_err(|e| anyhow!("{}", e))?;
                emit(json, &change, |c| {
                    let title = c.title.as_deref().unwrap_or("Movie");
                    if c.changed {
                        println!("Added {} ({}) to favorites", title, c.movie_id);
                    } else {
                        println!("{} is already a favorite", c.movie_id);
                    }
                })?;
            }
            FavoritesCommand::Remove { movie_id } => {
                let change = remove_favorite(&state, movie_id);
                emit(json, &change, |c| {
                    if c.changed {
                        let title = c.title.as_deref().unwrap_or("Movie");
                        println!("Removed {} ({}) from favorites", title, c.movie_id);
                    } else {
                        println!("{} is not a favorite", c.movie_id);
                    }
                })?;
            }
            FavoritesCommand::Clear => {
                let removed = clear_favorites(&state);
                emit(json, &removed, |n| println!("Removed {} favorites", n))?;
            }
        },
    }

    Ok(())
}

fn emit<T, F>(json: bool, value: &T, plain: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T),
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        plain(value);
    }
    Ok(())
}

fn print_card(card: &MovieCardDto) {
    let year = card
        .release_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "----".to_string());
    println!("{:>8}  {:>4}  {}  {}", card.id, card.rating_label, year, card.title);
}

fn print_page(page: &CategoryPageDto) {
    println!("{}", page.title);
    println!();
    for card in &page.movies {
        print_card(card);
    }
    println!();
    println!("{}", page.pagination);
}

fn print_detail(movie: &MovieDetailDto) {
    println!("{} ({})", movie.title, movie.release_date);
    if let Some(tagline) = &movie.tagline {
        println!("\"{}\"", tagline);
    }
    println!("Rating: {}", movie.rating);
    if !movie.genres.is_empty() {
        println!("Genres: {}", movie.genres);
    }
    if let Some(minutes) = movie.runtime_minutes {
        println!("Runtime: {} min", minutes);
    }
    println!("Favorite: {}", if movie.is_favorite { "yes" } else { "no" });
    println!();
    println!("{}", movie.overview);

    if !movie.recommendations.is_empty() {
        println!();
        println!("Recommendations");
        for card in &movie.recommendations {
            print_card(card);
        }
    }
}

fn print_favorites(cards: &Vec<MovieCardDto>) {
    if cards.is_empty() {
        println!("You have no favorite movies saved.");
        return;
    }
    for card in cards {
        print_card(card);
    }
}
