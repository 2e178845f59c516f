// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cinehub")]
#[command(about = "Browse the movie catalog and keep a list of favorites", long_about = None)]
#[command(version)]
pub struct Cli {
    /// SQLite file holding favorites (defaults to the user data directory)
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,

    #[arg(long, value_parser = ["plain", "json"], default_value = "plain", global = true)]
    pub format: String,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// One page of a category: popular, top-rated, now-playing, upcoming
    List {
        category: String,

        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Movie details with recommendations
    Show { movie_id: i64 },

    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
}

#[derive(Subcommand)]
pub enum FavoritesCommand {
    List,
    Add { movie_id: i64 },
    Remove { movie_id: i64 },
    Clear,
}
