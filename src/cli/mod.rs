pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "honeymanga")]
#[command(about = "Browse the HoneyManga catalogue from the terminal", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/honeymanga/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the most liked titles
    Popular {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// List recently updated titles
    Latest {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Search titles by name (at least 3 characters)
    Search {
        query: String,
    },
    /// Show details of a title
    Details {
        manga_id: String,
    },
    /// List chapters of a title, newest first
    Chapters {
        manga_id: String,
    },
    /// List page image URLs of a chapter
    Pages {
        chapter_id: String,
    },
}
