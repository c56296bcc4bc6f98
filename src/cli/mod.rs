//! Command-line front end.
//!
//! `serve` and `init` act locally; every other command talks to a running API
//! through [`CatalogClient`](crate::clients::CatalogClient).

mod commands;

use clap::{Parser, Subcommand};

use crate::models::film::Rating;

/// Cinecat - film catalog service
#[derive(Parser)]
#[command(name = "cinecat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the catalog API (overrides `client.base_url`)
    #[arg(long, global = true, env = "CINECAT_URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    Init,

    /// Show server version, uptime and record counts
    Status,

    /// Manage films
    Film {
        #[command(subcommand)]
        command: FilmCommands,
    },

    /// Manage actors
    Actor {
        #[command(subcommand)]
        command: ActorCommands,
    },

    /// Browse categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
}

#[derive(Subcommand)]
pub enum FilmCommands {
    /// List films
    #[command(alias = "ls")]
    List {
        /// Only films whose title contains this text
        #[arg(long)]
        title: Option<String>,
    },
    /// Show a film and its cast
    Show { id: i32 },
    /// Add a film
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        length: Option<i32>,
        /// G, PG, PG-13, R or NC-17
        #[arg(long)]
        rating: Option<Rating>,
    },
    /// Delete a film
    #[command(alias = "rm")]
    Delete { id: i32 },
    /// Replace the film's cast with the given actors
    Cast {
        id: i32,
        actor_ids: Vec<i32>,
    },
}

#[derive(Subcommand)]
pub enum ActorCommands {
    /// List actors
    #[command(alias = "ls")]
    List,
    /// Show an actor and their films
    Show { id: i32 },
    /// Add an actor
    Add { first_name: String, last_name: String },
    /// Delete an actor
    #[command(alias = "rm")]
    Delete { id: i32 },
    /// Link an actor to a film
    Link { actor_id: i32, film_id: i32 },
    /// Remove the link between an actor and a film
    Unlink { actor_id: i32, film_id: i32 },
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    #[command(alias = "ls")]
    List,
    /// Show a category
    Show { id: i32 },
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_film_add() {
        let cli = Cli::try_parse_from([
            "cinecat", "film", "add", "--title", "ALIEN CENTER", "--rating", "nc-17",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Film {
                command: FilmCommands::Add { title, rating, .. },
            }) => {
                assert_eq!(title, "ALIEN CENTER");
                assert_eq!(rating, Some(Rating::Nc17));
            }
            _ => panic!("expected film add"),
        }
    }

    #[test]
    fn test_parse_global_url_and_cast() {
        let cli = Cli::try_parse_from([
            "cinecat",
            "film",
            "cast",
            "3",
            "7",
            "9",
            "--url",
            "http://catalog:9000",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("http://catalog:9000"));
        match cli.command {
            Some(Commands::Film {
                command: FilmCommands::Cast { id, actor_ids },
            }) => {
                assert_eq!(id, 3);
                assert_eq!(actor_ids, vec![7, 9]);
            }
            _ => panic!("expected film cast"),
        }
    }

    #[test]
    fn test_rejects_bad_rating() {
        assert!(
            Cli::try_parse_from(["cinecat", "film", "add", "--title", "X", "--rating", "XXX"])
                .is_err()
        );
    }
}
