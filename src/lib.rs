pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;
use tokio::signal;

use anyhow::Context;
use clap::Parser;
use cli::{ActorCommands, CategoryCommands, Cli, Commands, FilmCommands};
use clients::CatalogClient;
pub use config::Config;
use models::film::NewFilm;
use state::SharedState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = &cli.url {
        config.client.base_url.clone_from(url);
    }
    config.validate()?;

    let prometheus_handle = if config.observability.metrics_enabled
        && matches!(cli.command, Some(Commands::Serve))
    {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let builder = PrometheusBuilder::new();
        let handle = builder
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        Some(handle)
    } else {
        None
    };

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.observability.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    if prometheus_handle.is_some() {
        info!("Prometheus metrics recorder initialized");
    }

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve => run_server(config, prometheus_handle).await,

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists.");
            }
            Ok(())
        }

        Commands::Status => {
            let client = CatalogClient::from_config(&config.client)?;
            let status = client.status().await?;
            println!("Cinecat v{} (up {}s)", status.version, status.uptime);
            println!(
                "Database: {}",
                if status.database { "ok" } else { "unreachable" }
            );
            println!(
                "Films: {} | Actors: {} | Categories: {}",
                status.films, status.actors, status.categories
            );
            Ok(())
        }

        Commands::Film { command } => {
            let client = CatalogClient::from_config(&config.client)?;
            match command {
                FilmCommands::List { title } => cli::cmd_film_list(&client, title.as_deref()).await,
                FilmCommands::Show { id } => cli::cmd_film_show(&client, id).await,
                FilmCommands::Add {
                    title,
                    description,
                    year,
                    length,
                    rating,
                } => {
                    let film = NewFilm {
                        title,
                        description,
                        release_year: year,
                        length,
                        rating,
                        ..NewFilm::default()
                    };
                    cli::cmd_film_add(&client, film).await
                }
                FilmCommands::Delete { id } => cli::cmd_film_delete(&client, id).await,
                FilmCommands::Cast { id, actor_ids } => {
                    cli::cmd_film_cast(&client, id, &actor_ids).await
                }
            }
        }

        Commands::Actor { command } => {
            let client = CatalogClient::from_config(&config.client)?;
            match command {
                ActorCommands::List => cli::cmd_actor_list(&client).await,
                ActorCommands::Show { id } => cli::cmd_actor_show(&client, id).await,
                ActorCommands::Add {
                    first_name,
                    last_name,
                } => cli::cmd_actor_add(&client, first_name, last_name).await,
                ActorCommands::Delete { id } => cli::cmd_actor_delete(&client, id).await,
                ActorCommands::Link { actor_id, film_id } => {
                    cli::cmd_actor_link(&client, actor_id, film_id).await
                }
                ActorCommands::Unlink { actor_id, film_id } => {
                    cli::cmd_actor_unlink(&client, actor_id, film_id).await
                }
            }
        }

        Commands::Category { command } => {
            let client = CatalogClient::from_config(&config.client)?;
            match command {
                CategoryCommands::List => cli::cmd_category_list(&client).await,
                CategoryCommands::Show { id } => cli::cmd_category_show(&client, id).await,
            }
        }
    }
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<metrics_exporter_prometheus::PrometheusHandle>,
) -> anyhow::Result<()> {
    info!("Cinecat v{} starting...", env!("CARGO_PKG_VERSION"));

    if !config.server.enabled {
        anyhow::bail!("Server is disabled in config ([server] enabled = false)");
    }

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);

    let shared = Arc::new(
        SharedState::new(config)
            .await
            .context("Failed to open catalog database")?,
    );
    let app = api::router(api::create_app_state(shared, prometheus_handle));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 API listening at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
