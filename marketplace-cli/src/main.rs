use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marketplace_core::{FileStore, Marketplace, Session};
use shared_types::{ProjectCategory, ProjectFilters, UpdateProfileRequest};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

mod commands;
mod config;

use commands::{App, Role};

#[derive(Parser, Debug)]
#[command(name = "marketplace", author, version, about = "Browse the freelance marketplace from the terminal", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Session file, overriding the config
    #[arg(long, global = true, value_name = "PATH")]
    session_file: Option<PathBuf>,

    #[arg(long, global = true)]
    log_file_path: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List projects matching the given filters
    Projects {
        /// Case-insensitive match on title, description or skills
        #[arg(long, default_value = "")]
        search: String,

        /// e.g. mobile-app, ui-ux-design
        #[arg(long)]
        category: Option<ProjectCategory>,

        /// "min-max" or "min+", e.g. 25000-50000 or 250000+
        #[arg(long)]
        budget: Option<String>,

        /// Required skill; repeat to match any of several
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// Minimum client rating, e.g. 4.5+
        #[arg(long)]
        client_rating: Option<String>,

        /// Fail on malformed criteria instead of ignoring them
        #[arg(long)]
        strict: bool,
    },
    /// Featured projects shown on the home page
    Featured,
    /// Recent activity for the signed-in member
    Activity,
    /// Dashboard overview numbers
    Stats,
    /// Sign in as a seeded member
    Login {
        #[arg(long)]
        email: String,
    },
    /// Create a new member and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long = "type", value_enum)]
        role: Role,
    },
    /// Update the signed-in member's profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
    Logout,
    Whoami,
}

fn init_tracing(log_file_path: Option<String>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("marketplace.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file_path.clone());

    let (config, config_path) = match &args.config {
        Some(path) => (config::CliConfig::load_from(path)?, path.clone()),
        None => config::CliConfig::load()?,
    };
    tracing::debug!("Loaded config from {}", config_path.display());

    let session_path = args
        .session_file
        .clone()
        .unwrap_or_else(|| config.session_path());
    let store = FileStore::new(session_path);
    tracing::debug!("Using session file {}", store.path().display());

    let mut app = App {
        market: Marketplace::seeded().context("Failed to load sample data")?,
        session: Session::restore(store),
        display: config.display(),
        json: args.json,
    };

    match args.command {
        Command::Projects {
            search,
            category,
            budget,
            skills,
            client_rating,
            strict,
        } => {
            let filters = ProjectFilters {
                search,
                category,
                budget_range: budget,
                skills,
                client_rating,
            };
            commands::list_projects(&app, filters, strict)
        }
        Command::Featured => commands::featured(&app),
        Command::Activity => commands::activity(&app),
        Command::Stats => commands::stats(&app),
        Command::Login { email } => commands::login(&mut app, &email),
        Command::Register { name, email, role } => commands::register(&mut app, name, email, role),
        Command::Profile {
            name,
            email,
            avatar,
        } => commands::update_profile(
            &mut app,
            UpdateProfileRequest {
                name,
                email,
                avatar,
            },
        ),
        Command::Logout => commands::logout(&mut app),
        Command::Whoami => commands::whoami(&app),
    }
}
