use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "activegotchi-cli", version, about = "ActiveGotchi CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pet onboarding and lifecycle
    Pet {
        #[command(subcommand)]
        action: commands::pet::PetAction,
    },
    /// Daily progress, streaks, and the weekly view
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Achievement catalog and notifications
    Achievements {
        #[command(subcommand)]
        action: commands::achievements::AchievementsAction,
    },
    /// Tracked interactions feeding the achievement stats
    Track {
        #[command(subcommand)]
        action: commands::track::TrackAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Pet { action } => commands::pet::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Achievements { action } => commands::achievements::run(action),
        Commands::Track { action } => commands::track::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
