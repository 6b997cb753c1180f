//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use draft_assist::{
    cli::{Commands, DraftAssist},
    commands::{
        availability::{handle_availability, AvailabilityParams},
        board::handle_board,
        keeper::{handle_keeper, KeeperParams},
        rank::{handle_rank, RankParams},
    },
    core::availability::{DraftWindow, SigmaModel},
    Result,
};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("draft_assist=info"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
fn main() -> Result<()> {
    init_logging();
    let app = DraftAssist::parse();

    match app.command {
        Commands::Availability {
            adp,
            current_pick,
            picks_until_turn,
            sigma,
            json,
        } => {
            handle_availability(AvailabilityParams {
                adp,
                window: DraftWindow::new(current_pick, picks_until_turn),
                sigma: SigmaModel::try_from(&sigma)?,
                as_json: json,
            })?;
        }

        Commands::Keeper {
            team,
            round,
            order,
            league,
            json,
        } => {
            handle_keeper(KeeperParams {
                team,
                round,
                order,
                league: league.league,
                as_json: json,
            })?;
        }

        Commands::Board { league, json } => {
            handle_board(league.league, json)?;
        }

        Commands::Rank {
            players,
            league,
            team,
            current_pick,
            picks_until_turn,
            sigma,
            by_value,
            limit,
            json,
        } => {
            handle_rank(RankParams {
                players,
                league: league.league,
                team,
                current_pick,
                picks_until_turn,
                sigma: sigma.to_model()?,
                by_value,
                limit,
                as_json: json,
            })?;
        }
    }

    Ok(())
}
