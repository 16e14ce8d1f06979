//! Interaction tracking commands for CLI.

use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum TrackAction {
    /// Record one pet tap
    Tap,
    /// Record one pirouette
    Pirouette,
    /// Fold a day's totals into the cumulative statistics
    Daily {
        /// Step count
        steps: u32,
        /// Distance in kilometers
        distance: f64,
        /// Whether both daily goals were reached
        #[arg(long)]
        goal_achieved: bool,
    },
    /// Grade the daily-condition achievements against a raw reading
    DailyCheck {
        /// Step count
        steps: u32,
        /// Distance in kilometers
        distance: f64,
    },
}

pub fn run(action: TrackAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = common::open_app()?;

    let unlocked = match action {
        TrackAction::Tap => app.track_pet_tap(),
        TrackAction::Pirouette => app.track_pirouette(),
        TrackAction::Daily {
            steps,
            distance,
            goal_achieved,
        } => app.track_daily_progress(steps, distance, goal_achieved),
        TrackAction::DailyCheck { steps, distance } => {
            app.check_daily_achievements(steps, distance)
        }
    };

    if unlocked.is_empty() {
        println!("No new achievements");
    } else {
        println!("Unlocked:");
        common::print_json(&unlocked)?;
    }
    Ok(())
}
