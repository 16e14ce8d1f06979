//! Daily progress and streak commands for CLI.

use clap::Subcommand;

use activegotchi_core::{DayProgressUpdate, HealthSnapshot};

use crate::common;

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Show today's record
    Today,
    /// Show this week's Monday-to-Sunday view
    Week,
    /// Show current and longest streaks
    Streak,
    /// Fold a health reading into today's record
    Sync {
        /// Step count
        steps: u32,
        /// Distance in kilometers
        distance: f64,
        /// Last night's sleep in hours
        #[arg(long)]
        sleep: Option<f64>,
    },
    /// Merge a partial update onto the record for a date
    Update {
        /// Date, yyyy-MM-dd
        date: String,
        /// Step count
        #[arg(long)]
        steps: Option<u32>,
        /// Distance in kilometers
        #[arg(long)]
        distance: Option<f64>,
        /// Averaged progress percentage (0-100)
        #[arg(long)]
        progress: Option<u8>,
        /// Whether both daily goals were reached
        #[arg(long)]
        goals_reached: Option<bool>,
    },
    /// Drop the progress history
    Reset {
        /// Seed demo history instead of starting empty
        #[arg(long)]
        demo: bool,
    },
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = common::open_app()?;

    match action {
        ProgressAction::Today => {
            common::print_json(&app.today_progress())?;
        }
        ProgressAction::Week => {
            let week = app.current_week();
            println!("Week {} ({}% complete)", week.week_number, week.completion_percent());
            common::print_json(&week)?;
        }
        ProgressAction::Streak => {
            let streaks = app.streaks();
            println!("{}", app.motivational_message());
            common::print_json(&streaks)?;
        }
        ProgressAction::Sync {
            steps,
            distance,
            sleep,
        } => {
            let snapshot = HealthSnapshot {
                steps,
                distance_km: distance,
                sleep_hours: sleep,
            };
            let day = app.sync_today(&snapshot);
            let mood = app.observe_mood(&snapshot);
            app.track_daily_progress(steps, distance, day.goals_reached);
            app.check_daily_achievements(steps, distance);
            println!("Mood: {mood:?}");
            common::print_json(&day)?;
        }
        ProgressAction::Update {
            date,
            steps,
            distance,
            progress,
            goals_reached,
        } => {
            let date = common::parse_date(&date)?;
            let update = DayProgressUpdate {
                steps,
                distance,
                progress,
                goals_reached,
            };
            let day = app.update_day_progress(date, &update);
            common::print_json(&day)?;
        }
        ProgressAction::Reset { demo } => {
            let mode = common::reset_mode(demo)?;
            app.reset_progress(mode);
            println!("Progress history reset");
        }
    }
    Ok(())
}
