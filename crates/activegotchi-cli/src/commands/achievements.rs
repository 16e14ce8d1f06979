//! Achievement catalog and notification commands for CLI.

use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// List the catalog with unlock state
    List {
        /// Only show unlocked achievements
        #[arg(long)]
        unlocked: bool,
    },
    /// Show cumulative statistics
    Stats,
    /// Show notifications not yet marked seen
    Notifications,
    /// Mark all pending notifications as seen
    Seen,
}

pub fn run(action: AchievementsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = common::open_app()?;

    match action {
        AchievementsAction::List { unlocked } => {
            let filtered: Vec<_> = app
                .achievements()
                .iter()
                .filter(|a| !unlocked || a.unlocked)
                .collect();
            common::print_json(&filtered)?;
        }
        AchievementsAction::Stats => {
            common::print_json(app.stats())?;
        }
        AchievementsAction::Notifications => {
            common::print_json(&app.unseen_notifications())?;
        }
        AchievementsAction::Seen => {
            let count = app.unseen_notifications().len();
            app.mark_notifications_seen();
            println!("Marked {count} notification(s) seen");
        }
    }
    Ok(())
}
