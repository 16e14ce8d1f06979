//! Pet lifecycle commands for CLI.

use clap::Subcommand;

use activegotchi_core::{AvatarKind, PetMode};

use crate::common;

#[derive(Subcommand)]
pub enum PetAction {
    /// Create a new pet (onboarding)
    Create {
        /// Pet name
        name: String,
        /// Survival mode: mortal or immortal (default: mortal)
        #[arg(long, default_value = "mortal")]
        mode: String,
        /// Avatar family: fox, dog, cat, frog, blob or element
        #[arg(long)]
        avatar: Option<String>,
        /// Primary avatar color, e.g. "#ffb347"
        #[arg(long)]
        color: Option<String>,
    },
    /// Show the current pet
    Status,
    /// Evaluate yesterday's outcome (life decrement for mortal pets)
    Check,
    /// Immediately end the pet (debug)
    Kill,
    /// Destroy the pet and its progress history
    Reset {
        /// Seed demo history instead of starting empty
        #[arg(long)]
        demo: bool,
    },
}

pub fn run(action: PetAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = common::open_app()?;

    match action {
        PetAction::Create {
            name,
            mode,
            avatar,
            color,
        } => {
            if app.pet().is_some() {
                return Err("a pet already exists; run `pet reset` first".into());
            }
            let mode = match mode.as_str() {
                "immortal" => PetMode::Immortal,
                _ => PetMode::Mortal,
            };
            let avatar_kind = avatar.as_deref().map(|a| match a {
                "dog" => AvatarKind::Dog,
                "cat" => AvatarKind::Cat,
                "frog" => AvatarKind::Frog,
                "blob" => AvatarKind::Blob,
                "element" => AvatarKind::Element,
                _ => AvatarKind::Fox,
            });
            let pet = app.create_pet(name, mode, avatar_kind, color);
            println!("Pet created: {}", pet.name);
            common::print_json(&pet)?;
        }
        PetAction::Status => match app.pet() {
            Some(pet) => common::print_json(pet)?,
            None => println!("No pet yet; run `pet create <name>`"),
        },
        PetAction::Check => {
            let outcome = app.check_daily_outcome();
            common::print_json(&outcome)?;
        }
        PetAction::Kill => {
            app.kill_pet();
            println!("Pet killed");
        }
        PetAction::Reset { demo } => {
            let mode = common::reset_mode(demo)?;
            app.reset_pet(mode);
            println!("Pet and progress history reset");
        }
    }
    Ok(())
}
