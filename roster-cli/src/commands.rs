use clap::Subcommand;
use log::info;
use roster_state::{ControllerResult, ListController};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the list, fetching it on first run
    List,

    /// Replace the list with a fresh page of users
    Refresh,

    /// Fetch one user and add it to the top of the list
    Add,

    /// Remove a user by id
    Remove {
        /// Id of the user to remove
        id: String,
    },
}

/// Runs one command against a booted controller.
pub async fn execute(controller: &ListController, command: &Commands) -> ControllerResult<()> {
    match command {
        Commands::List => Ok(()),
        Commands::Refresh => controller.refresh().await.map(|_| ()),
        Commands::Add => controller.add_one().await.map(|_| ()),
        Commands::Remove { id } => {
            if !controller.remove_by_id(id) {
                info!("No user with id {id}; list unchanged");
            }
            Ok(())
        }
    }
}
