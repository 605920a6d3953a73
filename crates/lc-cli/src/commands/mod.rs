pub mod changelog;
pub mod check;
pub mod export;
pub mod schema;
pub mod validate;

use crate::bootstrap;
use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Schema(args) => schema::handle(args, flags),
        Commands::Changelog => changelog::handle(flags),
        Commands::Export => export::handle(&bootstrap::load_config(flags)?, flags),
        Commands::Check => check::handle(&bootstrap::load_config(flags)?, flags),
        Commands::Validate => validate::handle(&bootstrap::load_config(flags)?, flags),
    }
}

/// Content revision string for the current literals.
pub fn revision_string() -> Option<String> {
    lc_content::current_revision().map(|revision| revision.version.to_string())
}
