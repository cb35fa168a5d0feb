use anyhow::Result;
use clap::Parser;
use fieldmap::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::GetTpl { fields } => fieldmap::commands::handle_get_tpl(&fields),
        Commands::Init { force } => fieldmap::commands::init_store(force),
        Commands::Validate => fieldmap::commands::validate_store(),
    }
}
