use clap::{Parser, Subcommand};
use igitt::commands::*;
use igitt::core::{error::Result, print_error};
use std::env;

#[derive(Parser)]
#[command(name = "igitt")]
#[command(about = "An interactive Git client for the command line")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone a repository into a new directory (cln alias)
    #[command(visible_alias = "cln")]
    Clone {
        /// Repository URL
        repository: String,
    },
    /// Create an empty Git repository or reinitialize an existing one
    Init,
    /// Fetch from and integrate with another repository or a local branch
    Pull,
    /// Update remote refs along with associated objects
    Push,
    /// Record changes to the repository (cmt alias)
    #[command(visible_alias = "cmt")]
    Commit {
        /// Commit message
        message: String,
    },
    /// Add file contents to the index (a, + aliases)
    #[command(visible_aliases = ["a", "+"])]
    Add {
        /// Paths to add; everything when omitted
        pathspecs: Vec<String>,
    },
    /// Show changed files (s alias)
    #[command(visible_alias = "s")]
    Status,
    /// Enter interactive mode (i alias, the default)
    #[command(visible_alias = "i")]
    Interactive,
    /// Create a script to use igt as an alias for igitt
    #[command(visible_alias = "igt")]
    Mkalias,
    /// Show where the configuration file lives
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Clone { repository } => execute_clone(repository),
        Commands::Init => execute_init(),
        Commands::Pull => execute_pull(),
        Commands::Push => execute_push(),
        Commands::Commit { message } => execute_commit(message),
        Commands::Add { pathspecs } => execute_add(pathspecs),
        Commands::Status => execute_status(),
        Commands::Interactive => execute_interactive(),
        Commands::Mkalias => execute_mkalias(),
        Commands::Config => execute_config(),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
