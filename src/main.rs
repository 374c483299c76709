use clap::{Parser, Subcommand};
use git_picker::commands::*;
use git_picker::core::{error::Result, print_error};
use std::env;

#[derive(Parser)]
#[command(name = "git-picker")]
#[command(about = "Interactive fuzzy picker for git commits, branches and reflog entries")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a commit from the log and apply a git action to it
    #[command(alias = "l")]
    Log,
    /// Pick a branch and apply a git action to it
    #[command(alias = "br")]
    Branch,
    /// Pick a reflog entry and apply a git action to it
    #[command(alias = "rl")]
    Reflog,
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

    let result = match cli.command {
        Commands::Log => execute_log(),
        Commands::Branch => execute_branch(),
        Commands::Reflog => execute_reflog(),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
