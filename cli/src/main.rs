#![deny(missing_docs)]

//! # ngscaffold CLI
//!
//! Command Line Interface for scaffolding NgRx artifacts into an Angular project.
//!
//! Supported Commands:
//! - `action`: Generates an actions file.
//! - `reducer`: Generates a reducer, optionally registered in a module and a state file.
//! - `effect`: Generates an effects class, optionally registered in a module.
//! - `entity`: Generates an entity model, actions and reducer, wired like `reducer`.
//! - `store`: Generates a state file and registers the root or feature store.

use clap::{Parser, Subcommand};
use ngscaffold_core::AppResult;
use tracing_subscriber::EnvFilter;

use crate::common::ProjectArgs;

mod action;
mod common;
mod effect;
mod entity;
mod reducer;
mod store;

#[derive(Parser, Debug)]
#[clap(author, version, about = "NgRx scaffolding CLI")]
struct Cli {
    #[clap(flatten)]
    project: ProjectArgs,

    /// Enable debug logging (`RUST_LOG` takes precedence).
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an actions file.
    Action(action::ActionArgs),
    /// Generate a reducer.
    Reducer(reducer::ReducerArgs),
    /// Generate an effects class.
    Effect(effect::EffectArgs),
    /// Generate an entity model, actions and reducer.
    Entity(entity::EntityArgs),
    /// Generate a state file and register the store.
    Store(store::StoreArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Action(args) => action::execute(&cli.project, args)?,
        Commands::Reducer(args) => reducer::execute(&cli.project, args)?,
        Commands::Effect(args) => effect::execute(&cli.project, args)?,
        Commands::Entity(args) => entity::execute(&cli.project, args)?,
        Commands::Store(args) => store::execute(&cli.project, args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_store_command() {
        let cli = Cli::parse_from([
            "ngscaffold",
            "store",
            "app",
            "--root",
            "--module",
            "app",
            "--dry-run",
        ]);
        assert!(cli.project.dry_run);
        match cli.command {
            Commands::Store(args) => {
                assert!(args.root);
                assert_eq!(args.module.as_deref(), Some("app"));
                assert_eq!(args.state_interface, "State");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_entity_command_with_no_flags() {
        let cli = Cli::parse_from([
            "ngscaffold",
            "entity",
            "user",
            "--no-flat",
            "--no-group",
            "--reducers",
            "reducers/index.ts",
        ]);
        match cli.command {
            Commands::Entity(args) => {
                assert!(args.artifact.no_flat);
                assert!(args.artifact.no_group);
                assert_eq!(args.reducers, Some(std::path::PathBuf::from("reducers/index.ts")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
