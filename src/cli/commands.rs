//! Command dispatch: one handler per subcommand

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, IoResultExt, MenuSession};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{Key, OrderedTree};

pub fn execute(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Menu) => cmd_menu(cli),
        Some(Commands::Sort { keys }) => cmd_sort(cli, keys),
        Some(Commands::Levels { keys }) => cmd_levels(cli, keys),
        Some(Commands::Show { keys }) => cmd_show(keys),
        Some(Commands::Query {
            keys,
            find,
            remove,
            strict,
        }) => cmd_query(cli, keys, find, remove, *strict),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            cmd_completion(*shell);
            Ok(())
        }
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn join_keys(keys: &[Key], separator: &str) -> String {
    keys.iter()
        .map(Key::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[instrument(skip(cli))]
fn cmd_menu(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let stdin = io::stdin();
    let mut session = MenuSession::new(settings, stdin.lock(), io::stdout());
    session.run()?;
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_sort(cli: &Cli, keys: &[Key]) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let tree: OrderedTree = keys.iter().copied().collect();
    output::info(&join_keys(&tree.in_order(), &settings.separator));
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_levels(cli: &Cli, keys: &[Key]) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let tree: OrderedTree = keys.iter().copied().collect();
    output::info(&join_keys(&tree.level_order(), &settings.separator));
    Ok(())
}

#[instrument]
fn cmd_show(keys: &[Key]) -> CliResult<()> {
    let tree: OrderedTree = keys.iter().copied().collect();
    output::info(&tree.render());
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_query(
    cli: &Cli,
    keys: &[Key],
    find: &[Key],
    remove: &[Key],
    strict: bool,
) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let mut tree: OrderedTree = keys.iter().copied().collect();

    for &key in remove {
        if strict {
            tree.try_remove(key).map_err(ApplicationError::from)?;
            output::success(&format!("removed {}", key));
        } else if tree.remove(key) {
            output::success(&format!("removed {}", key));
        } else {
            output::warning(&format!("{} not in tree, nothing removed", key));
        }
    }

    for &key in find {
        if tree.search(key) {
            output::success(&format!("{} found", key));
        } else {
            output::failure(&format!("{} not found", key));
        }
    }

    output::header("in-order");
    output::info(&join_keys(&tree.in_order(), &settings.separator));
    Ok(())
}

fn config_target(cli: &Cli) -> CliResult<PathBuf> {
    cli.config
        .clone()
        .or_else(global_config_path)
        .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))
}

#[instrument(skip(cli))]
fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::header("Effective configuration");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init { force } => {
            let path = config_target(cli)?;
            if path.is_dir() {
                return Err(CliError::InvalidArgs(format!(
                    "config path is a directory: {}",
                    path.display()
                )));
            }
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config file already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context("create config directory")?;
            }
            std::fs::write(&path, Settings::template()).with_context("write config template")?;
            output::action("Created", &path.display());
        }
        ConfigCommands::Path => {
            let path = config_target(cli)?;
            let state = if path.exists() { "exists" } else { "not found" };
            output::info(&format!("{} ({})", path.display(), state));
        }
    }
    Ok(())
}

fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
}
