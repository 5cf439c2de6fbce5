//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::Key;

/// Iterative binary search tree: interactive menu and one-shot commands
#[derive(Parser, Debug)]
#[command(name = "bstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (default: $XDG_CONFIG_HOME/bstree/bstree.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Insert keys and print them in ascending order
    Sort {
        /// Keys to insert, duplicates are ignored
        #[arg(allow_negative_numbers = true)]
        keys: Vec<Key>,
    },

    /// Insert keys and print them breadth-first
    Levels {
        /// Keys to insert, in insertion order
        #[arg(allow_negative_numbers = true)]
        keys: Vec<Key>,
    },

    /// Insert keys and draw the resulting tree
    Show {
        /// Keys to insert, in insertion order
        #[arg(allow_negative_numbers = true)]
        keys: Vec<Key>,
    },

    /// Build a tree, remove keys, then look keys up
    Query {
        /// Keys to insert, in insertion order
        #[arg(allow_negative_numbers = true)]
        keys: Vec<Key>,

        /// Key to look up (repeatable)
        #[arg(short, long, allow_negative_numbers = true)]
        find: Vec<Key>,

        /// Key to remove before lookups (repeatable)
        #[arg(short, long, allow_negative_numbers = true)]
        remove: Vec<Key>,

        /// Fail when a key to remove is absent
        #[arg(long)]
        strict: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show config path
    Path,
}
