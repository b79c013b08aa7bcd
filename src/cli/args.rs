//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `show`: Print a topic's keys as a table, one column per language
//! - `find`: Search keys and values across every topic
//! - `trans`: Set a key's value in one or more languages
//! - `remove`: Remove a key from every language
//! - `rename`: Rename a key in every language
//! - `sync`: Add keys used in source code or present in other languages
//! - `missing`: Report missing keys and empty values
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Show(cmd)) => Some(&cmd.common),
            Some(Command::Find(cmd)) => Some(&cmd.common),
            Some(Command::Trans(cmd)) => Some(&cmd.common),
            Some(Command::Remove(cmd)) => Some(&cmd.common),
            Some(Command::Rename(cmd)) => Some(&cmd.common),
            Some(Command::Sync(cmd)) => Some(&cmd.common),
            Some(Command::Missing(cmd)) => Some(&cmd.common),
            Some(Command::Init) | None => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Language files directory (overrides config file)
    #[arg(long, env = "LANGSYNC_LANG_PATH")]
    pub lang_path: Option<PathBuf>,

    /// Operate on a vendor package's translations
    #[arg(long)]
    pub package: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Topic, optionally followed by a key: `user` or `user.profile`
    pub reference: String,

    /// Only show these languages (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Match keys containing the given key instead of the exact key
    #[arg(long)]
    pub close: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FindCommand {
    /// Text to look for in keys and values (case-insensitive)
    pub keyword: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TransCommand {
    /// Key to set: `<topic>.<key>`
    pub reference: String,

    /// Value for one language, repeatable: --value en=Hello --value fr=Bonjour
    #[arg(long = "value", value_name = "LANG=TEXT")]
    pub values: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Key to remove: `<topic>.<key>`
    pub reference: String,

    /// Actually remove the key (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenameCommand {
    /// Key to rename: `<topic>.<key>`
    pub reference: String,

    /// New name for the last segment of the key
    pub new_name: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Actually write missing keys (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MissingCommand {
    /// Only check this topic
    pub topic: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a topic's keys and values in every language
    Show(ShowCommand),
    /// Find keys or values containing a keyword
    Find(FindCommand),
    /// Set the value of a key in one or more languages
    Trans(TransCommand),
    /// Remove a key from every language
    Remove(RemoveCommand),
    /// Rename a key in every language
    Rename(RenameCommand),
    /// Add keys used in source code or missing from some languages
    Sync(SyncCommand),
    /// Report missing keys and empty values
    Missing(MissingCommand),
    /// Initialize a new .langsyncrc.json configuration file
    Init,
}
