use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_ENV: &str = "SNIP_ENV";
pub const STORAGE_PATH_ENV: &str = "SNIP_STORAGE_PATH";
pub const ALIAS_LENGTH_ENV: &str = "SNIP_ALIAS_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "SNIP_MAX_ATTEMPTS";

pub const DEFAULT_STORAGE_PATH: &str = "./storage/storage.db";
pub const DEFAULT_ALIAS_LENGTH: usize = 6;
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Deployment environment; selects log format and verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Env {
    #[value(name = "local")]
    Local,
    #[value(name = "dev")]
    Dev,
    #[value(name = "prod")]
    Prod,
}

impl Display for Env {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Dev => write!(f, "dev"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snip", about = "Save, resolve and delete short URL aliases")]
pub struct CLI {
    #[arg(long, global = true, env = ENV_ENV, value_enum, default_value_t = Env::Local)]
    pub env: Env,

    #[arg(long, global = true, env = STORAGE_PATH_ENV, default_value = DEFAULT_STORAGE_PATH)]
    pub storage_path: PathBuf,

    #[arg(
        long,
        global = true,
        env = ALIAS_LENGTH_ENV,
        default_value_t = DEFAULT_ALIAS_LENGTH,
    )]
    pub alias_length: usize,

    #[arg(
        long,
        global = true,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
    )]
    pub max_attempts: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a URL, optionally under a chosen alias.
    Save {
        url: String,
        #[arg(long)]
        alias: Option<String>,
    },
    /// Print the URL stored under an alias.
    Get { alias: String },
    /// Remove an alias.
    Delete { alias: String },
}
