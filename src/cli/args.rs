//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::{RawSettings, RawTreeSettings};

/// Render a randomly decorated ASCII-art Christmas tree
#[derive(Parser, Debug)]
#[command(name = "xmastree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: $XDG_CONFIG_HOME/xmastree/xmastree.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub tree: TreeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Tree shape flags. Unset flags fall back to config file, env, then defaults.
#[derive(clap::Args, Debug, Default, Clone, PartialEq)]
pub struct TreeArgs {
    /// Number of rows below the apex [default: 30]
    #[arg(long)]
    pub height: Option<u32>,

    /// Overall trunk width [default: 20]
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of branch tiers [default: 5]
    #[arg(long)]
    pub layers: Option<u32>,

    /// Branch slope ratio [default: 5.0]
    #[arg(long)]
    pub slope: Option<f32>,

    /// Ornament percentage, clamped to 1..=100 [default: 20]
    #[arg(long, allow_negative_numbers = true)]
    pub decoration: Option<i32>,

    /// Seed for a reproducible tree (default: OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TreeArgs {
    /// Flags as a settings overlay.
    pub fn to_overlay(&self) -> RawSettings {
        RawSettings {
            seed: self.seed,
            tree: RawTreeSettings {
                height: self.height,
                width: self.width,
                layers: self.layers,
                slope: self.slope,
                decoration: self.decoration,
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
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

    /// Show config paths
    Path,
}
