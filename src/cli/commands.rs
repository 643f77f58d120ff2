//! Command dispatch

use std::io::{self, BufWriter};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, info, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, TreeArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => cmd_render(cli),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(cli),
            ConfigCommands::Path => cmd_config_path(),
        },
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

/// Load layered settings and apply command-line flags last.
pub fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    Ok(apply_flags(&settings, &cli.tree))
}

fn apply_flags(settings: &Settings, flags: &TreeArgs) -> Settings {
    settings.merge_with(&flags.to_overlay())
}

#[instrument(skip(cli))]
fn cmd_render(cli: &Cli) -> CliResult<()> {
    let settings = resolve_settings(cli)?;
    debug!(?settings, "resolved settings");
    let container = ServiceContainer::new(settings)?;
    let mut rng = container.engine()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let rows = container.renderer.render(&mut out, &mut rng)?;
    info!(rows, "tree written");
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_config_show(cli: &Cli) -> CliResult<()> {
    let settings = resolve_settings(cli)?;
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn cmd_config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => {
            output::header("Global config");
            let state = if path.exists() { "" } else { " (not found)" };
            output::info(&format!("{}{}", path.display(), state));
            Ok(())
        }
        None => {
            output::warning("no config directory available on this platform");
            Err(CliError::Usage("cannot determine config directory".into()))
        }
    }
}

#[instrument]
fn cmd_completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn given_flags_when_applied_then_override_settings() {
        let cli = Cli::parse_from(["xmastree", "--height", "8", "--decoration", "150"]);
        let settings = apply_flags(&Settings::default(), &cli.tree);

        assert_eq!(settings.tree.height, 8);
        assert_eq!(settings.tree.decoration, 150);
        assert_eq!(settings.tree.width, 20);
    }

    #[test]
    fn given_no_flags_when_applied_then_settings_unchanged() {
        let cli = Cli::parse_from(["xmastree"]);
        let settings = apply_flags(&Settings::default(), &cli.tree);

        assert_eq!(settings, Settings::default());
    }
}
