//! Command dispatch: maps parsed arguments onto demos and settings.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::composite;
use crate::config::{global_config_path, Settings};
use crate::demo::{self, DemoKind};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "Effective settings");

    match &cli.command {
        Some(Commands::Run { pattern }) => run_demo(*pattern, &settings),
        Some(Commands::All) => run_all(&settings),
        Some(Commands::List) => list(),
        Some(Commands::Tree) => tree(&settings),
        Some(Commands::Config { command }) => config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => run_all(&settings),
    }
}

fn print_transcript(kind: DemoKind, lines: &[String]) {
    output::header(&format!("== {kind}"));
    for line in lines {
        output::info(line);
    }
}

#[instrument(skip(settings))]
fn run_demo(kind: DemoKind, settings: &Settings) -> CliResult<()> {
    let lines = demo::run(kind, settings)?;
    print_transcript(kind, &lines);
    Ok(())
}

#[instrument(skip(settings))]
fn run_all(settings: &Settings) -> CliResult<()> {
    for (kind, lines) in demo::run_all(settings)? {
        print_transcript(kind, &lines);
        output::info("");
    }
    Ok(())
}

fn list() -> CliResult<()> {
    for kind in DemoKind::ALL {
        output::detail(&format!("{:<10} {}", kind.to_string(), kind.summary()));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn tree(settings: &Settings) -> CliResult<()> {
    let tree = composite::sample_tree()?;
    output::info(&tree.to_tree(&settings.composite));
    Ok(())
}

fn config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::action("global", &path.display()),
            None => output::action("global", "<no home directory>"),
        },
    }
    Ok(())
}
