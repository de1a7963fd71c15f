use std::path::PathBuf;

use clap::Parser;
use textchain::commands::command_table;
use textchain::config::{self, Config};
use textchain::{Formatter, ItemList, logging};
use tracing::warn;

/// Transform a string, optionally through a chain of commands typed after
/// the separator, and print the result items as JSON.
#[derive(Debug, Parser)]
#[command(name = "textchain", version, about)]
struct Cli {
    /// Subject, optionally followed by the separator and a command chain
    input: Option<String>,

    /// Config file (defaults to ~/.config/textchain.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print the command reference instead of processing input
    #[arg(long)]
    commands: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let loaded = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let config = loaded.unwrap_or_else(|e| {
        warn!("{}; using default settings", e);
        Config::default()
    });

    let formatter = Formatter::new(config)?;

    if cli.commands {
        println!("{}", command_table(formatter.registry()));
        return Ok(());
    }

    let input = cli.input.unwrap_or_default();
    let items = ItemList::new(formatter.format(&input));
    println!("{}", items.to_json(cli.pretty)?);
    Ok(())
}
