use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use reversi_player::{AppConfig, Console, PlayError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "reversi", about = "Play Othello in the console")]
struct Args {
    /// TOML config file (defaults are used if it does not exist)
    #[arg(long, default_value = "reversi.toml")]
    config: PathBuf,

    /// Save file path, overriding `save_path` from the config
    #[arg(long)]
    save: Option<PathBuf>,

    /// Resume the saved game instead of asking for player names
    #[arg(long)]
    load: bool,

    /// Log computer player reasoning to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the default config as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(save) = args.save {
        config.save_path = save;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config);

    let result = if args.load {
        console.resume()
    } else {
        console.run()
    };

    match result {
        Ok(_) => Ok(()),
        // EOF on stdin: the player walked away.
        Err(PlayError::InputClosed) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
