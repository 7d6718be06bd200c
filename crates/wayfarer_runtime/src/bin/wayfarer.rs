//! Wayfarer CLI entry point.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use wayfarer_foundation::{Config, Error, Result};
use wayfarer_language::DefinitionParser;
use wayfarer_parser::Command;
use wayfarer_runtime::{Engine, ScriptEditor, load_config};
use wayfarer_world::Game;

#[derive(Parser)]
#[command(name = "wayfarer")]
#[command(about = "Play a text adventure described by a world definition file")]
#[command(version)]
struct Cli {
    /// World definition file
    definition: PathBuf,

    /// TOML configuration file overriding messages, keywords and flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read player input from a file instead of the terminal
    #[arg(long)]
    script: Option<PathBuf>,

    /// Reject connections to undeclared locations
    #[arg(long)]
    strict: bool,

    /// Verbose logging (-v, -vv, -vvv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let env = Env::default().default_filter_or(level.to_string());
    let _ = Builder::from_env(env).try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let game = load_game(cli)?;
    log::info!("loaded {game} from {}", cli.definition.display());

    match &cli.script {
        Some(path) => {
            let file = File::open(path).map_err(|e| Error::io(e).with_origin(path.display().to_string()))?;
            let editor = ScriptEditor::new(BufReader::new(file));
            Engine::with_io(game, config, editor, io::stdout()).run()
        }
        None => Engine::new(game, config)?.run(),
    }
}

fn load_game(cli: &Cli) -> Result<Game<Command>> {
    let origin = cli.definition.display().to_string();
    let file = File::open(&cli.definition).map_err(|e| Error::io(e).with_origin(&origin))?;
    DefinitionParser::new()
        .with_strict(cli.strict)
        .parse_reader(BufReader::new(file))
        .and_then(|definition| definition.into_game())
        .map_err(|e| e.with_origin(origin))
}
