mod command;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use katsuyou::{Config, Dirs, Lexicon};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::command::conjugate::ConjugateArgs;
use crate::command::drill::DrillArgs;
use crate::command::list::ListArgs;
use crate::command::table::TableArgs;

#[derive(Parser)]
#[command(version, about = "Japanese verb conjugation and practice")]
struct Args {
    /// Load verbs from the given lexicon instead of the built-in one. Files
    /// ending in `.gz` are decompressed.
    #[arg(long, value_name = "path", global = true)]
    lexicon: Option<PathBuf>,
    /// Load configuration from the given path instead of the default
    /// location.
    #[arg(long, value_name = "path", global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Conjugate a verb with the given voice, mode and modifiers.
    Conjugate(ConjugateArgs),
    /// Print every form of a verb.
    Table(TableArgs),
    /// List verbs in the lexicon.
    List(ListArgs),
    /// Practice conjugations interactively.
    Drill(DrillArgs),
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    let args = Args::parse();
    let dirs = Dirs::open()?;

    let config = match &args.config {
        Some(path) => Config::load_path(path)?,
        None => Config::load(&dirs)?,
    };

    let lexicon = load_lexicon(&args, &dirs)?;

    match &args.command {
        Command::Conjugate(a) => command::conjugate::run(a, &lexicon),
        Command::Table(a) => command::table::run(a, &lexicon),
        Command::List(a) => command::list::run(a, &config, &lexicon),
        Command::Drill(a) => command::drill::run(a, &config, &lexicon),
    }
}

fn load_lexicon(args: &Args, dirs: &Dirs) -> Result<Lexicon> {
    if let Some(path) = &args.lexicon {
        return Lexicon::open(path);
    }

    let path = dirs.lexicon_path();

    if path.is_file() {
        return Lexicon::open(&path);
    }

    Ok(Lexicon::builtin())
}
