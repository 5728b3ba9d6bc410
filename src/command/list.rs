use std::io::Write;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fixed_map::Set;
use katsuyou::{Config, Level, Lexicon, VerbClass};

use crate::command::{print_json, OutputFormat};

#[derive(Parser)]
pub(crate) struct ListArgs {
    /// Only list verbs of the given level, such as `n5`. Can be specified
    /// multiple times. Defaults to the configured levels.
    #[arg(long = "level", name = "level")]
    levels: Vec<String>,
    /// Only list verbs of the given class. Can be specified multiple times.
    /// Available options are: godan, ichidan, irregular, suru. Defaults to
    /// the configured classes.
    #[arg(long = "class", name = "class")]
    classes: Vec<String>,
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long)]
    format: Option<String>,
}

pub(crate) fn run(args: &ListArgs, config: &Config, lexicon: &Lexicon) -> Result<()> {
    let format = OutputFormat::parse(args.format.as_deref())?;

    let mut levels = config.levels;

    if !args.levels.is_empty() {
        levels = Set::new();

        for level in &args.levels {
            levels.insert(
                Level::parse_keyword(level).with_context(|| anyhow!("Invalid level `{level}`"))?,
            );
        }
    }

    let mut classes = config.classes;

    if !args.classes.is_empty() {
        classes = Set::new();

        for class in &args.classes {
            classes.insert(
                VerbClass::parse_keyword(class)
                    .with_context(|| anyhow!("Invalid class `{class}`"))?,
            );
        }
    }

    let verbs = lexicon.filter(&levels, &classes);

    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    match format {
        OutputFormat::Rich => {
            for verb in &verbs {
                writeln!(
                    o,
                    "{} {} [{}] {}",
                    verb.level.describe(),
                    verb,
                    verb.class.describe(),
                    verb.gloss
                )?;
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            print_json(&mut o, &verbs, matches!(format, OutputFormat::JsonPretty))?;
        }
    }

    Ok(())
}
