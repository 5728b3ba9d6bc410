use std::io::Write;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use katsuyou::{Lexicon, Mode, Modifier, Modifiers, Pair, Verb, Voice};
use serde::Serialize;

use crate::command::{find_verb, print_json, OutputFormat};

#[derive(Parser)]
pub(crate) struct ConjugateArgs {
    /// The verb to conjugate, either as written, by its reading, or by its
    /// reading in romaji.
    verb: String,
    /// Voice to use. Defaults to `dictionary`. Available options are:
    /// dictionary, potential, passive, causative, causative-passive.
    #[arg(long)]
    voice: Option<String>,
    /// Mode to use. Defaults to `standard`. Available options are: standard,
    /// te, volitional, imperative.
    #[arg(long)]
    mode: Option<String>,
    /// Use the polite form.
    #[arg(long)]
    polite: bool,
    /// Use the negative form.
    #[arg(long)]
    negative: bool,
    /// Use the past form.
    #[arg(long)]
    past: bool,
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long)]
    format: Option<String>,
}

#[derive(Serialize)]
struct Output<'a> {
    verb: &'a Verb,
    voice: Voice,
    mode: Mode,
    modifiers: Modifiers,
    description: String,
    form: Pair,
}

pub(crate) fn run(args: &ConjugateArgs, lexicon: &Lexicon) -> Result<()> {
    let format = OutputFormat::parse(args.format.as_deref())?;
    let verb = find_verb(lexicon, &args.verb)?;

    let voice = match args.voice.as_deref() {
        Some(voice) => {
            Voice::parse_keyword(voice).with_context(|| anyhow!("Invalid voice `{voice}`"))?
        }
        None => Voice::Dictionary,
    };

    let mode = match args.mode.as_deref() {
        Some(mode) => Mode::parse_keyword(mode).with_context(|| anyhow!("Invalid mode `{mode}`"))?,
        None => Mode::Standard,
    };

    let mut modifiers = Modifiers::default();

    for (enabled, modifier) in [
        (args.polite, Modifier::Polite),
        (args.negative, Modifier::Negative),
        (args.past, Modifier::Past),
    ] {
        if enabled {
            modifiers.insert(modifier);
        }
    }

    let form = katsuyou::conjugate(verb, voice, mode, modifiers)?;

    let output = Output {
        verb,
        voice,
        mode,
        modifiers,
        description: katsuyou::describe(voice, mode, modifiers),
        form,
    };

    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    match format {
        OutputFormat::Rich => {
            writeln!(o, "{} - {}", output.verb, output.verb.gloss)?;
            writeln!(
                o,
                "  {} / {}:",
                output.description,
                katsuyou::describe_title(voice, mode, modifiers)
            )?;
            writeln!(o, "    {}", output.form)?;
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            print_json(&mut o, &output, matches!(format, OutputFormat::JsonPretty))?;
        }
    }

    Ok(())
}
