use std::io::Write;

use anyhow::Result;
use clap::Parser;
use katsuyou::{Lexicon, Mode, Modifiers, Pair, Verb, Voice};
use serde::Serialize;

use crate::command::{find_verb, print_json, OutputFormat};

#[derive(Parser)]
pub(crate) struct TableArgs {
    /// The verb to conjugate, either as written, by its reading, or by its
    /// reading in romaji.
    verb: String,
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long)]
    format: Option<String>,
}

#[derive(Serialize)]
struct Row {
    voice: Voice,
    mode: Mode,
    modifiers: Modifiers,
    description: String,
    form: Pair,
}

#[derive(Serialize)]
struct Output<'a> {
    verb: &'a Verb,
    forms: Vec<Row>,
}

pub(crate) fn run(args: &TableArgs, lexicon: &Lexicon) -> Result<()> {
    let format = OutputFormat::parse(args.format.as_deref())?;
    let verb = find_verb(lexicon, &args.verb)?;

    let mut forms = Vec::new();

    for &voice in Voice::ALL {
        for &mode in Mode::ALL {
            for modifiers in katsuyou::legal_modifiers(mode).subsets() {
                forms.push(Row {
                    voice,
                    mode,
                    modifiers,
                    description: katsuyou::describe(voice, mode, modifiers),
                    form: katsuyou::conjugate(verb, voice, mode, modifiers)?,
                });
            }
        }
    }

    let output = Output { verb, forms };

    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    match format {
        OutputFormat::Rich => {
            writeln!(o, "{} - {} ({})", verb, verb.gloss, verb.class.title())?;

            let mut current = None;

            for row in &output.forms {
                if current != Some(row.voice) {
                    writeln!(o, "# {} / {}:", row.voice.describe(), row.voice.title())?;
                    current = Some(row.voice);
                }

                writeln!(o, "  {}: {}", row.description, row.form)?;
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            print_json(&mut o, &output, matches!(format, OutputFormat::JsonPretty))?;
        }
    }

    Ok(())
}
