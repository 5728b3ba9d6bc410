pub(crate) mod conjugate;
pub(crate) mod drill;
pub(crate) mod list;
pub(crate) mod table;

use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};
use katsuyou::romaji;
use katsuyou::{Lexicon, Verb};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputFormat {
    Rich,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub(crate) fn parse(format: Option<&str>) -> Result<Self> {
        Ok(match format {
            Some("rich") | None => OutputFormat::Rich,
            Some("json") => OutputFormat::Json,
            Some("json-pretty") => OutputFormat::JsonPretty,
            Some(name) => bail!("Unsupported output format: {}", name),
        })
    }
}

/// Find a verb by lemma, reading, or a romanization of its reading.
pub(crate) fn find_verb<'a>(lexicon: &'a Lexicon, query: &str) -> Result<&'a Verb> {
    if let Some(verb) = lexicon.find(query) {
        return Ok(verb);
    }

    lexicon
        .find(&romaji::to_hiragana(query))
        .with_context(|| anyhow!("No verb matching `{query}` in the lexicon"))
}

/// Write a value as json.
pub(crate) fn print_json<O, T>(o: &mut O, value: &T, pretty: bool) -> Result<()>
where
    O: ?Sized + Write,
    T: ?Sized + Serialize,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *o, value)?;
    } else {
        serde_json::to_writer(&mut *o, value)?;
    }

    writeln!(o)?;
    Ok(())
}
