use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use clap::Parser;
use katsuyou::romaji;
use katsuyou::{Config, Lexicon, Stats};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Parser)]
pub(crate) struct DrillArgs {
    /// Number of questions to ask.
    #[arg(long, default_value_t = 10)]
    rounds: u32,
    /// Seed the question generator, which makes a session repeatable.
    #[arg(long)]
    seed: Option<u64>,
    /// Show conjugated forms and ask for what they are, such as `potential
    /// te negative`, instead of asking for the conjugation.
    #[arg(long)]
    recognize: bool,
}

pub(crate) fn run(args: &DrillArgs, config: &Config, lexicon: &Lexicon) -> Result<()> {
    let verbs = lexicon.filter(&config.levels, &config.classes);

    if verbs.is_empty() {
        bail!("No verbs match the configured levels and classes");
    }

    let enabled = config.enabled();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    tracing::debug!(verbs = verbs.len(), rounds = args.rounds, "Starting drill");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    let mut stats = Stats::default();

    for round in 1..=args.rounds {
        let Some(verb) = verbs.choose(&mut rng) else {
            break;
        };

        let question = katsuyou::generate(verb, &enabled, &mut rng)?;

        writeln!(o)?;

        if args.recognize {
            writeln!(o, "#{round} {} ({})", question.answer, question.verb)?;
            writeln!(o, "  What form is this?")?;
        } else {
            writeln!(o, "#{round} {} - {}", question.verb, question.verb.gloss)?;
            writeln!(
                o,
                "  {} / {}",
                question.describe(),
                question.describe_title()
            )?;
        }

        write!(o, "> ")?;
        o.flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        let line = line?;

        let correct = if args.recognize {
            question.is_recognized(&line)
        } else {
            question.is_correct(&line) || question.is_correct(&romaji::to_hiragana(&line))
        };

        stats.record(correct);

        if correct {
            writeln!(o, "Correct!")?;
        } else if args.recognize {
            writeln!(o, "Wrong, it's the {}", question.describe())?;
        } else {
            writeln!(o, "Wrong, expected {}", question.answer)?;
        }

        writeln!(
            o,
            "Streak: {} (best {})",
            stats.current_streak, stats.max_streak
        )?;
    }

    writeln!(o)?;
    writeln!(
        o,
        "Correct: {} / {}",
        stats.total_correct, stats.total_attempts
    )?;

    if let Some(accuracy) = stats.accuracy() {
        writeln!(o, "Accuracy: {accuracy}%")?;
    }

    writeln!(o, "Best streak: {}", stats.max_streak)?;
    Ok(())
}
