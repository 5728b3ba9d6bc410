//! Randomized practice questions.

#[cfg(test)]
mod tests;

use arrayvec::ArrayVec;
use fixed_map::Set;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::{EnabledKind, Error};
use crate::inflection::{self, legal_modifiers, Mode, Modifiers, Voice};
use crate::kana::Pair;
use crate::verb::Verb;

/// The parameters a question may be drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enabled {
    /// Voices to pick from.
    pub voices: Set<Voice>,
    /// Modes to pick from.
    pub modes: Set<Mode>,
    /// Modifiers which may be switched on, if the picked mode permits them.
    pub modifiers: Modifiers,
}

impl Enabled {
    /// Everything enabled.
    pub fn all() -> Self {
        Self {
            voices: Voice::ALL.iter().copied().collect(),
            modes: Mode::ALL.iter().copied().collect(),
            modifiers: Modifiers::all(),
        }
    }
}

/// A single generated practice item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// The verb being conjugated.
    pub verb: Verb,
    pub voice: Voice,
    pub mode: Mode,
    pub modifiers: Modifiers,
    /// The expected conjugation.
    pub answer: Pair,
}

impl Question {
    /// Test if a typed answer is correct.
    ///
    /// Surrounding whitespace is ignored, but otherwise the input has to be
    /// exactly the expected form either as written or as read.
    pub fn is_correct(&self, input: &str) -> bool {
        let input = input.trim();
        input == self.answer.text || input == self.answer.reading
    }

    /// Test if the given parameters are the ones which produced the answer.
    pub fn is_identified(&self, voice: Voice, mode: Mode, modifiers: Modifiers) -> bool {
        self.voice == voice && self.mode == mode && self.modifiers == modifiers
    }

    /// Test if a typed guess, such as `"potential + te-form"` or `"potential
    /// te"`, names the parameters which produced the answer.
    pub fn is_recognized(&self, guess: &str) -> bool {
        match inflection::parse_description(guess) {
            Some((voice, mode, modifiers)) => self.is_identified(voice, mode, modifiers),
            None => {
                tracing::debug!(guess, "Unrecognized description");
                false
            }
        }
    }

    /// Describe what is being asked for.
    pub fn describe(&self) -> String {
        inflection::describe(self.voice, self.mode, self.modifiers)
    }

    /// Japanese title of what is being asked for.
    pub fn describe_title(&self) -> String {
        inflection::describe_title(self.voice, self.mode, self.modifiers)
    }
}

/// Generate a random question for the given verb.
///
/// A voice and a mode are picked uniformly among the enabled ones, after
/// which every enabled modifier the mode permits is included with even odds.
///
/// # Errors
///
/// Errors if no voices or no modes are enabled, or if the verb can't be
/// conjugated.
pub fn generate<R>(verb: &Verb, enabled: &Enabled, rng: &mut R) -> Result<Question, Error>
where
    R: ?Sized + Rng,
{
    let voices = enabled.voices.iter().collect::<ArrayVec<Voice, 5>>();
    let modes = enabled.modes.iter().collect::<ArrayVec<Mode, 4>>();

    let voice = *voices
        .choose(rng)
        .ok_or(Error::EmptyEnabledSet(EnabledKind::Voices))?;

    let mode = *modes
        .choose(rng)
        .ok_or(Error::EmptyEnabledSet(EnabledKind::Modes))?;

    let candidates = legal_modifiers(mode) & enabled.modifiers;
    let mut modifiers = Modifiers::default();

    for m in candidates.iter() {
        if rng.gen_bool(0.5) {
            modifiers.insert(m);
        }
    }

    let answer = inflection::conjugate(verb, voice, mode, modifiers)?;

    tracing::debug!(
        lemma = %verb.lemma,
        ?voice,
        ?mode,
        ?modifiers,
        answer = %answer,
        "Generated question"
    );

    Ok(Question {
        verb: verb.clone(),
        voice,
        mode,
        modifiers,
        answer,
    })
}

/// Running score of a practice session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Correct answers in a row.
    pub current_streak: u32,
    /// Longest streak seen during the session.
    pub max_streak: u32,
    pub total_correct: u32,
    pub total_attempts: u32,
}

impl Stats {
    /// Record the outcome of an attempt.
    pub fn record(&mut self, correct: bool) {
        self.total_attempts += 1;

        if correct {
            self.total_correct += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of correct answers, if anything has been attempted.
    pub fn accuracy(&self) -> Option<u32> {
        if self.total_attempts == 0 {
            return None;
        }

        Some(self.total_correct * 100 / self.total_attempts)
    }
}
