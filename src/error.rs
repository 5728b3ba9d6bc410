use thiserror::Error;

use crate::inflection::{Modifier, Mode};
use crate::verb::VerbClass;

/// The kind of enabled set which was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnabledKind {
    Voices,
    Modes,
}

impl EnabledKind {
    fn name(&self) -> &'static str {
        match self {
            EnabledKind::Voices => "voices",
            EnabledKind::Modes => "modes",
        }
    }
}

/// An error raised when the engine is used outside of its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The class of a verb doesn't agree with how its lemma ends.
    #[error("`{lemma}` ({reading}) does not inflect as a {class} verb")]
    MalformedVerb {
        lemma: String,
        reading: String,
        class: VerbClass,
    },
    /// A modifier was requested which the mode doesn't permit.
    #[error("Modifier `{modifier}` is not permitted with the {mode} mode")]
    IllegalModifierForMode { mode: Mode, modifier: Modifier },
    /// Questions can't be generated without any voices or modes to pick from.
    #[error("No {} are enabled", .0.name())]
    EmptyEnabledSet(EnabledKind),
}
