#[macro_use]
mod macros;

mod error;
pub use self::error::{EnabledKind, Error};

#[macro_use]
pub mod inflection;
pub use self::inflection::{
    conjugate, describe, describe_title, legal_modifiers, parse_description, Mode, Modifier,
    Modifiers, Voice,
};

pub mod kana;
pub use self::kana::Pair;

pub mod verb;
pub use self::verb::{Level, Verb, VerbClass};

pub mod question;
pub use self::question::{generate, Enabled, Question, Stats};

pub mod lexicon;
pub use self::lexicon::Lexicon;

pub mod romaji;

mod config;
pub use self::config::Config;

mod dirs;
pub use self::dirs::Dirs;

#[doc(hidden)]
pub mod macro_support {
    pub use fixed_map;
}
