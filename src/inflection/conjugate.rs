//! Module which performs verb conjugation, based on a words class.

use crate::error::Error;
use crate::inflection::godan::{self, Godan};
use crate::inflection::{legal_modifiers, Mode, Modifier, Modifiers, Voice};
use crate::kana::{self, Pair, Row};
use crate::verb::{Verb, VerbClass};

/// Conjugate a verb.
///
/// The verb is first rewritten into the requested voice, after which any
/// voice other than [`Voice::Dictionary`] inflects as an ichidan verb. The
/// mode and modifiers are then applied to that stem.
///
/// # Errors
///
/// Errors if the class of the verb disagrees with its lemma, or if a modifier
/// is requested which [`legal_modifiers`] doesn't permit for the mode.
///
/// # Examples
///
/// ```rust
/// use katsuyou::{conjugate, modifiers, Level, Mode, Verb, VerbClass, Voice};
///
/// let verb = Verb::new("書く", "かく", "to write", VerbClass::Godan, Level::N5);
///
/// let form = conjugate(&verb, Voice::Dictionary, Mode::Standard, modifiers!(Polite))?;
/// assert_eq!(form.text, "書きます");
/// assert_eq!(form.reading, "かきます");
/// # Ok::<_, katsuyou::Error>(())
/// ```
pub fn conjugate(
    verb: &Verb,
    voice: Voice,
    mode: Mode,
    modifiers: Modifiers,
) -> Result<Pair, Error> {
    if let Some(modifier) = modifiers.first_outside(legal_modifiers(mode)) {
        return Err(Error::IllegalModifierForMode { mode, modifier });
    }

    let stem = Stem::resolve(&verb.lemma, &verb.reading, verb.class)?;

    let (voiced, class) = match voice {
        Voice::Dictionary => return Ok(stem.inflect(mode, modifiers)),
        voice => (stem.voice(voice), VerbClass::Ichidan),
    };

    let stem = Stem::resolve(&voiced.text, &voiced.reading, class)?;
    Ok(stem.inflect(mode, modifiers))
}

/// The stem forms which suffixes are attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Base {
    /// The dictionary form itself.
    Dictionary,
    /// The stem of ～ます.
    Masu,
    /// The stem of ～ない.
    Nai,
    /// The ～て form.
    Te,
    /// The ～た form.
    Ta,
    /// The plain imperative.
    Imperative,
    /// The plain volitional.
    Volitional,
}

/// Whether the 来 of a kuru verb is written with kanji, in which case the
/// kanji stands in for every kana its reading changes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kanji {
    Included,
    Excluded,
}

/// A verb resolved into the stem that its inflections are attached to.
#[derive(Debug, Clone, Copy)]
enum Stem<'a> {
    /// Ichidan stem with the trailing る removed.
    Ichidan { text: &'a str, reading: &'a str },
    /// Godan stem with the terminal kana removed.
    Godan {
        text: &'a str,
        reading: &'a str,
        table: &'static Godan,
    },
    /// Whatever precedes する, empty for する itself.
    Suru { text: &'a str, reading: &'a str },
    /// Whatever precedes 来る or くる.
    Kuru {
        text: &'a str,
        reading: &'a str,
        kanji: Kanji,
    },
}

impl<'a> Stem<'a> {
    /// Resolve the stem of a dictionary form of the given class.
    fn resolve(text: &'a str, reading: &'a str, class: VerbClass) -> Result<Self, Error> {
        let stem = match class {
            VerbClass::Ichidan => resolve_ichidan(text, reading),
            VerbClass::Godan => resolve_godan(text, reading),
            VerbClass::Irregular => {
                match (text, reading) {
                    ("する", "する") | ("為る", "する") => Some(Stem::Suru {
                        text: "",
                        reading: "",
                    }),
                    _ => resolve_kuru(text, reading),
                }
            }
            VerbClass::SuruCompound => resolve_suru(text, reading),
        };

        stem.ok_or_else(|| Error::MalformedVerb {
            lemma: text.to_owned(),
            reading: reading.to_owned(),
            class,
        })
    }

    /// Rewrite the verb into the given voice, producing the dictionary form of
    /// a new ichidan verb.
    fn voice(&self, voice: Voice) -> Pair {
        match (*self, voice) {
            (_, Voice::Dictionary) => self.base(Base::Dictionary),
            (Stem::Ichidan { text, reading }, voice) => {
                let suffix = match voice {
                    Voice::Potential | Voice::Passive => "られる",
                    Voice::Causative => "させる",
                    _ => "させられる",
                };

                Pair::new(text, reading, [suffix])
            }
            (Stem::Godan { text, reading, table }, Voice::Potential) => {
                Pair::new(text, reading, [table.e, "る"])
            }
            (Stem::Godan { text, reading, table }, voice) => {
                let suffix = match voice {
                    Voice::Passive => "れる",
                    Voice::Causative => "せる",
                    _ => "せられる",
                };

                Pair::new(text, reading, [table.a, suffix])
            }
            (Stem::Suru { text, reading }, voice) => {
                let suffix = match voice {
                    Voice::Potential => "できる",
                    Voice::Passive => "される",
                    Voice::Causative => "させる",
                    _ => "させられる",
                };

                Pair::new(text, reading, [suffix])
            }
            (
                Stem::Kuru {
                    text,
                    reading,
                    kanji,
                },
                voice,
            ) => {
                let suffix = match voice {
                    Voice::Potential | Voice::Passive => "られる",
                    Voice::Causative => "させる",
                    _ => "させられる",
                };

                kuru(text, reading, kanji, "こ", suffix)
            }
        }
    }

    /// Apply a mode and its modifiers.
    ///
    /// The modifiers must already have been checked against the mode.
    fn inflect(&self, mode: Mode, modifiers: Modifiers) -> Pair {
        let polite = modifiers.contains(Modifier::Polite);
        let negative = modifiers.contains(Modifier::Negative);
        let past = modifiers.contains(Modifier::Past);

        match mode {
            Mode::Standard => match (polite, negative, past) {
                (false, false, false) => self.base(Base::Dictionary),
                (false, false, true) => self.base(Base::Ta),
                (false, true, false) => self.base(Base::Nai).concat("ない"),
                (false, true, true) => self.base(Base::Nai).concat("なかった"),
                (true, false, false) => self.base(Base::Masu).concat("ます"),
                (true, false, true) => self.base(Base::Masu).concat("ました"),
                (true, true, false) => self.base(Base::Masu).concat("ません"),
                (true, true, true) => self.base(Base::Masu).concat("ませんでした"),
            },
            Mode::TeForm if negative => self.base(Base::Nai).concat("なくて"),
            Mode::TeForm => self.base(Base::Te),
            Mode::Volitional if polite => self.base(Base::Masu).concat("ましょう"),
            Mode::Volitional => self.base(Base::Volitional),
            Mode::Imperative => self.base(Base::Imperative),
        }
    }

    /// Construct the given base form.
    fn base(&self, base: Base) -> Pair {
        match *self {
            Stem::Ichidan { text, reading } => {
                let suffix = match base {
                    Base::Dictionary => "る",
                    Base::Masu | Base::Nai => "",
                    Base::Te => "て",
                    Base::Ta => "た",
                    Base::Imperative => "ろ",
                    Base::Volitional => "よう",
                };

                Pair::new(text, reading, [suffix])
            }
            Stem::Godan {
                text,
                reading,
                table,
            } => {
                let suffix = match base {
                    Base::Dictionary => [table.u, ""],
                    Base::Masu => [table.i, ""],
                    Base::Nai => [table.a, ""],
                    Base::Te => [table.te, ""],
                    Base::Ta => [table.past, ""],
                    Base::Imperative => [table.e, ""],
                    Base::Volitional => [table.o, "う"],
                };

                Pair::new(text, reading, suffix)
            }
            Stem::Suru { text, reading } => {
                let suffix = match base {
                    Base::Dictionary => "する",
                    Base::Masu | Base::Nai => "し",
                    Base::Te => "して",
                    Base::Ta => "した",
                    Base::Imperative => "しろ",
                    Base::Volitional => "しよう",
                };

                Pair::new(text, reading, [suffix])
            }
            Stem::Kuru {
                text,
                reading,
                kanji,
            } => {
                let (prefix, suffix) = match base {
                    Base::Dictionary => ("く", "る"),
                    Base::Masu => ("き", ""),
                    Base::Nai => ("こ", ""),
                    Base::Te => ("き", "て"),
                    Base::Ta => ("き", "た"),
                    Base::Imperative => ("こ", "い"),
                    Base::Volitional => ("こ", "よう"),
                };

                kuru(text, reading, kanji, prefix, suffix)
            }
        }
    }
}

/// Build a kuru form where the reading of 来 changes to `prefix`.
fn kuru(text: &str, reading: &str, kanji: Kanji, prefix: &str, suffix: &str) -> Pair {
    let written = match kanji {
        Kanji::Included => "来",
        Kanji::Excluded => prefix,
    };

    Pair {
        text: format!("{text}{written}{suffix}"),
        reading: format!("{reading}{prefix}{suffix}"),
    }
}

fn resolve_ichidan<'a>(text: &'a str, reading: &'a str) -> Option<Stem<'a>> {
    let (text, reading) = match_char(text, reading, 'る')?;

    if !matches!(
        reading.chars().next_back().and_then(kana::row),
        Some(Row::I | Row::E)
    ) {
        return None;
    }

    Some(Stem::Ichidan { text, reading })
}

fn resolve_godan<'a>(text: &'a str, reading: &'a str) -> Option<Stem<'a>> {
    let terminal = text.chars().next_back()?;
    let mut table = Godan::from_terminal(terminal)?;
    let (stem_text, stem_reading) = match_char(text, reading, terminal)?;

    if is_iku(text, reading) {
        table = godan::IKU;
    }

    Some(Stem::Godan {
        text: stem_text,
        reading: stem_reading,
        table,
    })
}

fn resolve_suru<'a>(text: &'a str, reading: &'a str) -> Option<Stem<'a>> {
    let reading = reading.strip_suffix("する")?;
    let text = text
        .strip_suffix("する")
        .or_else(|| text.strip_suffix("為る"))?;
    Some(Stem::Suru { text, reading })
}

fn resolve_kuru<'a>(text: &'a str, reading: &'a str) -> Option<Stem<'a>> {
    let reading = reading.strip_suffix("くる")?;

    if let Some(text) = text
        .strip_suffix("来る")
        .or_else(|| text.strip_suffix("來る"))
    {
        return Some(Stem::Kuru {
            text,
            reading,
            kanji: Kanji::Included,
        });
    }

    let text = text.strip_suffix("くる")?;

    Some(Stem::Kuru {
        text,
        reading,
        kanji: Kanji::Excluded,
    })
}

/// 行く and its compounds take って / った instead of いて / いた.
fn is_iku(text: &str, reading: &str) -> bool {
    text.ends_with("行く") || matches!(reading, "いく" | "ゆく")
}

fn match_char<'a>(text: &'a str, reading: &'a str, suffix: char) -> Option<(&'a str, &'a str)> {
    Some((text.strip_suffix(suffix)?, reading.strip_suffix(suffix)?))
}
