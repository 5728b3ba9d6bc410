//! Verb records as supplied by a lexicon.

use core::fmt;

use serde::{Deserialize, Serialize};

keywords! {
    /// The conjugation family of a verb.
    pub enum VerbClass {
        {Godan, "godan", "godan", "五段動詞"},
        {Ichidan, "ichidan", "ichidan", "一段動詞"},
        {Irregular, "irregular", "irregular", "不規則動詞"},
        {SuruCompound, "suru", "suru compound", "サ変動詞"},
    }
}

keywords! {
    /// JLPT proficiency level a verb is taught at.
    pub enum Level {
        {N5, "n5", "N5", "N5"},
        {N4, "n4", "N4", "N4"},
        {N3, "n3", "N3", "N3"},
        {N2, "n2", "N2", "N2"},
        {N1, "n1", "N1", "N1"},
    }
}

/// A single verb lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verb {
    /// Dictionary form as written, possibly with kanji.
    pub lemma: String,
    /// Hiragana reading of the dictionary form.
    pub reading: String,
    /// English gloss.
    pub gloss: String,
    /// Inflection class.
    pub class: VerbClass,
    /// Proficiency level.
    pub level: Level,
}

impl Verb {
    pub fn new(lemma: &str, reading: &str, gloss: &str, class: VerbClass, level: Level) -> Self {
        Self {
            lemma: lemma.to_owned(),
            reading: reading.to_owned(),
            gloss: gloss.to_owned(),
            class,
            level,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lemma != self.reading {
            write!(f, "{} ({})", self.lemma, self.reading)
        } else {
            write!(f, "{}", self.lemma)
        }
    }
}
