#[cfg(test)]
mod tests;

use core::fmt;

use serde::{Deserialize, Serialize};

/// A word spelled both as written and as read.
///
/// Both halves are inflected by the same rules, so they only differ where the
/// written form contains kanji.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Written form, which might contain kanji.
    pub text: String,
    /// Kana reading of the written form.
    pub reading: String,
}

impl Pair {
    /// Construct a pair from a text and reading prefix with a common kana
    /// suffix.
    pub(crate) fn new<'a, I>(text: &str, reading: &str, suffix: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut pair = Self {
            text: text.to_owned(),
            reading: reading.to_owned(),
        };

        for s in suffix {
            pair.text.push_str(s);
            pair.reading.push_str(s);
        }

        pair
    }

    /// Append a kana suffix to both halves of the pair.
    pub(crate) fn concat(mut self, suffix: &str) -> Self {
        self.text.push_str(suffix);
        self.reading.push_str(suffix);
        self
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text != self.reading {
            write!(f, "{} ({})", self.text, self.reading)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// The vowel row of the gojūon table a kana belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    A,
    I,
    U,
    E,
    O,
}

/// Get the vowel row of a hiragana character.
///
/// Returns `None` for anything which isn't a plain syllable, such as small
/// kana, ん and non-hiragana.
pub fn row(c: char) -> Option<Row> {
    let row = match c {
        'あ' | 'か' | 'が' | 'さ' | 'ざ' | 'た' | 'だ' | 'な' | 'は' | 'ば' | 'ぱ' | 'ま' | 'や'
        | 'ら' | 'わ' => Row::A,
        'い' | 'き' | 'ぎ' | 'し' | 'じ' | 'ち' | 'ぢ' | 'に' | 'ひ' | 'び' | 'ぴ' | 'み' | 'り' => {
            Row::I
        }
        'う' | 'く' | 'ぐ' | 'す' | 'ず' | 'つ' | 'づ' | 'ぬ' | 'ふ' | 'ぶ' | 'ぷ' | 'む' | 'ゆ'
        | 'る' => Row::U,
        'え' | 'け' | 'げ' | 'せ' | 'ぜ' | 'て' | 'で' | 'ね' | 'へ' | 'べ' | 'ぺ' | 'め' | 'れ' => {
            Row::E
        }
        'お' | 'こ' | 'ご' | 'そ' | 'ぞ' | 'と' | 'ど' | 'の' | 'ほ' | 'ぼ' | 'ぽ' | 'も' | 'よ'
        | 'ろ' | 'を' => Row::O,
        _ => return None,
    };

    Some(row)
}

/// Test if a character is hiragana.
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{309d}'..='\u{309f}' | 'ー')
}
