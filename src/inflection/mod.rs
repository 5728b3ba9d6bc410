//! Verb inflection through a voice, a mode and a set of modifiers.

mod godan;

pub use self::conjugate::conjugate;
mod conjugate;


use std::fmt;
use std::ops::{BitAnd, BitOr};

use arrayvec::ArrayVec;
use fixed_map::Set;
use serde::{Deserialize, Serialize};

keywords! {
    /// The first stage of inflection, which derives a new verb from the
    /// dictionary form.
    pub enum Voice {
        {Dictionary, "dictionary", "dictionary", "辞書形"},
        {Potential, "potential", "potential", "可能形"},
        {Passive, "passive", "passive", "受身形"},
        {Causative, "causative", "causative", "使役形"},
        {CausativePassive, "causative-passive", "causative-passive", "使役受身形"},
    }
}

keywords! {
    /// The second stage of inflection, which decides the sentence-final
    /// function of the verb.
    pub enum Mode {
        {Standard, "standard", "standard", "普通形"},
        {TeForm, "te", "te-form", "て形"},
        {Volitional, "volitional", "volitional", "意志形"},
        {Imperative, "imperative", "imperative", "命令形"},
    }
}

keywords! {
    /// Toggles applied within the second stage of inflection.
    pub enum Modifier {
        {Polite, "polite", "polite", "丁寧"},
        {Negative, "negative", "negative", "否定"},
        {Past, "past", "past", "過去"},
    }
}

/// Label used when a description has nothing else to say.
pub const BASE_FORM: &str = "dictionary form";

/// Japanese label used when a description has nothing else to say.
pub const BASE_FORM_TITLE: &str = "辞書形";

/// A set of modifiers.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Modifiers {
    set: Set<Modifier>,
}

impl Modifiers {
    // Macro support.
    #[doc(hidden)]
    pub fn new(set: Set<Modifier>) -> Self {
        Self { set }
    }

    /// Construct a set with every modifier.
    pub fn all() -> Self {
        Modifier::ALL.iter().copied().collect()
    }

    /// Insert the given modifier.
    #[inline]
    pub fn insert(&mut self, modifier: Modifier) {
        self.set.insert(modifier);
    }

    /// Toggle the given modifier.
    pub fn toggle(&mut self, modifier: Modifier) {
        if self.set.contains(modifier) {
            self.set.remove(modifier);
        } else {
            self.set.insert(modifier);
        }
    }

    /// Test if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Test if the set contains the given modifier.
    #[inline]
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.set.contains(modifier)
    }

    /// Iterate over modifiers in the order polite, negative, past.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.set.iter()
    }

    /// The first modifier in this set which is not in `other`.
    pub fn first_outside(&self, other: Modifiers) -> Option<Modifier> {
        self.iter().find(|m| !other.contains(*m))
    }

    /// Test if every modifier in this set is also in `other`.
    pub fn is_subset(&self, other: Modifiers) -> bool {
        self.first_outside(other).is_none()
    }

    /// Iterate over every subset of this set, starting with the empty set.
    pub fn subsets(&self) -> impl Iterator<Item = Modifiers> {
        let items = self.iter().collect::<ArrayVec<Modifier, 3>>();

        (0u32..1 << items.len()).map(move |bits| {
            items
                .iter()
                .enumerate()
                .filter(|(n, _)| bits & (1 << n) != 0)
                .map(|(_, m)| *m)
                .collect()
        })
    }
}

impl fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.set.iter()).finish()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Modifier>,
    {
        let mut set = Set::new();

        for m in iter {
            set.insert(m);
        }

        Self { set }
    }
}

impl BitOr for Modifiers {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.iter().chain(rhs.iter()).collect()
    }
}

impl BitAnd for Modifiers {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.iter().filter(|m| rhs.contains(*m)).collect()
    }
}

/// Helper to construct a particular set of [`Modifiers`].
///
/// # Examples
///
/// ```rust
/// let polite_past = katsuyou::modifiers!(Polite, Past);
/// assert!(polite_past.contains(katsuyou::Modifier::Past));
/// assert!(katsuyou::modifiers!().is_empty());
/// ```
#[macro_export]
macro_rules! modifiers {
    ($($modifier:ident),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut set = $crate::macro_support::fixed_map::Set::new();
        $(set.insert($crate::Modifier::$modifier);)*
        $crate::Modifiers::new(set)
    }}
}

/// The modifiers which may be combined with the given mode.
pub fn legal_modifiers(mode: Mode) -> Modifiers {
    match mode {
        Mode::Standard => modifiers!(Polite, Negative, Past),
        Mode::TeForm => modifiers!(Negative),
        Mode::Volitional => modifiers!(Polite),
        Mode::Imperative => modifiers!(),
    }
}

/// Describe an inflection using english labels, such as
/// `"potential + te-form + negative"`.
pub fn describe(voice: Voice, mode: Mode, modifiers: Modifiers) -> String {
    labels(voice, mode, modifiers, Label::Describe)
}

/// Describe an inflection using japanese grammatical titles, such as
/// `"可能形 + て形 + 否定"`.
pub fn describe_title(voice: Voice, mode: Mode, modifiers: Modifiers) -> String {
    labels(voice, mode, modifiers, Label::Title)
}

/// Parse a description back into the inflection it names.
///
/// This accepts what [`describe`] and [`describe_title`] produce as well as
/// keywords, so `"potential + te-form + negative"` and `"potential te
/// negative"` are the same. An omitted voice or mode is taken to be
/// dictionary and standard respectively.
///
/// # Examples
///
/// ```rust
/// use katsuyou::{parse_description, Mode, Voice};
///
/// let parsed = parse_description("te-form + negative");
/// assert_eq!(parsed, Some((Voice::Dictionary, Mode::TeForm, katsuyou::modifiers!(Negative))));
/// assert_eq!(parsed, parse_description("te negative"));
/// assert_eq!(parse_description("conditional"), None);
/// ```
pub fn parse_description(input: &str) -> Option<(Voice, Mode, Modifiers)> {
    let input = input.trim().to_lowercase();

    if input.is_empty() {
        return None;
    }

    let mut voice = Voice::Dictionary;
    let mut mode = Mode::Standard;
    let mut modifiers = Modifiers::default();

    if input == BASE_FORM || input == BASE_FORM_TITLE {
        return Some((voice, mode, modifiers));
    }

    for word in input
        .split(|c: char| c.is_whitespace() || matches!(c, '+' | ','))
        .filter(|w| !w.is_empty())
    {
        if let Some(v) = Voice::parse_keyword(word)
            .or_else(|| Voice::parse_describe(word))
            .or_else(|| Voice::parse_title(word))
        {
            voice = v;
        } else if let Some(m) = Mode::parse_keyword(word)
            .or_else(|| Mode::parse_describe(word))
            .or_else(|| Mode::parse_title(word))
        {
            mode = m;
        } else if let Some(m) = Modifier::parse_keyword(word)
            .or_else(|| Modifier::parse_describe(word))
            .or_else(|| Modifier::parse_title(word))
        {
            modifiers.insert(m);
        } else {
            return None;
        }
    }

    Some((voice, mode, modifiers))
}

#[derive(Clone, Copy)]
enum Label {
    Describe,
    Title,
}

fn labels(voice: Voice, mode: Mode, modifiers: Modifiers, label: Label) -> String {
    let mut parts = ArrayVec::<&'static str, 5>::new();

    if voice != Voice::Dictionary {
        parts.push(match label {
            Label::Describe => voice.describe(),
            Label::Title => voice.title(),
        });
    }

    if mode != Mode::Standard {
        parts.push(match label {
            Label::Describe => mode.describe(),
            Label::Title => mode.title(),
        });
    }

    for m in modifiers.iter() {
        parts.push(match label {
            Label::Describe => m.describe(),
            Label::Title => m.title(),
        });
    }

    if parts.is_empty() {
        return match label {
            Label::Describe => BASE_FORM.to_owned(),
            Label::Title => BASE_FORM_TITLE.to_owned(),
        };
    }

    parts.join(" + ")
}
