//! Collections of verbs which drills are drawn from.

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fixed_map::Set;
use flate2::read::GzDecoder;

use crate::inflection::{conjugate, Mode, Modifiers, Voice};
use crate::verb::{Level, Verb, VerbClass};

use VerbClass::{Godan as G, Ichidan as I, Irregular as X, SuruCompound as S};
use Level::{N3, N4, N5};

type Row = (&'static str, &'static str, &'static str, VerbClass, Level);

/// The built-in JLPT N5 to N3 verbs.
static BUILTIN: &[Row] = &[
    ("する", "する", "to do", X, N5),
    ("来る", "くる", "to come", X, N5),
    // Ichidan.
    ("食べる", "たべる", "to eat", I, N5),
    ("見る", "みる", "to see", I, N5),
    ("寝る", "ねる", "to sleep", I, N5),
    ("起きる", "おきる", "to get up", I, N5),
    ("出る", "でる", "to go out", I, N5),
    ("いる", "いる", "to be (animate)", I, N5),
    ("着る", "きる", "to wear", I, N5),
    ("浴びる", "あびる", "to bathe in", I, N5),
    ("開ける", "あける", "to open", I, N5),
    ("閉める", "しめる", "to close", I, N5),
    ("教える", "おしえる", "to teach", I, N5),
    ("覚える", "おぼえる", "to remember", I, N4),
    ("忘れる", "わすれる", "to forget", I, N4),
    ("始める", "はじめる", "to begin", I, N4),
    ("降りる", "おりる", "to get off", I, N4),
    ("借りる", "かりる", "to borrow", I, N4),
    ("捨てる", "すてる", "to throw away", I, N4),
    ("疲れる", "つかれる", "to get tired", I, N4),
    ("答える", "こたえる", "to answer", I, N4),
    ("調べる", "しらべる", "to investigate", I, N4),
    ("逃げる", "にげる", "to run away", I, N4),
    ("見せる", "みせる", "to show", I, N4),
    ("考える", "かんがえる", "to think about", I, N4),
    ("続ける", "つづける", "to continue", I, N4),
    ("決める", "きめる", "to decide", I, N4),
    ("信じる", "しんじる", "to believe", I, N3),
    ("感じる", "かんじる", "to feel", I, N3),
    ("落ちる", "おちる", "to fall", I, N3),
    ("過ぎる", "すぎる", "to pass by", I, N3),
    ("生きる", "いきる", "to live", I, N3),
    ("足りる", "たりる", "to be enough", I, N3),
    ("慣れる", "なれる", "to get used to", I, N3),
    ("増える", "ふえる", "to increase", I, N3),
    ("受ける", "うける", "to receive", I, N3),
    ("与える", "あたえる", "to give", I, N3),
    ("認める", "みとめる", "to recognise", I, N3),
    ("避ける", "さける", "to avoid", I, N3),
    ("育てる", "そだてる", "to raise", I, N3),
    ("分ける", "わける", "to divide", I, N3),
    // Godan, う.
    ("買う", "かう", "to buy", G, N5),
    ("会う", "あう", "to meet", G, N5),
    ("言う", "いう", "to say", G, N5),
    ("歌う", "うたう", "to sing", G, N5),
    ("洗う", "あらう", "to wash", G, N5),
    ("使う", "つかう", "to use", G, N5),
    ("払う", "はらう", "to pay", G, N4),
    ("笑う", "わらう", "to laugh", G, N4),
    ("手伝う", "てつだう", "to help", G, N4),
    ("誘う", "さそう", "to invite", G, N3),
    ("扱う", "あつかう", "to handle", G, N3),
    // Godan, つ.
    ("待つ", "まつ", "to wait", G, N5),
    ("持つ", "もつ", "to hold", G, N5),
    ("立つ", "たつ", "to stand", G, N5),
    ("勝つ", "かつ", "to win", G, N4),
    ("育つ", "そだつ", "to grow up", G, N3),
    ("役立つ", "やくだつ", "to be useful", G, N3),
    // Godan, る.
    ("帰る", "かえる", "to return home", G, N5),
    ("走る", "はしる", "to run", G, N5),
    ("入る", "はいる", "to enter", G, N5),
    ("分かる", "わかる", "to understand", G, N5),
    ("作る", "つくる", "to make", G, N5),
    ("乗る", "のる", "to ride", G, N5),
    ("終わる", "おわる", "to end", G, N5),
    ("取る", "とる", "to take", G, N5),
    ("送る", "おくる", "to send", G, N5),
    ("戻る", "もどる", "to go back", G, N4),
    ("困る", "こまる", "to be troubled", G, N4),
    ("変わる", "かわる", "to change", G, N4),
    ("始まる", "はじまる", "to begin", G, N4),
    ("守る", "まもる", "to protect", G, N3),
    ("残る", "のこる", "to remain", G, N3),
    ("減る", "へる", "to decrease", G, N3),
    ("眠る", "ねむる", "to sleep", G, N3),
    ("怒る", "おこる", "to get angry", G, N3),
    // Godan, く.
    ("書く", "かく", "to write", G, N5),
    ("聞く", "きく", "to listen", G, N5),
    ("行く", "いく", "to go", G, N5),
    ("歩く", "あるく", "to walk", G, N5),
    ("働く", "はたらく", "to work", G, N5),
    ("置く", "おく", "to put", G, N5),
    ("動く", "うごく", "to move", G, N4),
    ("着く", "つく", "to arrive", G, N4),
    ("続く", "つづく", "to continue", G, N4),
    ("驚く", "おどろく", "to be surprised", G, N3),
    ("磨く", "みがく", "to polish", G, N3),
    ("招く", "まねく", "to invite", G, N3),
    // Godan, ぐ.
    ("泳ぐ", "およぐ", "to swim", G, N5),
    ("脱ぐ", "ぬぐ", "to take off", G, N5),
    ("急ぐ", "いそぐ", "to hurry", G, N4),
    ("騒ぐ", "さわぐ", "to make noise", G, N3),
    ("防ぐ", "ふせぐ", "to prevent", G, N3),
    // Godan, す.
    ("話す", "はなす", "to speak", G, N5),
    ("出す", "だす", "to take out", G, N5),
    ("貸す", "かす", "to lend", G, N5),
    ("消す", "けす", "to turn off", G, N5),
    ("返す", "かえす", "to give back", G, N5),
    ("直す", "なおす", "to fix", G, N4),
    ("探す", "さがす", "to look for", G, N4),
    ("壊す", "こわす", "to break", G, N4),
    ("表す", "あらわす", "to express", G, N3),
    ("示す", "しめす", "to indicate", G, N3),
    // Godan, ぬ.
    ("死ぬ", "しぬ", "to die", G, N5),
    // Godan, ぶ.
    ("遊ぶ", "あそぶ", "to play", G, N5),
    ("飛ぶ", "とぶ", "to fly", G, N5),
    ("呼ぶ", "よぶ", "to call", G, N5),
    ("選ぶ", "えらぶ", "to choose", G, N4),
    ("運ぶ", "はこぶ", "to carry", G, N4),
    ("学ぶ", "まなぶ", "to study", G, N3),
    ("叫ぶ", "さけぶ", "to shout", G, N3),
    // Godan, む.
    ("読む", "よむ", "to read", G, N5),
    ("飲む", "のむ", "to drink", G, N5),
    ("住む", "すむ", "to live in", G, N5),
    ("休む", "やすむ", "to rest", G, N5),
    ("頼む", "たのむ", "to ask for", G, N4),
    ("楽しむ", "たのしむ", "to enjoy", G, N4),
    ("悩む", "なやむ", "to worry", G, N3),
    ("望む", "のぞむ", "to wish for", G, N3),
    // Suru compounds.
    ("勉強する", "べんきょうする", "to study", S, N5),
    ("料理する", "りょうりする", "to cook", S, N5),
    ("掃除する", "そうじする", "to clean", S, N5),
    ("散歩する", "さんぽする", "to take a walk", S, N5),
    ("旅行する", "りょこうする", "to travel", S, N5),
    ("結婚する", "けっこんする", "to marry", S, N5),
    ("心配する", "しんぱいする", "to worry", S, N4),
    ("準備する", "じゅんびする", "to prepare", S, N4),
    ("説明する", "せつめいする", "to explain", S, N4),
    ("運転する", "うんてんする", "to drive", S, N4),
    ("練習する", "れんしゅうする", "to practice", S, N4),
    ("確認する", "かくにんする", "to confirm", S, N3),
    ("参加する", "さんかする", "to participate", S, N3),
    ("経験する", "けいけんする", "to experience", S, N3),
    ("相談する", "そうだんする", "to consult", S, N3),
    ("連絡する", "れんらくする", "to contact", S, N3),
];

/// A collection of verbs.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    verbs: Vec<Verb>,
}

impl Lexicon {
    /// The lexicon which ships with the crate.
    pub fn builtin() -> Self {
        let verbs = BUILTIN
            .iter()
            .map(|&(lemma, reading, gloss, class, level)| {
                Verb::new(lemma, reading, gloss, class, level)
            })
            .collect();

        Self { verbs }
    }

    /// Construct a lexicon out of verbs.
    ///
    /// # Errors
    ///
    /// Errors naming the first verb which can't be conjugated.
    pub fn from_verbs<V>(verbs: V) -> Result<Self>
    where
        V: IntoIterator<Item = Verb>,
    {
        let mut out = Vec::new();

        for verb in verbs {
            conjugate(&verb, Voice::Dictionary, Mode::Standard, Modifiers::default())
                .with_context(|| anyhow!("Malformed verb `{}`", verb.lemma))?;

            out.push(verb);
        }

        Ok(Self { verbs: out })
    }

    /// Parse a lexicon from a JSON array of verbs.
    pub fn from_json(json: &str) -> Result<Self> {
        let verbs: Vec<Verb> = serde_json::from_str(json)?;
        Self::from_verbs(verbs)
    }

    /// Open a lexicon file, which is decompressed first if it ends in `.gz`.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let input = File::open(path).with_context(|| anyhow!("{}", path.display()))?;

        let mut string = String::new();

        let result = if path.extension() == Some("gz".as_ref()) {
            GzDecoder::new(input).read_to_string(&mut string)
        } else {
            let mut input = input;
            input.read_to_string(&mut string)
        };

        result.with_context(|| anyhow!("{}", path.display()))?;

        let lexicon = Self::from_json(&string).with_context(|| anyhow!("{}", path.display()))?;
        tracing::info!(path = %path.display(), verbs = lexicon.len(), "Loaded lexicon");
        Ok(lexicon)
    }

    /// Number of verbs in the lexicon.
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Test if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Iterate over all verbs.
    pub fn iter(&self) -> impl Iterator<Item = &Verb> + '_ {
        self.verbs.iter()
    }

    /// The verbs matching any of the given levels and any of the given
    /// classes.
    pub fn filter(&self, levels: &Set<Level>, classes: &Set<VerbClass>) -> Vec<&Verb> {
        self.verbs
            .iter()
            .filter(|v| levels.contains(v.level) && classes.contains(v.class))
            .collect()
    }

    /// Find a verb by its lemma, or failing that by its reading.
    pub fn find(&self, query: &str) -> Option<&Verb> {
        let query = query.trim();

        self.verbs
            .iter()
            .find(|v| v.lemma == query)
            .or_else(|| self.verbs.iter().find(|v| v.reading == query))
    }
}
