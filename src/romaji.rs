//! Conversion of typed romaji into hiragana.

#[cfg(test)]
mod tests;

/// Consonants which are doubled to produce a small っ.
const DOUBLED: &str = "kgsztdhbpmyrw";

/// Letters after which an `n` starts a new syllable rather than being ん.
const SYLLABIC: &str = "yaeiou";

/// Convert romaji input into hiragana.
///
/// Syllables are matched greedily, preferring the longest spelling. Anything
/// which isn't recognised, like kana or kanji, is passed through as-is.
///
/// # Examples
///
/// ```rust
/// use katsuyou::romaji::to_hiragana;
///
/// assert_eq!(to_hiragana("kakimashita"), "かきました");
/// assert_eq!(to_hiragana("itte"), "いって");
/// assert_eq!(to_hiragana("kin'en"), "きんえん");
/// assert_eq!(to_hiragana("書いた"), "書いた");
/// ```
pub fn to_hiragana(input: &str) -> String {
    let text = input.to_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut rest = text.as_str();

    while let Some(c) = rest.chars().next() {
        let next = rest[c.len_utf8()..].chars().next();

        if next == Some(c) && DOUBLED.contains(c) {
            out.push('っ');
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if c == 'n' {
            let skip = match next {
                None => Some(1),
                Some('\'') => Some(2),
                Some(n) if !SYLLABIC.contains(n) => Some(1),
                _ => None,
            };

            if let Some(skip) = skip {
                out.push('ん');
                rest = &rest[skip..];
                continue;
            }
        }

        let matched = [3, 2, 1]
            .into_iter()
            .find_map(|len| Some((len, syllable(rest.get(..len)?)?)));

        if let Some((len, kana)) = matched {
            out.push_str(kana);
            rest = &rest[len..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn syllable(romaji: &str) -> Option<&'static str> {
    let kana = match romaji {
        "a" => "あ",
        "i" => "い",
        "u" => "う",
        "e" => "え",
        "o" => "お",
        "ka" => "か",
        "ki" => "き",
        "ku" => "く",
        "ke" => "け",
        "ko" => "こ",
        "ga" => "が",
        "gi" => "ぎ",
        "gu" => "ぐ",
        "ge" => "げ",
        "go" => "ご",
        "sa" => "さ",
        "si" | "shi" => "し",
        "su" => "す",
        "se" => "せ",
        "so" => "そ",
        "za" => "ざ",
        "zi" | "ji" => "じ",
        "zu" => "ず",
        "ze" => "ぜ",
        "zo" => "ぞ",
        "ta" => "た",
        "ti" | "chi" => "ち",
        "tu" | "tsu" => "つ",
        "te" => "て",
        "to" => "と",
        "da" => "だ",
        "di" => "ぢ",
        "du" => "づ",
        "de" => "で",
        "do" => "ど",
        "na" => "な",
        "ni" => "に",
        "nu" => "ぬ",
        "ne" => "ね",
        "no" => "の",
        "ha" => "は",
        "hi" => "ひ",
        "hu" | "fu" => "ふ",
        "he" => "へ",
        "ho" => "ほ",
        "ba" => "ば",
        "bi" => "び",
        "bu" => "ぶ",
        "be" => "べ",
        "bo" => "ぼ",
        "pa" => "ぱ",
        "pi" => "ぴ",
        "pu" => "ぷ",
        "pe" => "ぺ",
        "po" => "ぽ",
        "ma" => "ま",
        "mi" => "み",
        "mu" => "む",
        "me" => "め",
        "mo" => "も",
        "ya" => "や",
        "yu" => "ゆ",
        "yo" => "よ",
        "ra" => "ら",
        "ri" => "り",
        "ru" => "る",
        "re" => "れ",
        "ro" => "ろ",
        "wa" => "わ",
        "wi" => "ゐ",
        "we" => "ゑ",
        "wo" => "を",
        "n" => "ん",
        "kya" => "きゃ",
        "kyu" => "きゅ",
        "kyo" => "きょ",
        "gya" => "ぎゃ",
        "gyu" => "ぎゅ",
        "gyo" => "ぎょ",
        "sha" | "sya" => "しゃ",
        "shu" | "syu" => "しゅ",
        "sho" | "syo" => "しょ",
        "ja" | "jya" | "zya" => "じゃ",
        "ju" | "jyu" | "zyu" => "じゅ",
        "jo" | "jyo" | "zyo" => "じょ",
        "cha" | "tya" => "ちゃ",
        "chu" | "tyu" => "ちゅ",
        "cho" | "tyo" => "ちょ",
        "dya" => "ぢゃ",
        "dyu" => "ぢゅ",
        "dyo" => "ぢょ",
        "nya" => "にゃ",
        "nyu" => "にゅ",
        "nyo" => "にょ",
        "hya" => "ひゃ",
        "hyu" => "ひゅ",
        "hyo" => "ひょ",
        "bya" => "びゃ",
        "byu" => "びゅ",
        "byo" => "びょ",
        "pya" => "ぴゃ",
        "pyu" => "ぴゅ",
        "pyo" => "ぴょ",
        "mya" => "みゃ",
        "myu" => "みゅ",
        "myo" => "みょ",
        "rya" => "りゃ",
        "ryu" => "りゅ",
        "ryo" => "りょ",
        "ltu" | "xtu" => "っ",
        "lya" | "xya" => "ゃ",
        "lyu" | "xyu" => "ゅ",
        "lyo" | "xyo" => "ょ",
        "la" | "xa" => "ぁ",
        "li" | "xi" => "ぃ",
        "lu" | "xu" => "ぅ",
        "le" | "xe" => "ぇ",
        "lo" | "xo" => "ぉ",
        "-" => "ー",
        _ => return None,
    };

    Some(kana)
}
