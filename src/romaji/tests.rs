use super::to_hiragana;

#[test]
fn syllables() {
    assert_eq!(to_hiragana("kaku"), "かく");
    assert_eq!(to_hiragana("tabenakute"), "たべなくて");
    assert_eq!(to_hiragana("shichi"), "しち");
    assert_eq!(to_hiragana("tsukau"), "つかう");
    assert_eq!(to_hiragana("kyou"), "きょう");
    assert_eq!(to_hiragana("benkyoushimasu"), "べんきょうします");
    assert_eq!(to_hiragana("fuzakeru"), "ふざける");
}

#[test]
fn alternate_spellings() {
    assert_eq!(to_hiragana("si"), to_hiragana("shi"));
    assert_eq!(to_hiragana("ti"), to_hiragana("chi"));
    assert_eq!(to_hiragana("tu"), to_hiragana("tsu"));
    assert_eq!(to_hiragana("jya"), to_hiragana("ja"));
    assert_eq!(to_hiragana("tya"), to_hiragana("cha"));
}

#[test]
fn doubled_consonants() {
    assert_eq!(to_hiragana("itta"), "いった");
    assert_eq!(to_hiragana("zasshi"), "ざっし");
    assert_eq!(to_hiragana("kekkon"), "けっこん");
    assert_eq!(to_hiragana("nonde"), "のんで");
}

#[test]
fn syllabic_n() {
    assert_eq!(to_hiragana("hon"), "ほん");
    assert_eq!(to_hiragana("konnichiha"), "こんにちは");
    assert_eq!(to_hiragana("kin'en"), "きんえん");
    assert_eq!(to_hiragana("kinen"), "きねん");
    assert_eq!(to_hiragana("ninja"), "にんじゃ");
    assert_eq!(to_hiragana("konnya"), "こんにゃ");
}

#[test]
fn case_and_passthrough() {
    assert_eq!(to_hiragana("KAKIMASU"), "かきます");
    assert_eq!(to_hiragana("書いた"), "書いた");
    assert_eq!(to_hiragana("かいた"), "かいた");
    assert_eq!(to_hiragana("ka-do"), "かーど");
    assert_eq!(to_hiragana("ka q"), "か q");
    assert_eq!(to_hiragana(""), "");
}
