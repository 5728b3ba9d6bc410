use super::{is_hiragana, row, Pair, Row};

#[test]
fn pair_suffixes() {
    let pair = Pair::new("書", "か", ["き", "ます"]);
    assert_eq!(pair.text, "書きます");
    assert_eq!(pair.reading, "かきます");

    let pair = pair.concat("か");
    assert_eq!(pair.text, "書きますか");
    assert_eq!(pair.reading, "かきますか");
}

#[test]
fn pair_display() {
    assert_eq!(Pair::new("書", "か", ["く"]).to_string(), "書く (かく)");
    assert_eq!(Pair::new("", "", ["する"]).to_string(), "する");
}

#[test]
fn rows() {
    assert_eq!(row('わ'), Some(Row::A));
    assert_eq!(row('み'), Some(Row::I));
    assert_eq!(row('る'), Some(Row::U));
    assert_eq!(row('べ'), Some(Row::E));
    assert_eq!(row('ろ'), Some(Row::O));
    assert_eq!(row('ん'), None);
    assert_eq!(row('ゃ'), None);
    assert_eq!(row('カ'), None);
}

#[test]
fn hiragana() {
    assert!("べんきょうしましょう".chars().all(is_hiragana));
    assert!(!is_hiragana('書'));
    assert!(!is_hiragana('カ'));
    assert!(!is_hiragana('a'));
}
