use std::io::Write;

use fixed_map::Set;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::verb::{Level, VerbClass};

use super::Lexicon;

const JSON: &str = r#"[
    {"lemma": "書く", "reading": "かく", "gloss": "to write", "class": "godan", "level": "n5"},
    {"lemma": "食べる", "reading": "たべる", "gloss": "to eat", "class": "ichidan", "level": "n5"},
    {"lemma": "勉強する", "reading": "べんきょうする", "gloss": "to study", "class": "suru", "level": "n4"}
]"#;

#[test]
fn builtin_covers_every_class_and_terminal() {
    let lexicon = Lexicon::builtin();

    for &class in VerbClass::ALL {
        assert!(lexicon.iter().any(|v| v.class == class), "{class}");
    }

    for terminal in ['う', 'つ', 'る', 'く', 'ぐ', 'す', 'ぬ', 'ぶ', 'む'] {
        assert!(
            lexicon
                .iter()
                .any(|v| v.class == VerbClass::Godan && v.reading.ends_with(terminal)),
            "{terminal}"
        );
    }
}

#[test]
fn builtin_is_well_formed() {
    let lexicon = Lexicon::builtin();
    let checked = Lexicon::from_verbs(lexicon.iter().cloned()).expect("well-formed");
    assert_eq!(checked.len(), lexicon.len());
}

#[test]
fn json_rejects_malformed_entries() {
    let lexicon = Lexicon::from_json(JSON).expect("parsed");
    assert_eq!(lexicon.len(), 3);

    let json = r#"[
        {"lemma": "食べる", "reading": "たべる", "gloss": "to eat", "class": "ichidan", "level": "n5"},
        {"lemma": "書く", "reading": "かく", "gloss": "to write", "class": "ichidan", "level": "n4"}
    ]"#;

    let error = Lexicon::from_json(json).expect_err("malformed");
    let message = format!("{error:#}");
    assert!(message.contains("Malformed verb `書く`"), "{message}");
}

#[test]
fn open_names_malformed_file() {
    let dir = std::env::temp_dir().join(format!("katsuyou-malformed-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("created directory");

    let path = dir.join("verbs.json");
    let json = r#"[{"lemma": "読む", "reading": "よむ", "gloss": "", "class": "irregular", "level": "n5"}]"#;
    std::fs::write(&path, json).expect("written");

    let error = Lexicon::open(&path).expect_err("malformed");
    let message = format!("{error:#}");
    assert!(message.contains("verbs.json"), "{message}");
    assert!(message.contains("Malformed verb `読む`"), "{message}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn json_rejects_unknown_keywords() {
    let json = r#"[{"lemma": "書く", "reading": "かく", "gloss": "", "class": "u-verb", "level": "n5"}]"#;
    assert!(Lexicon::from_json(json).is_err());
}

#[test]
fn filter() {
    let lexicon = Lexicon::from_json(JSON).expect("parsed");

    let mut levels = Set::new();
    levels.insert(Level::N5);

    let mut classes = Set::new();
    classes.insert(VerbClass::Godan);
    classes.insert(VerbClass::SuruCompound);

    let verbs = lexicon.filter(&levels, &classes);
    assert_eq!(verbs.len(), 1);
    assert_eq!(verbs[0].lemma, "書く");

    levels.insert(Level::N4);
    let verbs = lexicon.filter(&levels, &classes);
    assert_eq!(verbs.len(), 2);

    assert!(lexicon.filter(&Set::new(), &classes).is_empty());
}

#[test]
fn find() {
    let lexicon = Lexicon::builtin();

    assert_eq!(lexicon.find("行く").map(|v| v.reading.as_str()), Some("いく"));
    assert_eq!(lexicon.find(" たべる ").map(|v| v.lemma.as_str()), Some("食べる"));
    assert_eq!(lexicon.find("かえる").map(|v| v.lemma.as_str()), Some("帰る"));
    assert!(lexicon.find("ある").is_none());
}

#[test]
fn open_gzip() {
    let dir = std::env::temp_dir().join(format!("katsuyou-lexicon-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("created directory");

    let plain = dir.join("verbs.json");
    std::fs::write(&plain, JSON).expect("written");

    let gz = dir.join("verbs.json.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(JSON.as_bytes()).expect("compressed");
    std::fs::write(&gz, encoder.finish().expect("compressed")).expect("written");

    let a = Lexicon::open(&plain).expect("opened");
    let b = Lexicon::open(&gz).expect("opened");

    assert_eq!(a.len(), 3);
    assert_eq!(
        a.iter().collect::<Vec<_>>(),
        b.iter().collect::<Vec<_>>()
    );

    assert!(Lexicon::open(dir.join("missing.json")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
