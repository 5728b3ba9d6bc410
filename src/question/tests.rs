use fixed_map::Set;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::error::{EnabledKind, Error};
use crate::inflection::{conjugate, legal_modifiers, Mode, Modifier, Modifiers, Voice};
use crate::lexicon::Lexicon;
use crate::verb::{Level, Verb, VerbClass};

use super::{generate, Enabled, Stats};

fn kaku() -> Verb {
    Verb::new("書く", "かく", "to write", VerbClass::Godan, Level::N5)
}

#[test]
fn modifiers_are_always_legal() {
    let lexicon = Lexicon::builtin();
    let enabled = Enabled::all();
    let mut rng = SmallRng::seed_from_u64(0x6b61_7473);

    for verb in lexicon.iter() {
        for _ in 0..16 {
            let q = generate(verb, &enabled, &mut rng).expect("generated");
            assert!(q.modifiers.is_subset(legal_modifiers(q.mode)), "{q:?}");
            assert_eq!(
                conjugate(&q.verb, q.voice, q.mode, q.modifiers).as_ref(),
                Ok(&q.answer)
            );
        }
    }
}

#[test]
fn same_seed_same_questions() {
    let verb = kaku();
    let enabled = Enabled::all();

    let mut a = SmallRng::seed_from_u64(42);
    let mut b = SmallRng::seed_from_u64(42);

    for _ in 0..64 {
        assert_eq!(
            generate(&verb, &enabled, &mut a),
            generate(&verb, &enabled, &mut b)
        );
    }
}

#[test]
fn respects_enabled_sets() {
    let verb = kaku();

    let mut voices = Set::new();
    voices.insert(Voice::Potential);

    let mut modes = Set::new();
    modes.insert(Mode::Standard);
    modes.insert(Mode::TeForm);

    let enabled = Enabled {
        voices,
        modes,
        modifiers: crate::modifiers!(Negative),
    };

    let mut rng = SmallRng::seed_from_u64(7);
    let mut seen_negative = false;

    for _ in 0..128 {
        let q = generate(&verb, &enabled, &mut rng).expect("generated");
        assert_eq!(q.voice, Voice::Potential);
        assert!(matches!(q.mode, Mode::Standard | Mode::TeForm));
        assert!(!q.modifiers.contains(Modifier::Polite));
        assert!(!q.modifiers.contains(Modifier::Past));
        seen_negative |= q.modifiers.contains(Modifier::Negative);
    }

    assert!(seen_negative);
}

#[test]
fn imperative_has_no_modifiers() {
    let verb = kaku();

    let mut modes = Set::new();
    modes.insert(Mode::Imperative);

    let enabled = Enabled {
        modes,
        ..Enabled::all()
    };

    let mut rng = SmallRng::seed_from_u64(1);

    for _ in 0..32 {
        let q = generate(&verb, &enabled, &mut rng).expect("generated");
        assert_eq!(q.modifiers, Modifiers::default());
    }
}

#[test]
fn empty_enabled_sets() {
    let verb = kaku();
    let mut rng = SmallRng::seed_from_u64(0);

    let enabled = Enabled {
        voices: Set::new(),
        ..Enabled::all()
    };

    assert_eq!(
        generate(&verb, &enabled, &mut rng),
        Err(Error::EmptyEnabledSet(EnabledKind::Voices))
    );

    let enabled = Enabled {
        modes: Set::new(),
        ..Enabled::all()
    };

    assert_eq!(
        generate(&verb, &enabled, &mut rng),
        Err(Error::EmptyEnabledSet(EnabledKind::Modes))
    );
}

#[test]
fn grading() {
    let verb = kaku();

    let mut voices = Set::new();
    voices.insert(Voice::Dictionary);

    let mut modes = Set::new();
    modes.insert(Mode::Imperative);

    let enabled = Enabled {
        voices,
        modes,
        modifiers: Modifiers::default(),
    };

    let mut rng = SmallRng::seed_from_u64(3);
    let q = generate(&verb, &enabled, &mut rng).expect("generated");

    assert_eq!(q.answer.text, "書け");
    assert!(q.is_correct("書け"));
    assert!(q.is_correct(" かけ\n"));
    assert!(!q.is_correct("書く"));
    assert!(!q.is_correct("カケ"));

    assert!(q.is_identified(Voice::Dictionary, Mode::Imperative, Modifiers::default()));
    assert!(!q.is_identified(Voice::Potential, Mode::Imperative, Modifiers::default()));
    assert_eq!(q.describe(), "imperative");
    assert_eq!(q.describe_title(), "命令形");
}

#[test]
fn stats() {
    let mut stats = Stats::default();
    assert_eq!(stats.accuracy(), None);

    for correct in [true, true, false, true, true, true, false] {
        stats.record(correct);
    }

    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 3);
    assert_eq!(stats.total_correct, 5);
    assert_eq!(stats.total_attempts, 7);
    assert_eq!(stats.accuracy(), Some(71));

    stats.record(true);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.max_streak, 3);
}

#[test]
fn descriptions_are_recognized() {
    let verb = kaku();
    let enabled = Enabled::all();
    let mut rng = SmallRng::seed_from_u64(0x7265_636f);

    for _ in 0..200 {
        let q = generate(&verb, &enabled, &mut rng).expect("generated");
        assert!(q.is_recognized(&q.describe()), "{}", q.describe());
        assert!(q.is_recognized(&q.describe_title()), "{}", q.describe_title());
    }
}

#[test]
fn recognized_guesses() {
    let verb = kaku();

    let mut voices = Set::new();
    voices.insert(Voice::Dictionary);

    let mut modes = Set::new();
    modes.insert(Mode::Standard);

    let enabled = Enabled {
        voices,
        modes,
        modifiers: Modifiers::default(),
    };

    let mut rng = SmallRng::seed_from_u64(5);
    let q = generate(&verb, &enabled, &mut rng).expect("generated");

    assert!(q.is_recognized("dictionary form"));
    assert!(q.is_recognized(" Dictionary Form "));
    assert!(q.is_recognized("dictionary"));
    assert!(!q.is_recognized(""));
    assert!(!q.is_recognized("dictionary + polite"));
    assert!(!q.is_recognized("conditional"));
}
