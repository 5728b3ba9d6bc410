use crate::inflection::{Mode, Modifier, Voice};
use crate::verb::{Level, VerbClass};

use super::Config;

#[test]
fn empty_is_default() {
    let config: Config = toml::from_str("").expect("parsed");
    assert_eq!(config, Config::default());
}

#[test]
fn keywords() {
    let config: Config = toml::from_str(
        r#"
        levels = ["n5"]
        classes = ["godan", "suru"]
        voices = ["potential", "causative-passive"]
        modes = ["te", "imperative"]
        modifiers = ["negative"]
        "#,
    )
    .expect("parsed");

    assert!(config.levels.contains(Level::N5));
    assert!(!config.levels.contains(Level::N4));
    assert!(config.classes.contains(VerbClass::SuruCompound));
    assert!(!config.classes.contains(VerbClass::Ichidan));
    assert!(config.voices.contains(Voice::CausativePassive));
    assert!(!config.voices.contains(Voice::Dictionary));
    assert!(config.modes.contains(Mode::TeForm));
    assert_eq!(config.modifiers, crate::modifiers!(Negative));

    let enabled = config.enabled();
    assert_eq!(enabled.voices, config.voices);
    assert!(!enabled.modifiers.contains(Modifier::Polite));
}

#[test]
fn rejects_unknown() {
    assert!(toml::from_str::<Config>(r#"modes = ["conditional"]"#).is_err());
    assert!(toml::from_str::<Config>(r#"speech = true"#).is_err());
}

#[test]
fn defaults() {
    let config = Config::default();
    assert!(config.levels.contains(Level::N3));
    assert!(!config.levels.contains(Level::N2));
    assert_eq!(config.voices.iter().collect::<Vec<_>>(), [Voice::Dictionary]);
    assert_eq!(
        config.modes.iter().collect::<Vec<_>>(),
        [Mode::Standard, Mode::TeForm]
    );
}
