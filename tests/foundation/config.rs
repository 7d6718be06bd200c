//! Integration tests for Config

use wayfarer_foundation::{CommandKind, Config, ConfigKey, ConfigValue, ErrorKind, KeywordForm};

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.text(ConfigKey::Prompt), "> ");
    assert_eq!(config.text(ConfigKey::UnknownCommand), "Pardon?");
    assert_eq!(config.text(ConfigKey::GameOver), "GAME OVER");
    assert!(config.flag(ConfigKey::ShowEngineInfo));
    assert!(config.flag(ConfigKey::ShowItemValues));
    assert!(!config.flag(ConfigKey::TakeAllowFifo));
    assert!(!config.flag(ConfigKey::TakeAllowRepetitions));
    assert!(!config.flag(ConfigKey::DropAllowFifo));
    assert_eq!(config.history_limit(), 1);
}

#[test]
fn default_keywords_per_kind() {
    let config = Config::default();
    for kind in CommandKind::ALL {
        assert_eq!(config.keywords(kind), kind.default_keywords());
    }
    assert_eq!(config.keywords(CommandKind::Examine), ["examine", "x", "inspect"]);
}

#[test]
fn every_key_has_a_distinct_name() {
    let mut names: Vec<String> = ConfigKey::all().map(|k| k.name().to_ascii_lowercase()).collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn keyword_key_names() {
    assert_eq!(
        ConfigKey::Keyword(CommandKind::Go, KeywordForm::Primary).name(),
        "keyword.goCommand"
    );
    assert_eq!(
        ConfigKey::Keyword(CommandKind::Go, KeywordForm::Abbrev).name(),
        "keyword.goCommand.abbrev"
    );
    assert_eq!(
        ConfigKey::CommandHelp(CommandKind::Undo).name(),
        "message.undoCommand.help"
    );
}

#[test]
fn table_keys_are_case_insensitive() {
    let config = Config::from_table([
        ("MESSAGE.PROMPT", "? "),
        ("flag.takecommand.allowfifodisambiguationforitemnamerepeatedinlocation", "TRUE"),
    ])
    .unwrap();
    assert_eq!(config.text(ConfigKey::Prompt), "? ");
    assert!(config.flag(ConfigKey::TakeAllowFifo));
}

#[test]
fn booleans_other_than_true_are_false() {
    let config = Config::from_table([("flag.showGameInfo", "1"), ("flag.showItemValues", "True")]).unwrap();
    assert!(!config.flag(ConfigKey::ShowGameInfo));
    assert!(config.flag(ConfigKey::ShowItemValues));
}

#[test]
fn bad_integer_fails() {
    let err = Config::from_table([("limit.commandHistorySize", "1.5")]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidConfig { .. }));
}

#[test]
fn negative_history_limit_keeps_nothing() {
    let config = Config::from_table([("limit.commandHistorySize", "-3")]).unwrap();
    assert_eq!(config.number(ConfigKey::CommandHistorySize), -3);
    assert_eq!(config.history_limit(), 0);
}

#[test]
fn builder_overrides() {
    let config = Config::new()
        .with(ConfigKey::QuitBye, "Farewell.")
        .with(ConfigKey::CommandHistorySize, 5_i64);
    assert_eq!(config.text(ConfigKey::QuitBye), "Farewell.");
    assert_eq!(config.history_limit(), 5);
    assert!(matches!(config.get(ConfigKey::QuitBye), Some(ConfigValue::Text(_))));
}
