//! Pool file loading and startup layering.

use std::io::Write;

use sakuseikan::cli::{parse_args, CliCommand};
use sakuseikan::config::{AnswerTemplate, PoolConfig, StartupConfig, POOLS_ENV, SEED_ENV};
use sakuseikan::controller::InteractionController;
use sakuseikan::error::ConfigError;
use tempfile::NamedTempFile;

fn pool_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

const CUSTOM_POOLS: &str = r#"{
    "themes": ["What is a friend?"],
    "card_images": ["a.png", "b.png", "c.png"],
    "reflections": ["Thank you."],
    "template": { "prefix": "I believe ", "suffix": "." }
}"#;

#[test]
fn test_load_custom_pools_from_cli_path() {
    let file = pool_file(CUSTOM_POOLS);
    let args = vec![
        "sakuseikan".to_string(),
        "--pools".to_string(),
        file.path().display().to_string(),
        "--seed=8".to_string(),
    ];
    let CliCommand::Run(options) = parse_args(args.into_iter()) else {
        panic!("expected a run command");
    };

    let config = StartupConfig::default().with_run_options(options);
    assert_eq!(config.seed, Some(8));

    let pools = config.load_pools().unwrap();
    assert_eq!(pools.themes, vec!["What is a friend?".to_string()]);
    assert_eq!(pools.template, AnswerTemplate::new("I believe ", "."));
}

#[test]
fn test_custom_template_shapes_the_flight() {
    let file = pool_file(CUSTOM_POOLS);
    let config = StartupConfig::default().with_pools_path(file.path()).with_seed(1);
    let pools = config.load_pools().unwrap();

    let mut controller = InteractionController::new(pools.into(), config.build_rng());
    assert_eq!(controller.session().displayed_cards().len(), 3);
    controller.select_card(0);
    assert_eq!(controller.session().current_prompt(), Some("What is a friend?"));
    controller.update_draft("  kindness ");
    controller.send_answer().unwrap();
    assert_eq!(controller.session().active_flights()[0].text, "I believe kindness.");
    assert_eq!(controller.session().reply_message(), Some("Thank you."));
}

#[test]
fn test_template_is_optional() {
    let file = pool_file(
        r#"{"themes": ["Why?"], "card_images": ["x", "y", "z"], "reflections": ["Mm."]}"#,
    );
    let pools = PoolConfig::load(file.path()).unwrap();
    assert_eq!(pools.template, AnswerTemplate::default());
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = StartupConfig::default()
        .with_pools_path(&path)
        .load_pools()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let file = pool_file("{ not json");
    let err = PoolConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_too_few_cards_rejected() {
    let file = pool_file(r#"{"themes": ["Why?"], "card_images": ["x", "y"], "reflections": ["Mm."]}"#);
    let err = PoolConfig::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::TooFewEntries { pool: "card_images", min: 3, found: 2 }
    ));
}

#[test]
fn test_duplicate_cards_rejected() {
    let file = pool_file(
        r#"{"themes": ["Why?"], "card_images": ["x", "y", "x"], "reflections": ["Mm."]}"#,
    );
    let err = PoolConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateCard { .. }));
}

#[test]
fn test_cli_overrides_environment() {
    let env = |key: &str| match key {
        k if k == POOLS_ENV => Some("/from/env.json".to_string()),
        k if k == SEED_ENV => Some("5".to_string()),
        _ => None,
    };
    let base = StartupConfig::from_vars(env);
    assert_eq!(base.seed, Some(5));

    let args = vec!["sakuseikan".to_string(), "--seed".to_string(), "6".to_string()];
    let CliCommand::Run(options) = parse_args(args.into_iter()) else {
        panic!("expected a run command");
    };
    let config = base.with_run_options(options);
    assert_eq!(config.seed, Some(6));
    assert_eq!(
        config.pools_path.as_deref(),
        Some(std::path::Path::new("/from/env.json"))
    );
}
