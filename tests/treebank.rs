use std::fs;
use std::path::Path;

use fixturegen::config::Config;
use fixturegen::{generate_treebank, Error};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn config_with_input(json: &str) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        testdata_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    fs::write(config.tokenize_input_path(), json).unwrap();
    (dir, config)
}

fn read_outputs(config: &Config) -> (Vec<Vec<String>>, Vec<String>) {
    let words = fs::read_to_string(config.treebank_words_path()).unwrap();
    let sents = fs::read_to_string(config.treebank_sents_path()).unwrap();
    (
        serde_json::from_str(&words).unwrap(),
        serde_json::from_str(&sents).unwrap(),
    )
}

#[test]
fn writes_aligned_fixtures() {
    let (_dir, config) = config_with_input(
        r#"["Hello world. It's fine.", "They'll save and invest more. Mr. Smith can't come!"]"#,
    );

    generate_treebank(&config).unwrap();
    let (words, sents) = read_outputs(&config);

    assert_eq!(
        sents,
        [
            "Hello world.",
            "It's fine.",
            "They'll save and invest more.",
            "Mr. Smith can't come!",
        ]
    );
    assert_eq!(words.len(), sents.len());
    assert_eq!(words[1], ["It", "'s", "fine", "."]);
    assert_eq!(words[3], ["Mr.", "Smith", "ca", "n't", "come", "!"]);
    assert!(words.iter().flatten().all(|token| !token.is_empty()));
}

#[test]
fn output_is_indented_and_stable() {
    let (_dir, config) = config_with_input(r#"["Hi there. Bye."]"#);

    generate_treebank(&config).unwrap();
    let first_words = fs::read(config.treebank_words_path()).unwrap();
    let first_sents = fs::read(config.treebank_sents_path()).unwrap();

    generate_treebank(&config).unwrap();
    assert_eq!(fs::read(config.treebank_words_path()).unwrap(), first_words);
    assert_eq!(fs::read(config.treebank_sents_path()).unwrap(), first_sents);

    assert_eq!(
        String::from_utf8(first_sents).unwrap(),
        "[\n    \"Hi there.\",\n    \"Bye.\"\n]"
    );
}

#[test]
fn overwrites_previous_output() {
    let (_dir, config) = config_with_input(r#"["Fresh."]"#);
    fs::write(config.treebank_sents_path(), "stale content that is longer").unwrap();

    generate_treebank(&config).unwrap();
    let (_, sents) = read_outputs(&config);
    assert_eq!(sents, ["Fresh."]);
}

#[test]
fn empty_input_writes_empty_arrays() {
    let (_dir, config) = config_with_input("[]");

    generate_treebank(&config).unwrap();
    assert_eq!(
        fs::read_to_string(config.treebank_words_path()).unwrap(),
        "[]"
    );
    assert_eq!(
        fs::read_to_string(config.treebank_sents_path()).unwrap(),
        "[]"
    );
}

#[test]
fn malformed_input_is_fatal() {
    let (_dir, config) = config_with_input(r#"{"not": "an array"}"#);

    assert!(matches!(
        generate_treebank(&config),
        Err(Error::Json { .. })
    ));
    assert!(!config.treebank_words_path().exists());
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        testdata_dir: dir.path().to_path_buf(),
        ..Config::default()
    };

    assert!(matches!(generate_treebank(&config), Err(Error::Io { .. })));
}

#[test]
fn shipped_input_produces_expected_sentences() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        testdata_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let shipped = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/tokenize.json");
    fs::copy(shipped, config.tokenize_input_path()).unwrap();

    generate_treebank(&config).unwrap();
    let (words, sents) = read_outputs(&config);

    assert_eq!(
        sents,
        [
            "Hello world.",
            "It's fine.",
            "They'll save and invest more.",
            "Mr. Smith can't come to the U.S. office today!",
            "\"Stop,\" she said.",
            "\"I cannot go (not yet) -- maybe tomorrow...\"",
            "The price rose 3.5% to $1,000 on Jan. 5.",
            "Analysts weren't surprised.",
        ]
    );
    assert_eq!(words.len(), sents.len());
    assert!(words.iter().all(|tokens| !tokens.is_empty()));
    assert!(words.iter().flatten().all(|token| !token.is_empty()));
    assert_eq!(
        words[6],
        ["The", "price", "rose", "3.5", "%", "to", "$", "1,000", "on", "Jan.", "5", "."]
    );
    assert_eq!(words[7], ["Analysts", "were", "n't", "surprised", "."]);
}
