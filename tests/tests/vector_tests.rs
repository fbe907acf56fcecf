//! Known-answer vectors for ChaCha20, Salsa20 and RC4

use streamcore_tests::suites::vectors::{self, dispatcher, error::VectorError, loader};

fn run_named(name: &str, expected_cases: usize) {
    let file = loader::load_by_name(name).unwrap_or_else(|e| panic!("{}", e));
    let summary = vectors::run_file(&file).unwrap();

    assert!(
        summary.is_success(),
        "{} failures: {:#?}",
        file.algorithm,
        summary.failed
    );
    assert_eq!(summary.passed, expected_cases);
}

#[test]
fn chacha20_vectors() {
    run_named("chacha20", 7);
}

#[test]
fn salsa20_vectors() {
    run_named("salsa20", 5);
}

#[test]
fn rc4_vectors() {
    run_named("rc4", 8);
}

#[test]
fn all_vector_files_load() {
    let files = loader::load_all().unwrap();
    let mut algorithms: Vec<_> = files.iter().map(|f| f.algorithm.as_str()).collect();
    algorithms.sort_unstable();
    assert_eq!(algorithms, ["ChaCha20", "RC4", "Salsa20"]);

    for file in &files {
        assert!(file.source.is_some());
        assert!(vectors::run_file(file).unwrap().is_success());
    }
}

#[test]
fn unknown_test_type_has_no_handler() {
    match dispatcher::handler_for("ChaCha20", "mct") {
        Err(VectorError::NoHandler { algorithm, test_type }) => {
            assert_eq!(algorithm, "ChaCha20");
            assert_eq!(test_type, "mct");
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("handler registered for an unknown test type"),
    }
}

#[test]
fn missing_file_reports_path() {
    let err = loader::load_by_name("does-not-exist").unwrap_err();
    assert!(matches!(err, VectorError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[test]
fn tampered_vector_is_reported() {
    let json = r#"{
        "algorithm": "RC4",
        "testGroups": [{
            "tgId": 1,
            "testType": "encrypt",
            "tests": [{ "tcId": 9, "key": "4b6579", "pt": "00", "ct": "00" }]
        }]
    }"#;
    let file: vectors::model::VectorFile = serde_json::from_str(json).unwrap();
    let summary = vectors::run_file(&file).unwrap();

    assert_eq!(summary.passed, 0);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, 9);
    assert!(summary.failed[0].1.contains("mismatch"));
}
