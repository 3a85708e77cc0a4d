//! `apply-conclusions` binary tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::json;
use wayback_test_utils::TestStore;

#[test]
fn rewrites_store_and_prints_summary() {
    let store = TestStore::sample();

    let mut cmd = cargo_bin_cmd!("apply-conclusions");
    cmd.arg("--data").arg(store.path());
    cmd.assert()
        .success()
        .stdout(contains(
            "Updated conclusions for 3 specialisms across 5 years.",
        ))
        .stdout(contains("No master conclusion found").not());

    let written = store.read_value();
    assert_eq!(
        written["Satellite"]["years"]["2026"]["conclusion"]
            .as_array()
            .map(Vec::len),
        Some(3)
    );
}

#[test]
fn lists_specialisms_without_conclusions() {
    let store = TestStore::with_value(&json!({
        "Quantum Networking": {"years": {"2016": {}}},
        "Satellite": {"years": {"2016": {}}}
    }));

    let mut cmd = cargo_bin_cmd!("apply-conclusions");
    cmd.env("WAYBACK_DATA", store.path());
    cmd.assert()
        .success()
        .stdout(contains(
            "Updated conclusions for 1 specialisms across 1 years.",
        ))
        .stdout(contains(
            "No master conclusion found for these specialisms (names must match exactly):\n - Quantum Networking",
        ));
}

#[test]
fn custom_catalog() {
    let store = TestStore::sample();
    let catalog = store.write_sibling("conclusions.json", r#"{"Cybersecurity": ["Only this."]}"#);

    let mut cmd = cargo_bin_cmd!("apply-conclusions");
    cmd.arg("--data").arg(store.path()).arg("--conclusions").arg(&catalog);
    cmd.assert()
        .success()
        .stdout(contains("Updated conclusions for 1 specialisms across 1 years."))
        .stdout(contains(" - Satellite"));

    assert_eq!(
        store.read_value()["Cybersecurity"]["years"]["2020"]["conclusion"],
        json!(["Only this."])
    );
}

#[test]
fn missing_store_exits_with_code_2() {
    let store = TestStore::missing();

    let mut cmd = cargo_bin_cmd!("apply-conclusions");
    cmd.arg("--data").arg(store.path());
    cmd.assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(contains("content store not found"));
}

#[test]
fn malformed_store_exits_with_code_2_and_keeps_file() {
    let store = TestStore::with_text("{ \"Satellite\": ");

    let mut cmd = cargo_bin_cmd!("apply-conclusions");
    cmd.arg("--data").arg(store.path());
    cmd.assert().code(2).stderr(contains("is not valid"));

    assert_eq!(store.read_text(), "{ \"Satellite\": ");
}
