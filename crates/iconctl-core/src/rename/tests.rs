//! Rename driver tests over a temp directory and a scripted search engine.

use super::*;
use crate::config::NamingConfig;
use crate::testing::FakeSearch;
use std::path::Path;
use tempfile::tempdir;

fn renamer<'a>(dir: &Path, search: &'a FakeSearch) -> Renamer<&'a FakeSearch> {
    let identifier =
        InstitutionIdentifier::new(search, &NamingConfig::default()).with_pause(Duration::ZERO);
    Renamer::new(dir, "svg", identifier, Duration::ZERO)
}

fn nubank_search() -> FakeSearch {
    FakeSearch::new().with(
        "pluggy connector 201 svg bank",
        &["Nubank - Wikipedia", "Nu Pagamentos connector icon"],
    )
}

#[test]
fn renames_to_identifier_and_slug() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("201.svg"), "<svg><title>Nubank</title></svg>").unwrap();
    let search = nubank_search();

    let report = renamer(dir.path(), &search).run().unwrap();

    assert_eq!(
        report.assets,
        vec![AssetReport {
            id: 201,
            file_name: "201.svg".to_string(),
            outcome: RenameOutcome::Renamed {
                to: "201_nubank.svg".to_string()
            },
        }]
    );
    assert!(!dir.path().join("201.svg").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("201_nubank.svg")).unwrap(),
        "<svg><title>Nubank</title></svg>"
    );
    assert_eq!(*search.queries.borrow(), vec!["pluggy connector 201 svg bank"]);
}

#[test]
fn existing_target_is_never_overwritten() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("201.svg"), "new").unwrap();
    fs::write(dir.path().join("201_nubank.svg"), "old").unwrap();
    let search = nubank_search();

    let report = renamer(dir.path(), &search).run().unwrap();

    assert_eq!(
        report.assets[0].outcome,
        RenameOutcome::TargetExists {
            target: "201_nubank.svg".to_string()
        }
    );
    assert_eq!(fs::read_to_string(dir.path().join("201.svg")).unwrap(), "new");
    assert_eq!(fs::read_to_string(dir.path().join("201_nubank.svg")).unwrap(), "old");
    assert_eq!(report.renamed(), 0);
    assert_eq!(report.skipped(), 1);
}

#[test]
fn no_match_is_skipped_and_batch_continues() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("201.svg"), "<svg/>").unwrap();
    fs::write(dir.path().join("202.svg"), "<svg><desc>Banco Pan</desc></svg>").unwrap();
    let search = FakeSearch::new()
        .failing("pluggy connector 201 svg bank", 7)
        .with("Banco Pan logo", &["Banco Pan: Conta Digital - Home"]);

    let mut seen = Vec::new();
    let report = renamer(dir.path(), &search)
        .run_with(|a| seen.push(a.id))
        .unwrap();

    assert_eq!(seen, vec![201, 202]);
    assert_eq!(report.assets[0].outcome, RenameOutcome::NoMatch);
    assert_eq!(
        report.assets[1].outcome,
        RenameOutcome::Renamed {
            to: "202_banco_pan_conta_digital.svg".to_string()
        }
    );
    assert!(dir.path().join("201.svg").exists());
    assert!(dir.path().join("202_banco_pan_conta_digital.svg").exists());
}

#[test]
fn dry_run_leaves_files_alone() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("201.svg"), "<svg/>").unwrap();
    let search = nubank_search();

    let report = renamer(dir.path(), &search).dry_run(true).run().unwrap();

    assert_eq!(
        report.assets[0].outcome,
        RenameOutcome::WouldRename {
            to: "201_nubank.svg".to_string()
        }
    );
    assert!(dir.path().join("201.svg").exists());
    assert!(!dir.path().join("201_nubank.svg").exists());
}

#[test]
fn invalid_utf8_content_is_tolerated() {
    let dir = tempdir().unwrap();
    let mut content = b"<svg><title>Banco \xff Inter</title>".to_vec();
    content.extend_from_slice(b"</svg>");
    fs::write(dir.path().join("7.svg"), content).unwrap();
    let search = FakeSearch::new().with("Banco \u{fffd} Inter logo", &["Banco Inter - Home"]);

    let report = renamer(dir.path(), &search).run().unwrap();
    assert_eq!(
        report.assets[0].outcome,
        RenameOutcome::Renamed {
            to: "7_banco_inter.svg".to_string()
        }
    );
}

#[test]
fn missing_directory_is_fatal() {
    let dir = tempdir().unwrap();
    let search = FakeSearch::new();
    let missing = dir.path().join("connector-icons");
    match renamer(&missing, &search).run() {
        Err(RenameError::MissingDirectory(p)) => assert_eq!(p, missing),
        other => panic!("expected MissingDirectory, got {:?}", other),
    }
}

#[test]
fn empty_directory_is_an_empty_report() {
    let dir = tempdir().unwrap();
    let search = FakeSearch::new();
    let report = renamer(dir.path(), &search).run().unwrap();
    assert!(report.assets.is_empty());
    assert!(search.queries.borrow().is_empty());
}
