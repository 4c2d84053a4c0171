use crate::error::GcgError;
use crate::lexicon::*;

const DEFS: &str = include_str!("../testdata/defs.csv");

#[test]
fn parses_definitions_and_markers() {
    let lexicon = Lexicon::parse(DEFS).unwrap();
    assert_eq!(lexicon.len(), 8);

    assert_eq!(lexicon.definition("MUZJIKS"), "MUZJIK, a Russian peasant [n]");
    assert_eq!(lexicon.markers("MUZJIKS"), "+$");
    assert_eq!(lexicon.markers("EDITION"), "#");
    assert_eq!(lexicon.markers("POTTIER"), "");
    assert_eq!(lexicon.definition("POTTIER"), "POTTY, small and trivial [adj]");

    // Only lowercase x is a marker.
    assert_eq!(lexicon.definition("BOX"), "a rectangular container");
    assert_eq!(lexicon.markers("BOX"), "");
}

#[test]
fn misses_are_empty() {
    let lexicon = Lexicon::parse(DEFS).unwrap();
    assert_eq!(lexicon.definition("DEUTERA"), "");
    assert_eq!(lexicon.markers("DEUTERA"), "");
    assert!(Lexicon::default().is_empty());
}

#[test]
fn keys_are_trimmed_and_uppercased() {
    let lexicon = Lexicon::parse("  qi+x ,  'a vital force'  \n\nZA,''\n").unwrap();
    assert_eq!(lexicon.definition("QI"), "a vital force");
    assert_eq!(lexicon.markers("QI"), "+x");
    assert_eq!(lexicon.definition("ZA"), "");
    assert_eq!(lexicon.len(), 2);
}

#[test]
fn lines_without_a_comma_are_errors() {
    assert_eq!(
        Lexicon::parse("QI,'a vital force'\nZA\n").unwrap_err(),
        GcgError::Definition {
            line: "ZA".to_string()
        }
    );
}

#[tokio::test]
async fn loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("defs.csv");
    tokio::fs::write(&path, DEFS).await.unwrap();

    let lexicon = Lexicon::load(&path).await.unwrap();
    assert_eq!(lexicon.definition("ABBOTCY"), "the office of an abbot [n ABBOTCIES]");
    assert!(Lexicon::load(dir.path().join("missing.csv")).await.is_err());
}
