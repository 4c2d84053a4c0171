use std::path::PathBuf;

use argh::FromArgs;

use crate::bag::VowelSet;
use crate::config::{ScoreOutput, Version};
use crate::Args;

fn args(flags: &[&str]) -> Args {
    Args::from_args(&["watchgcg"], flags).unwrap()
}

#[test]
fn au_flags() {
    let config = args(&[
        "--gcg", "game.gcg", "--lex", "defs.csv", "--unseen", "unseen.txt", "--count",
        "count.txt", "--lp", "lp.txt", "--ver", "au", "--p1score", "p1.txt", "--p2score",
        "p2.txt", "--vowels", "with-y",
    ])
    .overrides();
    assert_eq!(config.ver, Some(Version::Au));
    assert_eq!(config.vowels, Some(VowelSet::WithY));

    let settings = config.resolve().unwrap();
    assert_eq!(
        settings.scores,
        ScoreOutput::Split {
            p1: PathBuf::from("p1.txt"),
            p2: PathBuf::from("p2.txt")
        }
    );
}

#[test]
fn bad_values_are_rejected() {
    assert!(Args::from_args(&["watchgcg"], &["--ver", "uk"]).is_err());
    assert!(Args::from_args(&["watchgcg"], &["--style", "fancy"]).is_err());
}

#[test]
fn help_lists_the_au_flags() {
    let help = Args::from_args(&["watchgcg"], &["--help"]).err().unwrap().output;
    assert!(help.contains("--p1score"), "{}", help);
    assert!(help.contains("au layout: explicit player 2 score output file"), "{}", help);
}
