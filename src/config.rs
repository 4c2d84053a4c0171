//! Config collects the watcher's paths and display options from an optional
//! JSON file and the command line, and resolves them into `Settings`.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::bag::VowelSet;
use crate::game::PlayStyle;

pub const DEFAULT_POLL_MS: u64 = 250;

/// Version picks the score output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    /// One file with both scores, `068 - 000`.
    #[default]
    Std,

    /// One file per player (Australian broadcasts).
    Au,
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "std" => Ok(Version::Std),
            "au" => Ok(Version::Au),
            _ => Err(format!("unknown version {:?}, expected std or au", s)),
        }
    }
}

/// Config mirrors the command-line flags. Every field is optional so a file
/// and the command line can each supply part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gcg: Option<PathBuf>,
    pub lex: Option<PathBuf>,
    pub score: Option<PathBuf>,
    pub p1score: Option<PathBuf>,
    pub p2score: Option<PathBuf>,
    pub unseen: Option<PathBuf>,
    pub count: Option<PathBuf>,
    pub lp: Option<PathBuf>,
    pub ver: Option<Version>,
    pub vowels: Option<VowelSet>,
    pub style: Option<PlayStyle>,
    pub poll_ms: Option<u64>,
}

/// ScoreOutput is where the scores are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreOutput {
    Combined(PathBuf),
    Split { p1: PathBuf, p2: PathBuf },
}

/// Settings is a validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub gcg: PathBuf,
    pub lex: PathBuf,
    pub scores: ScoreOutput,
    pub unseen: PathBuf,
    pub count: PathBuf,
    pub last_play: PathBuf,
    pub vowels: VowelSet,
    pub style: PlayStyle,
    pub poll_interval: Duration,
}

// `p1_scores.txt` next to `scores.txt`.
fn prefixed(path: &Path, prefix: &str) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or(anyhow!("score path {} has no file name", path.display()))?;
    let mut prefixed = std::ffi::OsString::from(prefix);
    prefixed.push(name);
    Ok(path.with_file_name(prefixed))
}

impl Config {
    /// Load a JSON config file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path)
            .await
            .context(format!("Error reading config {}", path.display()))?;
        serde_json::from_slice(&contents)
            .context(format!("Error parsing config {}", path.display()))
    }

    /// `merge` returns this config with every value set in `overrides` replaced.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            gcg: overrides.gcg.or(self.gcg),
            lex: overrides.lex.or(self.lex),
            score: overrides.score.or(self.score),
            p1score: overrides.p1score.or(self.p1score),
            p2score: overrides.p2score.or(self.p2score),
            unseen: overrides.unseen.or(self.unseen),
            count: overrides.count.or(self.count),
            lp: overrides.lp.or(self.lp),
            ver: overrides.ver.or(self.ver),
            vowels: overrides.vowels.or(self.vowels),
            style: overrides.style.or(self.style),
            poll_ms: overrides.poll_ms.or(self.poll_ms),
        }
    }

    /// `resolve` checks that every required path is present.
    pub fn resolve(self) -> Result<Settings> {
        fn required(value: Option<PathBuf>, flag: &str) -> Result<PathBuf> {
            value.ok_or(anyhow!("required: {}", flag))
        }

        let gcg = required(self.gcg, "gcg")?;
        let lex = required(self.lex, "lex")?;
        let unseen = required(self.unseen, "unseen")?;
        let count = required(self.count, "count")?;
        let last_play = required(self.lp, "lp")?;

        let scores = match (self.ver.unwrap_or_default(), self.p1score, self.p2score) {
            (Version::Std, _, _) => ScoreOutput::Combined(required(self.score, "score")?),
            (Version::Au, Some(p1), Some(p2)) => ScoreOutput::Split { p1, p2 },
            (Version::Au, None, None) => {
                let score = self.score.ok_or(anyhow!(
                    "either provide both --p1score and --p2score, or one --score to derive p1_/p2_ files"
                ))?;
                ScoreOutput::Split {
                    p1: prefixed(&score, "p1_")?,
                    p2: prefixed(&score, "p2_")?,
                }
            }
            (Version::Au, _, _) => bail!(
                "must provide both --p1score and --p2score or neither for the Australian version"
            ),
        };

        Ok(Settings {
            gcg,
            lex,
            scores,
            unseen,
            count,
            last_play,
            vowels: self.vowels.unwrap_or_default(),
            style: self.style.unwrap_or_default(),
            poll_interval: Duration::from_millis(self.poll_ms.unwrap_or(DEFAULT_POLL_MS)),
        })
    }
}
