use std::path::PathBuf;

use argh::FromArgs;
use log::*;

use crate::app::App;
use crate::bag::VowelSet;
use crate::config::{Config, Version};
use crate::game::PlayStyle;
use crate::lexicon::Lexicon;
use crate::watcher::PollWatcher;

mod app;
mod bag;
mod board;
mod config;
mod error;
mod game;
mod gcg;
mod lexicon;
mod players;
mod tile;
mod watcher;

#[cfg(test)]
mod app_test;
#[cfg(test)]
mod lexicon_test;
#[cfg(test)]
mod main_test;

#[derive(FromArgs)]
/// Watch a GCG game log and keep score, unseen-tile and last-play overlay files current.
struct Args {
    /// optional JSON file supplying any of the options below
    #[argh(option)]
    config: Option<PathBuf>,

    /// the gcg file to monitor
    #[argh(option)]
    gcg: Option<PathBuf>,

    /// the lexicon file to use for definitions
    #[argh(option)]
    lex: Option<PathBuf>,

    /// the output file to write the scores
    #[argh(option)]
    score: Option<PathBuf>,

    /// au layout: explicit player 1 score output file
    #[argh(option)]
    p1score: Option<PathBuf>,

    /// au layout: explicit player 2 score output file
    #[argh(option)]
    p2score: Option<PathBuf>,

    /// the output file to write the unseen tiles
    #[argh(option)]
    unseen: Option<PathBuf>,

    /// the output file to write the number of unseen tiles and vowels to consonants
    #[argh(option)]
    count: Option<PathBuf>,

    /// the output file to write the last play
    #[argh(option)]
    lp: Option<PathBuf>,

    /// score layout: std (one file, both scores) or au (p1/p2 files)
    #[argh(option)]
    ver: Option<Version>,

    /// vowels counted as unseen vowels: standard or with-y
    #[argh(option)]
    vowels: Option<VowelSet>,

    /// last play layout: annotated or bare
    #[argh(option)]
    style: Option<PlayStyle>,

    /// how often to poll the gcg file, in milliseconds
    #[argh(option)]
    poll_ms: Option<u64>,
}

impl Args {
    fn overrides(self) -> Config {
        Config {
            gcg: self.gcg,
            lex: self.lex,
            score: self.score,
            p1score: self.p1score,
            p2score: self.p2score,
            unseen: self.unseen,
            count: self.count,
            lp: self.lp,
            ver: self.ver,
            vowels: self.vowels,
            style: self.style,
            poll_ms: self.poll_ms,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let mut args: Args = argh::from_env();

    let base = match args.config.take() {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    let settings = base.merge(args.overrides()).resolve()?;

    let lexicon = Lexicon::load(&settings.lex).await?;
    if lexicon.is_empty() {
        warn!(
            "No definitions in {}, last plays will have none.",
            settings.lex.display()
        );
    } else {
        info!(
            "Loaded {} definitions from {}.",
            lexicon.len(),
            settings.lex.display()
        );
    }

    let (watcher, changes) = PollWatcher::spawn(settings.gcg.clone(), settings.poll_interval);
    info!(
        "Watching {} for changes. To stop, hit control-C.",
        settings.gcg.display()
    );

    let app = App::new(settings, lexicon);
    app.run(changes, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Error waiting for control-C: {}", e);
        }
    })
    .await?;

    drop(watcher);
    info!("Stopped watching.");
    Ok(())
}
