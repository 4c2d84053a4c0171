//! App is the watcher application. On every change notification it replays
//! the whole log from scratch and rewrites the overlay text files.

use std::future::Future;
use std::path::PathBuf;

use anyhow::*;
use log::*;
use tokio::{fs::File, io::AsyncWriteExt, sync::mpsc};

use crate::config::{ScoreOutput, Settings};
use crate::game::Game;
use crate::lexicon::Lexicon;
use crate::watcher::Change;

/// Output is one rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub path: PathBuf,
    pub contents: String,
}

/// App holds everything that outlives a single replay.
pub struct App {
    settings: Settings,
    lexicon: Lexicon,
}

impl App {
    /// Creates a new App instance.
    pub fn new(settings: Settings, lexicon: Lexicon) -> App {
        App { settings, lexicon }
    }

    /// Replays the log and renders every output. Nothing is written here, so
    /// a failure leaves the previous cycle's files in place.
    pub async fn render(&self) -> Result<Vec<Output>> {
        let gcg = &self.settings.gcg;
        let log = tokio::fs::read_to_string(gcg)
            .await
            .context(format!("Error reading {}", gcg.display()))?;

        let game = Game::replay(log.lines(), self.settings.vowels)
            .context(format!("Error replaying {}", gcg.display()))?;

        let output = |path: &PathBuf, contents: String| Output {
            path: path.clone(),
            contents,
        };

        let mut outputs = match &self.settings.scores {
            ScoreOutput::Combined(path) => vec![output(path, game.scores_string()?)],
            ScoreOutput::Split { p1, p2 } => vec![
                output(p1, game.p1_score_string()?),
                output(p2, game.p2_score_string()?),
            ],
        };
        outputs.push(output(&self.settings.unseen, game.unseen_tiles_string()));
        outputs.push(output(&self.settings.count, game.unseen_count_string()));
        outputs.push(output(
            &self.settings.last_play,
            game.last_play_string(&self.lexicon, self.settings.style)?,
        ));

        Ok(outputs)
    }

    /// Replays the log and rewrites every output file.
    pub async fn refresh(&self) -> Result<()> {
        for out in self.render().await? {
            let mut file = File::create(&out.path)
                .await
                .context(format!("Error creating file {}", out.path.display()))?;

            file.write_all(out.contents.as_bytes())
                .await
                .context(format!("Error writing file {}", out.path.display()))?;
            file.flush()
                .await
                .context(format!("Error flushing file {}", out.path.display()))?;
        }
        Ok(())
    }

    /// Runs one refresh per change notification until `shutdown` resolves or
    /// the notifier goes away. A failed refresh is logged and the loop keeps
    /// waiting for the next change.
    pub async fn run(
        &self,
        mut changes: mpsc::Receiver<Change>,
        shutdown: impl Future<Output = ()>,
    ) -> Result<()> {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutting down.");
                    return Ok(());
                }
                change = changes.recv() => {
                    if change.is_none() {
                        warn!("Watcher stopped, exiting.");
                        return Ok(());
                    }
                    debug!("Replaying {}", self.settings.gcg.display());
                    if let Err(e) = self.refresh().await {
                        error!("Error refreshing outputs: {:#}", e);
                    }
                }
            }
        }
    }
}
