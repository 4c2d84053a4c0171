//! PollWatcher notifies when the watched log changes. It is created by the
//! caller and handed to the run loop as a channel; dropping it stops polling.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use log::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Change is a single "the log may have changed" notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change;

#[derive(Debug)]
pub struct PollWatcher {
    task: JoinHandle<()>,
}

// Modification time and length together catch appends that land within the
// filesystem's timestamp resolution.
async fn stamp(path: &Path) -> Option<(SystemTime, u64)> {
    let metadata = tokio::fs::metadata(path).await.ok()?;
    Some((metadata.modified().ok()?, metadata.len()))
}

impl PollWatcher {
    /// `spawn` starts polling `path` every `interval`. The first observation
    /// of the file counts as a change so outputs are written on startup.
    pub fn spawn(path: impl Into<PathBuf>, interval: Duration) -> (PollWatcher, mpsc::Receiver<Change>) {
        let path = path.into();
        let (tx, rx) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            let mut last = None;

            loop {
                ticker.tick().await;
                let current = stamp(&path).await;
                if current.is_none() {
                    if last.is_some() {
                        warn!("{} is no longer readable", path.display());
                        last = None;
                    }
                    continue;
                }
                if current == last {
                    continue;
                }

                debug!("{} changed", path.display());
                last = current;
                // Notifications that arrive while a replay is running coalesce
                // into the one already queued.
                match tx.try_send(Change) {
                    Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => {}
                    Err(mpsc::error::TrySendError::Closed(_)) => break,
                }
            }
        });

        (PollWatcher { task }, rx)
    }
}

impl Drop for PollWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}
