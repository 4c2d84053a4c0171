use std::path::Path;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::app::App;
use crate::bag::VowelSet;
use crate::config::{ScoreOutput, Settings};
use crate::game::PlayStyle;
use crate::lexicon::Lexicon;
use crate::watcher::Change;

const GCG: &str = include_str!("../testdata/game.gcg");
const DEFS: &str = include_str!("../testdata/defs.csv");

fn settings(dir: &Path, scores: ScoreOutput) -> Settings {
    Settings {
        gcg: dir.join("game.gcg"),
        lex: dir.join("defs.csv"),
        scores,
        unseen: dir.join("unseen.txt"),
        count: dir.join("count.txt"),
        last_play: dir.join("lp.txt"),
        vowels: VowelSet::Standard,
        style: PlayStyle::Annotated,
        poll_interval: Duration::from_millis(10),
    }
}

async fn app(dir: &Path, scores: ScoreOutput) -> App {
    tokio::fs::write(dir.join("game.gcg"), GCG).await.unwrap();
    App::new(settings(dir, scores), Lexicon::parse(DEFS).unwrap())
}

async fn read(path: impl AsRef<Path>) -> String {
    tokio::fs::read_to_string(path).await.unwrap()
}

#[tokio::test]
async fn refresh_writes_every_output() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path(), ScoreOutput::Combined(dir.path().join("score.txt"))).await;

    app.refresh().await.unwrap();

    assert_eq!(read(dir.path().join("score.txt")).await, "384 - 543");
    assert_eq!(
        read(dir.path().join("unseen.txt")).await,
        "AAAAA C D EEEE FF GG H IIII LL M NNN OOOO P Q RR S UU VV WW Y ?"
    );
    assert_eq!(
        read(dir.path().join("count.txt")).await,
        "43 tiles\n19 vowels | 24 consonants"
    );
    assert_eq!(
        read(dir.path().join("lp.txt")).await,
        "     LAST PLAY: Matt G pass +0 384"
    );
}

#[tokio::test]
async fn refresh_replaces_longer_contents() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path(), ScoreOutput::Combined(dir.path().join("score.txt"))).await;
    let stale = "x".repeat(4096);
    tokio::fs::write(dir.path().join("lp.txt"), &stale).await.unwrap();
    tokio::fs::write(dir.path().join("score.txt"), &stale).await.unwrap();

    app.refresh().await.unwrap();
    assert_eq!(read(dir.path().join("score.txt")).await, "384 - 543");
    assert_eq!(
        read(dir.path().join("lp.txt")).await,
        "     LAST PLAY: Matt G pass +0 384"
    );
}

#[tokio::test]
async fn split_scores() {
    let dir = tempfile::tempdir().unwrap();
    let scores = ScoreOutput::Split {
        p1: dir.path().join("p1_score.txt"),
        p2: dir.path().join("p2_score.txt"),
    };
    let app = app(dir.path(), scores).await;

    let outputs = app.render().await.unwrap();
    assert_eq!(outputs.len(), 5);
    assert_eq!(outputs[0].contents, "384");
    assert_eq!(outputs[1].contents, "543");

    app.refresh().await.unwrap();
    assert_eq!(read(dir.path().join("p1_score.txt")).await, "384");
    assert_eq!(read(dir.path().join("p2_score.txt")).await, "543");
    assert!(!dir.path().join("score.txt").exists());
}

#[tokio::test]
async fn failed_replay_keeps_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path(), ScoreOutput::Combined(dir.path().join("score.txt"))).await;
    app.refresh().await.unwrap();

    let broken = format!("{}>Josh: ABC 8Z CAB +10 553\n", GCG);
    tokio::fs::write(dir.path().join("game.gcg"), broken).await.unwrap();

    let err = app.refresh().await.unwrap_err();
    assert!(format!("{:#}", err).contains("8Z"), "{:#}", err);
    assert_eq!(read(dir.path().join("score.txt")).await, "384 - 543");
    assert_eq!(
        read(dir.path().join("lp.txt")).await,
        "     LAST PLAY: Matt G pass +0 384"
    );
}

#[tokio::test]
async fn missing_log_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(
        settings(dir.path(), ScoreOutput::Combined(dir.path().join("score.txt"))),
        Lexicon::default(),
    );
    assert!(app.render().await.is_err());
}

#[tokio::test]
async fn run_refreshes_until_the_watcher_closes() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path(), ScoreOutput::Combined(dir.path().join("score.txt"))).await;

    let (tx, rx) = mpsc::channel(1);
    tx.send(Change).await.unwrap();
    drop(tx);

    app.run(rx, std::future::pending()).await.unwrap();
    assert_eq!(read(dir.path().join("score.txt")).await, "384 - 543");
}

#[tokio::test]
async fn run_stops_on_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path(), ScoreOutput::Combined(dir.path().join("score.txt"))).await;

    let (_tx, rx) = mpsc::channel::<Change>(1);
    let (stop, stopped) = oneshot::channel::<()>();
    stop.send(()).unwrap();

    let shutdown = async {
        stopped.await.ok();
    };
    tokio::time::timeout(Duration::from_secs(5), app.run(rx, shutdown))
        .await
        .unwrap()
        .unwrap();
    assert!(!dir.path().join("score.txt").exists());
}
