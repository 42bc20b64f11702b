//! JSONL journal of screen and modal events.
//!
//! Records are handed to a background tokio task over an unbounded channel and
//! appended to a file one JSON object per line. A journal never blocks or
//! fails the UI: if the file cannot be opened or written, the writer task
//! stops and further records are dropped.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::types::{GameStats, ScreenType};

/// One journal line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalRecord {
    pub seq: u64,
    pub ts: u64,
    #[serde(flatten)]
    pub event: JournalEvent,
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalEvent {
    Initialized {
        width: u16,
        height: u16,
    },
    Screen {
        screen: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        stats: Option<StatsRecord>,
    },
    ModalOpened {
        width: u16,
        height: u16,
    },
    ModalClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsRecord {
    pub coins: u32,
    pub turns: u32,
}

impl From<GameStats> for StatsRecord {
    fn from(value: GameStats) -> Self {
        Self {
            coins: value.coins,
            turns: value.turns,
        }
    }
}

impl JournalEvent {
    pub fn screen(kind: ScreenType, stats: Option<GameStats>) -> Self {
        JournalEvent::Screen {
            screen: kind.as_str().to_string(),
            stats: stats.map(StatsRecord::from),
        }
    }
}

/// Sending side of the journal. Cheap to clone; clones share the sequence.
#[derive(Debug, Clone)]
pub struct Journal {
    tx: mpsc::UnboundedSender<JournalRecord>,
    seq: Rc<Cell<u64>>,
}

impl Journal {
    /// In-memory journal; the receiver sees every record.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<JournalRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                seq: Rc::new(Cell::new(0)),
            },
            rx,
        )
    }

    /// Start a writer task appending to `path`.
    ///
    /// Must be called from inside a tokio runtime. The task ends once every
    /// `Journal` clone is dropped and the backlog is flushed.
    pub fn spawn(path: impl Into<PathBuf>) -> (Self, JoinHandle<()>) {
        let path = path.into();
        let (journal, mut rx) = Self::channel();

        let handle = tokio::spawn(async move {
            use tokio::fs::OpenOptions;
            use tokio::io::AsyncWriteExt;

            let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
                Ok(f) => f,
                Err(_) => return,
            };

            let mut buf: Vec<u8> = Vec::with_capacity(256);

            while let Some(rec) = rx.recv().await {
                buf.clear();
                if serde_json::to_writer(&mut buf, &rec).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if file.write_all(&buf).await.is_err() {
                    break;
                }
            }

            let _ = file.flush().await;
        });

        (journal, handle)
    }

    /// Queue a record. Silently dropped if the writer is gone.
    pub fn record(&self, event: JournalEvent) {
        let seq = self.seq.get() + 1;
        self.seq.set(seq);
        let _ = self.tx.send(JournalRecord {
            seq,
            ts: now_ms(),
            event,
        });
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
