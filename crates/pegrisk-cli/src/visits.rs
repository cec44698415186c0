//! Best-effort visit counter.
//!
//! The scoring crates know nothing about this. The front end records one
//! visit per evaluation through a [`VisitSink`]; any failure is logged and
//! dropped so it can never change what the user sees.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pegrisk_models::ModelId;

#[derive(Debug, Error)]
pub enum VisitError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub timestamp: jiff::Timestamp,
    pub model: Option<ModelId>,
    pub client: String,
}

impl Visit {
    pub fn now(model: Option<ModelId>) -> Self {
        Self {
            timestamp: jiff::Timestamp::now(),
            model,
            client: concat!("pegrisk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Receives visit notifications from the front end.
pub trait VisitSink {
    fn record(&self, visit: &Visit) -> Result<(), VisitError>;
}

/// Sink used when counting is disabled.
pub struct NoopVisitSink;

impl VisitSink for NoopVisitSink {
    fn record(&self, _visit: &Visit) -> Result<(), VisitError> {
        Ok(())
    }
}

/// On-disk counter: a running total plus a timestamped log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitLog {
    pub total: u64,
    #[serde(default)]
    pub log: Vec<Visit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitStats {
    pub total: u64,
    pub today: usize,
}

pub struct FileVisitCounter {
    path: PathBuf,
}

impl FileVisitCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<VisitLog, VisitError> {
        if !self.path.exists() {
            return Ok(VisitLog::default());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Total visits, and visits logged at or after `since`.
    pub fn stats(&self, since: jiff::Timestamp) -> Result<VisitStats, VisitError> {
        let log = self.load()?;
        Ok(VisitStats {
            total: log.total,
            today: log.log.iter().filter(|v| v.timestamp >= since).count(),
        })
    }
}

impl VisitSink for FileVisitCounter {
    fn record(&self, visit: &Visit) -> Result<(), VisitError> {
        let mut log = self.load()?;
        log.total += 1;
        log.log.push(visit.clone());

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, serde_json::to_vec_pretty(&log)?)?;
        std::fs::rename(&tmp_path, &self.path)?;

        tracing::info!(total = log.total, path = %self.path.display(), "visit recorded");
        Ok(())
    }
}

/// Record a visit, swallowing any failure.
pub fn record_visit(sink: &dyn VisitSink, visit: Visit) {
    if let Err(e) = sink.record(&visit) {
        tracing::warn!(error = %e, "visit counter update failed");
    }
}
