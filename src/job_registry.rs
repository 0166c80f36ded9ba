use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::RwLock;

// @module: Process-wide job-to-artifact bookkeeping

/// Downloadable artifact kinds of a finished job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Translated subtitle document
    Srt,
    /// Video with subtitles rendered into frames
    BurnedVideo,
    /// Video with subtitles as a selectable track
    SoftVideo,
}

impl ArtifactKind {
    /// Stable identifier used in artifact names and lookups
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::BurnedVideo => "burned",
            Self::SoftVideo => "soft",
        }
    }
}

/// Artifact locations retained for retrieval after a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobArtifacts {
    /// Subtitle document path
    pub srt: PathBuf,

    /// Burned-in video path
    pub burned: PathBuf,

    /// Soft-muxed video path
    pub soft: PathBuf,
}

impl JobArtifacts {
    /// Path of one artifact kind
    pub fn path(&self, kind: ArtifactKind) -> &PathBuf {
        match kind {
            ArtifactKind::Srt => &self.srt,
            ArtifactKind::BurnedVideo => &self.burned,
            ArtifactKind::SoftVideo => &self.soft,
        }
    }
}

/// Store of completed jobs.
///
/// Entries are inserted only after a pipeline run completes in full, all
/// artifact paths together, and are never updated or removed afterwards.
/// Implementations must be safe under concurrent writers. The trait exists so
/// a bounded (LRU or TTL) store can replace the unbounded in-memory map
/// without touching the orchestrator.
pub trait JobStore: Send + Sync {
    /// Record all artifacts of a completed job at once
    fn insert(&self, job_id: &str, artifacts: JobArtifacts);

    /// Look up the artifacts of a completed job
    fn lookup(&self, job_id: &str) -> Option<JobArtifacts>;
}

/// Unbounded in-memory job store.
///
/// Grows for the lifetime of the process; retention is a deployment concern.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<String, JobArtifacts>>,
}

impl InMemoryJobStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed jobs currently registered
    pub fn len(&self) -> usize {
        self.jobs.read().len()
    }

    /// True when no job has completed yet
    pub fn is_empty(&self) -> bool {
        self.jobs.read().is_empty()
    }
}

impl JobStore for InMemoryJobStore {
    fn insert(&self, job_id: &str, artifacts: JobArtifacts) {
        self.jobs.write().insert(job_id.to_string(), artifacts);
    }

    fn lookup(&self, job_id: &str) -> Option<JobArtifacts> {
        self.jobs.read().get(job_id).cloned()
    }
}
