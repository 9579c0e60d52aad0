use catnav_core::SnapshotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("{role} language code must be non-empty")]
    BlankLanguage { role: &'static str },

    #[error("rejected catalog snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}
