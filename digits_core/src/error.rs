//! Error types for the digit feature pipeline.
//!
//! Every variant is fatal for the run that raised it; nothing in the crate
//! recovers locally. Variants carry the offending key or path so callers and
//! tests can assert on exactly what went wrong.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// Unreadable or corrupt audio, or audio too short to yield a frame.
    #[error("failed to decode audio file {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    /// Training subdirectory name outside the label vocabulary.
    #[error("unknown label directory: {name:?}")]
    UnknownLabel { name: String },

    /// Test file with no entry in the gold table.
    #[error("no gold label for test file {file_name:?}")]
    MissingGoldLabel { file_name: String },

    /// File names and prediction sequences of different lengths.
    #[error(
        "misaligned predictions: {file_names} file names, {euclidean} euclidean predictions, {dtw} dtw predictions"
    )]
    Alignment {
        file_names: usize,
        euclidean: usize,
        dtw: usize,
    },

    #[error("cannot score an empty test set")]
    EmptyTestSet,

    #[error("malformed report line {line_number}: {line:?}")]
    MalformedReportLine { line_number: usize, line: String },

    /// An external classifier failed to produce predictions.
    #[error("classifier {name} failed: {reason}")]
    Classifier { name: String, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Fails with [`PipelineError::Alignment`] unless all three lengths agree.
pub fn check_alignment(file_names: usize, euclidean: usize, dtw: usize) -> Result<()> {
    if file_names == euclidean && file_names == dtw {
        Ok(())
    } else {
        Err(PipelineError::Alignment {
            file_names,
            euclidean,
            dtw,
        })
    }
}
