//! Feature preparation and scoring for a spoken-digit recognition exercise.
//!
//! Audio files are turned into per-utterance normalized MFCC matrices
//! (time on rows, coefficients on columns) and assembled into train and test
//! sets. Predictions from two external nearest-neighbour classifiers are
//! written to a flat report and scored against a compiled-in gold table.

pub mod audio;
pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
mod gold;
pub mod pipeline;
pub mod report;
pub mod scoring;

pub use audio::{FeatureExtractor, MfccExtractor};
pub use config::{FeatureConfig, PipelineConfig};
pub use dataset::{Label, LabeledExample, TestExample, load_test_data, load_train_data};
pub use error::{PipelineError, Result};
pub use features::{FeatureMatrix, normalize};
pub use pipeline::Classifier;
pub use scoring::{AccuracyReport, GoldLabels};
