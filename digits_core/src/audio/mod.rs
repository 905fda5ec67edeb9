//! Audio file → feature matrix.
//!
//! Decoding and the mel filter bank come from symphonia, rubato and
//! mel_spec; this module only fixes the convention that the resulting
//! matrix has time on rows and coefficients on columns.

pub mod decoder;
pub mod mfcc;

use std::path::Path;

use log::debug;

use crate::config::FeatureConfig;
use crate::error::{PipelineError, Result};
use crate::features::FeatureMatrix;

/// Turns one audio file into a raw (unnormalized) feature matrix.
pub trait FeatureExtractor {
    fn extract(&self, path: &Path) -> Result<FeatureMatrix>;
}

/// Production extractor: decode, downmix, resample, MFCC.
#[derive(Debug, Clone, Default)]
pub struct MfccExtractor {
    config: FeatureConfig,
}

impl MfccExtractor {
    pub fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }
}

impl FeatureExtractor for MfccExtractor {
    fn extract(&self, path: &Path) -> Result<FeatureMatrix> {
        let pcm = decoder::decode_to_mono(path, self.config.sample_rate).map_err(|e| {
            PipelineError::Decode {
                path: path.to_path_buf(),
                reason: format!("{e:#}"),
            }
        })?;

        let features = mfcc::pcm_to_mfcc(&pcm, &self.config);
        if features.nrows() == 0 {
            return Err(PipelineError::Decode {
                path: path.to_path_buf(),
                reason: format!(
                    "{} samples is too short: a frame needs more than one {}-sample hop",
                    pcm.len(),
                    self.config.hop_size
                ),
            });
        }
        debug_assert_eq!(features.ncols(), self.config.n_mfcc);

        debug!(
            "extracted {} frames x {} coefficients from {}",
            features.nrows(),
            features.ncols(),
            path.display()
        );
        Ok(features)
    }
}
