use std::path::{Path, PathBuf};

/// Parameters of the MFCC transform. Shared by every file in a run so the
/// column count of all feature matrices agrees.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureConfig {
    /// Audio is resampled to this rate before analysis.
    pub sample_rate: u32,
    /// 25 ms window at 16 kHz.
    pub fft_size: usize,
    /// 10 ms hop at 16 kHz; one frame per hop.
    pub hop_size: usize,
    pub n_mels: usize,
    /// Number of cepstral coefficients kept, i.e. the matrix column count.
    pub n_mfcc: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            fft_size: 400,
            hop_size: 160,
            n_mels: 40,
            n_mfcc: 20,
        }
    }
}

/// Where the pipeline reads its inputs and writes its report.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub train_dir: PathBuf,
    pub test_dir: PathBuf,
    pub output_path: PathBuf,
    /// Files without this extension are ignored by the loaders.
    pub audio_extension: String,
    pub features: FeatureConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            train_dir: PathBuf::from("train_data"),
            test_dir: PathBuf::from("test_files"),
            output_path: PathBuf::from("output.txt"),
            audio_extension: "wav".to_string(),
            features: FeatureConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Default layout with every path placed under `root`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let defaults = Self::default();
        Self {
            train_dir: root.join(defaults.train_dir),
            test_dir: root.join(defaults.test_dir),
            output_path: root.join(defaults.output_path),
            ..defaults
        }
    }
}
