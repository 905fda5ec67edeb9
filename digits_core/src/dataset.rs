//! Train / test dataset assembly.
//!
//! ```text
//!  train_data/<word>/*.wav ──┐
//!                            ├─ FeatureExtractor ─ normalize ─▶ LabeledExample
//!  test_files/*.wav ─────────┘                                  TestExample
//! ```
//!
//! Only files whose extension matches exactly (case-sensitive) are audio.
//! Directory listings are sorted by file name, so the test sequence returned
//! here is stable across calls and is the order predictions must follow.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::audio::FeatureExtractor;
use crate::error::{PipelineError, Result};
use crate::features::{FeatureMatrix, normalize};

pub type Label = u8;

/// Training directory names and the class each one stands for.
pub const LABEL_VOCABULARY: [(&str, Label); 5] =
    [("one", 1), ("two", 2), ("three", 3), ("four", 4), ("five", 5)];

#[derive(Debug, Clone)]
pub struct LabeledExample {
    pub features: FeatureMatrix,
    pub label: Label,
}

#[derive(Debug, Clone)]
pub struct TestExample {
    /// Bare file name, the join key for gold labels and the report.
    pub file_name: String,
    pub features: FeatureMatrix,
}

pub fn label_for(name: &str) -> Result<Label> {
    LABEL_VOCABULARY
        .iter()
        .find(|(word, _)| *word == name)
        .map(|&(_, label)| label)
        .ok_or_else(|| PipelineError::UnknownLabel {
            name: name.to_string(),
        })
}

/// Load every audio file under the class subdirectories of `root`.
///
/// Plain files directly under `root` are ignored. A subdirectory whose name
/// is not in [`LABEL_VOCABULARY`] fails the whole load.
pub fn load_train_data(
    root: &Path,
    extension: &str,
    extractor: &dyn FeatureExtractor,
) -> Result<Vec<LabeledExample>> {
    let mut examples = Vec::new();

    for class_dir in sorted_entries(root)?.into_iter().filter(|p| p.is_dir()) {
        let name = file_name_of(&class_dir);
        let label = label_for(&name)?;

        let mut count = 0usize;
        for file in audio_files(&class_dir, extension)? {
            let features = normalize(extractor.extract(&file)?);
            examples.push(LabeledExample { features, label });
            count += 1;
        }
        debug!("loaded {count} examples for class {name:?} (label {label})");
    }

    info!(
        "loaded {} training examples from {}",
        examples.len(),
        root.display()
    );
    Ok(examples)
}

/// Load the audio files directly inside `dir`, ordered by file name.
pub fn load_test_data(
    dir: &Path,
    extension: &str,
    extractor: &dyn FeatureExtractor,
) -> Result<Vec<TestExample>> {
    let examples = audio_files(dir, extension)?
        .into_iter()
        .map(|path| {
            let features = normalize(extractor.extract(&path)?);
            Ok(TestExample {
                file_name: file_name_of(&path),
                features,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        "loaded {} test examples from {}",
        examples.len(),
        dir.display()
    );
    Ok(examples)
}

/// Test-set file names in load order.
pub fn file_names(examples: &[TestExample]) -> Vec<String> {
    examples.iter().map(|e| e.file_name.clone()).collect()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == extension)
}

fn audio_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_file() && has_extension(p, extension))
        .collect())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)
        .map_err(|e| PipelineError::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| PipelineError::io(dir, e))?;
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Returns a matrix whose first column encodes the file's byte length,
    /// and records every path it was asked to extract.
    #[derive(Default)]
    struct FakeExtractor {
        seen: RefCell<Vec<String>>,
    }

    impl FeatureExtractor for FakeExtractor {
        fn extract(&self, path: &Path) -> Result<FeatureMatrix> {
            self.seen.borrow_mut().push(file_name_of(path));
            let len = fs::metadata(path).map_err(|e| PipelineError::io(path, e))?.len();
            Ok(FeatureMatrix::from_shape_fn((3, 2), |(r, c)| {
                if c == 0 { (r as u64 * len) as f32 } else { 5.0 }
            }))
        }
    }

    struct FailingExtractor;

    impl FeatureExtractor for FailingExtractor {
        fn extract(&self, path: &Path) -> Result<FeatureMatrix> {
            Err(PipelineError::Decode {
                path: path.to_path_buf(),
                reason: "not audio".to_string(),
            })
        }
    }

    fn touch(path: &Path, bytes: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, bytes).unwrap();
    }

    #[test]
    fn vocabulary_maps_words_to_digits() {
        assert_eq!(label_for("one").unwrap(), 1);
        assert_eq!(label_for("five").unwrap(), 5);
        assert!(matches!(
            label_for("One"),
            Err(PipelineError::UnknownLabel { name }) if name == "One"
        ));
    }

    #[test]
    fn train_data_is_labeled_by_directory() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("one/a.wav"), b"x");
        touch(&tmp.path().join("one/b.wav"), b"xx");
        touch(&tmp.path().join("three/c.wav"), b"xxx");
        touch(&tmp.path().join("three/notes.txt"), b"metadata");
        touch(&tmp.path().join("README.md"), b"top-level file");

        let extractor = FakeExtractor::default();
        let train = load_train_data(tmp.path(), "wav", &extractor).unwrap();

        let mut labels: Vec<Label> = train.iter().map(|e| e.label).collect();
        labels.sort();
        assert_eq!(labels, vec![1, 1, 3]);
        assert!(!extractor.seen.borrow().contains(&"notes.txt".to_string()));
    }

    #[test]
    fn train_features_are_normalized() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("two/a.wav"), b"abcd");

        let train = load_train_data(tmp.path(), "wav", &FakeExtractor::default()).unwrap();
        let m = &train[0].features;
        assert_eq!(m.column(0).to_vec(), vec![0.0, 0.5, 1.0]);
        assert!(m.column(1).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn unknown_class_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("one/a.wav"), b"x");
        touch(&tmp.path().join("six/b.wav"), b"x");

        let err = load_train_data(tmp.path(), "wav", &FakeExtractor::default()).unwrap_err();
        assert!(matches!(err, PipelineError::UnknownLabel { name } if name == "six"));
    }

    #[test]
    fn test_data_is_sorted_and_filtered() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.wav", "a.wav", "b.WAV", "ignore.mp3", "d.wav.bak"] {
            touch(&tmp.path().join(name), b"x");
        }
        fs::create_dir(tmp.path().join("nested.wav")).unwrap();

        let test = load_test_data(tmp.path(), "wav", &FakeExtractor::default()).unwrap();
        assert_eq!(file_names(&test), vec!["a.wav", "c.wav"]);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert!(has_extension(Path::new("x/a.wav"), "wav"));
        assert!(!has_extension(Path::new("x/a.WAV"), "wav"));
        assert!(!has_extension(Path::new("x/a.Wav"), "wav"));
        assert!(!has_extension(Path::new("x/wav"), "wav"));
    }

    #[test]
    fn test_data_order_is_stable_across_calls() {
        let tmp = TempDir::new().unwrap();
        for name in ["f3.wav", "0a.wav", "zz.wav", "m-1.wav", "m_1.wav"] {
            touch(&tmp.path().join(name), b"x");
        }
        let extractor = FakeExtractor::default();

        let first = file_names(&load_test_data(tmp.path(), "wav", &extractor).unwrap());
        let second = file_names(&load_test_data(tmp.path(), "wav", &extractor).unwrap());
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(first, sorted);
    }

    #[test]
    fn decode_failure_aborts_the_load() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.wav"), b"x");

        let err = load_test_data(tmp.path(), "wav", &FailingExtractor).unwrap_err();
        assert!(matches!(err, PipelineError::Decode { .. }));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let err =
            load_test_data(&tmp.path().join("absent"), "wav", &FakeExtractor::default()).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
