//! End-to-end checks over real WAV files written with hound.

use std::f32::consts::PI;
use std::fs;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use tempfile::TempDir;

use digits_core::{
    Classifier, FeatureConfig, FeatureExtractor, GoldLabels, Label, LabeledExample, MfccExtractor,
    PipelineConfig, PipelineError, TestExample, dataset, pipeline,
};

/// Write a sine tone as 16-bit PCM.
fn write_tone(path: &Path, sample_rate: u32, channels: u16, duration_ms: u32, freq: f32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    let frames = sample_rate * duration_ms / 1000;
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        // a little harmonic content keeps every coefficient moving
        let v = 0.4 * (2.0 * PI * freq * t).sin() + 0.2 * (2.0 * PI * 3.0 * freq * t).sin();
        let envelope = (PI * i as f32 / frames as f32).sin();
        let sample = (v * envelope * i16::MAX as f32) as i16;
        for _ in 0..channels {
            writer.write_sample(sample).unwrap();
        }
    }
    writer.finalize().unwrap();
}

#[test]
fn features_have_time_rows_and_fixed_columns() {
    let tmp = TempDir::new().unwrap();
    let short = tmp.path().join("short.wav");
    let long = tmp.path().join("long.wav");
    write_tone(&short, 16_000, 1, 400, 220.0);
    write_tone(&long, 16_000, 1, 1200, 220.0);

    let extractor = MfccExtractor::default();
    let n_mfcc = FeatureConfig::default().n_mfcc;
    let a = extractor.extract(&short).unwrap();
    let b = extractor.extract(&long).unwrap();

    assert_eq!(a.ncols(), n_mfcc);
    assert_eq!(b.ncols(), n_mfcc);
    assert!(b.nrows() > a.nrows());
    // orientation: a 1.2 s clip has many more frames than coefficients
    assert!(b.nrows() > 3 * n_mfcc);
}

#[test]
fn stereo_and_resampled_input_share_the_feature_layout() {
    let tmp = TempDir::new().unwrap();
    let stereo = tmp.path().join("stereo.wav");
    let hi_rate = tmp.path().join("32k.wav");
    let reference = tmp.path().join("ref.wav");
    write_tone(&stereo, 16_000, 2, 800, 330.0);
    write_tone(&hi_rate, 32_000, 1, 800, 330.0);
    write_tone(&reference, 16_000, 1, 800, 330.0);

    let extractor = MfccExtractor::default();
    let r = extractor.extract(&reference).unwrap();
    let s = extractor.extract(&stereo).unwrap();
    let h = extractor.extract(&hi_rate).unwrap();

    assert_eq!(s.dim(), r.dim());
    assert_eq!(h.ncols(), r.ncols());
    assert!(h.nrows().abs_diff(r.nrows()) <= 3, "{} vs {}", h.nrows(), r.nrows());
}

#[test]
fn corrupt_audio_is_a_decode_error() {
    let tmp = TempDir::new().unwrap();
    let bogus = tmp.path().join("bogus.wav");
    fs::write(&bogus, b"this is not a RIFF file").unwrap();

    let err = MfccExtractor::default().extract(&bogus).unwrap_err();
    match err {
        PipelineError::Decode { path, .. } => assert_eq!(path, bogus),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn loaded_test_features_are_normalized_per_column() {
    let tmp = TempDir::new().unwrap();
    write_tone(&tmp.path().join("b.wav"), 16_000, 1, 600, 180.0);
    write_tone(&tmp.path().join("a.wav"), 16_000, 1, 900, 440.0);
    fs::write(tmp.path().join("labels.csv"), "not audio").unwrap();

    let test = dataset::load_test_data(tmp.path(), "wav", &MfccExtractor::default()).unwrap();
    assert_eq!(dataset::file_names(&test), vec!["a.wav", "b.wav"]);

    for example in &test {
        for column in example.features.columns() {
            let min = column.iter().cloned().fold(f32::INFINITY, f32::min);
            let max = column.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
            assert!(column.iter().all(|v| v.is_finite()));
            assert!(min == 0.0 && (max == 1.0 || max == 0.0), "min={min} max={max}");
        }
    }
}

#[test]
fn truncated_wav_is_a_decode_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cut.wav");
    write_tone(&path, 16_000, 1, 1000, 220.0);

    // header still promises 16000 frames; keep roughly a quarter of the data
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..44 + 8001]).unwrap();

    let err = MfccExtractor::default().extract(&path).unwrap_err();
    assert!(matches!(err, PipelineError::Decode { path: ref p, .. } if *p == path), "{err:?}");
}

#[test]
fn clip_of_one_hop_is_too_short() {
    let tmp = TempDir::new().unwrap();
    let hop = FeatureConfig::default().hop_size as u32;
    let spec = WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    for (name, samples) in [("one_hop.wav", hop), ("just_over.wav", hop + 1)] {
        let mut writer = WavWriter::create(tmp.path().join(name), spec).unwrap();
        for i in 0..samples {
            writer.write_sample(((i % 50) as i16 - 25) * 400).unwrap();
        }
        writer.finalize().unwrap();
    }

    let extractor = MfccExtractor::default();
    let err = extractor.extract(&tmp.path().join("one_hop.wav")).unwrap_err();
    assert!(matches!(err, PipelineError::Decode { ref reason, .. } if reason.contains("160-sample hop")));

    let m = extractor.extract(&tmp.path().join("just_over.wav")).unwrap();
    assert_eq!(m.dim(), (1, FeatureConfig::default().n_mfcc));
}

/// Predicts the label of the training example with the closest frame count.
struct FrameCountNeighbour;

impl Classifier for FrameCountNeighbour {
    fn name(&self) -> &str {
        "frame-count"
    }

    fn predict(&self, train: &[LabeledExample], test: &[TestExample]) -> anyhow::Result<Vec<Label>> {
        test.iter()
            .map(|t| {
                train
                    .iter()
                    .min_by_key(|e| e.features.nrows().abs_diff(t.features.nrows()))
                    .map(|e| e.label)
                    .ok_or_else(|| anyhow::anyhow!("empty training set"))
            })
            .collect()
    }
}

#[test]
fn full_run_over_a_directory_layout() {
    let tmp = TempDir::new().unwrap();
    let config = PipelineConfig::rooted_at(tmp.path());

    write_tone(&config.train_dir.join("one/x.wav"), 16_000, 1, 300, 200.0);
    write_tone(&config.train_dir.join("four/y.wav"), 16_000, 1, 1500, 200.0);
    write_tone(&config.test_dir.join("short.wav"), 16_000, 1, 320, 250.0);
    write_tone(&config.test_dir.join("long.wav"), 16_000, 1, 1450, 250.0);

    let gold: GoldLabels = [("short.wav".to_string(), 1), ("long.wav".to_string(), 1)]
        .into_iter()
        .collect();

    let report = pipeline::run(
        &config,
        &gold,
        &MfccExtractor::new(config.features.clone()),
        &FrameCountNeighbour,
        &FrameCountNeighbour,
    )
    .unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.euclidean, 0.5);
    assert_eq!(report.dtw, 0.5);
    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "long.wav - 4 - 4\nshort.wav - 1 - 1"
    );
}

#[test]
fn unknown_class_directory_stops_the_run() {
    let tmp = TempDir::new().unwrap();
    let config = PipelineConfig::rooted_at(tmp.path());
    write_tone(&config.train_dir.join("six/x.wav"), 16_000, 1, 300, 200.0);
    fs::create_dir_all(&config.test_dir).unwrap();

    let err = pipeline::run(
        &config,
        &GoldLabels::builtin(),
        &MfccExtractor::default(),
        &FrameCountNeighbour,
        &FrameCountNeighbour,
    )
    .unwrap_err();

    assert!(matches!(err, PipelineError::UnknownLabel { name } if name == "six"));
    assert!(!config.output_path.exists());
}
