use anyhow::Result;
use log::info;

use digits_core::{GoldLabels, MfccExtractor, PipelineConfig, dataset};

fn main() -> Result<()> {
    env_logger::init();

    let config = PipelineConfig::default();
    let extractor = MfccExtractor::new(config.features.clone());
    let gold = GoldLabels::builtin();

    let train = dataset::load_train_data(&config.train_dir, &config.audio_extension, &extractor)?;
    let test = dataset::load_test_data(&config.test_dir, &config.audio_extension, &extractor)?;

    for (word, label) in dataset::LABEL_VOCABULARY {
        let frames: Vec<usize> = train
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.features.nrows())
            .collect();
        let mean = frames.iter().sum::<usize>() as f64 / frames.len().max(1) as f64;
        info!("{word} ({label}): {} examples, mean {mean:.1} frames", frames.len());
    }

    let scorable = test.iter().filter(|e| gold.get(&e.file_name).is_ok()).count();
    info!(
        "{} test files ({} with gold labels), {} coefficients per frame",
        test.len(),
        scorable,
        extractor.config().n_mfcc
    );
    info!("datasets ready for classification");

    Ok(())
}
