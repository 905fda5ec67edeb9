use log::info;

use crate::audio::FeatureExtractor;
use crate::config::PipelineConfig;
use crate::dataset::{self, Label, LabeledExample, TestExample};
use crate::error::{PipelineError, Result};
use crate::report;
use crate::scoring::{self, AccuracyReport, GoldLabels};

/// A nearest-neighbour style classifier supplied from outside the crate.
///
/// `predict` must return exactly one label per test example, in the order of
/// `test`.
pub trait Classifier {
    fn name(&self) -> &str;

    fn predict(
        &self,
        train: &[LabeledExample],
        test: &[TestExample],
    ) -> anyhow::Result<Vec<Label>>;
}

/// Load both datasets, classify the test set with both classifiers, write
/// the report and score it.
///
/// The report is written before scoring, so a test file missing from `gold`
/// still leaves a complete report on disk.
pub fn run(
    config: &PipelineConfig,
    gold: &GoldLabels,
    extractor: &dyn FeatureExtractor,
    euclidean: &dyn Classifier,
    dtw: &dyn Classifier,
) -> Result<AccuracyReport> {
    let train = dataset::load_train_data(&config.train_dir, &config.audio_extension, extractor)?;
    let test = dataset::load_test_data(&config.test_dir, &config.audio_extension, extractor)?;
    let file_names = dataset::file_names(&test);

    let euclidean_predictions = predict(euclidean, &train, &test)?;
    let dtw_predictions = predict(dtw, &train, &test)?;

    report::write_results(
        &config.output_path,
        &file_names,
        &euclidean_predictions,
        &dtw_predictions,
    )?;

    scoring::score(&file_names, &euclidean_predictions, &dtw_predictions, gold)
}

fn predict(
    classifier: &dyn Classifier,
    train: &[LabeledExample],
    test: &[TestExample],
) -> Result<Vec<Label>> {
    let predictions = classifier
        .predict(train, test)
        .map_err(|e| PipelineError::Classifier {
            name: classifier.name().to_string(),
            reason: format!("{e:#}"),
        })?;
    info!(
        "{} produced {} predictions for {} test files",
        classifier.name(),
        predictions.len(),
        test.len()
    );
    Ok(predictions)
}
