use std::collections::HashMap;
use std::fmt;

use log::info;

use crate::dataset::Label;
use crate::error::{PipelineError, Result, check_alignment};
use crate::gold::GOLD_LABELS;

/// Immutable file name → gold label table.
#[derive(Debug, Clone, Default)]
pub struct GoldLabels {
    labels: HashMap<String, Label>,
}

impl GoldLabels {
    /// The table compiled into the crate.
    pub fn builtin() -> Self {
        GOLD_LABELS
            .iter()
            .map(|&(name, label)| (name.to_string(), label))
            .collect()
    }

    pub fn get(&self, file_name: &str) -> Result<Label> {
        self.labels
            .get(file_name)
            .copied()
            .ok_or_else(|| PipelineError::MissingGoldLabel {
                file_name: file_name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<(String, Label)> for GoldLabels {
    fn from_iter<I: IntoIterator<Item = (String, Label)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyReport {
    pub euclidean: f64,
    pub dtw: f64,
    /// Number of scored test files.
    pub total: usize,
}

impl fmt::Display for AccuracyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Euclidean distance accuracy is: {}", self.euclidean)?;
        write!(f, "DTW distance accuracy is: {}", self.dtw)
    }
}

/// Score two prediction sequences against `gold`.
///
/// Predictions must be index-aligned with `file_names`. Every file must have
/// a gold label; a missing one is a data error, not a miss.
pub fn score(
    file_names: &[String],
    euclidean: &[Label],
    dtw: &[Label],
    gold: &GoldLabels,
) -> Result<AccuracyReport> {
    check_alignment(file_names.len(), euclidean.len(), dtw.len())?;
    if file_names.is_empty() {
        return Err(PipelineError::EmptyTestSet);
    }

    let expected = file_names
        .iter()
        .map(|name| gold.get(name))
        .collect::<Result<Vec<_>>>()?;

    let correct = |predictions: &[Label]| {
        predictions
            .iter()
            .zip(&expected)
            .filter(|(p, g)| p == g)
            .count()
    };

    let total = file_names.len();
    let report = AccuracyReport {
        euclidean: correct(euclidean) as f64 / total as f64,
        dtw: correct(dtw) as f64 / total as f64,
        total,
    };
    info!(
        "scored {total} files: euclidean={:.4} dtw={:.4}",
        report.euclidean, report.dtw
    );
    Ok(report)
}
