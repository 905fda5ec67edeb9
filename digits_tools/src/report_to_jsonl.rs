use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use digits_core::{GoldLabels, Label, report};

#[derive(Debug, Serialize)]
struct ResultLine {
    file_name: String,
    euclidean: Label,
    dtw: Label,
    gold: Option<Label>,
}

#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub written: usize,
    pub missing_gold: usize,
    pub euclidean_correct: usize,
    pub dtw_correct: usize,
}

/// Join every row of a results report with its gold label and write one
/// JSON object per line.
pub fn convert(report_path: &Path, out_path: &Path, gold: &GoldLabels) -> Result<Summary> {
    info!("Converting {} to JSONL", report_path.display());

    let text = std::fs::read_to_string(report_path)
        .with_context(|| format!("Failed to read report: {}", report_path.display()))?;
    let rows = report::parse_results(&text)
        .with_context(|| format!("Failed to parse report: {}", report_path.display()))?;

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let out_file = File::create(out_path)
        .with_context(|| format!("Failed to create output: {}", out_path.display()))?;
    let mut writer = BufWriter::new(out_file);

    let mut summary = Summary::default();

    for row in rows {
        let gold_label = gold.get(&row.file_name).ok();
        match gold_label {
            Some(g) => {
                summary.euclidean_correct += usize::from(row.euclidean == g);
                summary.dtw_correct += usize::from(row.dtw == g);
            }
            None => {
                warn!("no gold label for {}", row.file_name);
                summary.missing_gold += 1;
            }
        }

        let line = ResultLine {
            file_name: row.file_name,
            euclidean: row.euclidean,
            dtw: row.dtw,
            gold: gold_label,
        };
        serde_json::to_writer(&mut writer, &line)?;
        writer.write_all(b"\n")?;
        summary.written += 1;
    }

    writer.flush()?;

    info!("Wrote: {}", out_path.display());
    info!("Rows: {}", summary.written);
    info!("Missing gold label: {}", summary.missing_gold);
    info!(
        "Correct (euclidean / dtw): {} / {}",
        summary.euclidean_correct, summary.dtw_correct
    );

    Ok(summary)
}
