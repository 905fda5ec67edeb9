use std::fs;
use std::path::Path;

use log::info;

use crate::dataset::Label;
use crate::error::{PipelineError, Result, check_alignment};

const SEPARATOR: &str = " - ";

/// One line of the results report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub file_name: String,
    pub euclidean: Label,
    pub dtw: Label,
}

/// Render `<file> - <euclidean> - <dtw>` lines joined by `\n`, with no
/// trailing newline.
pub fn format_results(file_names: &[String], euclidean: &[Label], dtw: &[Label]) -> Result<String> {
    check_alignment(file_names.len(), euclidean.len(), dtw.len())?;

    let lines: Vec<String> = file_names
        .iter()
        .zip(euclidean)
        .zip(dtw)
        .map(|((name, e), d)| format!("{name}{SEPARATOR}{e}{SEPARATOR}{d}"))
        .collect();
    Ok(lines.join("\n"))
}

/// Write the report to `path`, replacing any previous contents. Nothing is
/// written when the sequences are misaligned.
pub fn write_results(
    path: &Path,
    file_names: &[String],
    euclidean: &[Label],
    dtw: &[Label],
) -> Result<()> {
    let text = format_results(file_names, euclidean, dtw)?;
    fs::write(path, text).map_err(|e| PipelineError::io(path, e))?;
    info!("wrote {} result lines to {}", file_names.len(), path.display());
    Ok(())
}

/// Parse a report produced by [`format_results`]. Blank lines are skipped.
///
/// File names may contain hyphens, so each line is split on its last two
/// separators.
pub fn parse_results(text: &str) -> Result<Vec<ResultRow>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_line(line).ok_or_else(|| PipelineError::MalformedReportLine {
                line_number: i + 1,
                line: line.to_string(),
            })
        })
        .collect()
}

fn parse_line(line: &str) -> Option<ResultRow> {
    let mut parts = line.trim_end().rsplitn(3, SEPARATOR);
    let dtw = parts.next()?.trim().parse().ok()?;
    let euclidean = parts.next()?.trim().parse().ok()?;
    let file_name = parts.next()?.to_string();
    if file_name.is_empty() {
        return None;
    }
    Some(ResultRow {
        file_name,
        euclidean,
        dtw,
    })
}
