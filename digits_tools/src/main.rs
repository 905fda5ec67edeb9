mod report_to_jsonl;

use std::path::Path;

use anyhow::Result;
use digits_core::GoldLabels;

fn main() -> Result<()> {
    env_logger::init();

    report_to_jsonl::convert(
        Path::new("output.txt"),
        Path::new("manifests/results.jsonl"),
        &GoldLabels::builtin(),
    )?;
    Ok(())
}
