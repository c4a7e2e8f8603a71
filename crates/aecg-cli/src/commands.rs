use anyhow::{Context, Result};

use aecg_model::DecodeOptions;
use aecg_standards::{beat_terms, lead_terms, wave_terms};
use aecg_xml::read_aecg_with_options;
use tracing::info;

use aecg_cli::summary::{beat_table, lead_table, record_json, record_overview, term_table};

use crate::cli::{InspectArgs, OutputFormatArg};

/// Decode one document and print it. Returns true when decode warnings were raised.
pub fn run_inspect(args: &InspectArgs) -> Result<bool> {
    let options = if args.samples_only {
        DecodeOptions::samples_only()
    } else {
        DecodeOptions::new()
    }
    .with_annotations(args.annotations);

    let record = read_aecg_with_options(&args.file, options)
        .with_context(|| format!("decode {}", args.file.display()))?;
    info!(
        leads = record.nsig(),
        samples = record.nsamp(),
        warnings = record.warnings.len(),
        "decoded record"
    );

    match args.format {
        OutputFormatArg::Table => {
            for line in record_overview(&record) {
                println!("{line}");
            }
            println!("{}", lead_table(&record));
        }
        OutputFormatArg::Json => {
            println!("{}", record_json(&record).context("serialize record")?);
        }
    }
    Ok(record.has_warnings())
}

pub fn run_leads() -> Result<()> {
    println!("{}", term_table(lead_terms()));
    Ok(())
}

pub fn run_waves() -> Result<()> {
    println!("{}", term_table(wave_terms()));
    Ok(())
}

pub fn run_beats() -> Result<()> {
    println!("{}", beat_table(beat_terms()));
    Ok(())
}
