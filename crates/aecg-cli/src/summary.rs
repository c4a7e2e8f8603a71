//! Table and JSON views of decoded records and vocabularies.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use aecg_model::{AecgRecord, DecodeWarning, RecordHeader};
use aecg_standards::{BeatTerm, Term};

/// Serializable overview of a decoded record.
#[derive(Debug, Serialize)]
pub struct RecordSummary<'a> {
    pub samples: usize,
    pub leads: usize,
    pub last_sample: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<&'a RecordHeader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<usize>,
    pub warnings: &'a [DecodeWarning],
}

impl<'a> RecordSummary<'a> {
    pub fn new(record: &'a AecgRecord) -> Self {
        Self {
            samples: record.nsamp(),
            leads: record.nsig(),
            last_sample: record.last_sample,
            header: record.header.as_ref(),
            annotations: record.annotations.as_ref().map(aecg_model::AnnotationSet::len),
            warnings: &record.warnings,
        }
    }
}

/// Pretty-printed JSON for a record.
pub fn record_json(record: &AecgRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RecordSummary::new(record))
}

/// Text lines describing the record as a whole.
pub fn record_overview(record: &AecgRecord) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(header) = &record.header {
        lines.push(format!("Record: {}", header.series.name));
        lines.push(format!(
            "Start: {} {}",
            header.series.date, header.series.time
        ));
        lines.push(format!(
            "Sampling frequency: {} Hz",
            header.sampling_frequency
        ));
    }
    lines.push(format!(
        "Samples: {} x {} leads",
        record.nsamp(),
        record.nsig()
    ));
    if let Some(annotations) = &record.annotations {
        lines.push(format!("Annotations: {}", annotations.len()));
    }
    for warning in &record.warnings {
        lines.push(format!("warning: {warning}"));
    }
    lines
}

/// Per-lead calibration table. Without a header only sample columns are shown.
pub fn lead_table(record: &AecgRecord) -> Table {
    let mut table = Table::new();
    match &record.header {
        Some(header) => {
            table.set_header(vec![
                header_cell("#"),
                header_cell("Label"),
                header_cell("Code"),
                header_cell("Zero offset (V)"),
                header_cell("Gain"),
                header_cell("Unit"),
                header_cell("First"),
            ]);
            for (index, lead) in header.leads.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(index),
                    Cell::new(&lead.label).fg(Color::Blue).add_attribute(Attribute::Bold),
                    dim_cell(&lead.code),
                    Cell::new(lead.zero_offset),
                    Cell::new(format!("{:.6}", lead.gain)),
                    Cell::new(&lead.unit),
                    first_sample_cell(record, index),
                ]);
            }
        }
        None => {
            table.set_header(vec![header_cell("#"), header_cell("First")]);
            for index in 0..record.nsig() {
                table.add_row(vec![Cell::new(index), first_sample_cell(record, index)]);
            }
        }
    }
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

/// Lead or wave vocabulary listing.
pub fn term_table<'a>(terms: impl IntoIterator<Item = &'a Term>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Label"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for term in terms {
        table.add_row(vec![term.code, term.label, term.description]);
    }
    table
}

/// Beat vocabulary listing.
pub fn beat_table<'a>(terms: impl IntoIterator<Item = &'a BeatTerm>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Class"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for term in terms {
        table.add_row(vec![
            Cell::new(term.code),
            Cell::new(term.class),
            Cell::new(term.description),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn first_sample_cell(record: &AecgRecord, lead: usize) -> Cell {
    match record.samples.get(0, lead) {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
