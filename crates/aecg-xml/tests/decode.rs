//! Decoding tests against fixture files and synthetic documents.

mod common;

use std::fs;

use aecg_xml::{
    AecgReader, DecodeOptions, DecodeWarning, decode_str, read_aecg, read_aecg_with_options,
};

use common::{document, fixture, series, simple_lead, single_series, time_base};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn reads_rec01_header() {
    let record = read_aecg(&fixture("rec01.xml")).expect("read rec01");
    let header = record.header.as_ref().expect("header");

    assert_eq!(header.series.name, "rec01");
    assert_eq!(header.series.date, "2016/02/05");
    assert_eq!(header.series.time, "14:30:00");
    assert!(header.series.recorded_at.is_some());
    assert_eq!(header.nsig(), 3);
    assert_eq!(header.nsamp, 6);
    assert!(close(header.sampling_frequency, 500.0));
    assert_eq!(header.labels(), vec!["I", "II", "V1"]);
    assert_eq!(header.units(), vec!["uV", "uV", "mV"]);

    let lead_i = header.lead(0).expect("lead I");
    assert_eq!(lead_i.zero_offset, 0.0);
    assert!((lead_i.gain - 0.209_715).abs() < 1e-6);
    assert_eq!(lead_i.code, "MDC_ECG_LEAD_I");

    let lead_ii = header.lead(1).expect("lead II");
    assert!(close(lead_ii.zero_offset, 0.005));
    assert!(close(lead_ii.gain, 0.2));

    let lead_v1 = header.lead(2).expect("lead V1");
    assert!(close(lead_v1.zero_offset, 0.000_25));
    assert!(close(lead_v1.gain, 0.4));
    assert_eq!(lead_v1.unit, "mV");
}

#[test]
fn reads_rec01_samples() {
    let record = read_aecg(&fixture("rec01.xml")).expect("read rec01");

    assert_eq!(record.nsig(), 3);
    assert_eq!(record.nsamp(), 6);
    assert_eq!(record.last_sample, 6);
    assert!(record.warnings.is_empty());
    assert!(record.annotations.is_none());
    assert_eq!(
        record.samples.column(0),
        Some(&[12.0, 15.0, 21.0, 30.0, 27.0, 18.0][..])
    );
    assert_eq!(
        record.samples.column(2),
        Some(&[100.0, 101.0, 99.0, 98.0, 102.0, 100.0][..])
    );
    assert_eq!(record.samples.row(3), Some(vec![30.0, 9.0, 98.0]));
}

#[test]
fn samples_only_skips_header() {
    let record = read_aecg_with_options(&fixture("rec01.xml"), DecodeOptions::samples_only())
        .expect("read rec01");
    assert!(record.header.is_none());
    assert_eq!(record.samples.ncols(), 3);
    assert_eq!(record.samples.nrows(), 6);
}

#[test]
fn annotations_are_an_empty_stub() {
    let options = DecodeOptions::new().with_annotations(true);
    let record = read_aecg_with_options(&fixture("rec01.xml"), options).expect("read rec01");
    let annotations = record.annotations.expect("annotation set");
    assert!(annotations.is_empty());
    assert_eq!(annotations.len(), 0);
}

#[test]
fn reader_over_bytes_uses_given_name() {
    let bytes = fs::read(fixture("rec01.xml")).expect("read fixture");
    let record = AecgReader::new(bytes.as_slice())
        .with_name("from-memory")
        .read_record()
        .expect("decode");
    assert_eq!(
        record.header.map(|h| h.series.name),
        Some("from-memory".to_string())
    );
}

#[test]
fn path_based_decode_uses_file_stem() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("holter_0042.xml");
    let xml = single_series(&[
        time_base("0.004", "s"),
        simple_lead("MDC_ECG_LEAD_I", "1 2"),
    ]);
    fs::write(&path, xml).expect("write document");

    let record = read_aecg(&path).expect("decode");
    let header = record.header.expect("header");
    assert_eq!(header.series.name, "holter_0042");
    assert!(close(header.sampling_frequency, 250.0));
}

#[test]
fn lead_count_matches_signal_components() {
    let leads = ["I", "II", "III", "aVR", "aVL", "aVF", "V1", "V2", "V3", "V4", "V5", "V6"];
    let mut components = vec![time_base("0.001", "s")];
    components.extend(
        leads
            .iter()
            .map(|code| simple_lead(&format!("MDC_ECG_LEAD_{code}"), "0 1 2 3")),
    );

    let record = decode_str("twelve", &single_series(&components), &DecodeOptions::new())
        .expect("decode");
    let header = record.header.expect("header");
    assert_eq!(header.nsig(), 12);
    assert_eq!(header.labels(), leads.to_vec());
    assert!(close(header.sampling_frequency, 1000.0));
    assert!(record.warnings.is_empty());
}

#[test]
fn time_base_position_does_not_matter() {
    let xml = single_series(&[
        simple_lead("MDC_ECG_LEAD_I", "1 2 3"),
        simple_lead("MDC_ECG_LEAD_II", "4 5 6"),
        time_base("2", "ms"),
    ]);
    let record = decode_str("trailing", &xml, &DecodeOptions::new()).expect("decode");
    let header = record.header.expect("header");
    assert_eq!(header.labels(), vec!["I", "II"]);
    assert!(close(header.sampling_frequency, 500.0));
}

#[test]
fn last_time_base_wins() {
    let xml = single_series(&[
        time_base("0.002", "s"),
        simple_lead("MDC_ECG_LEAD_I", "1"),
        time_base("0.001", "s"),
    ]);
    let record = decode_str("dup", &xml, &DecodeOptions::new()).expect("decode");
    let header = record.header.expect("header");
    assert!(close(header.sampling_frequency, 1000.0));
    assert_eq!(
        record.warnings,
        vec![DecodeWarning::LeadCountMismatch {
            expected: 2,
            decoded: 1
        }]
    );
}

#[test]
fn unrecognized_components_are_skipped() {
    let auxiliary = r#"<component><sequence>
        <code code="MDC_ECG_LEAD_II"/>
        <value xsi:type="SLIST_INT"><digits>9 9 9</digits></value>
      </sequence></component>"#
        .to_string();
    let xml = single_series(&[
        time_base("0.002", "s"),
        simple_lead("MDC_ECG_LEAD_I", "1 2"),
        auxiliary,
    ]);
    let record = decode_str("aux", &xml, &DecodeOptions::new()).expect("decode");
    assert_eq!(record.nsig(), 1);
    assert_eq!(
        record.warnings,
        vec![DecodeWarning::LeadCountMismatch {
            expected: 2,
            decoded: 1
        }]
    );
}

#[test]
fn multiple_series_uses_first_and_warns() {
    let first = series(
        "20160205143000",
        &[time_base("0.002", "s"), simple_lead("MDC_ECG_LEAD_I", "1 2 3")],
    );
    let second = series(
        "20170101000000",
        &[
            time_base("0.001", "s"),
            simple_lead("MDC_ECG_LEAD_V5", "7 8"),
            simple_lead("MDC_ECG_LEAD_V6", "7 8"),
        ],
    );
    let xml = document(&[first, second]);

    let record = decode_str("multi", &xml, &DecodeOptions::new()).expect("decode");
    assert_eq!(
        record.warnings,
        vec![DecodeWarning::MultipleSeries { count: 2 }]
    );
    let header = record.header.expect("header");
    assert_eq!(header.series.date, "2016/02/05");
    assert_eq!(header.labels(), vec!["I"]);
    assert!(close(header.sampling_frequency, 500.0));
    assert_eq!(record.samples.nrows(), 3);
}

#[test]
fn malformed_start_time_degrades_to_default() {
    let xml = document(&[series(
        "20160205143000.000",
        &[time_base("0.002", "s"), simple_lead("MDC_ECG_LEAD_I", "1")],
    )]);
    let header = decode_str("fractional", &xml, &DecodeOptions::new())
        .expect("decode")
        .header
        .expect("header");
    assert_eq!(header.series.date, "01/01/2000");
    assert_eq!(header.series.time, "00:00:00");
    assert!(header.series.recorded_at.is_none());
}

#[test]
fn comma_delimited_digits() {
    let xml = single_series(&[
        time_base("0.002", "s"),
        simple_lead("MDC_ECG_LEAD_I", "1,2,3"),
        simple_lead("MDC_ECG_LEAD_II", "4, 5, 6"),
    ]);
    let record = decode_str("commas", &xml, &DecodeOptions::new()).expect("decode");
    assert_eq!(record.samples.row(2), Some(vec![3.0, 6.0]));
}

#[test]
fn digits_are_the_element_text_content() {
    let xml = single_series(&[
        time_base("0.002", "s"),
        simple_lead("MDC_ECG_LEAD_I", "12<!-- c -->34"),
    ]);
    let record = decode_str("comment", &xml, &DecodeOptions::new()).expect("decode");
    assert_eq!(record.samples.column(0), Some(&[1234.0][..]));

    let xml = single_series(&[
        time_base("0.002", "s"),
        simple_lead("MDC_ECG_LEAD_I", "1&#x31;2 3"),
        simple_lead("MDC_ECG_LEAD_II", "4&#32;5"),
    ]);
    let record = decode_str("refs", &xml, &DecodeOptions::new()).expect("decode");
    assert_eq!(record.samples.column(0), Some(&[112.0, 3.0][..]));
    assert_eq!(record.samples.column(1), Some(&[4.0, 5.0][..]));
}

#[test]
fn decoding_is_idempotent() {
    let path = fixture("rec01.xml");
    let first = read_aecg(&path).expect("first decode");
    let second = read_aecg(&path).expect("second decode");
    assert_eq!(first, second);
}
