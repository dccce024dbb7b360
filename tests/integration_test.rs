//! Integration tests for pingview-template
//!
//! These tests run the complete workflow from CSV file to template file.

use pingview_template::{
    models::ParserConfig,
    output::{TemplateOptions, ValidationWarning, WriteSummary},
    processing::SortPolicy,
    run,
};
use std::fs;

const VEHICLES_01: &str = "src/tests/test_data/vehicles_01.csv";

fn run_to_string(
    config: &ParserConfig,
    options: &TemplateOptions,
) -> (String, WriteSummary, Vec<ValidationWarning>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("pingview_template.txt");
    let mut warnings: Vec<ValidationWarning> = Vec::new();

    let summary = run(config, options, &output, &mut warnings).expect("Run failed");
    let text = fs::read_to_string(&output).expect("Failed to read template");
    (text, summary, warnings)
}

#[test]
fn test_two_rows_one_without_identifier() {
    let config = ParserConfig::new("src/tests/test_data/two_rows.csv", "all");
    let (text, summary, warnings) = run_to_string(&config, &TemplateOptions::default());

    assert_eq!(summary.written, 1);
    assert!(warnings.is_empty());
    assert_eq!(
        text,
        "Group: ALFA1 VARESE MSB - TGU: 12345 - Via Roma 1 - NORD\n\
         10.0.0.1 GATEWAY\n\
         10.0.0.141 VOIP\n\
         10.0.0.10 PC\n\
         \n"
    );
}

#[test]
fn test_full_workflow_zone_call_sign() {
    let config = ParserConfig::new(VEHICLES_01, "all");
    let (text, summary, warnings) = run_to_string(&config, &TemplateOptions::default());

    assert_eq!(
        summary,
        WriteSummary {
            written: 5,
            warnings: 2
        }
    );
    let expected = "\
Group: ALFA COMO MSB - TGU: 888000 - Via Lago - LAGHI
0.0.0.1 GATEWAY
0.0.0.141 VOIP
0.0.0.10 PC

Group: CRI_VA VARESE MSB - TGU: 023456 - Via Pietro, 11 - LAGHI
192.168.3.1 GATEWAY
192.168.3.141 VOIP
192.168.3.10 PC

Group: SOSCUN CUNARDO MSB - TGU: 03288574 - Via Pini 8 - LAGHI
192.168.1.1 GATEWAY
192.168.1.141 VOIP
192.168.1.10 PC

Group: ALFA BERGAMO MSA - TGU: 777000 - Via Città Alta - MONTAGNA
10.0.0.1 GATEWAY
10.0.0.141 VOIP
10.0.0.10 PC

Group: BRAVO MILANO MSB - TGU: 555111 - Piazza Duomo - PIANURA
0.0.0.1 GATEWAY
0.0.0.141 VOIP
0.0.0.10 PC

";
    assert_eq!(text, expected);

    let named: Vec<(&str, &str)> = warnings
        .iter()
        .map(|w| (w.call_sign.as_str(), w.city.as_str()))
        .collect();
    assert_eq!(named, vec![("ALFA", "COMO"), ("BRAVO", "MILANO")]);
}

#[test]
fn test_call_sign_order_is_stable() {
    let config = ParserConfig::new(VEHICLES_01, "all");
    let options = TemplateOptions {
        sort: SortPolicy::CallSign,
        zone_suffix: false,
    };
    let (text, _, _) = run_to_string(&config, &options);

    let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("Group:")).collect();
    // both ALFA rows keep their file order: BERGAMO comes before COMO
    assert_eq!(
        headers,
        vec![
            "Group: ALFA BERGAMO MSA - TGU: 777000 - Via Città Alta",
            "Group: ALFA COMO MSB - TGU: 888000 - Via Lago",
            "Group: BRAVO MILANO MSB - TGU: 555111 - Piazza Duomo",
            "Group: CRI_VA VARESE MSB - TGU: 023456 - Via Pietro, 11",
            "Group: SOSCUN CUNARDO MSB - TGU: 03288574 - Via Pini 8",
        ]
    );
}

#[test]
fn test_zone_filter() {
    let config = ParserConfig::new(VEHICLES_01, "laghi");
    let (text, summary, warnings) = run_to_string(&config, &TemplateOptions::default());

    assert_eq!(summary.written, 3);
    assert_eq!(warnings.len(), 1);
    assert!(text
        .lines()
        .filter(|l| l.starts_with("Group:"))
        .all(|l| l.ends_with(" - LAGHI")));
}

#[test]
fn test_unknown_zone_writes_empty_template() {
    let config = ParserConfig::new(VEHICLES_01, "collina");
    let (text, summary, _) = run_to_string(&config, &TemplateOptions::default());

    assert_eq!(summary.written, 0);
    assert!(text.is_empty());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("pingview_template.txt");
    let config = ParserConfig::new("src/tests/test_data/missing.csv", "all");
    let mut warnings: Vec<ValidationWarning> = Vec::new();

    let err = run(&config, &TemplateOptions::default(), &output, &mut warnings).unwrap_err();

    assert!(err.is_io());
    assert!(!output.exists(), "Output must not be created when input fails");
}

#[test]
fn test_unterminated_quote_is_format_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("pingview_template.txt");
    let config = ParserConfig::new("src/tests/test_data/unterminated_quote.csv", "all");
    let mut warnings: Vec<ValidationWarning> = Vec::new();

    let err = run(&config, &TemplateOptions::default(), &output, &mut warnings).unwrap_err();

    assert!(err.is_format(), "expected format error, got {err}");
    assert!(!output.exists(), "Output must not be created when input is malformed");
}
