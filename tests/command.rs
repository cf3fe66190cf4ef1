//! 변환 명령 처리와 CLI 출력 검증.

use std::io::Cursor;

use unit_conversion_toolbox::app::{ConversionCommand, Outcome, NO_VALUE};
use unit_conversion_toolbox::config::Config;
use unit_conversion_toolbox::messages::Messages;
use unit_conversion_toolbox::ui_cli::{self, OutputFormat};

const VERSION: &str = "Unit Conversion 1.0.0";

fn run(from: Option<&str>, to: Option<&str>, units: Option<&str>, validate: Option<&str>) -> Outcome {
    ConversionCommand::new(from, to, units, validate).execute().outcome
}

#[test]
fn converts_without_validation() {
    let report = ConversionCommand::new(Some("celsius"), Some("fahrenheit"), Some("100"), None).execute();
    assert_eq!(report.outcome, Outcome::Converted);
    assert_eq!(report.input_value, "100.0");
    assert_eq!(report.input_symbol, "C");
    assert_eq!(report.output_value, "212.0");
    assert_eq!(report.output_symbol, "F");
    assert_eq!(report.validation_value, NO_VALUE);
    assert_eq!(report.message(&Messages::new("en-us")), "100.0 C = 212.0 F");
    assert_eq!(report.outcome.exit_code(), 0);
}

#[test]
fn validates_expected_answer() {
    let report =
        ConversionCommand::new(Some("celsius"), Some("fahrenheit"), Some("100"), Some("212")).execute();
    assert_eq!(report.outcome, Outcome::Validated);
    assert_eq!(report.validation_value, "212.0");
    assert_eq!(report.outcome.validation_label(), "Correct");

    // 검증값도 소수 한 자리로 반올림한 뒤 비교한다.
    assert_eq!(run(Some("celsius"), Some("fahrenheit"), Some("100"), Some("211.96")), Outcome::Validated);
}

#[test]
fn wrong_answer_is_incorrect() {
    let report =
        ConversionCommand::new(Some("celsius"), Some("fahrenheit"), Some("100"), Some("200")).execute();
    assert_eq!(report.outcome, Outcome::Incorrect);
    assert_eq!(report.outcome.exit_code(), 1);
    assert_eq!(
        report.message(&Messages::new("en-us")),
        "100.0 C = 212.0 F; the answer 200.0 F is incorrect."
    );
}

#[test]
fn bad_values_are_reported() {
    let report = ConversionCommand::new(Some("celsius"), Some("fahrenheit"), Some("dog"), None).execute();
    assert_eq!(report.outcome, Outcome::BadValue);
    assert_eq!(report.subject.as_deref(), Some("dog"));
    assert_eq!(report.message(&Messages::new("en-us")), "'dog' is not a valid number.");

    assert_eq!(run(Some("liters"), Some("cups"), Some("lots"), None), Outcome::BadValue);
    assert_eq!(run(Some("celsius"), Some("kelvin"), Some("1"), Some("lots")), Outcome::BadValue);
    assert_eq!(run(Some("celsius"), Some("kelvin"), Some("1_000"), None), Outcome::BadValue);
    assert_eq!(run(Some("celsius"), Some("fahrenheit"), Some("100"), Some("2_12")), Outcome::BadValue);
    assert_eq!(
        run(Some("celsius"), Some("celsius"), Some("12345678901234567890123456789"), None),
        Outcome::BadValue
    );
}

#[test]
fn unknown_type_is_reported() {
    let report = ConversionCommand::new(Some("pints"), Some("cups"), Some("1"), None).execute();
    assert_eq!(report.outcome, Outcome::BadType);
    assert_eq!(report.input_type, "pints");
    assert_eq!(
        report.message(&Messages::new("en-us")),
        "'pints' is not a supported conversion type."
    );
    assert_eq!(run(Some("cups"), Some("pints"), Some("1"), None), Outcome::BadType);
    assert_eq!(report.outcome.exit_code(), 2);
}

#[test]
fn cross_family_is_a_mismatch() {
    let report = ConversionCommand::new(Some("celsius"), Some("cups"), Some("1"), None).execute();
    assert_eq!(report.outcome, Outcome::Mismatch);
    assert_eq!(report.message(&Messages::new("en-us")), "Cannot convert Celsius to cups.");
}

#[test]
fn missing_inputs_are_reported_in_order() {
    assert_eq!(run(None, None, None, None), Outcome::NoFromType);
    assert_eq!(run(Some("celsius"), None, None, None), Outcome::NoToType);
    assert_eq!(run(Some("celsius"), Some("kelvin"), None, None), Outcome::NoUnits);
    assert_eq!(run(Some(""), Some("kelvin"), Some("1"), None), Outcome::NoFromType);

    let report = ConversionCommand::default().execute();
    assert_eq!(report.input_type, NO_VALUE);
    assert_eq!(report.output_type, NO_VALUE);
    assert_eq!(report.input_value, NO_VALUE);
    assert_eq!(report.output_value, NO_VALUE);
    assert_eq!(report.validation_value, NO_VALUE);
}

#[test]
fn none_literal_means_absent() {
    assert_eq!(run(Some("NONE"), Some("kelvin"), Some("1"), None), Outcome::NoFromType);
    assert_eq!(run(Some("celsius"), Some("kelvin"), Some("1"), Some("NONE")), Outcome::Converted);
}

#[test]
fn text_output_has_header_and_indented_result() {
    let report = ConversionCommand::new(Some("liters"), Some("cups"), Some("22.5"), None).execute();
    let text = ui_cli::render_text(&report, &Messages::new("en-us"), VERSION);
    assert_eq!(text, "Unit Conversion 1.0.0:\n  22.5 l = 95.1 cups");
}

#[test]
fn json_output_uses_response_keys() {
    let report =
        ConversionCommand::new(Some("celsius"), Some("fahrenheit"), Some("100"), Some("212")).execute();
    let json = ui_cli::render_json(&report, &Messages::new("en-us"), VERSION);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["appVersion"], VERSION);
    assert_eq!(value["inputType"], "Celsius");
    assert_eq!(value["inputValue"], "100.0");
    assert_eq!(value["outputType"], "Fahrenheit");
    assert_eq!(value["outputValue"], "212.0");
    assert_eq!(value["validationValue"], "212.0");
    assert_eq!(value["validation"], "Correct");
    assert!(value["appResult"].as_str().unwrap().contains("is correct"));
}

#[test]
fn list_groups_types_by_family() {
    let list = ui_cli::list_types(&Messages::new("en-us"));
    assert!(list.starts_with("Supported conversion types:"));
    let temp = list.find("Temperature:").unwrap();
    let vol = list.find("Volume:").unwrap();
    assert!(temp < list.find("rankine").unwrap());
    assert!(vol < list.find("tablespoons").unwrap());
    assert!(temp < vol);
}

#[test]
fn interactive_session_converts_until_empty_line() {
    let mut input = Cursor::new("celsius\nfahrenheit\n100\n\ncups\nliters\n95.1\n22.5\n\n");
    let mut output = Vec::new();
    ui_cli::interactive(
        &mut input,
        &mut output,
        &Config::default(),
        &Messages::new("en-us"),
        OutputFormat::Text,
    )
    .unwrap();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("100.0 C = 212.0 F"));
    assert!(text.contains("95.1 cups = 22.5 l; the answer 22.5 l is correct."));
    assert!(text.trim_end().ends_with("Exiting."));
}

#[test]
fn interactive_session_stops_at_end_of_input() {
    let mut input = Cursor::new("kelvin\n");
    let mut output = Vec::new();
    ui_cli::interactive(
        &mut input,
        &mut output,
        &Config::default(),
        &Messages::new("en-us"),
        OutputFormat::Text,
    )
    .unwrap();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("No type to convert to was entered"));
    assert!(text.trim_end().ends_with("Exiting."));
}
