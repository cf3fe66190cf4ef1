//! 메시지 번들, 언어 선택, 설정 파일, 로그 레벨 검증.

use std::fs;

use tempfile::{tempdir, NamedTempFile};
use tracing::Level;
use unit_conversion_toolbox::config::{self, Config, ConfigError};
use unit_conversion_toolbox::logging;
use unit_conversion_toolbox::messages::{
    keys, resolve_language, Language, Messages, DEFAULT_MESSAGE_TEXT,
};

#[test]
fn render_replaces_placeholders() {
    let m = Messages::new("en-us");
    let text = m.render(
        keys::RESULT_CONVERTED,
        &[
            ("input_value", "100.0"),
            ("input_symbol", "C"),
            ("output_value", "212.0"),
            ("output_symbol", "F"),
        ],
    );
    assert_eq!(text, "100.0 C = 212.0 F");
}

#[test]
fn missing_key_falls_back_to_default_text() {
    let m = Messages::new("en-us");
    assert_eq!(m.get("no.such.key"), DEFAULT_MESSAGE_TEXT);
    assert_eq!(m.render("no.such.key", &[("x", "y")]), DEFAULT_MESSAGE_TEXT);
}

#[test]
fn korean_bundle_is_built_in() {
    let m = Messages::new("ko-KR");
    assert_eq!(m.language(), Language::Ko);
    assert_eq!(m.get(keys::LIST_VOLUME), "체적");
    assert_eq!(Messages::new("fr").language(), Language::En);
}

#[test]
fn language_pack_overrides_built_in_strings() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("en-us.toml"),
        "[result]\nconverted = \"{output_value} {output_symbol}!\"\n",
    )
    .unwrap();
    let pack = dir.path().to_str().unwrap();
    let m = Messages::new_with_pack("en-us", Some(pack));
    assert_eq!(
        m.render(keys::RESULT_CONVERTED, &[("output_value", "212.0"), ("output_symbol", "F")]),
        "212.0 F!"
    );
    // 덮어쓰지 않은 키는 내장 문자열을 유지한다.
    assert_eq!(m.get(keys::APP_EXIT), "Exiting.");
}

#[test]
fn language_pack_falls_back_to_base_code() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ko.toml"), "[app]\nexit = \"안녕히\"\n").unwrap();
    let m = Messages::new_with_pack("ko-kr", dir.path().to_str());
    assert_eq!(m.get(keys::APP_EXIT), "안녕히");
}

#[test]
fn language_pack_reads_only_section_strings() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("en-us.toml"),
        "exit = \"top level\"\n[app]\nexit = \"Bye.\"\nheader = 3\n[app.extra]\nexit = \"deep\"\n",
    )
    .unwrap();
    let m = Messages::new_with_pack("en-us", dir.path().to_str());
    assert_eq!(m.get(keys::APP_EXIT), "Bye.");
    assert_eq!(m.get(keys::APP_HEADER), "{app_version}:");
    assert_eq!(m.get("exit"), DEFAULT_MESSAGE_TEXT);
    assert_eq!(m.get("app.extra.exit"), DEFAULT_MESSAGE_TEXT);
}

#[test]
fn missing_or_broken_pack_keeps_built_in_strings() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("en-us.toml"), "not = [valid").unwrap();
    let m = Messages::new_with_pack("en-us", dir.path().to_str());
    assert_eq!(m.get(keys::APP_EXIT), "Exiting.");
    let m = Messages::new_with_pack("en-us", Some("/no/such/dir"));
    assert_eq!(m.get(keys::APP_EXIT), "Exiting.");
}

#[test]
fn language_resolution_prefers_flag_then_config() {
    assert_eq!(resolve_language(Some("ko"), Some("en-us")), "ko-kr");
    assert_eq!(resolve_language(Some("auto"), Some("en")), "en-us");
    assert_eq!(resolve_language(None, Some("KO-kr")), "ko-kr");
}

#[test]
fn config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.app_name, "Unit Conversion");
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.log_level, "warn");
    assert!(cfg.language_pack_dir.is_none());
    assert_eq!(cfg.server.address(), "127.0.0.1:8080");
    assert_eq!(
        cfg.app_version(),
        format!("Unit Conversion {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn partial_config_file_uses_defaults_for_the_rest() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "app_name = \"Lab\"\n[server]\nport = 9000\n").unwrap();
    let cfg = config::load_or_default(file.path()).unwrap();
    assert_eq!(cfg.app_name, "Lab");
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.server.port, 9000);
}

#[test]
fn config_round_trips_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "ko-kr".into();
    cfg.language_pack_dir = Some("packs".into());
    cfg.server.port = 3030;
    cfg.save_to(&path).unwrap();

    let loaded = config::load_or_default(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_config_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let cfg = config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn broken_config_file_is_an_error() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "port = = 1").unwrap();
    let err = config::load_or_default(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Deserialize(_)));
}

#[test]
fn log_level_parsing() {
    assert_eq!(logging::parse_level("debug"), Level::DEBUG);
    assert_eq!(logging::parse_level(" info "), Level::INFO);
    assert_eq!(logging::parse_level("loud"), Level::WARN);
}
