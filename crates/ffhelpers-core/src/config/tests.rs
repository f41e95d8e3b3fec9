use super::loader::parse;
use super::*;

#[test]
fn default_config_has_expected_values() {
    // Arrange / Act
    let mut config = Config::default();
    config.validate();

    // Assert
    assert_eq!(config.display.port, 11);
    assert_eq!(config.display.settle_ms, 500);
    assert_eq!(config.launcher.script, "fontforge.bat");
    assert_eq!(config.locales.output, "localelist.txt");
    assert!(config.locales.show_current);
    assert!(!config.log.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[display]\nport = 9\n";

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.display.port, 9);
    assert_eq!(config.display.settle_ms, 500);
    assert_eq!(config.launcher.script, "fontforge.bat");
}

#[test]
fn empty_file_is_all_defaults() {
    let config = parse("").unwrap();

    assert_eq!(config.display.port, 11);
    assert_eq!(config.log.level, crate::log::Level::Info);
}

#[test]
fn validate_clamps_out_of_range_values() {
    // Arrange
    let toml_str = r#"
[display]
port = 0
settle_ms = 600000

[launcher]
script = "  "

[locales]
output = ""

[log]
max_file_mb = 0
"#;

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.display.port, 11);
    assert_eq!(config.display.settle_ms, 10_000);
    assert_eq!(config.launcher.script, "fontforge.bat");
    assert_eq!(config.locales.output, "localelist.txt");
    assert_eq!(config.log.max_file_mb, 1);
}

#[test]
fn port_above_u16_is_a_parse_error() {
    assert!(parse("[display]\nport = 70000\n").is_err());
}

#[test]
fn config_roundtrips_through_toml() {
    // Arrange
    let mut config = Config::default();
    config.display.port = 12;
    config.locales.show_current = false;

    // Act
    let serialized = toml::to_string(&config).unwrap();
    let deserialized = parse(&serialized).unwrap();

    // Assert
    assert_eq!(deserialized.display.port, 12);
    assert!(!deserialized.locales.show_current);
}

#[test]
fn settle_delay_is_in_milliseconds() {
    let config = Config::default();

    assert_eq!(config.settle_delay(), std::time::Duration::from_millis(500));
}
