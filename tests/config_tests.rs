// tests/config_tests.rs
use filetrail::config::Config;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.capacity, 50);
}

#[test]
fn test_custom_config() {
    let config = Config { capacity: 10 };
    assert_eq!(config.capacity, 10);
}

#[test]
fn test_parse_from_toml() {
    let config: Config = toml::from_str("capacity = 7").unwrap();
    assert_eq!(config.capacity, 7);
}

#[test]
fn test_parse_empty_toml_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.capacity, 50);
}

#[test]
fn test_serialize_roundtrip() {
    let config = Config { capacity: 25 };
    let serialized = toml::to_string(&config).unwrap();
    let restored: Config = toml::from_str(&serialized).unwrap();
    assert_eq!(restored.capacity, 25);
}
