use std::collections::HashMap;
use std::path::PathBuf;

use triage_server::config::{
    BIND_ADDR_VAR, DATA_DIR_VAR, LOG_FORMAT_VAR, LogFormat, ServerConfig,
};

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<ServerConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert!(config.data_dir.ends_with("triage") || config.data_dir == PathBuf::from("data"));
}

#[test]
fn variables_override_defaults() {
    let config = config_from(&[
        (BIND_ADDR_VAR, "0.0.0.0:9000"),
        (DATA_DIR_VAR, "/var/lib/triage"),
        (LOG_FORMAT_VAR, "json"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.port(), 9000);
    assert_eq!(config.data_dir, PathBuf::from("/var/lib/triage"));
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = config_from(&[(BIND_ADDR_VAR, "  "), (LOG_FORMAT_VAR, "")]).unwrap();
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn invalid_values_name_the_variable() {
    let err = config_from(&[(BIND_ADDR_VAR, "localhost")]).unwrap_err();
    assert!(err.to_string().contains(BIND_ADDR_VAR));

    let err = config_from(&[(LOG_FORMAT_VAR, "xml")]).unwrap_err();
    assert!(err.to_string().contains(LOG_FORMAT_VAR));
}
