//! Tests for host configuration resolution

use idxstrip::config::{
    ConnectionSource, DEFAULT_CONNECTION_STRING, DEV_CONNECTION_STRING, HostConfig,
    PROD_CONNECTION_STRING,
};

#[test]
fn prod_used_when_dev_missing() {
    let config = HostConfig::from_lookup(|key| {
        (key == PROD_CONNECTION_STRING).then(|| "server=db;uid=app;pwd=hunter2".to_string())
    });

    assert_eq!(config.source, ConnectionSource::Prod);
    assert_eq!(config.masked_connection_string(), "server=db;uid=app;pwd=***");
}

#[test]
fn default_never_leaks_password() {
    let config = HostConfig::from_lookup(|_| None);

    assert_eq!(config.connection_string, DEFAULT_CONNECTION_STRING);
    assert!(!config.masked_connection_string().contains("YourPassword"));
}

#[test]
fn source_display_names_variable() {
    assert_eq!(ConnectionSource::Dev.to_string(), DEV_CONNECTION_STRING);
    assert_eq!(ConnectionSource::Default.to_string(), "default");
}
