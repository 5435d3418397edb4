use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn minimal_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("FIRESTORE_PROJECT_ID", "freepro-prod")])).expect("config");
    assert_eq!(config.port, 3000);
    assert_eq!(config.app.firestore.project_id, "freepro-prod");
    assert_eq!(config.app.firestore.database, "(default)");
    assert_eq!(config.app.firestore.collection, "users");
    assert_eq!(config.app.firestore.api_key, None);
    assert_eq!(config.app.storage_key, "freepro_user");
    assert_eq!(config.app.ready_timeout_ms, 5_000);
    assert!(config.app.subscription_urls.is_empty());
    assert!(config.calculators_dir.ends_with("calculators"));
}

#[test]
fn project_id_is_required() {
    let err = ServerConfig::from_lookup(lookup(&[])).expect_err("missing project");
    assert_eq!(err, ConfigError::Missing("FIRESTORE_PROJECT_ID"));
}

#[test]
fn blank_values_count_as_unset() {
    let err = ServerConfig::from_lookup(lookup(&[("FIRESTORE_PROJECT_ID", "   ")])).expect_err("blank project");
    assert_eq!(err, ConfigError::Missing("FIRESTORE_PROJECT_ID"));

    let config = ServerConfig::from_lookup(lookup(&[("FIRESTORE_PROJECT_ID", "p"), ("PORT", "")])).expect("config");
    assert_eq!(config.port, 3000);
}

#[test]
fn overrides_are_applied() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("FIRESTORE_PROJECT_ID", "p"),
        ("FIRESTORE_API_KEY", "k"),
        ("FIRESTORE_COLLECTION", "members"),
        ("PORT", "8080"),
        ("SESSION_STORAGE_KEY", "fp_session"),
        ("BACKEND_READY_TIMEOUT_MS", "250"),
        ("CALCULATORS_DIR", "/srv/calculators"),
    ]))
    .expect("config");
    assert_eq!(config.port, 8080);
    assert_eq!(config.app.firestore.api_key.as_deref(), Some("k"));
    assert_eq!(config.app.firestore.collection, "members");
    assert_eq!(config.app.storage_key, "fp_session");
    assert_eq!(config.app.ready_timeout_ms, 250);
    assert_eq!(config.calculators_dir, PathBuf::from("/srv/calculators"));
}

#[test]
fn subscription_urls_are_keyed_by_plan() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("FIRESTORE_PROJECT_ID", "p"),
        ("SUBSCRIPTION_URL_MONTHLY", "https://pay.example.com/m"),
        ("SUBSCRIPTION_URL_BIANNUAL", "https://pay.example.com/s"),
    ]))
    .expect("config");
    assert_eq!(config.app.subscription_urls.len(), 2);
    assert_eq!(config.app.checkout_url(Plan::Monthly, None).as_deref(), Some("https://pay.example.com/m"));
    assert_eq!(config.app.checkout_url(Plan::RENEWAL, None).as_deref(), Some("https://pay.example.com/s"));
    assert_eq!(config.app.checkout_url(Plan::Annual, None), None);
}

#[test]
fn invalid_numbers_are_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("FIRESTORE_PROJECT_ID", "p"), ("PORT", "http")])).expect_err("bad port");
    assert_eq!(err, ConfigError::Invalid { name: "PORT", value: "http".to_owned() });

    let err = ServerConfig::from_lookup(lookup(&[("FIRESTORE_PROJECT_ID", "p"), ("BACKEND_READY_TIMEOUT_MS", "-1")]))
        .expect_err("bad timeout");
    assert!(matches!(err, ConfigError::Invalid { name: "BACKEND_READY_TIMEOUT_MS", .. }));
}
