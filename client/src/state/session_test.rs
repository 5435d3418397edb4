use super::*;
use serde_json::json;
use time::macros::datetime;

fn record() -> UserRecord {
    let mut extra = Map::new();
    extra.insert("plan".to_owned(), json!("monthly"));
    UserRecord {
        status: Some("active".to_owned()),
        expires_at: Some(ExpiresAt::Text("2031-01-01".to_owned())),
        password: Some("secret1".to_owned()),
        extra,
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn from_record_copies_fields_but_not_password() {
    let session = Session::from_record("ana@example.com", &record());
    assert_eq!(session.email, "ana@example.com");
    assert_eq!(session.status.as_deref(), Some("active"));
    assert_eq!(session.extra.get("plan"), Some(&json!("monthly")));
    assert_eq!(session.subscription_valid, None);

    let stored = serde_json::to_value(&session).unwrap();
    assert!(stored.get("password").is_none());
}

#[test]
fn merge_keeps_saved_fields_missing_remotely() {
    let mut session = Session::from_record("ana@example.com", &record());
    session.extra.insert("nickname".to_owned(), json!("Ana"));

    let mut newer = record();
    newer.status = None;
    newer.expires_at = Some(ExpiresAt::Text("2032-01-01".to_owned()));
    session.merge_record(&newer);

    assert_eq!(session.status.as_deref(), Some("active"));
    assert_eq!(session.expires_at, Some(ExpiresAt::Text("2032-01-01".to_owned())));
    assert_eq!(session.extra.get("nickname"), Some(&json!("Ana")));
}

#[test]
fn granted_and_revoked_toggle_validity() {
    let session = Session::from_record("a@b.c", &record()).granted();
    assert!(session.is_subscription_valid());
    let session = session.revoked();
    assert!(!session.is_subscription_valid());
    assert_eq!(session.subscription_valid, None);
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn serializes_with_record_field_names() {
    let session = Session::from_record("a@b.c", &record()).granted();
    assert_eq!(
        serde_json::to_value(&session).unwrap(),
        json!({
            "email": "a@b.c",
            "status": "active",
            "expiresAt": "2031-01-01",
            "subscriptionValid": true,
            "plan": "monthly"
        })
    );
}

#[test]
fn unset_validity_is_omitted() {
    let session = Session::from_record("a@b.c", &record());
    let stored = serde_json::to_value(&session).unwrap();
    assert!(stored.get("subscriptionValid").is_none());
}

#[test]
fn deserializes_native_timestamp_expiry() {
    let session: Session = serde_json::from_value(json!({
        "email": "a@b.c",
        "status": "active",
        "expiresAt": { "seconds": 1_900_000_000, "nanoseconds": 0 }
    }))
    .unwrap();
    assert_eq!(session.expires_on(), Some(datetime!(2030-03-17 17:46:40 UTC)));
    assert!(session.extra.is_empty());
}

#[test]
fn missing_email_fails_to_deserialize() {
    assert!(serde_json::from_value::<Session>(json!({ "status": "active" })).is_err());
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn has_identity_rejects_blank_email() {
    let mut session = Session::from_record("a@b.c", &record());
    assert!(session.has_identity());
    session.email = "   ".to_owned();
    assert!(!session.has_identity());
}

#[test]
fn status_label_reflects_status() {
    let mut session = Session::from_record("a@b.c", &record());
    assert_eq!(session.status_label(), "Active");
    session.status = Some("cancelled".to_owned());
    assert_eq!(session.status_label(), "Expired");
}
