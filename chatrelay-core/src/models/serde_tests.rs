//! Serde serialization/deserialization tests for core types.
//!
//! The on-disk session layout is a compatibility surface: field names and
//! provider tags must stay exactly as existing installs wrote them.

use chrono::{TimeZone, Utc};

use crate::{ProviderKind, SessionRecord};

// ============================================================================
// ProviderKind Serde Tests
// ============================================================================

#[test]
fn test_provider_kind_serde_roundtrip_all_variants() {
    for kind in ProviderKind::all() {
        let json = serde_json::to_string(kind).unwrap();
        let deserialized: ProviderKind = serde_json::from_str(&json).unwrap();
        assert_eq!(*kind, deserialized, "Round-trip failed for {:?}", kind);
    }
}

#[test]
fn test_provider_kind_serializes_lowercase() {
    // ProviderKind uses serde(rename_all = "lowercase"); these tags double as
    // the persisted `provider_type` values.
    assert_eq!(
        serde_json::to_string(&ProviderKind::OpenRouter).unwrap(),
        r#""openrouter""#
    );
    assert_eq!(
        serde_json::to_string(&ProviderKind::VseGpt).unwrap(),
        r#""vsegpt""#
    );
}

#[test]
fn test_provider_kind_invalid_deserialize() {
    let result: Result<ProviderKind, _> = serde_json::from_str(r#""anthropic""#);
    assert!(result.is_err());
}

// ============================================================================
// SessionRecord Serde Tests
// ============================================================================

#[test]
fn test_session_record_field_names_are_fixed() {
    let record = SessionRecord {
        api_key: "sk-or-vv-abc".to_string(),
        pin: "1234".to_string(),
        provider: ProviderKind::VseGpt,
        last_balance: "150.50₽".to_string(),
        last_checked_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
    };

    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();

    for field in ["api_key", "pin", "provider_type", "last_balance", "last_checked"] {
        assert!(object.contains_key(field), "missing field {field}");
    }
    assert_eq!(object.len(), 5);
    assert_eq!(object["provider_type"], "vsegpt");
    // chrono serializes DateTime<Utc> as an ISO-8601/RFC 3339 string.
    assert!(object["last_checked"].as_str().unwrap().starts_with("2024-01-15T10:00:00"));
}

#[test]
fn test_session_record_roundtrip() {
    let record = SessionRecord::new(
        "sk-or-v1-abc",
        "9999",
        ProviderKind::OpenRouter,
        "$6.50",
    );

    let json = serde_json::to_string(&record).unwrap();
    let deserialized: SessionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, deserialized);
}

#[test]
fn test_session_record_reads_existing_layout() {
    // A record exactly as an existing install would have written it.
    let json = r#"{
        "api_key": "sk-or-v1-xyz",
        "pin": "4321",
        "provider_type": "openrouter",
        "last_balance": "$12.00",
        "last_checked": "2024-06-01T08:30:00Z"
    }"#;

    let record: SessionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.provider, ProviderKind::OpenRouter);
    assert_eq!(record.pin, "4321");
    assert_eq!(record.last_balance, "$12.00");
}
