//! Tests for correlation identifiers.

use corrlog::CorrelationId;
use uuid::Uuid;

#[test]
fn generated_ids_are_unique_and_not_nil() {
    let a = CorrelationId::new();
    let b = CorrelationId::new();
    assert_ne!(a, b);
    assert!(!a.is_nil());
    assert_eq!(a.as_uuid().get_version_num(), 4);
}

#[test]
fn display_is_hyphenated_uuid() {
    let uuid = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    let id = CorrelationId::from(uuid);
    assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
}

#[test]
fn parse_round_trips_display() {
    let id = CorrelationId::new();
    let parsed: CorrelationId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn parse_rejects_garbage() {
    let err = "not-a-uuid".parse::<CorrelationId>().unwrap_err();
    assert!(matches!(err, corrlog::Error::InvalidCorrelationId(ref s) if s == "not-a-uuid"));
}

#[test]
fn converts_back_to_uuid() {
    let uuid = Uuid::new_v4();
    let id = CorrelationId::from_uuid(uuid);
    assert_eq!(Uuid::from(id), uuid);
}
