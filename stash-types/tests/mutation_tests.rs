use stash_types::{Mutation, MutationKind, RecordId, SequenceNumber};

// ── MutationKind ─────────────────────────────────────────────────

#[test]
fn kind_as_str_parse_roundtrip() {
    for kind in [
        MutationKind::Create,
        MutationKind::Update,
        MutationKind::Delete,
    ] {
        assert_eq!(MutationKind::parse(kind.as_str()), Some(kind));
    }
}

#[test]
fn kind_parse_rejects_unknown() {
    assert_eq!(MutationKind::parse("upsert"), None);
    assert_eq!(MutationKind::parse(""), None);
    assert_eq!(MutationKind::parse("CREATE"), None);
}

#[test]
fn kind_serde_uses_snake_case() {
    assert_eq!(
        serde_json::to_string(&MutationKind::Create).unwrap(),
        "\"create\""
    );
    assert_eq!(
        serde_json::to_string(&MutationKind::Delete).unwrap(),
        "\"delete\""
    );
}

#[test]
fn kind_display_matches_as_str() {
    assert_eq!(MutationKind::Update.to_string(), "update");
}

// ── Mutation ─────────────────────────────────────────────────────

#[test]
fn mutation_serde_roundtrip() {
    let mutation = Mutation {
        seq: SequenceNumber::new(3),
        record_type: "todo".to_string(),
        record_id: RecordId::new(),
        kind: MutationKind::Update,
        snapshot: Some(r#"{"name":"test"}"#.to_string()),
        enqueued_at: 1_700_000_000_000,
    };

    let json = serde_json::to_string(&mutation).unwrap();
    let back: Mutation = serde_json::from_str(&json).unwrap();
    assert_eq!(mutation, back);
}

#[test]
fn delete_mutation_may_carry_snapshot() {
    let mutation = Mutation {
        seq: SequenceNumber::new(1),
        record_type: "todo".to_string(),
        record_id: RecordId::new(),
        kind: MutationKind::Delete,
        snapshot: Some(r#"{"name":"last known"}"#.to_string()),
        enqueued_at: 0,
    };
    assert!(mutation.snapshot.is_some());
}
