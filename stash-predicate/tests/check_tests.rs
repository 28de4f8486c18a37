use stash_model::{FieldDef, FieldValue, RecordSchema};
use stash_predicate::{PredicateTypeError, check, field};

fn todo_schema() -> RecordSchema {
    RecordSchema::new(
        "todo",
        vec![
            FieldDef::text("name").required(),
            FieldDef::number("estimate"),
            FieldDef::date("due"),
            FieldDef::bool("done"),
            FieldDef::list("tags"),
            FieldDef::enumeration(
                "priority",
                vec!["low".into(), "normal".into(), "high".into()],
            ),
        ],
    )
}

// ── Well-typed predicates ────────────────────────────────────────

#[test]
fn well_typed_predicates_pass() {
    let schema = todo_schema();
    check(&field("name").eq(FieldValue::text("x")), &schema).unwrap();
    check(&field("estimate").lt(FieldValue::number(3.0)), &schema).unwrap();
    check(
        &field("due").between(FieldValue::date(0), FieldValue::date(10)),
        &schema,
    )
    .unwrap();
    check(&field("name").contains(FieldValue::text("x")), &schema).unwrap();
    check(&field("tags").contains(FieldValue::text("x")), &schema).unwrap();
    check(&field("name").begins_with("x"), &schema).unwrap();
    check(&field("due").is_unset(), &schema).unwrap();
    check(
        &field("priority").eq(FieldValue::enumeration("high")),
        &schema,
    )
    .unwrap();
}

#[test]
fn check_recurses_into_combinators() {
    let schema = todo_schema();
    let p = field("name")
        .eq(FieldValue::text("a"))
        .and(field("done").eq(FieldValue::boolean(true)))
        .or(field("estimate").gt(FieldValue::number(1.0)).not());
    check(&p, &schema).unwrap();
}

// ── Undeclared fields ────────────────────────────────────────────

#[test]
fn undeclared_field_rejected() {
    let schema = todo_schema();
    assert!(matches!(
        check(&field("color").eq(FieldValue::text("red")), &schema),
        Err(PredicateTypeError::UnknownField { field, .. }) if field == "color"
    ));
}

#[test]
fn undeclared_field_inside_combinator_rejected() {
    let schema = todo_schema();
    let p = field("name")
        .eq(FieldValue::text("a"))
        .and(field("color").is_unset());
    assert!(matches!(
        check(&p, &schema),
        Err(PredicateTypeError::UnknownField { .. })
    ));
}

// ── Operand type mismatches ──────────────────────────────────────

#[test]
fn eq_operand_must_match_field_type() {
    let schema = todo_schema();
    assert!(matches!(
        check(&field("name").eq(FieldValue::number(1.0)), &schema),
        Err(PredicateTypeError::OperandTypeMismatch { .. })
    ));
}

#[test]
fn enum_field_rejects_text_operand() {
    let schema = todo_schema();
    assert!(matches!(
        check(&field("priority").eq(FieldValue::text("high")), &schema),
        Err(PredicateTypeError::OperandTypeMismatch { .. })
    ));
}

#[test]
fn between_bounds_must_match_field_type() {
    let schema = todo_schema();
    assert!(matches!(
        check(
            &field("due").between(FieldValue::date(0), FieldValue::number(10.0)),
            &schema
        ),
        Err(PredicateTypeError::OperandTypeMismatch { .. })
    ));
}

#[test]
fn contains_needle_must_be_text() {
    let schema = todo_schema();
    assert!(matches!(
        check(&field("tags").contains(FieldValue::number(1.0)), &schema),
        Err(PredicateTypeError::OperandTypeMismatch { .. })
    ));
}

// ── Unsupported operators ────────────────────────────────────────

#[test]
fn ordering_on_text_unsupported() {
    let schema = todo_schema();
    assert!(matches!(
        check(&field("name").lt(FieldValue::text("a")), &schema),
        Err(PredicateTypeError::UnsupportedOp { op: "lt", .. })
    ));
}

#[test]
fn between_on_bool_unsupported() {
    let schema = todo_schema();
    assert!(matches!(
        check(
            &field("done").between(FieldValue::boolean(false), FieldValue::boolean(true)),
            &schema
        ),
        Err(PredicateTypeError::UnsupportedOp { op: "between", .. })
    ));
}

#[test]
fn begins_with_on_number_unsupported() {
    let schema = todo_schema();
    assert!(matches!(
        check(&field("estimate").begins_with("1"), &schema),
        Err(PredicateTypeError::UnsupportedOp {
            op: "begins_with",
            ..
        })
    ));
}

#[test]
fn contains_on_number_unsupported() {
    let schema = todo_schema();
    assert!(matches!(
        check(&field("estimate").contains(FieldValue::text("1")), &schema),
        Err(PredicateTypeError::UnsupportedOp { op: "contains", .. })
    ));
}
