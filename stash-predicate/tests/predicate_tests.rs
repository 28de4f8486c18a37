use stash_model::{FieldValue, Record};
use stash_predicate::{Predicate, evaluate, field};

fn todo(name: &str) -> Record {
    Record::new("todo").with_field("name", FieldValue::text(name))
}

// ── Equality ─────────────────────────────────────────────────────

#[test]
fn eq_matches_exact_value() {
    let r = todo("Ship mobile beta");
    assert!(evaluate(
        &field("name").eq(FieldValue::text("Ship mobile beta")),
        &r
    ));
    assert!(!evaluate(&field("name").eq(FieldValue::text("ship mobile beta")), &r));
}

#[test]
fn ne_matches_different_value() {
    let r = todo("a");
    assert!(evaluate(&field("name").ne(FieldValue::text("b")), &r));
    assert!(!evaluate(&field("name").ne(FieldValue::text("a")), &r));
}

#[test]
fn eq_across_types_never_matches() {
    let r = Record::new("todo").with_field("priority", FieldValue::enumeration("high"));
    // A text literal is a different value than an enum option.
    assert!(!evaluate(&field("priority").eq(FieldValue::text("high")), &r));
    assert!(evaluate(
        &field("priority").eq(FieldValue::enumeration("high")),
        &r
    ));
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn ordering_on_numbers() {
    let r = Record::new("todo").with_field("estimate", FieldValue::number(5.0));
    assert!(evaluate(&field("estimate").lt(FieldValue::number(6.0)), &r));
    assert!(evaluate(&field("estimate").le(FieldValue::number(5.0)), &r));
    assert!(evaluate(&field("estimate").gt(FieldValue::number(4.0)), &r));
    assert!(evaluate(&field("estimate").ge(FieldValue::number(5.0)), &r));
    assert!(!evaluate(&field("estimate").lt(FieldValue::number(5.0)), &r));
    assert!(!evaluate(&field("estimate").gt(FieldValue::number(5.0)), &r));
}

#[test]
fn ordering_on_dates() {
    let r = Record::new("todo").with_field("due", FieldValue::date(1_000));
    assert!(evaluate(&field("due").lt(FieldValue::date(2_000)), &r));
    assert!(evaluate(&field("due").ge(FieldValue::date(1_000)), &r));
    assert!(!evaluate(&field("due").gt(FieldValue::date(1_000)), &r));
}

#[test]
fn between_is_inclusive_on_both_bounds() {
    let p = field("estimate").between(FieldValue::number(1.0), FieldValue::number(3.0));

    let at = |n: f64| Record::new("todo").with_field("estimate", FieldValue::number(n));
    assert!(evaluate(&p, &at(1.0)));
    assert!(evaluate(&p, &at(2.0)));
    assert!(evaluate(&p, &at(3.0)));
    assert!(!evaluate(&p, &at(0.999)));
    assert!(!evaluate(&p, &at(3.001)));
}

// ── Contains / begins_with ───────────────────────────────────────

#[test]
fn contains_on_text_is_substring() {
    let r = todo("Draft the release notes for 1.4");
    assert!(evaluate(&field("name").contains(FieldValue::text("release")), &r));
    assert!(!evaluate(&field("name").contains(FieldValue::text("changelog")), &r));
}

#[test]
fn contains_on_list_is_membership() {
    let r = Record::new("todo").with_field("tags", FieldValue::list(["mobile", "release"]));
    assert!(evaluate(&field("tags").contains(FieldValue::text("mobile")), &r));
    assert!(!evaluate(&field("tags").contains(FieldValue::text("mob")), &r));
}

#[test]
fn not_contains_negates_membership() {
    let r = Record::new("todo").with_field("tags", FieldValue::list(["mobile"]));
    assert!(evaluate(
        &field("tags").not_contains(FieldValue::text("web")),
        &r
    ));
    assert!(!evaluate(
        &field("tags").not_contains(FieldValue::text("mobile")),
        &r
    ));
}

#[test]
fn begins_with_is_case_sensitive_prefix() {
    let r = todo("Finish quarterly taxes");
    assert!(evaluate(&field("name").begins_with("Finish"), &r));
    assert!(!evaluate(&field("name").begins_with("finish"), &r));
    assert!(!evaluate(&field("name").begins_with("quarterly"), &r));
}

// ── Absent fields ────────────────────────────────────────────────

#[test]
fn comparisons_against_absent_field_are_false() {
    let r = todo("x");
    assert!(!evaluate(&field("due").eq(FieldValue::date(0)), &r));
    assert!(!evaluate(&field("due").ne(FieldValue::date(0)), &r));
    assert!(!evaluate(&field("due").lt(FieldValue::date(0)), &r));
    assert!(!evaluate(
        &field("tags").not_contains(FieldValue::text("web")),
        &r
    ));
}

#[test]
fn is_unset_observes_absence() {
    let r = todo("x");
    assert!(evaluate(&field("due").is_unset(), &r));
    assert!(!evaluate(&field("name").is_unset(), &r));
}

#[test]
fn empty_value_is_not_unset() {
    let r = Record::new("todo").with_field("description", FieldValue::text(""));
    assert!(!evaluate(&field("description").is_unset(), &r));
}

// ── Combinators ──────────────────────────────────────────────────

#[test]
fn and_requires_all_children() {
    let r = todo("a");
    let both = field("name").eq(FieldValue::text("a")).and(field("name").ne(FieldValue::text("b")));
    assert!(evaluate(&both, &r));

    let one_fails = field("name")
        .eq(FieldValue::text("a"))
        .and(field("name").eq(FieldValue::text("b")));
    assert!(!evaluate(&one_fails, &r));
}

#[test]
fn or_requires_any_child() {
    let r = todo("a");
    let either = field("name")
        .eq(FieldValue::text("z"))
        .or(field("name").eq(FieldValue::text("a")));
    assert!(evaluate(&either, &r));

    let neither = field("name")
        .eq(FieldValue::text("y"))
        .or(field("name").eq(FieldValue::text("z")));
    assert!(!evaluate(&neither, &r));
}

#[test]
fn not_inverts() {
    let r = todo("a");
    assert!(!evaluate(&field("name").eq(FieldValue::text("a")).not(), &r));
    assert!(evaluate(&field("name").eq(FieldValue::text("b")).not(), &r));
}

#[test]
fn empty_and_is_true_empty_or_is_false() {
    let r = todo("a");
    assert!(evaluate(&Predicate::all(vec![]), &r));
    assert!(!evaluate(&Predicate::any(vec![]), &r));
}

#[test]
fn and_flattens_chained_calls() {
    let p = field("a")
        .is_unset()
        .and(field("b").is_unset())
        .and(field("c").is_unset());
    match p {
        Predicate::And(children) => assert_eq!(children.len(), 3),
        other => panic!("expected flattened And, got {other:?}"),
    }
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn predicate_serde_roundtrip() {
    let p = field("priority")
        .eq(FieldValue::enumeration("high"))
        .and(field("due").between(FieldValue::date(0), FieldValue::date(100)))
        .or(field("name").begins_with("Urgent").not());

    let json = serde_json::to_string(&p).unwrap();
    let back: Predicate = serde_json::from_str(&json).unwrap();
    assert_eq!(p, back);
}
