//! Predicate expression tree and builder API.

use serde::{Deserialize, Serialize};
use stash_model::FieldValue;

/// A boolean filter expression over one record type's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// True when every child matches. An empty conjunction is true.
    And(Vec<Predicate>),
    /// True when any child matches. An empty disjunction is false.
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
    /// True when the named optional field is absent on the record. This is
    /// the only leaf that observes absence as a match.
    IsUnset { field: String },
    Compare { field: String, op: CompareOp },
}

/// A leaf comparison against a literal operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    Eq(FieldValue),
    Ne(FieldValue),
    Lt(FieldValue),
    Le(FieldValue),
    Gt(FieldValue),
    Ge(FieldValue),
    /// Substring on text fields, membership on list fields.
    Contains(FieldValue),
    NotContains(FieldValue),
    BeginsWith(String),
    /// Inclusive on both bounds.
    Between(FieldValue, FieldValue),
}

impl CompareOp {
    /// Operator name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Eq(_) => "eq",
            Self::Ne(_) => "ne",
            Self::Lt(_) => "lt",
            Self::Le(_) => "le",
            Self::Gt(_) => "gt",
            Self::Ge(_) => "ge",
            Self::Contains(_) => "contains",
            Self::NotContains(_) => "not_contains",
            Self::BeginsWith(_) => "begins_with",
            Self::Between(_, _) => "between",
        }
    }
}

impl Predicate {
    /// Conjunction with another predicate. Flattens onto an existing `And`.
    #[must_use]
    pub fn and(self, other: Predicate) -> Predicate {
        match self {
            Predicate::And(mut children) => {
                children.push(other);
                Predicate::And(children)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    /// Disjunction with another predicate. Flattens onto an existing `Or`.
    #[must_use]
    pub fn or(self, other: Predicate) -> Predicate {
        match self {
            Predicate::Or(mut children) => {
                children.push(other);
                Predicate::Or(children)
            }
            first => Predicate::Or(vec![first, other]),
        }
    }

    /// Negation.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Predicate {
        Predicate::Not(Box::new(self))
    }

    /// Conjunction of all given predicates.
    #[must_use]
    pub fn all(predicates: Vec<Predicate>) -> Predicate {
        Predicate::And(predicates)
    }

    /// Disjunction of all given predicates.
    #[must_use]
    pub fn any(predicates: Vec<Predicate>) -> Predicate {
        Predicate::Or(predicates)
    }
}

/// Starts a leaf comparison against the named field.
#[must_use]
pub fn field(name: impl Into<String>) -> FieldRef {
    FieldRef { name: name.into() }
}

/// Builder handle naming the field a leaf comparison applies to.
#[derive(Debug, Clone)]
pub struct FieldRef {
    name: String,
}

impl FieldRef {
    fn compare(self, op: CompareOp) -> Predicate {
        Predicate::Compare {
            field: self.name,
            op,
        }
    }

    /// `field == value`.
    #[must_use]
    pub fn eq(self, value: FieldValue) -> Predicate {
        self.compare(CompareOp::Eq(value))
    }

    /// `field != value`.
    #[must_use]
    pub fn ne(self, value: FieldValue) -> Predicate {
        self.compare(CompareOp::Ne(value))
    }

    /// `field < value`. Numbers and dates only.
    #[must_use]
    pub fn lt(self, value: FieldValue) -> Predicate {
        self.compare(CompareOp::Lt(value))
    }

    /// `field <= value`. Numbers and dates only.
    #[must_use]
    pub fn le(self, value: FieldValue) -> Predicate {
        self.compare(CompareOp::Le(value))
    }

    /// `field > value`. Numbers and dates only.
    #[must_use]
    pub fn gt(self, value: FieldValue) -> Predicate {
        self.compare(CompareOp::Gt(value))
    }

    /// `field >= value`. Numbers and dates only.
    #[must_use]
    pub fn ge(self, value: FieldValue) -> Predicate {
        self.compare(CompareOp::Ge(value))
    }

    /// Substring match on text fields, membership on list fields.
    #[must_use]
    pub fn contains(self, value: FieldValue) -> Predicate {
        self.compare(CompareOp::Contains(value))
    }

    /// Negated [`FieldRef::contains`]. Still false when the field is unset.
    #[must_use]
    pub fn not_contains(self, value: FieldValue) -> Predicate {
        self.compare(CompareOp::NotContains(value))
    }

    /// Prefix match on text fields.
    #[must_use]
    pub fn begins_with(self, prefix: impl Into<String>) -> Predicate {
        self.compare(CompareOp::BeginsWith(prefix.into()))
    }

    /// `low <= field <= high`. Numbers and dates only.
    #[must_use]
    pub fn between(self, low: FieldValue, high: FieldValue) -> Predicate {
        self.compare(CompareOp::Between(low, high))
    }

    /// True when the optional field is absent.
    #[must_use]
    pub fn is_unset(self) -> Predicate {
        Predicate::IsUnset { field: self.name }
    }
}
