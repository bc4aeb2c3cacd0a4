//! Predicate tree evaluation
//!
//! Evaluates a predicate tree against a single record the way a
//! structured store would: SQL NULL semantics, so an absent field fails
//! every comparison, and `Or` with no matching child is false.

use crate::planner::{Field, Literal, Predicate};
use crate::record::{contains_ignore_case, SaleRecord};

/// Evaluates predicate trees against records
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a record satisfies the tree
    pub fn matches(record: &SaleRecord, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::True => true,
            Predicate::False => false,
            Predicate::And { children } => children.iter().all(|c| Self::matches(record, c)),
            Predicate::Or { children } => children.iter().any(|c| Self::matches(record, c)),
            Predicate::In { field, values } => {
                Self::text(record, *field).is_some_and(|v| values.iter().any(|x| x == v))
            }
            Predicate::Between { field, low, high } => {
                Self::literal(record, *field).is_some_and(|v| {
                    low.compare(&v).is_some_and(|o| o.is_le())
                        && v.compare(high).is_some_and(|o| o.is_le())
                })
            }
            Predicate::Gte { field, bound } => Self::literal(record, *field)
                .is_some_and(|v| v.compare(bound).is_some_and(|o| o.is_ge())),
            Predicate::Lte { field, bound } => Self::literal(record, *field)
                .is_some_and(|v| v.compare(bound).is_some_and(|o| o.is_le())),
            Predicate::Contains {
                field,
                needle,
                ignore_case,
            } => Self::text(record, *field).is_some_and(|v| {
                if *ignore_case {
                    contains_ignore_case(v, needle)
                } else {
                    v.contains(needle.as_str())
                }
            }),
        }
    }

    /// Text value of a field; `None` for absent or non-text fields
    fn text(record: &SaleRecord, field: Field) -> Option<&str> {
        match field {
            Field::CustomerName => record.customer_name.as_deref(),
            Field::PhoneNumber => record.phone_number.as_deref(),
            Field::CustomerRegion => record.customer_region.as_deref(),
            Field::Gender => record.gender.as_deref(),
            Field::ProductCategory => record.product_category.as_deref(),
            Field::PaymentMethod => record.payment_method.as_deref(),
            Field::Tags => record.tags.as_deref(),
            Field::Age | Field::Date => None,
        }
    }

    /// Comparable value of a field; `None` for absent or text fields
    fn literal(record: &SaleRecord, field: Field) -> Option<Literal> {
        match field {
            Field::Age => record.age.map(Literal::Int),
            Field::Date => record.date.map(Literal::Date),
            _ => None,
        }
    }
}
