//! Criteria to predicate tree translation
//!
//! Pure function of the criteria: no state, no I/O. The resulting tree is
//! a conjunction of one predicate per active filter, or `True` when no
//! filter is active.

use crate::criteria::{InclusiveRange, RangeConstraint, SearchCriteria};

use super::ast::{Field, Literal, Predicate};

/// Builds predicate trees from search criteria
pub struct PredicateBuilder;

impl PredicateBuilder {
    /// Translates criteria into a predicate tree.
    ///
    /// Conjunct order: text query, region, gender, category, payment
    /// method, age, tags, date.
    pub fn build(criteria: &SearchCriteria) -> Predicate {
        let mut conjuncts = Vec::new();

        if let Some(query) = criteria.query() {
            conjuncts.push(Predicate::or(vec![
                Predicate::contains_ignore_case(Field::CustomerName, query),
                Predicate::contains(Field::PhoneNumber, query),
            ]));
        }

        let sets = [
            (Field::CustomerRegion, criteria.customer_regions()),
            (Field::Gender, criteria.genders()),
            (Field::ProductCategory, criteria.product_categories()),
            (Field::PaymentMethod, criteria.payment_methods()),
        ];
        for (field, values) in sets {
            if !values.is_empty() {
                conjuncts.push(Predicate::in_set(field, values.iter().cloned()));
            }
        }

        conjuncts.extend(Self::range(Field::Age, criteria.age()));

        let tag_matches: Vec<Predicate> = criteria
            .tags()
            .iter()
            .filter(|tag| !tag.trim().is_empty())
            .map(|tag| Predicate::contains_ignore_case(Field::Tags, tag.as_str()))
            .collect();
        if !tag_matches.is_empty() {
            conjuncts.push(Predicate::or(tag_matches));
        }

        conjuncts.extend(Self::range(Field::Date, criteria.dates()));

        if conjuncts.is_empty() {
            Predicate::True
        } else {
            Predicate::and(conjuncts)
        }
    }

    /// Tri-state range policy: contradiction -> False, else
    /// BETWEEN / GE / LE / nothing.
    fn range<T>(field: Field, range: InclusiveRange<T>) -> Option<Predicate>
    where
        T: PartialOrd + Copy + Into<Literal>,
    {
        match range.constraint() {
            RangeConstraint::Unconstrained => None,
            RangeConstraint::Unsatisfiable => Some(Predicate::False),
            RangeConstraint::Between(min, max) => Some(Predicate::between(field, min, max)),
            RangeConstraint::AtLeast(min) => Some(Predicate::gte(field, min)),
            RangeConstraint::AtMost(max) => Some(Predicate::lte(field, max)),
        }
    }
}
