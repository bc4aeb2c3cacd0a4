//! Record-by-record criteria matching
//!
//! Evaluates search criteria directly, without building a predicate tree.
//! Must accept exactly the records the tree from `PredicateBuilder`
//! accepts; `tests/backend_equivalence.rs` holds the two side by side.

use chrono::NaiveDate;

use crate::criteria::{RangeConstraint, SearchCriteria};
use crate::record::{contains_ignore_case, SaleRecord};

/// Criteria compiled for repeated evaluation over a stream
#[derive(Debug, Clone)]
pub struct CriteriaMatcher<'c> {
    criteria: &'c SearchCriteria,
    age: RangeConstraint<i32>,
    dates: RangeConstraint<NaiveDate>,
    tags: Vec<&'c str>,
}

impl<'c> CriteriaMatcher<'c> {
    pub fn new(criteria: &'c SearchCriteria) -> Self {
        Self {
            criteria,
            age: criteria.age().constraint(),
            dates: criteria.dates().constraint(),
            tags: criteria
                .tags()
                .iter()
                .map(String::as_str)
                .filter(|t| !t.trim().is_empty())
                .collect(),
        }
    }

    /// True when no record can match
    pub fn is_unsatisfiable(&self) -> bool {
        self.age == RangeConstraint::Unsatisfiable || self.dates == RangeConstraint::Unsatisfiable
    }

    /// Checks one record against every active filter
    pub fn matches(&self, record: &SaleRecord) -> bool {
        self.matches_query(record)
            && member(self.criteria.customer_regions(), &record.customer_region)
            && member(self.criteria.genders(), &record.gender)
            && member(self.criteria.product_categories(), &record.product_category)
            && member(self.criteria.payment_methods(), &record.payment_method)
            && self.age.admits(record.age)
            && self.matches_tags(record)
            && self.dates.admits(record.date)
    }

    fn matches_query(&self, record: &SaleRecord) -> bool {
        let Some(query) = self.criteria.query() else {
            return true;
        };

        record
            .customer_name()
            .is_some_and(|name| contains_ignore_case(name, query))
            || record.phone_number().is_some_and(|phone| phone.contains(query))
    }

    fn matches_tags(&self, record: &SaleRecord) -> bool {
        if self.tags.is_empty() {
            return true;
        }

        record
            .tags()
            .is_some_and(|field| self.tags.iter().any(|tag| contains_ignore_case(field, tag)))
    }
}

/// Empty set admits everything; otherwise the value must be present and listed
fn member(allowed: &[String], value: &Option<String>) -> bool {
    allowed.is_empty() || value.as_ref().is_some_and(|v| allowed.contains(v))
}
