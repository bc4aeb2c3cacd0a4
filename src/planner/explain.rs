//! Explain output
//!
//! Deterministic, human-readable description of how a query would run.

use std::fmt;

use serde::Serialize;

use crate::criteria::SearchCriteria;

use super::ast::Predicate;
use super::builder::PredicateBuilder;

/// Explain output for one set of criteria
#[derive(Debug, Clone, Serialize)]
pub struct ExplainPlan {
    /// SQL-like form of the predicate tree
    pub predicate: String,
    /// The tree itself
    pub tree: Predicate,
    /// True when the tree can never match
    pub always_empty: bool,
    /// Sort description
    pub sort: String,
    pub page: usize,
    pub size: usize,
    /// Backend that would serve the query, if known
    pub backend: Option<String>,
}

impl ExplainPlan {
    /// Builds the explain plan for criteria
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let tree = PredicateBuilder::build(criteria);
        Self {
            predicate: tree.to_string(),
            always_empty: tree.is_always_false(),
            tree,
            sort: criteria.sort().to_string(),
            page: criteria.page().index(),
            size: criteria.page().size(),
            backend: None,
        }
    }

    /// Records the backend selection
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }
}

impl fmt::Display for ExplainPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXPLAIN PLAN ===")?;
        if let Some(backend) = &self.backend {
            writeln!(f, "Backend: {}", backend)?;
        }
        writeln!(f, "Where: {}", self.predicate)?;
        if self.always_empty {
            writeln!(f, "Note: predicate is unsatisfiable, result is empty")?;
        }
        writeln!(f, "Sort: {}", self.sort)?;
        writeln!(f, "Page: {} (size {})", self.page, self.size)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::SearchParams;

    #[test]
    fn test_explain_output() {
        let criteria = SearchParams {
            customer_region: vec!["North".into()],
            min_age: Some(30),
            max_age: Some(40),
            sort_by: Some("quantity".into()),
            ..Default::default()
        }
        .into_criteria()
        .unwrap();

        let plan = ExplainPlan::from_criteria(&criteria).with_backend("scan");
        let text = plan.to_string();

        assert!(text.contains("Backend: scan"));
        assert!(text.contains("Where: customer_region IN ('North') AND age BETWEEN 30 AND 40"));
        assert!(text.contains("Sort: quantity desc"));
        assert!(!plan.always_empty);
    }

    #[test]
    fn test_explain_unsatisfiable() {
        let criteria = SearchParams {
            min_age: Some(50),
            max_age: Some(20),
            ..Default::default()
        }
        .into_criteria()
        .unwrap();

        let plan = ExplainPlan::from_criteria(&criteria);
        assert!(plan.always_empty);
        assert_eq!(plan.predicate, "FALSE");
    }
}
