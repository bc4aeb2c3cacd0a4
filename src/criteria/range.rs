//! Inclusive range bounds and their tri-state constraint policy

use serde::Serialize;

/// An inclusive range where either bound may be unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InclusiveRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

/// What a range demands of a record value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeConstraint<T> {
    /// Neither bound set
    Unconstrained,
    /// Both bounds set and min > max; nothing can match
    Unsatisfiable,
    /// min <= value <= max
    Between(T, T),
    /// value >= min
    AtLeast(T),
    /// value <= max
    AtMost(T),
}

impl<T: PartialOrd + Copy> InclusiveRange<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// Classifies the bounds.
    pub fn constraint(&self) -> RangeConstraint<T> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => RangeConstraint::Unsatisfiable,
            (Some(min), Some(max)) => RangeConstraint::Between(min, max),
            (Some(min), None) => RangeConstraint::AtLeast(min),
            (None, Some(max)) => RangeConstraint::AtMost(max),
            (None, None) => RangeConstraint::Unconstrained,
        }
    }
}

impl<T: PartialOrd + Copy> RangeConstraint<T> {
    /// Whether a record value passes. An absent value only passes when
    /// the range is unconstrained.
    pub fn admits(&self, value: Option<T>) -> bool {
        match (self, value) {
            (RangeConstraint::Unconstrained, _) => true,
            (RangeConstraint::Unsatisfiable, _) => false,
            (_, None) => false,
            (RangeConstraint::Between(min, max), Some(v)) => *min <= v && v <= *max,
            (RangeConstraint::AtLeast(min), Some(v)) => v >= *min,
            (RangeConstraint::AtMost(max), Some(v)) => v <= *max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_states() {
        assert_eq!(
            InclusiveRange::<i32>::new(None, None).constraint(),
            RangeConstraint::Unconstrained
        );
        assert_eq!(
            InclusiveRange::new(Some(40), Some(30)).constraint(),
            RangeConstraint::Unsatisfiable
        );
        assert_eq!(
            InclusiveRange::new(Some(30), Some(30)).constraint(),
            RangeConstraint::Between(30, 30)
        );
        assert_eq!(
            InclusiveRange::new(Some(30), None).constraint(),
            RangeConstraint::AtLeast(30)
        );
        assert_eq!(
            InclusiveRange::new(None, Some(40)).constraint(),
            RangeConstraint::AtMost(40)
        );
    }

    #[test]
    fn test_admits_inclusive() {
        let between = InclusiveRange::new(Some(30), Some(40)).constraint();
        assert!(between.admits(Some(30)));
        assert!(between.admits(Some(40)));
        assert!(!between.admits(Some(41)));
        assert!(!between.admits(None));
    }

    #[test]
    fn test_unconstrained_admits_absent() {
        let open = InclusiveRange::<i32>::default().constraint();
        assert!(open.admits(None));
        assert!(open.admits(Some(-5)));
    }

    #[test]
    fn test_unsatisfiable_admits_nothing() {
        let empty = InclusiveRange::new(Some(50), Some(10)).constraint();
        for v in [None, Some(10), Some(30), Some(50)] {
            assert!(!empty.admits(v));
        }
    }
}
