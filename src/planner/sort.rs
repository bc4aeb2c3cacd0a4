//! Sort policy
//!
//! Resolves a sort key name and direction into an order over records.
//! Default is newest date first.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::record::SaleRecord;

/// Sortable record attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Chronological; absent dates are unordered ties
    #[default]
    Date,
    /// Numeric; absent quantity sorts as 0
    Quantity,
    /// Lexicographic; absent name sorts as ""
    CustomerName,
}

impl SortKey {
    /// Resolves a caller-supplied key name, case-insensitively.
    /// Anything unrecognised falls back to `Date`.
    pub fn resolve(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(n) if n.eq_ignore_ascii_case("quantity") => SortKey::Quantity,
            Some(n) if n.eq_ignore_ascii_case("customerName") => SortKey::CustomerName,
            _ => SortKey::Date,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Quantity => "quantity",
            SortKey::CustomerName => "customerName",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// `asc` (any case) is ascending; every other value, or none, is descending
    pub fn resolve(direction: Option<&str>) -> Self {
        match direction.map(str::trim) {
            Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort key plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortPolicy {
    key: SortKey,
    direction: SortDirection,
}

impl SortPolicy {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Resolves raw key and direction strings
    pub fn resolve(key: Option<&str>, direction: Option<&str>) -> Self {
        Self::new(SortKey::resolve(key), SortDirection::resolve(direction))
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Whether the record takes part in ordering. Under the date key a
    /// record with no date ties with every other record and is never moved.
    pub fn is_ranked(&self, record: &SaleRecord) -> bool {
        match self.key {
            SortKey::Date => record.date.is_some(),
            SortKey::Quantity | SortKey::CustomerName => true,
        }
    }

    /// Orders two ranked records. Only a total order over ranked records.
    pub fn compare(&self, a: &SaleRecord, b: &SaleRecord) -> Ordering {
        let ordering = match self.key {
            SortKey::Quantity => a.quantity.unwrap_or(0).cmp(&b.quantity.unwrap_or(0)),
            SortKey::CustomerName => a
                .customer_name()
                .unwrap_or("")
                .cmp(b.customer_name().unwrap_or("")),
            SortKey::Date => match (a.date, b.date) {
                (Some(da), Some(db)) => da.cmp(&db),
                _ => Ordering::Equal,
            },
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key.as_str(), self.direction.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn qty(q: Option<i32>) -> SaleRecord {
        SaleRecord {
            quantity: q,
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_key() {
        assert_eq!(SortKey::resolve(Some("quantity")), SortKey::Quantity);
        assert_eq!(SortKey::resolve(Some("QUANTITY")), SortKey::Quantity);
        assert_eq!(SortKey::resolve(Some("customername")), SortKey::CustomerName);
        assert_eq!(SortKey::resolve(Some("date")), SortKey::Date);
        assert_eq!(SortKey::resolve(Some("price")), SortKey::Date);
        assert_eq!(SortKey::resolve(None), SortKey::Date);
    }

    #[test]
    fn test_resolve_direction() {
        assert_eq!(SortDirection::resolve(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::resolve(Some("ASC")), SortDirection::Asc);
        assert_eq!(SortDirection::resolve(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::resolve(Some("up")), SortDirection::Desc);
        assert_eq!(SortDirection::resolve(None), SortDirection::Desc);
    }

    #[test]
    fn test_default_is_newest_first() {
        let policy = SortPolicy::default();
        assert_eq!(policy.to_string(), "date desc");

        let older = SaleRecord {
            date: NaiveDate::from_ymd_opt(2023, 1, 1),
            ..Default::default()
        };
        let newer = SaleRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };
        assert_eq!(policy.compare(&newer, &older), Ordering::Less);
    }

    #[test]
    fn test_absent_quantity_is_zero() {
        let policy = SortPolicy::new(SortKey::Quantity, SortDirection::Asc);
        assert_eq!(policy.compare(&qty(None), &qty(Some(0))), Ordering::Equal);
        assert_eq!(policy.compare(&qty(None), &qty(Some(1))), Ordering::Less);
        assert_eq!(policy.compare(&qty(Some(-2)), &qty(None)), Ordering::Less);
    }

    #[test]
    fn test_absent_name_is_empty() {
        let policy = SortPolicy::new(SortKey::CustomerName, SortDirection::Asc);
        let named = SaleRecord {
            customer_name: Some("Aarav".into()),
            ..Default::default()
        };
        assert_eq!(
            policy.compare(&SaleRecord::default(), &named),
            Ordering::Less
        );
    }

    #[test]
    fn test_absent_date_not_ranked() {
        let policy = SortPolicy::default();
        assert!(!policy.is_ranked(&SaleRecord::default()));

        let by_qty = SortPolicy::new(SortKey::Quantity, SortDirection::Desc);
        assert!(by_qty.is_ranked(&SaleRecord::default()));
    }
}
