//! Predicate tree structures
//!
//! Engine-independent description of which sale records match a query.
//! A structured store evaluates the tree directly; its `Display` form is a
//! SQL-like WHERE clause used for explain output and logs.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Record fields that predicates can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CustomerName,
    PhoneNumber,
    CustomerRegion,
    Gender,
    ProductCategory,
    PaymentMethod,
    Tags,
    Age,
    Date,
}

impl Field {
    /// Column name used in explain output
    pub fn column(&self) -> &'static str {
        match self {
            Field::CustomerName => "customer_name",
            Field::PhoneNumber => "phone_number",
            Field::CustomerRegion => "customer_region",
            Field::Gender => "gender",
            Field::ProductCategory => "product_category",
            Field::PaymentMethod => "payment_method",
            Field::Tags => "tags",
            Field::Age => "age",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Comparable literal in range predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Int(i32),
    Date(NaiveDate),
}

impl Literal {
    /// Compares literals of the same kind; mixed kinds are incomparable
    pub fn compare(&self, other: &Literal) -> Option<Ordering> {
        match (self, other) {
            (Literal::Int(a), Literal::Int(b)) => Some(a.cmp(b)),
            (Literal::Date(a), Literal::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Date(d) => write!(f, "DATE '{}'", d),
        }
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Literal::Int(v)
    }
}

impl From<NaiveDate> for Literal {
    fn from(d: NaiveDate) -> Self {
        Literal::Date(d)
    }
}

/// A node of the predicate tree.
///
/// Comparison nodes follow SQL NULL semantics: an absent record field
/// never satisfies `In`, `Between`, `Gte`, `Lte` or `Contains`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Predicate {
    /// Matches every record
    True,
    /// Matches no record
    False,
    /// All children match
    And { children: Vec<Predicate> },
    /// At least one child matches
    Or { children: Vec<Predicate> },
    /// Field value is one of `values`
    In { field: Field, values: Vec<String> },
    /// `low <= field <= high`
    Between {
        field: Field,
        low: Literal,
        high: Literal,
    },
    /// `field >= bound`
    Gte { field: Field, bound: Literal },
    /// `field <= bound`
    Lte { field: Field, bound: Literal },
    /// `needle` occurs inside the field value
    Contains {
        field: Field,
        needle: String,
        ignore_case: bool,
    },
}

impl Predicate {
    pub fn and(children: Vec<Predicate>) -> Self {
        Predicate::And { children }
    }

    pub fn or(children: Vec<Predicate>) -> Self {
        Predicate::Or { children }
    }

    pub fn in_set(field: Field, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Predicate::In {
            field,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn between(field: Field, low: impl Into<Literal>, high: impl Into<Literal>) -> Self {
        Predicate::Between {
            field,
            low: low.into(),
            high: high.into(),
        }
    }

    pub fn gte(field: Field, bound: impl Into<Literal>) -> Self {
        Predicate::Gte {
            field,
            bound: bound.into(),
        }
    }

    pub fn lte(field: Field, bound: impl Into<Literal>) -> Self {
        Predicate::Lte {
            field,
            bound: bound.into(),
        }
    }

    /// Case-sensitive substring match
    pub fn contains(field: Field, needle: impl Into<String>) -> Self {
        Predicate::Contains {
            field,
            needle: needle.into(),
            ignore_case: false,
        }
    }

    /// Case-insensitive substring match
    pub fn contains_ignore_case(field: Field, needle: impl Into<String>) -> Self {
        Predicate::Contains {
            field,
            needle: needle.into(),
            ignore_case: true,
        }
    }

    /// Returns true if this node can never match
    pub fn is_always_false(&self) -> bool {
        match self {
            Predicate::False => true,
            Predicate::And { children } => children.iter().any(Predicate::is_always_false),
            Predicate::Or { children } => children.iter().all(Predicate::is_always_false),
            _ => false,
        }
    }

    /// Top-level conjuncts of the tree
    pub fn conjuncts(&self) -> &[Predicate] {
        match self {
            Predicate::And { children } => children,
            Predicate::True => &[],
            other => std::slice::from_ref(other),
        }
    }
}

fn quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[Predicate], sep: &str) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        match child {
            Predicate::And { children } | Predicate::Or { children } if children.len() > 1 => {
                write!(f, "({})", child)?
            }
            _ => write!(f, "{}", child)?,
        }
    }
    Ok(())
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::True => f.write_str("TRUE"),
            Predicate::False => f.write_str("FALSE"),
            Predicate::And { children } if children.is_empty() => f.write_str("TRUE"),
            Predicate::Or { children } if children.is_empty() => f.write_str("FALSE"),
            Predicate::And { children } => write_joined(f, children, " AND "),
            Predicate::Or { children } => write_joined(f, children, " OR "),
            Predicate::In { field, values } => {
                let list: Vec<String> = values.iter().map(|v| quoted(v)).collect();
                write!(f, "{} IN ({})", field, list.join(", "))
            }
            Predicate::Between { field, low, high } => {
                write!(f, "{} BETWEEN {} AND {}", field, low, high)
            }
            Predicate::Gte { field, bound } => write!(f, "{} >= {}", field, bound),
            Predicate::Lte { field, bound } => write!(f, "{} <= {}", field, bound),
            Predicate::Contains {
                field,
                needle,
                ignore_case: true,
            } => write!(
                f,
                "LOWER({}) LIKE {}",
                field,
                quoted(&format!("%{}%", needle.to_lowercase()))
            ),
            Predicate::Contains { field, needle, .. } => {
                write!(f, "{} LIKE {}", field, quoted(&format!("%{}%", needle)))
            }
        }
    }
}
