//! Sale record data model and row mapping

mod model;
mod parse;

pub use model::SaleRecord;
pub use parse::{columns, parse_row, RowError, RowLayout, DATE_FORMAT};

/// Case-insensitive substring test used by both search backends
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Organic,Eco-Friendly", "eco"));
        assert!(contains_ignore_case("Rahul Sharma", "SHARMA"));
        assert!(!contains_ignore_case("Rahul", "priya"));
        assert!(contains_ignore_case("anything", ""));
    }
}
