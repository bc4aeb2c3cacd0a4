//! Search parameters and normalized search criteria
//!
//! `SearchParams` is raw caller input (JSON body or URL query pairs).
//! `SearchCriteria` is the normalized, immutable form both backends consume.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::planner::SortPolicy;
use crate::record::DATE_FORMAT;

use super::errors::{CriteriaError, CriteriaResult};
use super::page::{PageRequest, DEFAULT_PAGE_SIZE};
use super::range::InclusiveRange;

/// Raw search input as supplied by a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    pub q: Option<String>,
    pub customer_region: Vec<String>,
    pub gender: Vec<String>,
    pub product_category: Vec<String>,
    #[serde(alias = "tags")]
    pub tag: Vec<String>,
    pub payment_method: Vec<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_by: Option<String>,
    pub direction: Option<String>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl SearchParams {
    /// Builds params from URL query pairs. Multi-select parameters repeat;
    /// unknown parameters are ignored.
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> CriteriaResult<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = SearchParams::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref();

            match key {
                "q" => params.q = Some(value.to_string()),
                "customerRegion" => params.customer_region.push(value.to_string()),
                "gender" => params.gender.push(value.to_string()),
                "productCategory" => params.product_category.push(value.to_string()),
                "tag" | "tags" => params.tag.push(value.to_string()),
                "paymentMethod" => params.payment_method.push(value.to_string()),
                "minAge" => params.min_age = parse_number(key, value)?,
                "maxAge" => params.max_age = parse_number(key, value)?,
                "startDate" => params.start_date = Some(value.to_string()),
                "endDate" => params.end_date = Some(value.to_string()),
                "sortBy" => params.sort_by = Some(value.to_string()),
                "direction" => params.direction = Some(value.to_string()),
                "page" => params.page = parse_number(key, value)?,
                "size" => params.size = parse_number(key, value)?,
                _ => {}
            }
        }

        Ok(params)
    }

    /// Normalizes with the built-in default page size
    pub fn into_criteria(self) -> CriteriaResult<SearchCriteria> {
        self.normalize(DEFAULT_PAGE_SIZE)
    }

    /// Normalizes into criteria.
    ///
    /// Blank strings and blank list entries become absent. Dates must be
    /// `YYYY-MM-DD`. Age bounds pass through unchanged.
    pub fn normalize(self, default_page_size: usize) -> CriteriaResult<SearchCriteria> {
        let start_date = parse_date("startDate", self.start_date.as_deref())?;
        let end_date = parse_date("endDate", self.end_date.as_deref())?;
        let page = PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(default_page_size),
        )?;

        Ok(SearchCriteria {
            query: self.q.filter(|q| !q.trim().is_empty()),
            customer_regions: non_blank(self.customer_region),
            genders: non_blank(self.gender),
            product_categories: non_blank(self.product_category),
            payment_methods: non_blank(self.payment_method),
            tags: non_blank(self.tag),
            age: InclusiveRange::new(self.min_age, self.max_age),
            dates: InclusiveRange::new(start_date, end_date),
            sort: SortPolicy::resolve(self.sort_by.as_deref(), self.direction.as_deref()),
            page,
        })
    }

    /// Normalizes and, when a cap is set, rejects page sizes above it
    pub fn normalize_within(
        self,
        default_page_size: usize,
        max_page_size: Option<usize>,
    ) -> CriteriaResult<SearchCriteria> {
        let criteria = self.normalize(default_page_size)?;
        let size = criteria.page().size();
        match max_page_size {
            Some(max) if size > max => Err(CriteriaError::PageSizeTooLarge { size, max }),
            _ => Ok(criteria),
        }
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> CriteriaResult<Option<T>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| CriteriaError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn parse_date(field: &'static str, value: Option<&str>) -> CriteriaResult<Option<NaiveDate>> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| CriteriaError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.trim().is_empty()).collect()
}

/// Normalized filter, sort and page parameters for one query.
///
/// Built once per query by `SearchParams::normalize` and never mutated.
/// An empty set or unset bound means "no constraint".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    query: Option<String>,
    customer_regions: Vec<String>,
    genders: Vec<String>,
    product_categories: Vec<String>,
    payment_methods: Vec<String>,
    tags: Vec<String>,
    age: InclusiveRange<i32>,
    dates: InclusiveRange<NaiveDate>,
    sort: SortPolicy,
    page: PageRequest,
}

impl SearchCriteria {
    /// Criteria with no filters, default sort and first page
    pub fn unfiltered() -> Self {
        Self {
            query: None,
            customer_regions: Vec::new(),
            genders: Vec::new(),
            product_categories: Vec::new(),
            payment_methods: Vec::new(),
            tags: Vec::new(),
            age: InclusiveRange::default(),
            dates: InclusiveRange::default(),
            sort: SortPolicy::default(),
            page: PageRequest::first(),
        }
    }

    /// Same filters and sort, different page
    pub fn at_page(&self, page: PageRequest) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn customer_regions(&self) -> &[String] {
        &self.customer_regions
    }

    pub fn genders(&self) -> &[String] {
        &self.genders
    }

    pub fn product_categories(&self) -> &[String] {
        &self.product_categories
    }

    pub fn payment_methods(&self) -> &[String] {
        &self.payment_methods
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn age(&self) -> InclusiveRange<i32> {
        self.age
    }

    pub fn dates(&self) -> InclusiveRange<NaiveDate> {
        self.dates
    }

    pub fn sort(&self) -> &SortPolicy {
        &self.sort
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }
}
