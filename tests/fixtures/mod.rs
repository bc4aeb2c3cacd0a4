//! Shared fixtures for integration tests
//!
//! A deterministic sale dataset with deliberate gaps (absent names, ages,
//! regions, tags, quantities and dates) and repeated sort keys, plus a
//! matrix of criteria covering every filter rule.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use retaildb::criteria::{SearchCriteria, SearchParams};
use retaildb::executor::SearchPage;
use retaildb::observability::MetricsRegistry;
use retaildb::record::SaleRecord;
use retaildb::search::SearchService;
use retaildb::source::MemoryRowSource;
use retaildb::store::MemoryStore;

const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];
const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
const CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Beauty", "Home"];
const PAYMENTS: [&str; 4] = ["UPI", "Credit Card", "Cash", "Wallet"];
const NAMES: [&str; 8] = [
    "Asha Rao",
    "Ravi Kumar",
    "Meera Rao",
    "Vikram Das",
    "Neha Kapoor",
    "Arjun Mehta",
    "Priya Nair",
    "Rahul Sharma",
];
const TAGS: [&str; 6] = [
    "Eco,Organic",
    "Wireless,Portable",
    "Fashion,Casual",
    "organic,skincare",
    "",
    "Smart,Wireless",
];

/// Number of records in `dataset()`
pub const DATASET_LEN: usize = 80;

fn some_unless(skip: bool, value: &str) -> Option<String> {
    if skip || value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn record(i: usize) -> SaleRecord {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

    SaleRecord {
        transaction_id: Some(format!("T{:03}", i)),
        date: (i % 10 != 7).then(|| base + Duration::days((((i * 37) % 400) / 4) as i64)),
        customer_id: Some(format!("C{:03}", i % 23)),
        customer_name: some_unless(i % 17 == 5, NAMES[i % NAMES.len()]),
        phone_number: Some(format!("98{:08}", (i * 7919) % 100_000_000)),
        gender: some_unless(i % 11 == 3, GENDERS[i % GENDERS.len()]),
        age: (i % 13 != 4).then(|| 18 + ((i * 7) % 50) as i32),
        customer_region: some_unless(i % 19 == 2, REGIONS[i % REGIONS.len()]),
        product_category: Some(CATEGORIES[i % CATEGORIES.len()].to_string()),
        tags: some_unless(false, TAGS[i % TAGS.len()]),
        quantity: (i % 9 != 1).then(|| ((i * 5) % 11) as i32),
        payment_method: Some(PAYMENTS[(i / 2) % PAYMENTS.len()].to_string()),
        ..Default::default()
    }
}

pub fn dataset() -> Vec<SaleRecord> {
    (0..DATASET_LEN).map(record).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Named criteria covering each filter and sort rule
pub fn criteria_matrix() -> Vec<(&'static str, SearchParams)> {
    vec![
        ("unfiltered", SearchParams::default()),
        (
            "query matches name case-insensitively",
            SearchParams {
                q: Some("RAO".into()),
                ..Default::default()
            },
        ),
        (
            "query matches phone",
            SearchParams {
                q: Some("98000".into()),
                size: Some(50),
                ..Default::default()
            },
        ),
        (
            "region set",
            SearchParams {
                customer_region: strings(&["North", "East"]),
                ..Default::default()
            },
        ),
        (
            "gender and category",
            SearchParams {
                gender: strings(&["Female"]),
                product_category: strings(&["Electronics", "Beauty"]),
                ..Default::default()
            },
        ),
        (
            "payment method",
            SearchParams {
                payment_method: strings(&["UPI", "Cash"]),
                sort_by: Some("customerName".into()),
                direction: Some("asc".into()),
                ..Default::default()
            },
        ),
        (
            "age between",
            SearchParams {
                min_age: Some(25),
                max_age: Some(40),
                ..Default::default()
            },
        ),
        (
            "age lower bound",
            SearchParams {
                min_age: Some(40),
                sort_by: Some("quantity".into()),
                ..Default::default()
            },
        ),
        (
            "age upper bound",
            SearchParams {
                max_age: Some(30),
                sort_by: Some("QUANTITY".into()),
                direction: Some("ASC".into()),
                ..Default::default()
            },
        ),
        (
            "age contradiction",
            SearchParams {
                min_age: Some(50),
                max_age: Some(20),
                ..Default::default()
            },
        ),
        (
            "date between",
            SearchParams {
                start_date: Some("2023-01-15".into()),
                end_date: Some("2023-03-01".into()),
                direction: Some("asc".into()),
                ..Default::default()
            },
        ),
        (
            "date lower bound",
            SearchParams {
                start_date: Some("2023-03-01".into()),
                ..Default::default()
            },
        ),
        (
            "date contradiction",
            SearchParams {
                start_date: Some("2024-03-01".into()),
                end_date: Some("2024-02-01".into()),
                customer_region: strings(&["North"]),
                ..Default::default()
            },
        ),
        (
            "tags any of",
            SearchParams {
                tag: strings(&["wireless", "ORGANIC"]),
                ..Default::default()
            },
        ),
        (
            "blank tag ignored",
            SearchParams {
                tag: strings(&[" "]),
                ..Default::default()
            },
        ),
        (
            "combined filters quantity asc",
            SearchParams {
                q: Some("a".into()),
                customer_region: strings(&["North", "South", "West"]),
                min_age: Some(20),
                tag: strings(&["a"]),
                sort_by: Some("quantity".into()),
                direction: Some("asc".into()),
                ..Default::default()
            },
        ),
        (
            "customer name desc, second page",
            SearchParams {
                sort_by: Some("customerName".into()),
                page: Some(1),
                size: Some(7),
                ..Default::default()
            },
        ),
        (
            "unknown sort key falls back to date",
            SearchParams {
                sort_by: Some("price".into()),
                direction: Some("sideways".into()),
                size: Some(25),
                ..Default::default()
            },
        ),
    ]
}

pub fn criteria(params: &SearchParams) -> SearchCriteria {
    params.clone().into_criteria().unwrap()
}

/// Service whose store already holds `records`
pub fn store_service(records: Vec<SaleRecord>) -> SearchService {
    SearchService::new(
        Arc::new(MemoryStore::with_records(records)),
        Arc::new(MemoryRowSource::unavailable()),
        Arc::new(MetricsRegistry::new()),
    )
}

/// Service with an empty store and `records` behind the row source
pub fn scan_service(records: Vec<SaleRecord>) -> SearchService {
    SearchService::new(
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryRowSource::new(records)),
        Arc::new(MetricsRegistry::new()),
    )
}

pub fn ids(page: &SearchPage) -> Vec<String> {
    page.iter()
        .map(|r| r.transaction_id.clone().unwrap_or_default())
        .collect()
}
