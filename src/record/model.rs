//! Sale transaction record
//!
//! Every field is optional. Numeric fields that fail to parse at the row
//! source become `None` instead of failing the row; this is a toleration
//! policy, not data loss, and both search backends see the same `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One retail sale transaction.
///
/// `transaction_id` is the only identifying field and is not assumed
/// unique by the search layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub transaction_id: Option<String>,
    pub date: Option<NaiveDate>,

    // Customer
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub customer_region: Option<String>,
    pub customer_type: Option<String>,

    // Product
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub product_category: Option<String>,
    /// Comma separated, unstructured. Matched by substring only.
    pub tags: Option<String>,

    // Amounts
    pub quantity: Option<i32>,
    pub price_per_unit: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub total_amount: Option<f64>,
    pub final_amount: Option<f64>,

    // Fulfillment
    pub payment_method: Option<String>,
    pub order_status: Option<String>,
    pub delivery_type: Option<String>,
    pub store_id: Option<String>,
    pub store_location: Option<String>,
    pub salesperson_id: Option<String>,
    pub employee_name: Option<String>,
}

impl SaleRecord {
    /// Returns the customer name, if present
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    /// Returns the phone number, if present
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Returns the raw tags string, if present
    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }
}
