//! Row-to-record mapping for delimited sale data
//!
//! Columns are located by header name. Parse policy:
//! - empty cell -> absent field
//! - integer / decimal cell that does not parse -> absent field, row kept
//! - date cell that is non-blank and not `YYYY-MM-DD` -> `RowError`

use chrono::NaiveDate;
use csv::StringRecord;
use thiserror::Error;

use super::model::SaleRecord;

/// Calendar format used for record dates and date bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Header names of the sale data file
pub mod columns {
    pub const TRANSACTION_ID: &str = "Transaction ID";
    pub const DATE: &str = "Date";
    pub const CUSTOMER_ID: &str = "Customer ID";
    pub const CUSTOMER_NAME: &str = "Customer Name";
    pub const PHONE_NUMBER: &str = "Phone Number";
    pub const GENDER: &str = "Gender";
    pub const AGE: &str = "Age";
    pub const CUSTOMER_REGION: &str = "Customer Region";
    pub const CUSTOMER_TYPE: &str = "Customer Type";
    pub const PRODUCT_ID: &str = "Product ID";
    pub const PRODUCT_NAME: &str = "Product Name";
    pub const BRAND: &str = "Brand";
    pub const PRODUCT_CATEGORY: &str = "Product Category";
    pub const TAGS: &str = "Tags";
    pub const QUANTITY: &str = "Quantity";
    pub const PRICE_PER_UNIT: &str = "Price per Unit";
    pub const DISCOUNT_PERCENTAGE: &str = "Discount Percentage";
    pub const TOTAL_AMOUNT: &str = "Total Amount";
    pub const FINAL_AMOUNT: &str = "Final Amount";
    pub const PAYMENT_METHOD: &str = "Payment Method";
    pub const ORDER_STATUS: &str = "Order Status";
    pub const DELIVERY_TYPE: &str = "Delivery Type";
    pub const STORE_ID: &str = "Store ID";
    pub const STORE_LOCATION: &str = "Store Location";
    pub const SALESPERSON_ID: &str = "Salesperson ID";
    pub const EMPLOYEE_NAME: &str = "Employee Name";
}

/// A row whose contents cannot be mapped to a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column '{column}' has invalid value '{value}': {reason}")]
pub struct RowError {
    pub column: &'static str,
    pub value: String,
    pub reason: String,
}

/// Column positions resolved once from the header row
#[derive(Debug, Clone)]
pub struct RowLayout {
    headers: Vec<String>,
}

impl RowLayout {
    /// Builds a layout from the header row. Header cells are trimmed.
    pub fn from_headers(headers: &StringRecord) -> Self {
        Self {
            headers: headers.iter().map(|h| h.trim().to_string()).collect(),
        }
    }

    /// Position of a named column, if the file has it
    pub fn position(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    fn cell<'r>(&self, row: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.position(column)
            .and_then(|idx| row.get(idx))
            .filter(|value| !value.is_empty())
    }

    fn text(&self, row: &StringRecord, column: &str) -> Option<String> {
        self.cell(row, column).map(str::to_string)
    }

    fn int(&self, row: &StringRecord, column: &str) -> Option<i32> {
        self.cell(row, column)
            .and_then(|value| value.trim().parse().ok())
    }

    fn decimal(&self, row: &StringRecord, column: &str) -> Option<f64> {
        self.cell(row, column)
            .and_then(|value| value.trim().parse().ok())
    }

    fn date(&self, row: &StringRecord, column: &'static str) -> Result<Option<NaiveDate>, RowError> {
        let Some(value) = self.cell(row, column).map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(|e| RowError {
                column,
                value: value.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Maps one delimited row to a `SaleRecord`
pub fn parse_row(layout: &RowLayout, row: &StringRecord) -> Result<SaleRecord, RowError> {
    use columns::*;

    Ok(SaleRecord {
        transaction_id: layout.text(row, TRANSACTION_ID),
        date: layout.date(row, DATE)?,
        customer_id: layout.text(row, CUSTOMER_ID),
        customer_name: layout.text(row, CUSTOMER_NAME),
        phone_number: layout.text(row, PHONE_NUMBER),
        gender: layout.text(row, GENDER),
        age: layout.int(row, AGE),
        customer_region: layout.text(row, CUSTOMER_REGION),
        customer_type: layout.text(row, CUSTOMER_TYPE),
        product_id: layout.text(row, PRODUCT_ID),
        product_name: layout.text(row, PRODUCT_NAME),
        brand: layout.text(row, BRAND),
        product_category: layout.text(row, PRODUCT_CATEGORY),
        tags: layout.text(row, TAGS),
        quantity: layout.int(row, QUANTITY),
        price_per_unit: layout.decimal(row, PRICE_PER_UNIT),
        discount_percentage: layout.decimal(row, DISCOUNT_PERCENTAGE),
        total_amount: layout.decimal(row, TOTAL_AMOUNT),
        final_amount: layout.decimal(row, FINAL_AMOUNT),
        payment_method: layout.text(row, PAYMENT_METHOD),
        order_status: layout.text(row, ORDER_STATUS),
        delivery_type: layout.text(row, DELIVERY_TYPE),
        store_id: layout.text(row, STORE_ID),
        store_location: layout.text(row, STORE_LOCATION),
        salesperson_id: layout.text(row, SALESPERSON_ID),
        employee_name: layout.text(row, EMPLOYEE_NAME),
    })
}
