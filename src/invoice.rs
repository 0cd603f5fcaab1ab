use crate::error::{QfResult, QuoteError};
use crate::quote::{apply_custom_items, CustomLineItem, QuoteResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PRODUCT_NAME: &str = "3-Track Custom Window";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A frozen quote. Holds its own copy of the breakdown, so later rate edits
/// never change what an issued invoice says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    id: Uuid,
    customer: Customer,
    product_name: String,
    width: f64,
    height: f64,
    quantity: u32,
    total_amount: f64,
    breakdown: QuoteResult,
    #[serde(default)]
    custom_items: Vec<CustomLineItem>,
    created_at: DateTime<Utc>,
}

impl Invoice {
    /// Applies `custom_items` to `quote` and snapshots the result.
    pub fn issue(
        customer: Customer,
        quote: &QuoteResult,
        custom_items: &[CustomLineItem],
    ) -> QfResult<Self> {
        let name = customer.name.trim();
        if name.is_empty() {
            return Err(QuoteError::MissingCustomerName);
        }
        let customer = Customer {
            name: name.to_string(),
            phone: customer.phone.trim().to_string(),
            address: customer.address.trim().to_string(),
        };

        let snapshot = apply_custom_items(quote, custom_items);
        Ok(Self {
            id: Uuid::new_v4(),
            customer,
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            width: snapshot.dimensions.width,
            height: snapshot.dimensions.height,
            quantity: 1,
            total_amount: snapshot.totals.grand_total,
            breakdown: snapshot,
            custom_items: custom_items.to_vec(),
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn breakdown(&self) -> &QuoteResult {
        &self.breakdown
    }

    pub fn custom_items(&self) -> &[CustomLineItem] {
        &self.custom_items
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn to_json(&self) -> QfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> QfResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
