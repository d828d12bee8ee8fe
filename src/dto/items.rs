use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{fields::Fields, invalid_query, present};
use crate::error::AppResult;

/// Writable fields of an item. The owning order id never comes from the
/// body; it is the id of the order being created or the one in the URL.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ItemPayload {
    pub product_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl ItemPayload {
    pub fn from_json(data: &Value) -> AppResult<Self> {
        let fields = Fields::new("item", data)?;
        Ok(Self {
            product_id: fields.integer("product_id")?,
            name: fields.string("name")?,
            quantity: fields.integer("quantity")?,
            price: fields.number("price")?,
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ItemQuery {
    pub order_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemFilter {
    OrderId(i32),
    ProductId(i32),
    Quantity(i32),
    Price(f64),
    Name(String),
    All,
}

impl ItemQuery {
    /// Only the first given parameter counts, checked in the order
    /// order_id, product_id, quantity, price, name.
    pub fn filter(&self) -> AppResult<ItemFilter> {
        let int = |key: &str, value: &str| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| invalid_query(key, value, "an integer"))
        };

        if let Some(value) = present(&self.order_id) {
            return int("order_id", value).map(ItemFilter::OrderId);
        }
        if let Some(value) = present(&self.product_id) {
            return int("product_id", value).map(ItemFilter::ProductId);
        }
        if let Some(value) = present(&self.quantity) {
            return int("quantity", value).map(ItemFilter::Quantity);
        }
        if let Some(value) = present(&self.price) {
            return value
                .trim()
                .parse::<f64>()
                .map(ItemFilter::Price)
                .map_err(|_| invalid_query("price", value, "a number"));
        }
        if let Some(value) = present(&self.name) {
            return Ok(ItemFilter::Name(value.to_string()));
        }
        Ok(ItemFilter::All)
    }
}
