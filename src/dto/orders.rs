use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{fields::Fields, invalid_query, items::ItemPayload, present};
use crate::{
    error::{AppError, AppResult},
    models::{Item, Order, date_format, parse_date},
};

/// Writable fields of an order. Used for creation and for full replacement.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderPayload {
    pub customer_id: i32,
    #[serde(with = "date_format")]
    #[schema(value_type = String, example = "2018-04-03T10:30")]
    pub date: NaiveDateTime,
    pub status: String,
}

impl OrderPayload {
    pub fn from_json(data: &Value) -> AppResult<Self> {
        let fields = Fields::new("order", data)?;
        Ok(Self {
            customer_id: fields.integer("customer_id")?,
            date: fields.timestamp("date")?,
            status: fields.string("status")?,
        })
    }
}

/// Body of `POST /orders`: an order and the items to create with it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NewOrder {
    #[serde(flatten)]
    pub order: OrderPayload,
    pub items: Vec<ItemPayload>,
}

impl NewOrder {
    /// Validates the order and every item before anything is stored.
    pub fn from_json(data: &Value) -> AppResult<Self> {
        let order = OrderPayload::from_json(data)?;
        let items = match Fields::new("order", data)?.optional("items") {
            None => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .map(ItemPayload::from_json)
                .collect::<AppResult<Vec<_>>>()?,
            Some(_) => {
                return Err(AppError::Validation(
                    "Invalid order: items must be an array".into(),
                ));
            }
        };
        Ok(Self { order, items })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<Item>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderQuery {
    pub customer_id: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderFilter {
    CustomerId(i32),
    Status(String),
    Date(NaiveDateTime),
    All,
}

impl OrderQuery {
    /// Only the first given parameter counts, checked in the order
    /// customer_id, status, date.
    pub fn filter(&self) -> AppResult<OrderFilter> {
        if let Some(value) = present(&self.customer_id) {
            return value
                .trim()
                .parse()
                .map(OrderFilter::CustomerId)
                .map_err(|_| invalid_query("customer_id", value, "an integer"));
        }
        if let Some(value) = present(&self.status) {
            return Ok(OrderFilter::Status(value.to_string()));
        }
        if let Some(value) = present(&self.date) {
            return parse_date(value)
                .map(OrderFilter::Date)
                .ok_or_else(|| invalid_query("date", value, "a date in YYYY-MM-DDTHH:MM format"));
        }
        Ok(OrderFilter::All)
    }
}
