use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::parse_date,
};

/// Typed access to the keys of a JSON object body. Failures are reported as
/// validation errors naming the record kind and the offending key.
pub(crate) struct Fields<'a> {
    kind: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(kind: &'static str, data: &'a Value) -> AppResult<Self> {
        match data.as_object() {
            Some(map) => Ok(Self { kind, map }),
            None => Err(AppError::Validation(format!(
                "Invalid {kind}: body of request contained bad or no data"
            ))),
        }
    }

    /// `null` is treated the same as an absent key.
    pub fn optional(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    fn required(&self, key: &str) -> AppResult<&'a Value> {
        self.optional(key)
            .ok_or_else(|| AppError::Validation(format!("Invalid {}: missing {key}", self.kind)))
    }

    fn invalid(&self, key: &str, expected: &str) -> AppError {
        AppError::Validation(format!("Invalid {}: {key} must be {expected}", self.kind))
    }

    /// Accepts JSON integers and strings holding an integer.
    pub fn integer(&self, key: &str) -> AppResult<i32> {
        let parsed = match self.required(key)? {
            Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| self.invalid(key, "an integer"))
    }

    pub fn number(&self, key: &str) -> AppResult<f64> {
        self.required(key)?
            .as_f64()
            .ok_or_else(|| self.invalid(key, "a number"))
    }

    pub fn string(&self, key: &str) -> AppResult<String> {
        self.required(key)?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.invalid(key, "a string"))
    }

    pub fn timestamp(&self, key: &str) -> AppResult<NaiveDateTime> {
        self.required(key)?
            .as_str()
            .and_then(parse_date)
            .ok_or_else(|| self.invalid(key, "a date in YYYY-MM-DDTHH:MM format"))
    }
}
