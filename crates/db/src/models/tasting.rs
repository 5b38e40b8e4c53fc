//! Tasting record model and request DTOs.
//!
//! The HTTP surface speaks camelCase (`wineName`, `tastingDate`); rows are
//! stored and serialized snake_case. The mapping between the two, including
//! the lenient coercions for `vintage` and `tastingDate`, lives here.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use vinoteca_core::error::CoreError;
use vinoteca_core::types::{RecordId, Timestamp};

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `tasting_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TastingRecord {
    pub id: RecordId,
    pub wine_name: String,
    pub producer: Option<String>,
    pub vintage: Option<i32>,
    pub region: Option<String>,
    pub varieties: Option<String>,
    pub tasting_date: Option<NaiveDate>,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Incoming payload for both create and full update.
///
/// `vintage` arrives as a number or a numeric string and coerces to null on
/// anything else. `tastingDate` follows the same fallback rule. `wineName`
/// is the only required field and is checked in [`TastingInput::into_validated`],
/// not by serde, so a missing name surfaces as a validation error rather
/// than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TastingInput {
    pub wine_name: Option<String>,
    pub producer: Option<String>,
    #[serde(default, deserialize_with = "coerce_vintage")]
    pub vintage: Option<i32>,
    pub region: Option<String>,
    pub varieties: Option<String>,
    #[serde(default, deserialize_with = "coerce_date")]
    pub tasting_date: Option<NaiveDate>,
    pub comment: Option<String>,
}

/// Validated write shape consumed by the repository.
#[derive(Debug, Clone)]
pub struct NewTasting {
    pub wine_name: String,
    pub producer: Option<String>,
    pub vintage: Option<i32>,
    pub region: Option<String>,
    pub varieties: Option<String>,
    pub tasting_date: Option<NaiveDate>,
    pub comment: Option<String>,
}

impl TastingInput {
    /// Enforce the one server-side rule: `wineName` present and non-empty
    /// after trimming.
    pub fn into_validated(self) -> Result<NewTasting, CoreError> {
        let wine_name = self
            .wine_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| CoreError::Validation("wineName is required".into()))?;

        Ok(NewTasting {
            wine_name,
            producer: self.producer,
            vintage: self.vintage,
            region: self.region,
            varieties: self.varieties,
            tasting_date: self.tasting_date,
            comment: self.comment,
        })
    }
}

/// Accept a JSON number or a numeric string; everything else is null.
fn coerce_vintage<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    })
}

/// Accept an ISO `YYYY-MM-DD` string; empty or unparseable input is null.
fn coerce_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    })
}
