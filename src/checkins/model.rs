use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::Serialize;

/// Row as stored in the `check_ins` table
#[derive(Debug, Clone, Eq, PartialEq, sqlx::FromRow)]
pub struct CheckInRow {
    pub id: i32,
    pub nickname: String,
    pub day: i32,
    pub country_code: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Create check-in schema
#[derive(Debug, Object, Clone, Eq, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct NewCheckIn {
    /// Display name, not unique
    pub nickname: String,

    /// Festival day the check-in belongs to
    pub day: i32,

    /// Country of the stall (e.g. `VN`)
    pub country_code: String,

    /// Free-form tags such as `authentic` or `wanna_more`
    #[oai(default)]
    pub tags: Vec<String>,
}

/// Check-in as returned by the listing endpoint
#[derive(Debug, Object, Clone, Eq, PartialEq, Serialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    /// ID of the check-in
    pub id: String,

    pub nickname: String,

    pub day: i32,

    pub country_code: String,

    pub tags: Vec<String>,

    /// creation time in milliseconds since the unix epoch
    pub timestamp: i64,
}

impl From<CheckInRow> for CheckIn {
    fn from(row: CheckInRow) -> Self {
        CheckIn {
            id: row.id.to_string(),
            nickname: row.nickname,
            day: row.day,
            country_code: row.country_code,
            tags: row.tags,
            timestamp: row.created_at.timestamp_millis(),
        }
    }
}

/// Check-in as returned right after creation.
///
/// Uses `country_code` rather than `countryCode`, matching what existing
/// clients of the create endpoint already receive.
#[derive(Debug, Object, Clone, Eq, PartialEq)]
pub struct CreatedCheckIn {
    pub id: String,
    pub nickname: String,
    pub day: i32,
    pub country_code: String,
    pub tags: Vec<String>,
}

impl From<CheckInRow> for CreatedCheckIn {
    fn from(row: CheckInRow) -> Self {
        CreatedCheckIn {
            id: row.id.to_string(),
            nickname: row.nickname,
            day: row.day,
            country_code: row.country_code,
            tags: row.tags,
        }
    }
}

#[derive(Debug, Object, Clone, Eq, PartialEq)]
pub struct SeedResult {
    pub message: String,
    pub count: u64,
}
