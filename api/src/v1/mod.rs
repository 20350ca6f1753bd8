use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Missing fields take their zero values; a missing due date becomes
/// [`min_due_date`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default = "min_due_date", deserialize_with = "deserialize_due_date")]
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub is_complete: bool,
}

/// `0001-01-01T00:00:00Z`, the due date of a todo posted without one.
pub fn min_due_date() -> DateTime<Utc> {
    DateTime::from_timestamp(-62_135_596_800, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Parses an RFC 3339 timestamp. Timestamps without an offset, and bare
/// dates, are taken as UTC.
pub fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|due| due.with_timezone(&Utc))
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|due| due.and_utc()))
        .or_else(|_| {
            raw.parse::<NaiveDate>()
                .map(|due| due.and_time(NaiveTime::MIN).and_utc())
        })
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_due_date(&raw).map_err(de::Error::custom)
}

impl Todo {
    pub fn new(id: i32, name: impl Into<String>, due_date: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            due_date,
            is_complete: false,
        }
    }
}

/// `type` URI used by [`ValidationProblem`].
pub const VALIDATION_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";

/// Body of a 400 response listing the rejected fields (RFC 9457 problem details).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationProblem {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationProblem {
    pub const CONTENT_TYPE: &'static str = "application/problem+json";

    pub fn new(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            problem_type: String::from(VALIDATION_PROBLEM_TYPE),
            title: String::from("One or more validation errors occurred."),
            status: 400,
            errors,
        }
    }

    /// Problem with a single message for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), vec![message.into()]);
        Self::new(errors)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
