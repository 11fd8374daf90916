// Normalization of the exercise log request parameters.
//
// Responsibilities
// - Enforce the required `userId` before any storage access.
// - Parse the optional filters on a best effort basis; anything that does not parse is
//   treated as if it had not been supplied.

use crate::modules::exercise::core::errors::ValidationError;
use crate::shared::core::dates::parse_date;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub user_id: String,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

impl TryFrom<LogParams> for LogOptions {
    type Error = ValidationError;

    fn try_from(params: LogParams) -> Result<Self, Self::Error> {
        let user_id = params
            .user_id
            .filter(|id| !id.is_empty())
            .ok_or(ValidationError::UnknownUserId)?;

        Ok(Self {
            user_id,
            from: params.from.as_deref().and_then(parse_date),
            to: params.to.as_deref().and_then(parse_date),
            limit: params.limit.as_deref().and_then(parse_limit),
        })
    }
}

/// Zero and unparsable limits mean "no limit". A negative limit caps at its magnitude.
fn parse_limit(raw: &str) -> Option<usize> {
    match parse_leading_integer(raw)? {
        0 => None,
        limit => usize::try_from(limit.unsigned_abs()).ok(),
    }
}

// Reads the integer prefix of `raw`, so "2abc" and "2.9" both read as 2.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let magnitude = unsigned.get(..end)?.parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
