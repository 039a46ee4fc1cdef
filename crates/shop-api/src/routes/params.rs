//! Query parameters shared by the listing endpoints.

use serde::{Deserialize, Deserializer};
use shop_core::listing::{Page, DEFAULT_LIMIT};

use crate::error::ShopApiError;

/// `offset` and `limit` as sent by the client, before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: i64,
    pub limit: i64,
}

pub(crate) fn default_limit() -> i64 {
    DEFAULT_LIMIT as i64
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
        }
    }
}

impl Pagination {
    /// Validate into a [`Page`]: `offset >= 0`, `limit > 0`.
    pub fn page(self) -> Result<Page, ShopApiError> {
        let offset = non_negative("offset", self.offset)?;
        if self.limit <= 0 {
            return Err(ShopApiError::unprocessable("limit must be greater than 0"));
        }
        Ok(Page::new(offset as usize, self.limit as usize))
    }
}

/// Reject a negative integer parameter.
pub fn non_negative(name: &str, value: i64) -> Result<u64, ShopApiError> {
    u64::try_from(value).map_err(|_| {
        ShopApiError::unprocessable(format!("{name} must be greater than or equal to 0"))
    })
}

/// Reject a negative price bound.
pub fn non_negative_price(name: &str, value: Option<f64>) -> Result<Option<f64>, ShopApiError> {
    match value {
        Some(price) if price.is_nan() || price < 0.0 => Err(ShopApiError::unprocessable(format!(
            "{name} must be greater than or equal to 0"
        ))),
        other => Ok(other),
    }
}

/// Parse an id path segment.
///
/// Any integer is accepted. Integers that cannot name a record (negative,
/// or beyond `u64`) come back as `None` so the caller answers "not found";
/// anything else is a 422.
pub fn path_id(raw: &str) -> Result<Option<u64>, ShopApiError> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShopApiError::unprocessable(format!(
            "Input should be a valid integer, unable to parse string as an integer: '{raw}'"
        )));
    }

    Ok(match digits.parse::<u64>() {
        Ok(0) => Some(0),
        Ok(_) if negative => None,
        Ok(id) => Some(id),
        Err(_) => None,
    })
}

/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid boolean value '{raw}'"))
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", Some(true))]
    #[case("YES", Some(true))]
    #[case("1", Some(true))]
    #[case("off", Some(false))]
    #[case("0", Some(false))]
    #[case("maybe", None)]
    fn test_parse_flag(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_flag(raw), expected);
    }

    #[rstest]
    #[case("7", Some(7))]
    #[case("+7", Some(7))]
    #[case("0", Some(0))]
    #[case("-0", Some(0))]
    #[case("-1", None)]
    #[case("99999999999999999999999", None)]
    fn test_path_id_accepts_any_integer(#[case] raw: &str, #[case] expected: Option<u64>) {
        assert_eq!(path_id(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("-")]
    fn test_path_id_rejects_non_integers(#[case] raw: &str) {
        let error = path_id(raw).unwrap_err();
        assert_eq!(error.status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_default_pagination() {
        let page = Pagination::default().page().unwrap();
        assert_eq!(page, Page::new(0, 10));
    }

    #[rstest]
    #[case(-1, 10)]
    #[case(0, 0)]
    #[case(0, -5)]
    fn test_invalid_pagination(#[case] offset: i64, #[case] limit: i64) {
        let error = Pagination { offset, limit }.page().unwrap_err();
        assert_eq!(error.status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(non_negative_price("min_price", Some(-0.5)).is_err());
        assert_eq!(non_negative_price("min_price", Some(0.0)).unwrap(), Some(0.0));
        assert_eq!(non_negative_price("max_price", None).unwrap(), None);
    }
}
