//! Calculator endpoints: `/factorial`, `/fibonacci/<n>` and `/mean`.
//!
//! Exact integer results are written as bare JSON numbers of any length,
//! so `{"result": 2432902008176640000}` and not a string or a float.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::Value;
use shop_math::{BigUint, MathError};

use crate::error::CalcApiError;
use crate::state::CalculatorState;

/// `{"result": <integer>}` with the integer written verbatim.
#[derive(Debug, Serialize)]
pub struct ExactResult {
    pub result: Box<RawValue>,
}

impl ExactResult {
    fn from_digits(digits: String) -> Result<Self, CalcApiError> {
        let result = RawValue::from_string(digits)
            .map_err(|error| CalcApiError::internal(error.to_string()))?;
        Ok(Self { result })
    }
}

/// Run a big-integer computation and its decimal rendering off the async
/// workers; both are CPU bound for large `n`.
async fn compute_exact<F>(compute: F) -> Result<Json<ExactResult>, CalcApiError>
where
    F: FnOnce() -> Result<BigUint, MathError> + Send + 'static,
{
    let digits = tokio::task::spawn_blocking(move || compute().map(|value| value.to_string()))
        .await
        .map_err(|error| CalcApiError::internal(error.to_string()))??;
    Ok(Json(ExactResult::from_digits(digits)?))
}

/// `{"result": <float>}`.
#[derive(Debug, Serialize)]
pub struct MeanResult {
    pub result: f64,
}

/// `GET /factorial?n=<int>`.
///
/// A repeated `n` uses the first non-empty value; `n=` counts as missing.
pub async fn factorial(
    State(state): State<CalculatorState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ExactResult>, CalcApiError> {
    let Query(pairs) = query?;
    let raw = pairs
        .iter()
        .find(|(key, value)| key == "n" && !value.is_empty())
        .map(|(_, value)| value.as_str())
        .ok_or_else(|| CalcApiError::unprocessable("Missing parameter 'n'"))?;

    let max = state.limits.max_factorial_n;
    let n = parse_n(raw, max)?;
    compute_exact(move || shop_math::factorial(n, max)).await
}

/// `GET /fibonacci/<n>`: `n` is the last path segment.
pub async fn fibonacci(
    State(state): State<CalculatorState>,
    Path(rest): Path<String>,
) -> Result<Json<ExactResult>, CalcApiError> {
    let segment = rest.rsplit('/').next().unwrap_or_default();
    let max = state.limits.max_fibonacci_n;
    let n = parse_n(segment, max)?;
    compute_exact(move || shop_math::fibonacci(n, max)).await
}

/// `GET /fibonacci/` with nothing after the slash.
pub async fn fibonacci_empty() -> CalcApiError {
    invalid_n()
}

/// `GET /mean` with a JSON array of numbers as the body.
pub async fn mean(body: Bytes) -> Result<Json<MeanResult>, CalcApiError> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|_| CalcApiError::unprocessable("Request body must be a valid JSON."))?;

    let values = match value {
        Value::Array(values) if !values.is_empty() => values,
        _ => {
            return Err(CalcApiError::bad_request(
                "Body must be a non-empty array of floats.",
            ))
        }
    };

    let numbers = values
        .iter()
        .map(number)
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| {
            CalcApiError::unprocessable("All elements in the array must be floats or integers.")
        })?;

    Ok(Json(MeanResult {
        result: shop_math::mean(&numbers)?,
    }))
}

/// Numbers count as themselves and booleans as `1.0` / `0.0`.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        other => other.as_f64(),
    }
}

/// Fallback for unknown paths and non-GET methods.
pub async fn not_found() -> CalcApiError {
    CalcApiError::not_found()
}

fn invalid_n() -> CalcApiError {
    CalcApiError::unprocessable("Invalid parameter 'n'. It must be an integer.")
}

/// Parse `n` as a signed integer.
///
/// Digit strings too long for `i64` still get the range error rather than
/// the "not an integer" one.
fn parse_n(raw: &str, max: u64) -> Result<i64, CalcApiError> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(n);
    }

    let (negative, digits) = match raw.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_n());
    }
    if negative {
        Err(CalcApiError::bad_request(
            "Parameter 'n' must be a non-negative integer.",
        ))
    } else {
        Err(CalcApiError::bad_request(format!(
            "Parameter 'n' must not exceed {max}."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("5", 5)]
    #[case(" 7 ", 7)]
    #[case("+3", 3)]
    #[case("-2", -2)]
    fn test_parse_n_accepts_integers(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_n(raw, 100).unwrap(), expected);
    }

    #[rstest]
    #[case("abc", StatusCode::UNPROCESSABLE_ENTITY)]
    #[case("1.5", StatusCode::UNPROCESSABLE_ENTITY)]
    #[case("", StatusCode::UNPROCESSABLE_ENTITY)]
    #[case("99999999999999999999999", StatusCode::BAD_REQUEST)]
    #[case("-99999999999999999999999", StatusCode::BAD_REQUEST)]
    fn test_parse_n_rejections(#[case] raw: &str, #[case] status: StatusCode) {
        assert_eq!(parse_n(raw, 100).unwrap_err().status, status);
    }

    #[test]
    fn test_exact_result_is_a_bare_number() {
        let digits = BigUint::from(2_432_902_008_176_640_000u64).to_string();
        let result = ExactResult::from_digits(digits).unwrap();
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"result":2432902008176640000}"#
        );
    }

    #[rstest]
    #[case(json!(3), Some(3.0))]
    #[case(json!(-1.5), Some(-1.5))]
    #[case(json!(true), Some(1.0))]
    #[case(json!(false), Some(0.0))]
    #[case(json!("1"), None)]
    #[case(json!(null), None)]
    fn test_number(#[case] value: Value, #[case] expected: Option<f64>) {
        assert_eq!(number(&value), expected);
    }

    #[tokio::test]
    async fn test_compute_exact_runs_off_the_worker() {
        let Json(result) = compute_exact(|| shop_math::factorial(10, 100)).await.unwrap();
        assert_eq!(result.result.get(), "3628800");

        let error = compute_exact(|| shop_math::fibonacci(-1, 100)).await.unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }
}
