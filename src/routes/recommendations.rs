//! Lookup endpoints for member recommendations.
//!
//! Both endpoints answer from the table loaded at startup. When the load
//! failed, they short-circuit with 503 before looking at the request, so a
//! degraded service never reports 400 or 404.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Wire format for a successful lookup.
///
/// `formations` is an `Option` so the 404 shape (`formations: null`) and the
/// success shape share one struct.
#[derive(Debug, Serialize)]
pub struct Recommendation {
    #[serde(rename = "memberId")]
    pub member_id: i64,
    pub formations: Option<String>,
}

/// `GET /recommendations/{member_id}`
///
/// The path segment is parsed here rather than via `Path<i64>` so a
/// non-integer id produces the service's structured 400 body instead of the
/// framework's rejection text.
#[instrument(name = "recommendations::lookup", skip(state))]
pub async fn lookup(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<Json<Recommendation>, AppError> {
    let member_id: i64 = member_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("member id must be an integer, got {member_id:?}")))?;

    respond(&state, member_id)
}

/// `POST /predict_formations` with JSON body `{"memberId": ...}`.
///
/// Tolerant of string-typed integers (`"42"`). An unparsable body is treated
/// as an empty payload, which then fails the required-field check.
#[instrument(name = "recommendations::predict", skip(state, body))]
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Recommendation>, AppError> {
    // Degraded service wins over payload validation
    state.table()?;

    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let member_id = payload
        .get("memberId")
        .ok_or_else(|| AppError::BadRequest("missing required field: memberId".to_string()))?;
    let member_id = coerce_member_id(member_id)?;

    respond(&state, member_id)
}

fn respond(state: &AppState, member_id: i64) -> Result<Json<Recommendation>, AppError> {
    let table = state.table()?;
    let record = table
        .lookup(member_id)
        .ok_or(AppError::UnknownMember(member_id))?;

    Ok(Json(Recommendation {
        member_id,
        formations: Some(record.formations.clone()),
    }))
}

/// Coerce a JSON value to an integer member id.
///
/// Accepts JSON integers and string-typed integers; everything else (floats,
/// booleans, nested values) is a client error.
fn coerce_member_id(value: &Value) -> Result<i64, AppError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| AppError::BadRequest("memberId must be an integer".to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn coerce_accepts_integers() {
        assert_eq!(coerce_member_id(&json!(42)).unwrap(), 42);
        assert_eq!(coerce_member_id(&json!(-3)).unwrap(), -3);
    }

    #[test]
    fn coerce_accepts_string_typed_integers() {
        assert_eq!(coerce_member_id(&json!("42")).unwrap(), 42);
        assert_eq!(coerce_member_id(&json!(" 7 ")).unwrap(), 7);
    }

    #[test]
    fn coerce_rejects_non_integers() {
        assert!(coerce_member_id(&json!(2.5)).is_err());
        assert!(coerce_member_id(&json!("abc")).is_err());
        assert!(coerce_member_id(&json!(true)).is_err());
        assert!(coerce_member_id(&json!(null)).is_err());
        assert!(coerce_member_id(&json!({"memberId": 1})).is_err());
    }
}
