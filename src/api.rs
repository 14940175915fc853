//! Wire format for the advisory server - request payloads, the response
//! envelope, and the errors surfaced to the user

use crate::schema::{self, FieldKind};
use serde_json::Value;

/// What went wrong with a prediction request
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with `success: false` and its own error text
    Server(String),
    /// The server could not be reached, or its answer was not the
    /// expected envelope
    Transport(String),
}

impl ApiError {
    /// Text shown in the error dialog
    pub fn message(&self) -> String {
        match self {
            ApiError::Server(text) => text.clone(),
            ApiError::Transport(detail) => format!("Failed to get prediction: {detail}"),
        }
    }
}

/// Crop predictions as returned by the server
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Prediction {
    pub water_requirement_mm_per_day: f64,
    pub fertilizer_requirement_kg_per_week: f64,
    pub expected_yield_kg_per_hectare: f64,
    pub irrigation_recommendation: String,
    pub fertilizer_recommendation: String,
    #[serde(default)]
    pub yield_optimization_tips: Vec<String>,
}

/// Top-level response shape shared by success and failure answers
#[derive(serde::Deserialize)]
struct PredictEnvelope {
    #[serde(default)]
    success: bool,
    predictions: Option<Prediction>,
    error: Option<String>,
}

/// Health probe answer from `/api/health`
#[derive(Debug, Clone, serde::Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

/// Join a configured base URL with an endpoint path
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Build the JSON payload for a prediction request from raw form values.
///
/// Every name must exist in the field schema. Text fields pass through
/// verbatim; numeric fields are parsed as f64, and input that does not
/// parse becomes NaN, which serializes as `null` - the server treats
/// missing readings with its own fallbacks.
pub fn build_payload<'a, I>(fields: I) -> Result<serde_json::Map<String, Value>, String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut payload = serde_json::Map::new();
    for (name, raw) in fields {
        let spec = schema::field(name).ok_or_else(|| format!("Unknown form field: {name}"))?;
        let value = match spec.kind {
            FieldKind::Text => Value::String(raw.to_string()),
            // Value::from maps non-finite floats to Null
            FieldKind::Number => Value::from(raw.trim().parse::<f64>().unwrap_or(f64::NAN)),
        };
        payload.insert(name.to_string(), value);
    }
    Ok(payload)
}

/// Decode a prediction response body into either predictions or an error.
///
/// The HTTP status is deliberately not consulted: the server wraps its
/// failures in the same `{success, error}` envelope on 4xx/5xx answers.
pub fn interpret_response(body: &[u8]) -> Result<Prediction, ApiError> {
    let envelope: PredictEnvelope = serde_json::from_slice(body)
        .map_err(|e| ApiError::Transport(format!("invalid server response: {e}")))?;
    if envelope.success {
        envelope
            .predictions
            .ok_or_else(|| ApiError::Transport("response is missing predictions".into()))
    } else {
        Err(ApiError::Server(
            envelope
                .error
                .unwrap_or_else(|| "unknown server error".into()),
        ))
    }
}

/// POST the payload to the prediction endpoint and decode the answer
pub async fn request_prediction(
    client: &reqwest::Client,
    url: &str,
    payload: &serde_json::Map<String, Value>,
) -> Result<Prediction, ApiError> {
    let response = client
        .post(url)
        .json(payload)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    interpret_response(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FarmForm;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_form_builds_full_payload() {
        let form = FarmForm::default();
        let payload = build_payload(form.entries()).unwrap();
        assert_eq!(payload.len(), 13);
        assert_eq!(payload["soil_moisture_%"], Value::from(25.5));
        assert_eq!(payload["soil_pH"], Value::from(6.5));
        assert_eq!(payload["total_days"], Value::from(120.0));
        assert_eq!(payload["NDVI_index"], Value::from(0.65));
        assert_eq!(payload["region"], Value::from("North India"));
        assert_eq!(payload["crop_disease_status"], Value::from("Healthy"));
    }

    #[test]
    fn unparseable_number_becomes_null() {
        let payload = build_payload(vec![("soil_pH", "slightly acidic")]).unwrap();
        assert_eq!(payload["soil_pH"], Value::Null);
        // and it survives serialization as a JSON null
        let text = serde_json::to_string(&payload).unwrap();
        assert_eq!(text, r#"{"soil_pH":null}"#);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let payload = build_payload(vec![("rainfall_mm", "  150.0 ")]).unwrap();
        assert_eq!(payload["rainfall_mm"], Value::from(150.0));
    }

    #[test]
    fn text_values_pass_through_verbatim() {
        let payload = build_payload(vec![("crop_type", "Sugarcane")]).unwrap();
        assert_eq!(payload["crop_type"], Value::from("Sugarcane"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = build_payload(vec![("wind_speed_kmh", "12")]).unwrap_err();
        assert!(err.contains("wind_speed_kmh"), "{err}");
    }

    #[test]
    fn success_envelope_yields_predictions() {
        let body = br#"{
            "success": true,
            "predictions": {
                "water_requirement_mm_per_day": 5.678,
                "fertilizer_requirement_kg_per_week": 12.3,
                "expected_yield_kg_per_hectare": 4500.0,
                "irrigation_recommendation": "Increase irrigation frequency",
                "fertilizer_recommendation": "Apply nitrogen-rich fertilizer",
                "yield_optimization_tips": ["Monitor soil moisture", "Check for pests"]
            }
        }"#;
        let prediction = interpret_response(body).unwrap();
        assert_eq!(prediction.water_requirement_mm_per_day, 5.678);
        assert_eq!(prediction.expected_yield_kg_per_hectare, 4500.0);
        assert_eq!(
            prediction.yield_optimization_tips,
            vec!["Monitor soil moisture", "Check for pests"]
        );
    }

    #[test]
    fn failure_envelope_carries_server_text() {
        let body = br#"{"success": false, "error": "bad input"}"#;
        let err = interpret_response(body).unwrap_err();
        assert_eq!(err, ApiError::Server("bad input".into()));
        assert!(err.message().contains("bad input"));
    }

    #[test]
    fn failure_without_error_text_still_fails() {
        let err = interpret_response(br#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, ApiError::Server(_)));
    }

    #[test]
    fn success_without_predictions_is_malformed() {
        let err = interpret_response(br#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn garbage_body_is_a_transport_error() {
        let err = interpret_response(b"<html>502 Bad Gateway</html>").unwrap_err();
        match err {
            ApiError::Transport(detail) => {
                assert!(detail.contains("invalid server response"), "{detail}")
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn extra_response_fields_are_ignored() {
        let body = br#"{
            "success": true,
            "input_features": {"soil_pH": 6.5},
            "predictions": {
                "water_requirement_mm_per_day": 1.0,
                "fertilizer_requirement_kg_per_week": 2.0,
                "expected_yield_kg_per_hectare": 3.0,
                "irrigation_recommendation": "r1",
                "fertilizer_recommendation": "r2",
                "yield_optimization_tips": []
            }
        }"#;
        assert!(interpret_response(body).is_ok());
    }

    #[test]
    fn transport_message_gets_the_standard_prefix() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(
            err.message(),
            "Failed to get prediction: connection refused"
        );
    }

    #[test]
    fn url_join_handles_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:5000", "/api/predict"),
            "http://localhost:5000/api/predict"
        );
        assert_eq!(
            join_url("http://localhost:5000/", "/api/predict"),
            "http://localhost:5000/api/predict"
        );
    }
}
