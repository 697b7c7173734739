use serde::Serialize;

/// `GET /` payload.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self { message: "Welcome to the Weather Prediction API" }
    }
}

/// Success envelope for `POST /predict`.
#[derive(Serialize)]
pub struct PredictionResponse {
    pub status: &'static str,
    pub prediction: f64,
    pub message: &'static str,
}

impl PredictionResponse {
    #[must_use]
    pub fn new(prediction: f64) -> Self {
        Self {
            status: "success",
            prediction,
            message: "Prediction generated successfully",
        }
    }
}

/// Error payload with a single detail message.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

/// Single field-level validation failure.
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// 422 payload carrying the field-level details.
#[derive(Serialize)]
pub struct ValidationResponse {
    pub detail: Vec<FieldError>,
}

impl ValidationResponse {
    #[must_use]
    pub fn new(detail: Vec<FieldError>) -> Self {
        Self { detail }
    }
}
