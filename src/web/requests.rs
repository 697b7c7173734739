use serde::Deserialize;

use crate::trainer::model::Features;
use crate::web::responses::FieldError;

/// Serving-path input bounds. The training path is unconstrained.
const TEMPERATURE_RANGE: (f64, f64) = (-50.0, 60.0); // exclusive
const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);
const WIND_SPEED_RANGE: (f64, f64) = (0.0, 150.0);

/// `POST /predict` payload.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

impl PredictRequest {
    /// Checks each field against its declared bounds.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !(self.temperature > TEMPERATURE_RANGE.0 && self.temperature < TEMPERATURE_RANGE.1) {
            errors.push(FieldError::new(
                "temperature",
                format!(
                    "must be greater than {} and less than {}",
                    TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1,
                ),
            ));
        }
        if !(self.humidity >= HUMIDITY_RANGE.0 && self.humidity <= HUMIDITY_RANGE.1) {
            errors.push(FieldError::new(
                "humidity",
                format!("must be between {} and {}", HUMIDITY_RANGE.0, HUMIDITY_RANGE.1),
            ));
        }
        if !(self.wind_speed >= WIND_SPEED_RANGE.0 && self.wind_speed <= WIND_SPEED_RANGE.1) {
            errors.push(FieldError::new(
                "wind_speed",
                format!("must be between {} and {}", WIND_SPEED_RANGE.0, WIND_SPEED_RANGE.1),
            ));
        }
        errors
    }

    /// Feature vector of the request, in the training order.
    #[must_use]
    pub fn to_features(&self) -> Features {
        Features {
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
        }
    }
}
