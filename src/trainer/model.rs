use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_pickle::{DeOptions, SerOptions};

use crate::math::dot;
use crate::prelude::*;

/// Ordered feature vector.
///
/// The field order must match the column order the model was trained on.
#[derive(Debug, Copy, Clone)]
pub struct Features {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

impl Features {
    pub const LEN: usize = 3;

    #[must_use]
    pub fn to_array(self) -> [f64; Self::LEN] {
        [self.temperature, self.humidity, self.wind_speed]
    }
}

/// Fitted regression coefficients, persisted between the trainer and the web application.
#[derive(Debug, Serialize, Deserialize)]
pub struct Model {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl Model {
    #[must_use]
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self { coefficients, intercept }
    }

    /// Applies the regression to the feature vector.
    pub fn predict(&self, features: &Features) -> Result<f64> {
        let features = features.to_array();
        if self.coefficients.len() != features.len() {
            bail!(
                "the model expects {} features, got {}",
                self.coefficients.len(),
                features.len(),
            );
        }
        let prediction = self.intercept + dot(&self.coefficients, &features);
        if !prediction.is_finite() {
            bail!("the prediction is not finite");
        }
        Ok(prediction)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let buffer =
            fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?;
        serde_pickle::from_slice(&buffer, DeOptions::new())
            .with_context(|| format!("failed to deserialize `{}`", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result {
        let buffer =
            serde_pickle::to_vec(self, SerOptions::new()).context("failed to serialize the model")?;
        fs::write(path, buffer).with_context(|| format!("failed to write `{}`", path.display()))
    }
}
