use std::fs::File;
use std::io;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::Deserialize;

use crate::prelude::*;
use crate::trainer::model::Features;

/// Single row of the tabular dataset, matched to the CSV columns by name.
#[derive(Debug, Deserialize)]
pub struct Row {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub weather_condition: f64,
}

impl Row {
    /// Feature vector of the row, in the training order.
    #[must_use]
    pub fn features(&self) -> Features {
        Features {
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
        }
    }
}

/// Reads the dataset from the CSV file.
pub fn load(path: &Path) -> Result<linfa::Dataset<f64, f64, ndarray::Ix1>> {
    let file =
        File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    from_reader(file).with_context(|| format!("failed to read the dataset from `{}`", path.display()))
}

pub fn from_reader(reader: impl io::Read) -> Result<linfa::Dataset<f64, f64, ndarray::Ix1>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for (index, row) in reader.deserialize::<Row>().enumerate() {
        rows.push(row.with_context(|| format!("failed to parse row #{}", index + 1))?);
    }
    if rows.is_empty() {
        bail!("the dataset is empty");
    }

    let records = Array2::from_shape_vec(
        (rows.len(), Features::LEN),
        rows.iter().flat_map(|row| row.features().to_array()).collect(),
    )?;
    let targets = Array1::from_iter(rows.iter().map(|row| row.weather_condition));
    Ok(linfa::Dataset::new(records, targets))
}
