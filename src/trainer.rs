//! Trains the weather regression model on a tabular dataset.

pub mod dataset;
pub mod metrics;
pub mod model;

use linfa::prelude::*;
use linfa_linear::LinearRegression;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::opts::TrainOpts;
use crate::prelude::*;
use crate::trainer::metrics::Rmse;
use crate::trainer::model::Model;

pub fn run(opts: &TrainOpts) -> Result {
    let start_instant = Instant::now();

    let dataset = dataset::load(&opts.dataset_path)?;
    info!(n_rows = dataset.nsamples(), "dataset loaded");

    let mut rng = StdRng::seed_from_u64(opts.seed);
    let (train, valid) = dataset.shuffle(&mut rng).split_with_ratio(1.0 - opts.test_size as f32);
    info!(n_train = train.nsamples(), n_valid = valid.nsamples(), "split the dataset");

    let regression = LinearRegression::new()
        .fit(&train)
        .context("failed to fit the regression")?;

    if valid.nsamples() != 0 {
        let predictions = regression.predict(&valid);
        let mut rmse = Rmse::default();
        for (prediction, target) in predictions.iter().zip(valid.targets()) {
            rmse.push(target - prediction);
        }
        info!(rmse = rmse.finalise(), "evaluated on the held-out partition");
    } else {
        warn!("the held-out partition is empty, skipping the evaluation");
    }

    let model = Model::new(regression.params().to_vec(), regression.intercept());
    model.save(&opts.model_path)?;
    info!(
        model_path = %opts.model_path.display(),
        elapsed = ?start_instant.elapsed(),
        "model saved",
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn run_is_reproducible() -> Result {
        let directory = std::env::temp_dir();
        let dataset_path = directory.join(format!("weather-dataset-{}.csv", std::process::id()));
        fs::write(&dataset_path, make_dataset())?;

        let mut opts = TrainOpts {
            dataset_path: dataset_path.clone(),
            model_path: directory.join(format!("weather-model-1-{}.pkl", std::process::id())),
            test_size: 0.2,
            seed: 42,
        };
        run(&opts)?;
        let model = Model::load(&opts.model_path)?;
        assert_eq!(model.coefficients.len(), model::Features::LEN);
        let first = fs::read(&opts.model_path)?;
        fs::remove_file(&opts.model_path)?;

        opts.model_path = directory.join(format!("weather-model-2-{}.pkl", std::process::id()));
        run(&opts)?;
        let second = fs::read(&opts.model_path)?;
        fs::remove_file(&opts.model_path)?;
        fs::remove_file(&dataset_path)?;

        assert_eq!(first, second);
        Ok(())
    }

    fn make_dataset() -> String {
        let mut buffer = String::from("temperature,humidity,wind_speed,weather_condition\n");
        for i in 0..50 {
            let temperature = -10.0 + i as f64;
            let humidity = (i * 7 % 100) as f64;
            let wind_speed = (i * 3 % 50) as f64;
            let condition = 2.0 * temperature + 0.1 * humidity - 0.5 * wind_speed + 5.0;
            buffer.push_str(&format!("{temperature},{humidity},{wind_speed},{condition}\n"));
        }
        buffer
    }
}
