//! CLI options.

use std::path::PathBuf;

use clap::Parser;

pub mod parsers;

/// Trains the weather model and serves the predictions over HTTP.
#[derive(Parser)]
pub struct Opts {
    /// Sentry DSN
    #[clap(long, env = "WEATHER_API_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Sentry performance monitoring sample rate
    #[clap(long, env = "WEATHER_API_TRACES_SAMPLE_RATE", default_value = "0.0")]
    pub traces_sample_rate: f32,

    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Train(TrainOpts),
    Web(WebOpts),
}

/// Trains the regression model on a tabular dataset
#[derive(clap::Args)]
pub struct TrainOpts {
    /// Training dataset path
    #[clap(long, env = "WEATHER_API_DATASET", default_value = "weather.csv")]
    pub dataset_path: PathBuf,

    /// Output model path
    #[clap(long, env = "WEATHER_API_MODEL", default_value = "weather_model.pkl")]
    pub model_path: PathBuf,

    /// Held-out fraction of the dataset
    #[clap(long, default_value = "0.2", value_parser = parsers::split_ratio)]
    pub test_size: f64,

    /// Train/test split random seed
    #[clap(long, default_value = "42")]
    pub seed: u64,
}

/// Runs the web application
#[derive(clap::Args)]
pub struct WebOpts {
    /// Model artifact path
    #[clap(long, env = "WEATHER_API_MODEL", default_value = "weather_model.pkl")]
    pub model_path: PathBuf,

    /// Web application bind host
    #[clap(long, env = "WEATHER_API_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Web application bind port
    #[clap(short, long, env = "WEATHER_API_PORT", default_value = "8000")]
    pub port: u16,
}
