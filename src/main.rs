mod math;
mod opts;
mod prelude;
mod tracing;
mod trainer;
mod web;

use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = crate::tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    match opts.subcommand {
        Subcommand::Train(opts) => trainer::run(&opts),
        Subcommand::Web(opts) => web::run(opts).await,
    }
}
