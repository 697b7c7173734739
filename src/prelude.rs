pub use std::sync::Arc;
pub use std::time::Instant;

pub use anyhow::{anyhow, bail, Context};
pub use tracing::{debug, error, info, instrument, warn};

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
