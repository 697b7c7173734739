use std::str::FromStr;

use anyhow::anyhow;

use crate::prelude::*;

/// Parses a held-out split ratio.
pub fn split_ratio(value: &str) -> Result<f64> {
    match f64::from_str(value)? {
        value if value > 0.0 && value < 1.0 => Ok(value),
        _ => Err(anyhow!("expected a ratio between 0 and 1")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_ratio_ok() -> Result {
        assert!((split_ratio("0.2")? - 0.2).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn split_ratio_out_of_range() {
        assert!(split_ratio("0").is_err());
        assert!(split_ratio("1").is_err());
        assert!(split_ratio("ratio").is_err());
    }
}
