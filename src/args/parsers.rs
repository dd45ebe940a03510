use std::time::Duration;

use super::types::PositiveU64;
use crate::config::parse_duration_value;
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.parse::<PositiveU64>().map_err(AppError::from)
}

pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    parse_duration_value(s).map_err(AppError::from)
}

pub(crate) fn parse_ratio(s: &str) -> AppResult<f64> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|err| AppError::validation(ValidationError::InvalidRatio {
            value: s.to_owned(),
            source: err,
        }))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(AppError::validation(ValidationError::RatioOutOfRange {
            value: s.to_owned(),
        }));
    }
    Ok(value)
}
