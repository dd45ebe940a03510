use std::time::Duration;

use serde::Deserialize;

use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub animation: Option<AnimationConfig>,
    pub store: Option<StoreConfig>,
    pub view: Option<ViewConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnimationConfig {
    /// Milliseconds of animation per viewport height travelled.
    pub ms_per_viewport: Option<u64>,
    pub min_duration: Option<DurationValue>,
    pub max_duration: Option<DurationValue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub key_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewConfig {
    pub fps: Option<u64>,
    pub header_shade_offset: Option<u64>,
    pub reveal_threshold: Option<f64>,
    pub no_color: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Millis(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Millis(millis) => {
                if *millis == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_millis(*millis))
                }
            }
            DurationValue::Text(text) => super::parse_duration_value(text),
        }
    }
}
