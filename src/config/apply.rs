use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{AssistArgs, PositiveU64};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{AnimationConfig, ConfigFile, DurationValue, StoreConfig, ViewConfig};

/// Applies config values to `args` for every option not given on the
/// command line.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut AssistArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if let Some(animation) = config.animation.as_ref() {
        apply_animation_config(args, matches, animation)?;
    }
    if let Some(store) = config.store.as_ref() {
        apply_store_config(args, matches, store);
    }
    if let Some(view) = config.view.as_ref() {
        apply_view_config(args, matches, view)?;
    }
    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn to_duration(value: &DurationValue, field: &'static str) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
}

fn apply_animation_config(
    args: &mut AssistArgs,
    matches: &ArgMatches,
    config: &AnimationConfig,
) -> AppResult<()> {
    if !is_cli(matches, "ms_per_viewport")
        && let Some(value) = config.ms_per_viewport
    {
        args.ms_per_viewport = ensure_positive_u64(value, "animation.ms_per_viewport")?;
    }

    if !is_cli(matches, "min_scroll")
        && let Some(value) = config.min_duration.as_ref()
    {
        args.min_scroll = to_duration(value, "animation.min_duration")?;
    }

    if !is_cli(matches, "max_scroll")
        && let Some(value) = config.max_duration.as_ref()
    {
        args.max_scroll = to_duration(value, "animation.max_duration")?;
    }

    Ok(())
}

fn apply_store_config(args: &mut AssistArgs, matches: &ArgMatches, config: &StoreConfig) {
    if !is_cli(matches, "store")
        && let Some(path) = config.path.clone()
    {
        args.store = path;
    }

    if !is_cli(matches, "key_prefix")
        && let Some(prefix) = config.key_prefix.clone()
    {
        args.key_prefix = prefix;
    }
}

fn apply_view_config(
    args: &mut AssistArgs,
    matches: &ArgMatches,
    config: &ViewConfig,
) -> AppResult<()> {
    if !is_cli(matches, "fps")
        && let Some(value) = config.fps
    {
        args.fps = ensure_positive_u64(value, "view.fps")?;
    }

    if !is_cli(matches, "header_shade_offset")
        && let Some(value) = config.header_shade_offset
    {
        args.header_shade_offset = value;
    }

    if !is_cli(matches, "reveal_threshold")
        && let Some(value) = config.reveal_threshold
    {
        if !(0.0..=1.0).contains(&value) {
            return Err(AppError::config(ConfigError::RevealThresholdOutOfRange {
                value,
            }));
        }
        args.reveal_threshold = value;
    }

    if !is_cli(matches, "no_color")
        && let Some(value) = config.no_color
    {
        args.no_color = value;
    }

    Ok(())
}
