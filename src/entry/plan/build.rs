use std::path::PathBuf;
use std::time::Duration;

use scroll_assist::args::{AssistArgs, Command, PositiveU64};
use scroll_assist::assist::AnimationTuning;
use scroll_assist::error::{AppError, AppResult, ValidationError};

use crate::app::{InspectOptions, PresentOptions, StoreOptions};

use super::types::RunPlan;

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Turns fully resolved arguments (CLI over config) into a plan.
pub(crate) fn build_plan(mut args: AssistArgs) -> AppResult<RunPlan> {
    let store = StoreOptions {
        path: PathBuf::from(&args.store),
        key_prefix: args.key_prefix.clone(),
    };

    if let Some(Command::Inspect(inspect)) = args.command.take() {
        if args.document.is_some() {
            return Err(AppError::validation(ValidationError::DocumentWithInspect));
        }
        return Ok(RunPlan::Inspect(InspectOptions {
            document: inspect.document,
            store,
        }));
    }

    let tuning = build_tuning(&args)?;
    let Some(document) = args.document.take() else {
        tracing::error!("Missing document (scroll-assist <DOCUMENT>).");
        return Err(AppError::validation(ValidationError::MissingDocument));
    };

    Ok(RunPlan::Present(PresentOptions {
        document,
        store,
        tuning,
        frame_interval: frame_interval(args.fps),
        header_shade_offset: args.header_shade_offset,
        reveal_threshold: args.reveal_threshold,
        no_color: args.no_color,
    }))
}

fn build_tuning(args: &AssistArgs) -> AppResult<AnimationTuning> {
    if args.min_scroll > args.max_scroll {
        return Err(AppError::validation(
            ValidationError::DurationBoundsInverted {
                min_ms: args.min_scroll.as_millis(),
                max_ms: args.max_scroll.as_millis(),
            },
        ));
    }
    Ok(AnimationTuning {
        per_viewport: Duration::from_millis(args.ms_per_viewport.get()),
        min_duration: args.min_scroll,
        max_duration: args.max_scroll,
    })
}

fn frame_interval(fps: PositiveU64) -> Duration {
    let micros = MICROS_PER_SECOND
        .checked_div(fps.get())
        .unwrap_or(MICROS_PER_SECOND)
        .max(1);
    Duration::from_micros(micros)
}
