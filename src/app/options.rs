use std::path::PathBuf;
use std::time::Duration;

use scroll_assist::assist::AnimationTuning;

#[derive(Debug, Clone)]
pub(crate) struct StoreOptions {
    pub(crate) path: PathBuf,
    pub(crate) key_prefix: String,
}

#[derive(Debug, Clone)]
pub(crate) struct InspectOptions {
    pub(crate) document: PathBuf,
    pub(crate) store: StoreOptions,
}

/// Everything the presentation view needs, resolved from CLI and config.
#[derive(Debug, Clone)]
pub(crate) struct PresentOptions {
    pub(crate) document: PathBuf,
    pub(crate) store: StoreOptions,
    pub(crate) tuning: AnimationTuning,
    pub(crate) frame_interval: Duration,
    pub(crate) header_shade_offset: u64,
    pub(crate) reveal_threshold: f64,
    pub(crate) no_color: bool,
}
