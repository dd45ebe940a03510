use std::fmt;

use super::Checkpoint;

/// Human-readable status line produced by a session transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Ready,
    Loaded {
        count: usize,
    },
    RecordingStarted,
    CheckpointSaved {
        ordinal: usize,
        offset: Checkpoint,
    },
    NotRecording,
    NothingRecorded,
    RecordingEnded {
        count: usize,
    },
    PersistFailed {
        count: usize,
    },
    CheckpointReached {
        ordinal: usize,
        total: usize,
        target: Checkpoint,
    },
    LoopedToTop,
}

impl Notice {
    pub(crate) fn log(&self) {
        match self {
            Notice::PersistFailed { .. } => tracing::warn!(target: "scroll_assist", "{}", self),
            Notice::NotRecording | Notice::NothingRecorded => {
                tracing::info!(target: "scroll_assist", hint = true, "{}", self);
            }
            Notice::Ready
            | Notice::Loaded { .. }
            | Notice::RecordingStarted
            | Notice::CheckpointSaved { .. }
            | Notice::RecordingEnded { .. }
            | Notice::CheckpointReached { .. }
            | Notice::LoopedToTop => tracing::info!(target: "scroll_assist", "{}", self),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Ready => f.write_str(
                "Scroll Assistant ready.  R = Record  |  S = Save checkpoint  |  E = End recording  |  Space = Play",
            ),
            Notice::Loaded { count } => write!(
                f,
                "Loaded {} checkpoint(s) from storage. Press Space to play.",
                count
            ),
            Notice::RecordingStarted => {
                f.write_str("Recording started. Scroll to each section and press S to save.")
            }
            Notice::CheckpointSaved { ordinal, offset } => {
                write!(f, "Checkpoint {} saved at {}", ordinal, offset)
            }
            Notice::NotRecording => f.write_str("Not recording. Press R to start recording."),
            Notice::NothingRecorded => {
                f.write_str("No checkpoints saved. Keep scrolling and pressing S.")
            }
            Notice::RecordingEnded { count } => write!(
                f,
                "Recording ended. {} checkpoint(s) saved. Press Space to play.",
                count
            ),
            Notice::PersistFailed { count } => write!(
                f,
                "Could not store {} checkpoint(s); still recording. Press E to retry.",
                count
            ),
            Notice::CheckpointReached {
                ordinal,
                total,
                target,
            } => write!(f, "▶ Checkpoint {}/{}  →  {}", ordinal, total, target),
            Notice::LoopedToTop => f.write_str("Looped back to top. Press Space to start again."),
        }
    }
}
