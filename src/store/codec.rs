use serde_json::Value;

use crate::assist::Checkpoint;
use crate::error::{CheckpointDecodeError, StoreError};

/// Serializes checkpoints as a JSON array of offsets in recorded order.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn encode_checkpoints(checkpoints: &[Checkpoint]) -> Result<String, StoreError> {
    serde_json::to_string(checkpoints).map_err(|source| StoreError::Encode { source })
}

/// Parses a persisted record back into checkpoints.
///
/// Any JSON number is accepted and rounded to a whole, non-negative offset.
///
/// # Errors
///
/// Returns an error when the text is not JSON, not an array, or holds a
/// non-numeric entry.
pub fn decode_checkpoints(raw: &str) -> Result<Vec<Checkpoint>, CheckpointDecodeError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| CheckpointDecodeError::Json { source })?;
    let Value::Array(items) = value else {
        return Err(CheckpointDecodeError::NotAnArray);
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_f64()
                .map(Checkpoint::from_scroll_offset)
                .ok_or(CheckpointDecodeError::NotANumber { index })
        })
        .collect()
}
