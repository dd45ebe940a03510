use scroll_assist::error::AppResult;
use scroll_assist::page::page_path;
use scroll_assist::store::{FileStore, Persistence, encode_checkpoints};

use super::InspectOptions;

/// Prints the checkpoints stored for a document as a JSON array.
pub(crate) fn run_inspect(options: &InspectOptions) -> AppResult<()> {
    let store = FileStore::open(&options.store.path)?;
    let persistence = Persistence::with_prefix(store, options.store.key_prefix.clone());
    let page = page_path(&options.document);
    let checkpoints = persistence.load(&page);
    tracing::debug!(
        key = %persistence.storage_key(&page),
        count = checkpoints.len(),
        "Inspecting stored checkpoints"
    );
    println!("{}", encode_checkpoints(&checkpoints)?);
    Ok(())
}
