use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Runs the compiled `scroll-assist` binary with `args`.
///
/// # Errors
///
/// Returns an error when the binary path is unknown or the process cannot
/// be started.
pub fn run_scroll_assist<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = scroll_assist_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run scroll-assist failed: {}", err))
}

/// Writes a store file holding one record for `document` under `prefix`.
///
/// # Errors
///
/// Returns an error when the document path cannot be resolved or the store
/// cannot be written.
pub fn write_store(store: &Path, prefix: &str, document: &Path, record: &str) -> Result<(), String> {
    let page = canonical(document)?;
    let mut entries = serde_json::Map::new();
    entries.insert(
        format!("{}{}", prefix, page.to_string_lossy()),
        serde_json::Value::String(record.to_owned()),
    );
    let encoded = serde_json::to_string(&entries)
        .map_err(|err| format!("encode store failed: {}", err))?;
    std::fs::write(store, encoded).map_err(|err| format!("write store failed: {}", err))
}

fn canonical(path: &Path) -> Result<PathBuf, String> {
    std::fs::canonicalize(path).map_err(|err| format!("canonicalize failed: {}", err))
}

fn scroll_assist_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_scroll-assist").map_or_else(
        || Err("CARGO_BIN_EXE_scroll-assist missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
