use std::path::PathBuf;
use std::time::Duration;

use super::Command;
use super::test_support::parse_test_args;
use crate::error::{AppError, AppResult};

#[test]
fn defaults_match_animation_constants() -> AppResult<()> {
    let args = parse_test_args(["scroll-assist", "deck.md"])?;
    if args.document != Some(PathBuf::from("deck.md")) {
        return Err(AppError::validation("Expected document path"));
    }
    if args.fps.get() != 60 || args.ms_per_viewport.get() != 100 {
        return Err(AppError::validation("Unexpected fps or ms-per-viewport"));
    }
    if args.min_scroll != Duration::from_millis(200) || args.max_scroll != Duration::from_secs(4) {
        return Err(AppError::validation("Unexpected scroll bounds"));
    }
    if args.key_prefix != "scroll-assist:" {
        return Err(AppError::validation(format!(
            "Unexpected key prefix: {}",
            args.key_prefix
        )));
    }
    if args.command.is_some() {
        return Err(AppError::validation("No subcommand expected"));
    }
    Ok(())
}

#[test]
fn parses_tuning_flags() -> AppResult<()> {
    let args = parse_test_args([
        "scroll-assist",
        "--fps",
        "30",
        "--ms-per-viewport",
        "250",
        "--min-scroll",
        "100ms",
        "--max-scroll",
        "2s",
        "--reveal-threshold",
        "0.5",
        "--store",
        "/tmp/store.json",
        "deck.md",
    ])?;
    if args.fps.get() != 30 || args.ms_per_viewport.get() != 250 {
        return Err(AppError::validation("Tuning flags not applied"));
    }
    if args.min_scroll != Duration::from_millis(100) || args.max_scroll != Duration::from_secs(2) {
        return Err(AppError::validation("Scroll bounds not applied"));
    }
    if args.store != "/tmp/store.json" {
        return Err(AppError::validation("Store path not applied"));
    }
    Ok(())
}

#[test]
fn rejects_invalid_values() {
    assert!(parse_test_args(["scroll-assist", "--fps", "0", "deck.md"]).is_err());
    assert!(parse_test_args(["scroll-assist", "--reveal-threshold", "1.5", "deck.md"]).is_err());
    assert!(parse_test_args(["scroll-assist", "--min-scroll", "0ms", "deck.md"]).is_err());
    assert!(parse_test_args(["scroll-assist", "--max-scroll", "3h", "deck.md"]).is_err());
}

#[test]
fn parses_inspect_subcommand() -> AppResult<()> {
    let args = parse_test_args([
        "scroll-assist",
        "inspect",
        "talk.md",
        "--store",
        "/tmp/s.json",
    ])?;
    match args.command {
        Some(Command::Inspect(inspect)) => {
            if inspect.document != PathBuf::from("talk.md") {
                return Err(AppError::validation("Unexpected inspect document"));
            }
        }
        None => return Err(AppError::validation("Expected inspect subcommand")),
    }
    if args.store != "/tmp/s.json" {
        return Err(AppError::validation("Global store flag not applied"));
    }
    Ok(())
}

#[test]
fn global_flags_before_inspect_select_the_subcommand() -> AppResult<()> {
    let args = parse_test_args([
        "scroll-assist",
        "--store",
        "/tmp/s.json",
        "--key-prefix",
        "talk:",
        "inspect",
        "talk.md",
    ])?;
    match args.command {
        Some(Command::Inspect(inspect)) => {
            if inspect.document != PathBuf::from("talk.md") {
                return Err(AppError::validation("Unexpected inspect document"));
            }
        }
        None => return Err(AppError::validation("Expected inspect subcommand")),
    }
    if args.document.is_some() {
        return Err(AppError::validation("Subcommand name parsed as a document"));
    }
    if args.store != "/tmp/s.json" || args.key_prefix != "talk:" {
        return Err(AppError::validation("Global flags not applied"));
    }
    Ok(())
}
