mod plan;

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches};

use scroll_assist::args::{AssistArgs, Command};
use scroll_assist::error::AppResult;
use scroll_assist::system::logger::{LogTarget, init_logging};
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let Some(args) = resolve_args(std::env::args_os().collect())? else {
        return Ok(());
    };

    init_logging(args.verbose, args.no_color, &log_target(&args));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

/// Parses the command line and layers the config file under it. `None`
/// means help was printed.
fn resolve_args(raw_args: Vec<OsString>) -> AppResult<Option<AssistArgs>> {
    let mut cmd = AssistArgs::command();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let mut args = AssistArgs::from_arg_matches(&matches)?;
    if let Some(config) = scroll_assist::config::load_config(args.config.as_deref())? {
        scroll_assist::config::apply_config(&mut args, &matches, &config)?;
    }

    Ok(Some(args))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--")
}

/// The full-screen view owns the terminal, so its logs go to a file or
/// nowhere.
fn log_target(args: &AssistArgs) -> LogTarget {
    if matches!(args.command, Some(Command::Inspect(_))) {
        return LogTarget::Stderr;
    }
    args.log_file
        .clone()
        .map_or(LogTarget::Discard, LogTarget::File)
}

async fn run_async(args: AssistArgs) -> AppResult<()> {
    let plan = build_plan(args)?;
    execute_plan(plan).await
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::PathBuf;

    use clap::Parser;
    use scroll_assist::args::AssistArgs;
    use scroll_assist::system::logger::LogTarget;

    use super::{log_target, resolve_args, should_show_help};

    fn argv(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn bare_invocation_shows_help() {
        assert!(should_show_help(&[OsString::from("scroll-assist")]));
        assert!(should_show_help(&[
            OsString::from("scroll-assist"),
            OsString::from("--")
        ]));
        assert!(!should_show_help(&[
            OsString::from("scroll-assist"),
            OsString::from("deck.md")
        ]));
    }

    #[test]
    fn log_target_follows_command() -> Result<(), String> {
        let inspect = AssistArgs::try_parse_from(["scroll-assist", "inspect", "deck.md"])
            .map_err(|err| err.to_string())?;
        assert_eq!(log_target(&inspect), LogTarget::Stderr);

        let present = AssistArgs::try_parse_from(["scroll-assist", "deck.md"])
            .map_err(|err| err.to_string())?;
        assert_eq!(log_target(&present), LogTarget::Discard);

        let logged =
            AssistArgs::try_parse_from(["scroll-assist", "--log-file", "talk.log", "deck.md"])
                .map_err(|err| err.to_string())?;
        assert_eq!(
            log_target(&logged),
            LogTarget::File(PathBuf::from("talk.log"))
        );
        Ok(())
    }

    #[test]
    fn config_is_applied_before_logging_setup() -> Result<(), String> {
        let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
        let config_path = dir.path().join("scroll-assist.toml");
        std::fs::write(&config_path, "[view]\nno_color = true\n")
            .map_err(|err| format!("write failed: {}", err))?;
        let config_arg = config_path.to_string_lossy().into_owned();

        let args = resolve_args(argv(&[
            "scroll-assist",
            "--config",
            &config_arg,
            "inspect",
            "deck.md",
        ]))
        .map_err(|err| err.to_string())?
        .ok_or_else(|| "Expected parsed arguments".to_owned())?;
        if !args.no_color {
            return Err("Config no_color not applied before logging".to_owned());
        }
        assert_eq!(log_target(&args), LogTarget::Stderr);
        Ok(())
    }

    #[test]
    fn unreadable_config_fails_resolution() {
        let resolved = resolve_args(argv(&[
            "scroll-assist",
            "--config",
            "missing-dir/none.toml",
            "deck.md",
        ]));
        assert!(resolved.is_err());
    }

    #[test]
    fn help_resolves_to_nothing() -> Result<(), String> {
        let resolved = resolve_args(argv(&["scroll-assist"])).map_err(|err| err.to_string())?;
        assert!(resolved.is_none());
        Ok(())
    }
}
