use super::Mode;

/// Element that had focus when a key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyTarget {
    #[default]
    Page,
    TextInput,
    TextArea,
    ContentEditable,
}

impl KeyTarget {
    /// Whether keys typed into this target are text entry.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        match self {
            KeyTarget::Page => false,
            KeyTarget::TextInput | KeyTarget::TextArea | KeyTarget::ContentEditable => true,
        }
    }
}

/// A key press as seen by the assistant: the key's text value (`"r"`,
/// `"S"`, `" "`, `"ArrowDown"`, ...) and where focus was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub target: KeyTarget,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: impl Into<String>, target: KeyTarget) -> Self {
        Self {
            key: key.into(),
            target,
        }
    }

    #[must_use]
    pub fn on_page(key: impl Into<String>) -> Self {
        Self::new(key, KeyTarget::Page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartRecording,
    SaveCheckpoint,
    EndRecording,
    AdvancePlayback,
}

/// What the host should do with a key after routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Not ours; the host handles the key normally.
    PassThrough,
    /// Ours, but nothing runs (playback step while an animation is running).
    /// The host's default action is still suppressed.
    Swallow,
    Run {
        command: Command,
        suppress_default: bool,
    },
}

impl Dispatch {
    #[must_use]
    pub const fn suppresses_default(self) -> bool {
        match self {
            Dispatch::PassThrough => false,
            Dispatch::Swallow => true,
            Dispatch::Run {
                suppress_default, ..
            } => suppress_default,
        }
    }

    #[must_use]
    pub const fn command(self) -> Option<Command> {
        match self {
            Dispatch::Run { command, .. } => Some(command),
            Dispatch::PassThrough | Dispatch::Swallow => None,
        }
    }
}

/// Maps a key press to an assistant command.
///
/// Letters match either case; the playback key is the literal space
/// character. Keys typed into editable targets are never taken.
#[must_use]
pub fn route(input: &KeyInput, mode: Mode, busy: bool) -> Dispatch {
    if input.target.is_editable() {
        return Dispatch::PassThrough;
    }

    match input.key.as_str() {
        "r" | "R" => Dispatch::Run {
            command: Command::StartRecording,
            suppress_default: false,
        },
        "s" | "S" if mode == Mode::Recording => Dispatch::Run {
            command: Command::SaveCheckpoint,
            suppress_default: true,
        },
        "e" | "E" if mode == Mode::Recording => Dispatch::Run {
            command: Command::EndRecording,
            suppress_default: false,
        },
        " " if mode == Mode::Playback => {
            if busy {
                Dispatch::Swallow
            } else {
                Dispatch::Run {
                    command: Command::AdvancePlayback,
                    suppress_default: true,
                }
            }
        }
        _ => Dispatch::PassThrough,
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, Dispatch, KeyInput, KeyTarget, route};
    use crate::assist::Mode;

    #[test]
    fn letters_match_case_insensitively() {
        for key in ["r", "R"] {
            assert_eq!(
                route(&KeyInput::on_page(key), Mode::Idle, false).command(),
                Some(Command::StartRecording)
            );
        }
        for key in ["s", "S"] {
            let dispatch = route(&KeyInput::on_page(key), Mode::Recording, false);
            assert_eq!(dispatch.command(), Some(Command::SaveCheckpoint));
            assert!(dispatch.suppresses_default());
        }
        for key in ["e", "E"] {
            assert_eq!(
                route(&KeyInput::on_page(key), Mode::Recording, false).command(),
                Some(Command::EndRecording)
            );
        }
    }

    #[test]
    fn mode_bound_keys_pass_through_elsewhere() {
        assert_eq!(
            route(&KeyInput::on_page("s"), Mode::Idle, false),
            Dispatch::PassThrough
        );
        assert_eq!(
            route(&KeyInput::on_page("e"), Mode::Playback, false),
            Dispatch::PassThrough
        );
        assert_eq!(
            route(&KeyInput::on_page(" "), Mode::Recording, false),
            Dispatch::PassThrough
        );
        assert_eq!(
            route(&KeyInput::on_page("x"), Mode::Playback, false),
            Dispatch::PassThrough
        );
        assert_eq!(
            route(&KeyInput::on_page("Spacebar"), Mode::Playback, false),
            Dispatch::PassThrough
        );
    }

    #[test]
    fn space_is_swallowed_while_busy() {
        let dispatch = route(&KeyInput::on_page(" "), Mode::Playback, true);
        assert_eq!(dispatch, Dispatch::Swallow);
        assert!(dispatch.suppresses_default());

        let ready = route(&KeyInput::on_page(" "), Mode::Playback, false);
        assert_eq!(ready.command(), Some(Command::AdvancePlayback));
        assert!(ready.suppresses_default());
    }

    #[test]
    fn editable_targets_are_never_routed() {
        for target in [
            KeyTarget::TextInput,
            KeyTarget::TextArea,
            KeyTarget::ContentEditable,
        ] {
            for key in ["r", "s", "e", " "] {
                for mode in [Mode::Idle, Mode::Recording, Mode::Playback] {
                    assert_eq!(
                        route(&KeyInput::new(key, target), mode, false),
                        Dispatch::PassThrough
                    );
                }
            }
        }
    }
}
