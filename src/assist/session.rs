use std::time::Duration;

use crate::store::{KeyValueStore, Persistence};

use super::{
    AnimationTuning, Animator, Checkpoint, Command, Completion, Dispatch, KeyInput, Mode, Notice,
    ScrollHost, ScrollStart, route,
};

/// Playback step waiting for its animation to land.
#[derive(Debug, Clone, Copy)]
struct Arrival {
    ordinal: usize,
    total: usize,
    target: Checkpoint,
}

/// Recorder/player state for one page.
///
/// `playback_index` always lies in `0..=checkpoints.len()`; the upper bound
/// means the last checkpoint was played and the next step loops to the top.
#[derive(Debug)]
pub struct Session<S> {
    page_path: String,
    persistence: Persistence<S>,
    animator: Animator,
    mode: Mode,
    checkpoints: Vec<Checkpoint>,
    playback_index: usize,
    arrival: Option<Arrival>,
    last_notice: Option<Notice>,
}

impl<S: KeyValueStore> Session<S> {
    /// Starts a session for `page_path`, entering playback straight away
    /// when a non-empty record was stored for it.
    #[must_use]
    pub fn load(
        page_path: impl Into<String>,
        persistence: Persistence<S>,
        tuning: AnimationTuning,
    ) -> Self {
        let page_path = page_path.into();
        let checkpoints = persistence.load(&page_path);
        let mut session = Self {
            page_path,
            persistence,
            animator: Animator::new(tuning),
            mode: Mode::Idle,
            checkpoints: Vec::new(),
            playback_index: 0,
            arrival: None,
            last_notice: None,
        };

        if !checkpoints.is_empty() {
            let count = checkpoints.len();
            session.checkpoints = checkpoints;
            session.mode = Mode::Playback;
            session.emit(Notice::Loaded { count });
        }
        session.emit(Notice::Ready);
        session
    }

    /// Routes a key press and runs the resulting command.
    pub fn handle_key<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        input: &KeyInput,
    ) -> Dispatch {
        let dispatch = route(input, self.mode, self.animator.is_busy());
        if let Some(command) = dispatch.command() {
            self.apply(host, command);
        }
        dispatch
    }

    pub fn apply<H: ScrollHost + ?Sized>(&mut self, host: &mut H, command: Command) {
        match command {
            Command::StartRecording => self.start_recording(host),
            Command::SaveCheckpoint => {
                self.save_checkpoint(host);
            }
            Command::EndRecording => {
                self.end_recording(host);
            }
            Command::AdvancePlayback => {
                self.advance_playback(host);
            }
        }
    }

    /// Clears the in-memory checkpoints and jumps to the top. The stored
    /// record is left alone until the recording ends.
    pub fn start_recording<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        self.mode = Mode::Recording;
        self.checkpoints.clear();
        self.playback_index = 0;
        self.arrival = None;
        host.scroll_to(0.0);
        self.emit(Notice::RecordingStarted);
    }

    /// Appends the current rounded offset. Only valid while recording.
    pub fn save_checkpoint<H: ScrollHost + ?Sized>(&mut self, host: &H) -> bool {
        if self.mode != Mode::Recording {
            self.emit(Notice::NotRecording);
            return false;
        }

        let offset = Checkpoint::from_scroll_offset(host.scroll_offset());
        self.checkpoints.push(offset);
        self.emit(Notice::CheckpointSaved {
            ordinal: self.checkpoints.len(),
            offset,
        });
        true
    }

    /// Stores the recording and switches to playback. Rejected, staying in
    /// recording, when nothing was recorded or the store write fails.
    pub fn end_recording<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.mode != Mode::Recording {
            self.emit(Notice::NotRecording);
            return false;
        }
        if self.checkpoints.is_empty() {
            self.emit(Notice::NothingRecorded);
            return false;
        }

        let count = self.checkpoints.len();
        if let Err(err) = self.persistence.save(&self.page_path, &self.checkpoints) {
            tracing::warn!(page = %self.page_path, "Failed to store checkpoints: {}", err);
            self.emit(Notice::PersistFailed { count });
            return false;
        }

        self.mode = Mode::Playback;
        self.playback_index = 0;
        host.scroll_to(0.0);
        self.emit(Notice::RecordingEnded { count });
        true
    }

    /// Moves to the next checkpoint, or back to the top once every
    /// checkpoint was played. Ignored outside playback and while an
    /// animation is running.
    pub fn advance_playback<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.mode != Mode::Playback || self.animator.is_busy() {
            return false;
        }

        let total = self.checkpoints.len();
        let Some(target) = self.checkpoints.get(self.playback_index).copied() else {
            self.playback_index = 0;
            host.scroll_to(0.0);
            self.emit(Notice::LoopedToTop);
            return true;
        };

        self.playback_index = self.playback_index.saturating_add(1);
        let arrival = Arrival {
            ordinal: self.playback_index,
            total,
            target,
        };
        match self.animator.scroll_to(host, target.as_scroll_offset()) {
            ScrollStart::Arrived => self.arrive(arrival),
            ScrollStart::Animating { .. } => self.arrival = Some(arrival),
            ScrollStart::Busy => {}
        }
        true
    }

    /// Eased scroll to an arbitrary offset, outside the checkpoint sequence.
    pub fn smooth_scroll_to<H: ScrollHost + ?Sized>(
        &mut self,
        host: &H,
        target: f64,
    ) -> ScrollStart {
        self.animator.scroll_to(host, target)
    }

    /// Drives the running animation one frame forward.
    pub fn on_frame<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        now: Duration,
    ) -> Option<Completion> {
        let completion = self.animator.step(host, now)?;
        if let Some(arrival) = self.arrival.take()
            && self.mode == Mode::Playback
        {
            self.arrive(arrival);
        }
        Some(completion)
    }

    fn arrive(&mut self, arrival: Arrival) {
        self.emit(Notice::CheckpointReached {
            ordinal: arrival.ordinal,
            total: arrival.total,
            target: arrival.target,
        });
    }

    fn emit(&mut self, notice: Notice) {
        notice.log();
        self.last_notice = Some(notice);
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    #[must_use]
    pub const fn playback_index(&self) -> usize {
        self.playback_index
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.animator.is_busy()
    }

    #[must_use]
    pub const fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    #[must_use]
    pub fn page_path(&self) -> &str {
        &self.page_path
    }

    #[must_use]
    pub const fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }
}
