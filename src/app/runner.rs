use std::io::{self, IsTerminal};
use std::time::Duration;

use crossterm::event::{self, Event};
use tokio::time::{Instant, MissedTickBehavior};

use scroll_assist::assist::Session;
use scroll_assist::error::{AppError, AppResult, ValidationError};
use scroll_assist::page::{Document, page_path};
use scroll_assist::store::{FileStore, Persistence};

use super::PresentOptions;
use super::state::AppState;
use super::ui::{Palette, TerminalGuard, Ui, UiActions, body_rows};

/// Non-blocking poll interval for keyboard events.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(0);

/// Opens the document in the full-screen view and runs the frame loop
/// until the presenter quits.
pub(crate) async fn run_present(options: &PresentOptions) -> AppResult<()> {
    if !io::stdout().is_terminal() {
        return Err(AppError::validation(ValidationError::NotATerminal));
    }

    let document = Document::read(&options.document)?;
    let store = FileStore::open(&options.store.path)?;
    let persistence = Persistence::with_prefix(store, options.store.key_prefix.clone());
    let page = page_path(&options.document);
    tracing::info!(
        page = %page,
        key = %persistence.storage_key(&page),
        sections = document.sections().len(),
        "Opening presentation"
    );
    let session = Session::load(page, persistence, options.tuning);

    let mut terminal = Ui::setup_terminal()?;
    let _guard = TerminalGuard;
    let size = terminal.size()?;
    let mut state = AppState::new(
        document,
        session,
        body_rows(size.height),
        options.header_shade_offset,
        options.reveal_threshold,
    );
    let palette = Palette::new(options.no_color);

    let mut ticker = tokio::time::interval(options.frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let started = Instant::now();

    loop {
        let tick = ticker.tick().await;

        while !state.should_quit() && event::poll(EVENT_POLL_INTERVAL)? {
            let input = event::read()?;
            if let Event::Key(key) = input {
                state.handle_key(key);
            } else if let Event::Resize(_, rows) = input {
                state.resize(body_rows(rows));
            }
        }
        if state.should_quit() {
            break;
        }

        state.on_frame(tick.saturating_duration_since(started));
        Ui::render(&mut terminal, &state, palette);
    }

    tracing::info!(
        checkpoints = state.session().checkpoints().len(),
        "Presentation closed"
    );
    Ok(())
}
