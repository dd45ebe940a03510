use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use scroll_assist::assist::{KeyInput, KeyTarget, ScrollHost, ScrollStart, Session};
use scroll_assist::page::{Document, HeaderStyle, PageView, RevealTracker};
use scroll_assist::store::KeyValueStore;

/// Where keys go after the assistant has seen them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Focus {
    Page,
    /// Go-to-line prompt with the text typed so far.
    Prompt(String),
    /// Section menu with the highlighted entry.
    Menu { selected: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostAction {
    Quit,
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    OpenPrompt,
    ToggleMenu,
}

/// Presentation state: the document, its view, and the assistant session
/// driving it.
#[derive(Debug)]
pub(crate) struct AppState<S> {
    document: Document,
    view: PageView,
    session: Session<S>,
    reveal: RevealTracker,
    focus: Focus,
    header_shade_offset: u64,
    /// One-off host message shown instead of the latest notice.
    flash: Option<String>,
    quit: bool,
}

impl<S: KeyValueStore> AppState<S> {
    pub(crate) fn new(
        document: Document,
        session: Session<S>,
        viewport_rows: usize,
        header_shade_offset: u64,
        reveal_threshold: f64,
    ) -> Self {
        let view = PageView::new(document.lines().len(), viewport_rows);
        let reveal = RevealTracker::new(document.sections().len(), reveal_threshold);
        let mut state = Self {
            document,
            view,
            session,
            reveal,
            focus: Focus::Page,
            header_shade_offset,
            flash: None,
            quit: false,
        };
        state.observe_reveal();
        state
    }

    /// Offers the key to the assistant first; host bindings run only when
    /// the assistant left the default action alone.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        self.flash = None;

        if let KeyCode::Char(ch) = key.code
            && !key.modifiers.contains(KeyModifiers::CONTROL)
        {
            let input = KeyInput::new(ch.to_string(), self.key_target());
            let dispatch = self.session.handle_key(&mut self.view, &input);
            if dispatch.suppresses_default() {
                return;
            }
        }

        match self.focus.clone() {
            Focus::Page => self.handle_page_key(key.code),
            Focus::Prompt(text) => self.handle_prompt_key(key.code, text),
            Focus::Menu { selected } => self.handle_menu_key(key.code, selected),
        }
    }

    pub(crate) fn on_frame(&mut self, now: Duration) {
        if self.session.on_frame(&mut self.view, now).is_some() {
            tracing::debug!(offset = self.view.scroll_offset(), "Scroll landed");
        }
        self.observe_reveal();
    }

    pub(crate) fn resize(&mut self, viewport_rows: usize) {
        self.view.set_viewport_rows(viewport_rows);
        self.observe_reveal();
    }

    const fn key_target(&self) -> KeyTarget {
        match self.focus {
            Focus::Prompt(_) => KeyTarget::TextInput,
            Focus::Page | Focus::Menu { .. } => KeyTarget::Page,
        }
    }

    fn handle_page_key(&mut self, code: KeyCode) {
        let Some(action) = resolve_host_action(code) else {
            return;
        };
        if self.session.is_busy() && is_manual_scroll(action) {
            return;
        }
        match action {
            HostAction::Quit => self.quit = true,
            HostAction::LineUp => self.view.scroll_by(-1.0),
            HostAction::LineDown => self.view.scroll_by(1.0),
            HostAction::PageUp => self.view.page_up(),
            HostAction::PageDown => self.view.page_down(),
            HostAction::Top => self.view.home(),
            HostAction::Bottom => self.view.end(),
            HostAction::OpenPrompt => self.focus = Focus::Prompt(String::new()),
            HostAction::ToggleMenu => self.open_menu(),
        }
    }

    fn handle_prompt_key(&mut self, code: KeyCode, mut text: String) {
        if let KeyCode::Char(ch) = code {
            text.push(ch);
            self.focus = Focus::Prompt(text);
        } else if code == KeyCode::Backspace {
            text.pop();
            self.focus = Focus::Prompt(text);
        } else if code == KeyCode::Esc {
            self.focus = Focus::Page;
        } else if code == KeyCode::Enter {
            self.focus = Focus::Page;
            match text.trim().parse::<usize>() {
                Ok(line) if line > 0 => self.scroll_to_row(line.saturating_sub(1)),
                Ok(_) | Err(_) => self.flash = Some(format!("Not a line number: '{}'", text)),
            }
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode, selected: usize) {
        let last = self.document.sections().len().saturating_sub(1);
        if matches!(code, KeyCode::Esc | KeyCode::Char('m' | 'M')) {
            self.focus = Focus::Page;
        } else if matches!(code, KeyCode::Char('q' | 'Q')) {
            self.quit = true;
        } else if matches!(code, KeyCode::Up | KeyCode::Char('k')) {
            self.focus = Focus::Menu {
                selected: selected.saturating_sub(1),
            };
        } else if matches!(code, KeyCode::Down | KeyCode::Char('j')) {
            self.focus = Focus::Menu {
                selected: selected.saturating_add(1).min(last),
            };
        } else if code == KeyCode::Enter {
            self.focus = Focus::Page;
            if let Some(start) = self
                .document
                .sections()
                .get(selected)
                .map(|section| section.start)
            {
                self.scroll_to_row(start);
            }
        }
    }

    fn open_menu(&mut self) {
        if self.document.sections().is_empty() {
            self.flash = Some("No sections in this document.".to_owned());
            return;
        }
        let selected = self
            .document
            .section_at(self.view.top_row())
            .unwrap_or_default();
        self.focus = Focus::Menu { selected };
    }

    fn scroll_to_row(&mut self, row: usize) {
        let target = (row as f64).min(self.view.max_offset());
        if self.session.smooth_scroll_to(&self.view, target) == ScrollStart::Busy {
            self.flash = Some("Still scrolling.".to_owned());
        }
    }

    fn observe_reveal(&mut self) {
        self.reveal.observe(
            self.document.sections(),
            self.view.top_row(),
            self.view.viewport_rows(),
        );
    }

    pub(crate) const fn document(&self) -> &Document {
        &self.document
    }

    pub(crate) const fn view(&self) -> &PageView {
        &self.view
    }

    pub(crate) const fn session(&self) -> &Session<S> {
        &self.session
    }

    pub(crate) const fn focus(&self) -> &Focus {
        &self.focus
    }

    pub(crate) fn is_revealed(&self, section: usize) -> bool {
        self.reveal.is_revealed(section)
    }

    pub(crate) fn header_style(&self) -> HeaderStyle {
        HeaderStyle::for_offset(self.view.scroll_offset(), self.header_shade_offset)
    }

    /// Text for the status bar: a host message, else the latest notice.
    pub(crate) fn status_text(&self) -> String {
        self.flash.clone().unwrap_or_else(|| {
            self.session
                .last_notice()
                .map_or_else(String::new, ToString::to_string)
        })
    }

    pub(crate) const fn should_quit(&self) -> bool {
        self.quit
    }
}

const fn resolve_host_action(code: KeyCode) -> Option<HostAction> {
    if matches!(code, KeyCode::Char('q' | 'Q') | KeyCode::Esc) {
        return Some(HostAction::Quit);
    }
    if matches!(code, KeyCode::Up | KeyCode::Char('k')) {
        return Some(HostAction::LineUp);
    }
    if matches!(code, KeyCode::Down | KeyCode::Char('j')) {
        return Some(HostAction::LineDown);
    }
    if matches!(code, KeyCode::PageUp) {
        return Some(HostAction::PageUp);
    }
    if matches!(code, KeyCode::PageDown) {
        return Some(HostAction::PageDown);
    }
    if matches!(code, KeyCode::Home | KeyCode::Char('g')) {
        return Some(HostAction::Top);
    }
    if matches!(code, KeyCode::End | KeyCode::Char('G')) {
        return Some(HostAction::Bottom);
    }
    if matches!(code, KeyCode::Char(':')) {
        return Some(HostAction::OpenPrompt);
    }
    if matches!(code, KeyCode::Char('m' | 'M')) {
        return Some(HostAction::ToggleMenu);
    }
    None
}

/// Manual scrolling would fight the running animation, so it waits.
const fn is_manual_scroll(action: HostAction) -> bool {
    matches!(
        action,
        HostAction::LineUp
            | HostAction::LineDown
            | HostAction::PageUp
            | HostAction::PageDown
            | HostAction::Top
            | HostAction::Bottom
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use scroll_assist::assist::{AnimationTuning, Mode, ScrollHost, Session};
    use scroll_assist::page::{Document, page_path};
    use scroll_assist::store::{MemoryStore, Persistence};

    use super::{AppState, Focus};

    const DECK: &str = "# Intro\nwelcome\n\n## Setup\none\ntwo\nthree\n\n## Demo\nfour\nfive\nsix\nseven\neight\n\n# Wrap up\nthanks\n";

    fn state() -> AppState<MemoryStore> {
        let path = Path::new("deck.md");
        let document = Document::parse(path, DECK);
        let session = Session::load(
            page_path(path),
            Persistence::new(MemoryStore::new()),
            AnimationTuning::default(),
        );
        AppState::new(document, session, 5, 2, 0.15)
    }

    fn press(state: &mut AppState<MemoryStore>, code: KeyCode) {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn settle(state: &mut AppState<MemoryStore>) {
        let mut now = Duration::ZERO;
        while state.session().is_busy() {
            state.on_frame(now);
            now = now.saturating_add(Duration::from_millis(16));
        }
    }

    #[test]
    fn records_and_plays_back_through_keys() -> Result<(), String> {
        let mut state = state();
        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.session().mode(), Mode::Recording);

        for _ in 0..3 {
            press(&mut state, KeyCode::Char('j'));
        }
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::PageDown);
        press(&mut state, KeyCode::Char('S'));
        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.session().mode(), Mode::Playback);
        assert_eq!(state.view().top_row(), 0);

        let stored: Vec<u64> = state
            .session()
            .checkpoints()
            .iter()
            .map(|checkpoint| checkpoint.offset())
            .collect();
        assert_eq!(stored, vec![3, 7]);

        press(&mut state, KeyCode::Char(' '));
        assert!(state.session().is_busy());
        settle(&mut state);
        assert_eq!(state.view().top_row(), 3);
        if !state.status_text().contains("Checkpoint 1/2") {
            return Err(format!("unexpected status '{}'", state.status_text()));
        }
        Ok(())
    }

    #[test]
    fn prompt_typing_is_not_taken_by_the_assistant() {
        let mut state = state();
        press(&mut state, KeyCode::Char(':'));
        for ch in ['r', '1', '0'] {
            press(&mut state, KeyCode::Char(ch));
        }
        assert_eq!(state.session().mode(), Mode::Idle);
        assert_eq!(state.focus(), &Focus::Prompt("r10".to_owned()));

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.focus(), &Focus::Page);
        assert!(!state.session().is_busy());
        assert!(state.status_text().contains("Not a line number"));
    }

    #[test]
    fn go_to_line_scrolls_smoothly() {
        let mut state = state();
        press(&mut state, KeyCode::Char(':'));
        press(&mut state, KeyCode::Char('9'));
        press(&mut state, KeyCode::Enter);
        assert!(state.session().is_busy());

        press(&mut state, KeyCode::Down);
        settle(&mut state);
        assert_eq!(state.view().top_row(), 8);
    }

    #[test]
    fn menu_selection_scrolls_and_closes() {
        let mut state = state();
        press(&mut state, KeyCode::Char('m'));
        assert_eq!(state.focus(), &Focus::Menu { selected: 0 });

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.focus(), &Focus::Page);
        settle(&mut state);
        assert_eq!(state.view().top_row(), 8);
        assert!(state.is_revealed(2));
    }

    #[test]
    fn header_shades_after_offset_and_quit_keys_work() {
        let mut state = state();
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.view().scroll_offset().round() as u64, 2);
        assert_eq!(
            state.header_style(),
            scroll_assist::page::HeaderStyle::Plain
        );
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(
            state.header_style(),
            scroll_assist::page::HeaderStyle::Shaded
        );

        assert!(!state.should_quit());
        state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(state.should_quit());
    }

    #[test]
    fn space_in_playback_does_not_reach_host_bindings() {
        let path = Path::new("deck.md");
        let store = MemoryStore::new().with_entry(
            format!("scroll-assist:{}", page_path(path)),
            "[10]",
        );
        let session = Session::load(
            page_path(path),
            Persistence::new(store),
            AnimationTuning::default(),
        );
        let mut state = AppState::new(Document::parse(path, DECK), session, 5, 2, 0.15);
        assert_eq!(state.session().mode(), Mode::Playback);

        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Char(' '));
        settle(&mut state);
        assert_eq!(state.view().top_row(), 10);
        assert_eq!(state.session().playback_index(), 1);
    }
}
