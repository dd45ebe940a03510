use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use scroll_assist::assist::Mode;
use scroll_assist::error::AppResult;
use scroll_assist::page::HeaderStyle;
use scroll_assist::store::KeyValueStore;

use super::state::{AppState, Focus};

const HEADER_ROWS: u16 = 1;
const STATUS_ROWS: u16 = 1;
const MENU_MAX_WIDTH: u16 = 48;
const MENU_MAX_HEIGHT: u16 = 16;

pub(crate) trait UiActions {
    /// Initializes the terminal for the presentation view.
    ///
    /// # Errors
    ///
    /// Returns an error when terminal setup fails.
    fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<io::Stdout>>>;
    fn cleanup();
    fn render<B: Backend, S: KeyValueStore>(
        terminal: &mut Terminal<B>,
        state: &AppState<S>,
        palette: Palette,
    );
}

pub(crate) struct Ui;

impl UiActions for Ui {
    fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<io::Stdout>>> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(io::stdout());
        match Terminal::new(backend) {
            Ok(mut terminal) => {
                if let Err(err) = terminal.clear() {
                    Self::cleanup();
                    return Err(err.into());
                }
                Ok(terminal)
            }
            Err(err) => {
                Self::cleanup();
                Err(err.into())
            }
        }
    }

    fn cleanup() {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen).ok();
    }

    fn render<B: Backend, S: KeyValueStore>(
        terminal: &mut Terminal<B>,
        state: &AppState<S>,
        palette: Palette,
    ) {
        if let Err(err) = terminal.draw(|f| draw_frame(f, state, palette)) {
            tracing::warn!("Failed to render view: {}", err);
        }
    }
}

/// Restores the terminal however the view exits.
pub(crate) struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Ui::cleanup();
    }
}

/// Document rows visible on a terminal `height` rows tall.
pub(crate) fn body_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(HEADER_ROWS.saturating_add(STATUS_ROWS)))
}

/// Colors are dropped when `no_color` is set; modifiers survive.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    no_color: bool,
}

impl Palette {
    pub(crate) const fn new(no_color: bool) -> Self {
        Self { no_color }
    }

    fn fg(self, color: Color) -> Style {
        if self.no_color {
            Style::default()
        } else {
            Style::default().fg(color)
        }
    }

    fn header(self, style: HeaderStyle) -> Style {
        match style {
            HeaderStyle::Plain => self.fg(Color::White),
            HeaderStyle::Shaded if self.no_color => {
                Style::default().add_modifier(Modifier::REVERSED)
            }
            HeaderStyle::Shaded => Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }

    fn mode_badge(self, mode: Mode) -> Style {
        let color = match mode {
            Mode::Idle => Color::Gray,
            Mode::Recording => Color::Red,
            Mode::Playback => Color::Green,
        };
        self.fg(color).add_modifier(Modifier::BOLD)
    }
}

pub(crate) fn draw_frame<B: Backend, S: KeyValueStore>(
    f: &mut Frame<'_, B>,
    state: &AppState<S>,
    palette: Palette,
) {
    let size = f.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(0),
            Constraint::Length(STATUS_ROWS),
        ])
        .split(size);

    let (header_chunk, body_chunk, status_chunk) = match chunks.as_ref() {
        [header, body, status] => (*header, *body, *status),
        _ => return,
    };

    render_header(f, state, palette, header_chunk);
    render_body(f, state, palette, body_chunk);
    render_status(f, state, palette, status_chunk);
    if let Focus::Menu { selected } = state.focus() {
        render_menu(f, state, palette, *selected, size);
    }
}

fn render_header<B: Backend, S: KeyValueStore>(
    f: &mut Frame<'_, B>,
    state: &AppState<S>,
    palette: Palette,
    area: Rect,
) {
    let style = palette.header(state.header_style());
    let mode = state.session().mode();
    let badge = format!(" {} ", mode.label().to_uppercase());
    let title = format!(" {}", state.document().title());
    let padding = usize::from(area.width)
        .saturating_sub(title.chars().count())
        .saturating_sub(badge.chars().count());

    let line = Line::from(vec![
        Span::styled(title, style.add_modifier(Modifier::BOLD)),
        Span::styled(" ".repeat(padding), style),
        Span::styled(badge, style.patch(palette.mode_badge(mode))),
    ]);
    f.render_widget(Paragraph::new(line).style(style), area);
}

fn render_body<B: Backend, S: KeyValueStore>(
    f: &mut Frame<'_, B>,
    state: &AppState<S>,
    palette: Palette,
    area: Rect,
) {
    let document = state.document();
    let top = state.view().top_row();
    let lines: Vec<Line<'_>> = document
        .lines()
        .iter()
        .enumerate()
        .skip(top)
        .take(usize::from(area.height))
        .map(|(index, text)| {
            let section = document.section_at(index);
            let is_heading = section
                .and_then(|position| document.sections().get(position))
                .is_some_and(|heading| heading.start == index);
            let mut style = if is_heading {
                palette.fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if section.is_some_and(|position| !state.is_revealed(position)) {
                style = style.add_modifier(Modifier::DIM);
            }
            Line::from(Span::styled(text.as_str(), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn render_status<B: Backend, S: KeyValueStore>(
    f: &mut Frame<'_, B>,
    state: &AppState<S>,
    palette: Palette,
    area: Rect,
) {
    let session = state.session();
    let text = match state.focus() {
        Focus::Prompt(typed) => format!(":{}", typed),
        Focus::Page | Focus::Menu { .. } => state.status_text(),
    };
    let position = format!(
        " {}/{}  cp {}/{} ",
        state.view().top_row(),
        state.view().max_offset().round(),
        session.playback_index(),
        session.checkpoints().len(),
    );
    let padding = usize::from(area.width)
        .saturating_sub(text.chars().count())
        .saturating_sub(position.chars().count());

    let line = Line::from(vec![
        Span::raw(text),
        Span::raw(" ".repeat(padding)),
        Span::styled(position, palette.fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_menu<B: Backend, S: KeyValueStore>(
    f: &mut Frame<'_, B>,
    state: &AppState<S>,
    palette: Palette,
    selected: usize,
    size: Rect,
) {
    let sections = state.document().sections();
    let rows = u16::try_from(sections.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(MENU_MAX_HEIGHT);
    let area = centered(size, MENU_MAX_WIDTH, rows);

    let items: Vec<ListItem<'_>> = sections
        .iter()
        .map(|section| {
            let indent = "  ".repeat(section.level.saturating_sub(1));
            ListItem::new(format!("{}{}", indent, section.title))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Sections "))
        .highlight_style(palette.fg(Color::Yellow).add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut list_state);
}

fn centered(size: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(size.width);
    let height = height.min(size.height);
    Rect {
        x: size.x.saturating_add(size.width.saturating_sub(width) / 2),
        y: size.y.saturating_add(size.height.saturating_sub(height) / 2),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use scroll_assist::assist::{AnimationTuning, Session};
    use scroll_assist::page::Document;
    use scroll_assist::store::{MemoryStore, Persistence};

    use super::{AppState, Palette, body_rows, draw_frame};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    #[test]
    fn renders_header_body_and_menu() -> Result<(), String> {
        let path = Path::new("talk.md");
        let document = Document::parse(path, "# Opening\nhello\n## Details\nworld\n");
        let session = Session::load(
            "talk.md",
            Persistence::new(MemoryStore::new()),
            AnimationTuning::default(),
        );
        let mut state = AppState::new(document, session, body_rows(12), 2, 0.15);
        let mut terminal = Terminal::new(TestBackend::new(60, 12))
            .map_err(|err| format!("Failed to create TestBackend terminal: {}", err))?;

        terminal
            .draw(|f| draw_frame(f, &state, Palette::new(true)))
            .map_err(|err| format!("draw failed: {}", err))?;
        let text = screen_text(&terminal);
        for expected in ["Opening", "IDLE", "hello", "Scroll Assistant ready."] {
            if !text.contains(expected) {
                return Err(format!("missing '{}' in rendered view", expected));
            }
        }

        state.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE));
        terminal
            .draw(|f| draw_frame(f, &state, Palette::new(false)))
            .map_err(|err| format!("draw failed: {}", err))?;
        if !screen_text(&terminal).contains("Sections") {
            return Err("menu overlay not rendered".to_owned());
        }
        Ok(())
    }

    #[test]
    fn body_rows_leave_room_for_bars() {
        assert_eq!(body_rows(24), 22);
        assert_eq!(body_rows(1), 0);
    }
}
