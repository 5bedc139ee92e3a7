//! Main TUI application

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::animator::RenderedFrame;
use crate::scheduler::{Scheduler, TICK_INTERVAL};

use super::theme::Theme;
use super::widgets::{HeaderBar, HelpBar, StatusBar};

/// Everything the draw pass needs, borrowed from the app so the terminal
/// can be borrowed mutably alongside.
struct DrawState<'a> {
    frame: &'a RenderedFrame,
    running: bool,
    auto_rotate: bool,
    remaining_secs: u64,
    duration_secs: u64,
    source: &'a str,
    errors: &'a [String],
}

/// Application state
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    scheduler: Scheduler,
    source_desc: String,
    errors: Vec<String>,
    frame: RenderedFrame,
    remaining_secs: u64,
    should_quit: bool,
}

impl App {
    /// Create the app and take over the terminal.
    pub fn new(
        mut scheduler: Scheduler,
        source_desc: String,
        errors: Vec<String>,
    ) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let frame = scheduler.render_now();
        let remaining_secs = scheduler.duration_secs();
        Ok(Self {
            terminal,
            scheduler,
            source_desc,
            errors,
            frame,
            remaining_secs,
            should_quit: false,
        })
    }

    /// Run the main event loop.
    ///
    /// Input is polled on a short timeout for responsiveness; the animation
    /// advances on its own cadence gate, so key presses never produce extra
    /// ticks and the periodic driver cannot be double-started.
    pub fn run(&mut self) -> io::Result<()> {
        let poll_timeout = Duration::from_millis(16);
        let mut last_tick = Instant::now();

        // Drain any events queued during terminal setup.
        while event::poll(Duration::from_millis(0))? {
            let _ = event::read()?;
        }

        while !self.should_quit {
            self.draw()?;

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.scheduler.is_running() && last_tick.elapsed() >= TICK_INTERVAL {
                let outcome = self.scheduler.tick();
                self.remaining_secs = outcome.remaining_secs;
                if let Some(frame) = outcome.frame {
                    self.frame = frame;
                }
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                if self.scheduler.is_running() {
                    self.scheduler.stop();
                } else {
                    self.scheduler.start();
                    self.remaining_secs = self.scheduler.duration_secs();
                }
            }
            KeyCode::Char('n') => {
                self.scheduler.animator_mut().next_artwork();
                if !self.scheduler.is_running() {
                    self.frame = self.scheduler.render_now();
                }
            }
            KeyCode::Char('r') => {
                self.scheduler.animator_mut().toggle_auto_rotate();
            }
            _ => {}
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let state = DrawState {
            frame: &self.frame,
            running: self.scheduler.is_running(),
            auto_rotate: self.scheduler.animator().auto_rotate(),
            remaining_secs: self.remaining_secs,
            duration_secs: self.scheduler.duration_secs(),
            source: &self.source_desc,
            errors: &self.errors,
        };
        self.terminal.draw(|f| draw_ui(f, &state))?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn draw_ui(f: &mut Frame, state: &DrawState) {
    let error_rows = state.errors.len().min(3) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(error_rows),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(
        HeaderBar {
            source: state.source,
        },
        chunks[0],
    );

    draw_art(f, chunks[1], &state.frame.text);

    if error_rows > 0 {
        let lines: Vec<Line> = state
            .errors
            .iter()
            .take(error_rows as usize)
            .map(|e| Line::from(Span::styled(e.clone(), Theme::error())))
            .collect();
        f.render_widget(Paragraph::new(lines), chunks[2]);
    }

    f.render_widget(
        StatusBar {
            running: state.running,
            auto_rotate: state.auto_rotate,
            label: state.frame.label,
            remaining_secs: state.remaining_secs,
            duration_secs: state.duration_secs,
        },
        chunks[3],
    );

    f.render_widget(HelpBar, chunks[4]);
}

/// Draw the animation grid centered in `area` without re-wrapping it: the
/// grid's own columns must stay aligned, so each row is rendered verbatim.
fn draw_art(f: &mut Frame, area: Rect, text: &str) {
    let height = text.lines().count() as u16;
    let width = text
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let target = centered(area, width, height);
    f.render_widget(Paragraph::new(text.to_string()).style(Theme::art()), target);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered(area, 40, 10);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_clamps_oversize() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = centered(area, 40, 10);
        assert_eq!(rect, Rect::new(0, 0, 10, 5));
    }
}
