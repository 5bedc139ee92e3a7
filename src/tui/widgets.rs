//! Custom widgets for the TUI

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;

/// Countdown progress bar characters
pub struct ProgressBar;

impl ProgressBar {
    const FULL: char = '█';
    const EMPTY: char = '░';
    const PARTIAL: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

    pub fn render(progress: f64, width: usize) -> String {
        let progress = progress.clamp(0.0, 1.0);
        let filled = (progress * width as f64) as usize;
        let partial_idx = ((progress * width as f64 - filled as f64) * 8.0) as usize;

        let mut bar = String::with_capacity(width);
        for i in 0..width {
            if i < filled {
                bar.push(Self::FULL);
            } else if i == filled && partial_idx > 0 {
                bar.push(Self::PARTIAL[partial_idx.min(7)]);
            } else {
                bar.push(Self::EMPTY);
            }
        }
        bar
    }
}

/// Header bar with the app title and artwork source description
pub struct HeaderBar<'a> {
    pub source: &'a str,
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let title_line = Line::from(vec![
            Span::styled("♥ ", Theme::accent()),
            Span::styled("lovewave", Theme::title()),
        ]);
        buf.set_line(area.x + 1, area.y, &title_line, area.width.saturating_sub(2));

        // Source description on the right, truncated when the terminal is
        // narrow.
        let budget = (area.width as usize).saturating_sub(14);
        let mut source = self.source.to_string();
        while source.width() > budget && !source.is_empty() {
            source.pop();
        }
        let source_len = source.width() as u16;
        let source_x = area.x + area.width.saturating_sub(source_len + 1);
        buf.set_span(source_x, area.y, &Span::styled(source, Theme::muted()), source_len);
    }
}

/// Status bar: playback state, transition label, countdown and progress
pub struct StatusBar<'a> {
    pub running: bool,
    pub auto_rotate: bool,
    pub label: &'a str,
    pub remaining_secs: u64,
    pub duration_secs: u64,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let state = if self.running {
            Span::styled("● Playing", Theme::running())
        } else {
            Span::styled("○ Stopped", Theme::idle())
        };
        let rotate = if self.auto_rotate { "rotate on" } else { "rotate off" };

        let elapsed = self.duration_secs.saturating_sub(self.remaining_secs);
        let progress = if self.duration_secs == 0 {
            0.0
        } else {
            elapsed as f64 / self.duration_secs as f64
        };

        let line = Line::from(vec![
            state,
            Span::styled("  │  ", Theme::muted()),
            Span::styled(self.label.to_string(), Theme::accent()),
            Span::styled("  │  ", Theme::muted()),
            Span::styled(rotate, Theme::dim()),
            Span::styled("  │  ", Theme::muted()),
            Span::styled(ProgressBar::render(progress, 12), Theme::accent()),
            Span::styled(format!(" {}s", self.remaining_secs), Theme::countdown()),
        ]);
        buf.set_line(area.x + 1, area.y, &line, area.width.saturating_sub(2));
    }
}

/// Key hints shown at the bottom
pub struct HelpBar;

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let hints = [
            ("space", "start/stop"),
            ("n", "next artwork"),
            ("r", "toggle rotate"),
            ("q", "quit"),
        ];
        let mut spans = Vec::new();
        for (key, desc) in hints {
            spans.push(Span::styled(key, Theme::key()));
            spans.push(Span::styled(format!(" {desc}  "), Theme::key_desc()));
        }
        buf.set_line(area.x + 1, area.y, &Line::from(spans), area.width.saturating_sub(2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(ProgressBar::render(0.0, 4), "░░░░");
        assert_eq!(ProgressBar::render(1.0, 4), "████");
        assert_eq!(ProgressBar::render(2.5, 4), "████");
        assert_eq!(ProgressBar::render(0.5, 4), "██░░");
    }

    #[test]
    fn test_progress_bar_width() {
        for w in 0..20 {
            assert_eq!(ProgressBar::render(0.3, w).chars().count(), w);
        }
    }
}
