use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{RenderState, WordSplit};
use crate::ui::theme::colors;

/// Column the focus character is pinned to, measured from the left edge of
/// the word widget. Keeps the fixation point still as words change.
const FOCUS_COLUMN: usize = 14;

pub fn render_word_display(split: &WordSplit) -> Paragraph<'static> {
    let pad = FOCUS_COLUMN.saturating_sub(split.before.width());

    let text_style = Style::default()
        .fg(colors::text())
        .add_modifier(Modifier::BOLD);
    let focus_style = Style::default()
        .fg(colors::focus())
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(split.before.clone(), text_style),
        Span::styled(split.focus.clone(), focus_style),
        Span::styled(split.after.clone(), text_style),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors::background()))
}

pub fn render_context_left(context: &[String]) -> Paragraph<'static> {
    Paragraph::new(context.join(" ")).alignment(Alignment::Right).style(
        Style::default()
            .fg(colors::dimmed())
            .bg(colors::background()),
    )
}

pub fn render_context_right(context: &[String]) -> Paragraph<'static> {
    Paragraph::new(context.join(" ")).alignment(Alignment::Left).style(
        Style::default()
            .fg(colors::dimmed())
            .bg(colors::background()),
    )
}

pub fn render_progress_bar(percent: f64, width: usize) -> Line<'static> {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut spans = Vec::with_capacity(width);
    for _ in 0..filled {
        spans.push(Span::styled("━", Style::default().fg(colors::focus())));
    }
    for _ in 0..width.saturating_sub(filled) {
        spans.push(Span::styled("─", Style::default().fg(colors::dimmed())));
    }
    Line::from(spans).alignment(Alignment::Center)
}

pub fn render_status_line(state: &RenderState) -> Line<'static> {
    let eta = format_eta(state.seconds_remaining);
    let text = format!(
        " {}  {} WPM  {}/{} words  {:.0}%  ~{} left",
        state.document_name.as_deref().unwrap_or(""),
        state.wpm,
        state.position,
        state.total_words,
        state.progress_percent,
        eta,
    );
    Line::from(Span::styled(
        text,
        Style::default().fg(colors::dimmed()).bg(colors::background()),
    ))
}

pub fn render_help_line() -> Line<'static> {
    Line::from(Span::styled(
        " space play/pause  ←/→ ±20 words  +/- speed  0-9 seek  r restart  q quit",
        Style::default().fg(colors::dimmed()).bg(colors::background()),
    ))
    .alignment(Alignment::Center)
}

pub fn render_idle_screen() -> Paragraph<'static> {
    let text = "No document loaded.\n\nStart with: velo <file.pdf|file.txt>";
    Paragraph::new(text).alignment(Alignment::Center).style(
        Style::default()
            .fg(colors::dimmed())
            .bg(colors::background()),
    )
}

pub fn render_loading_screen(name: &str) -> Paragraph<'static> {
    let text = format!("Extracting text from {}…", name);
    Paragraph::new(text).alignment(Alignment::Center).style(
        Style::default().fg(colors::text()).bg(colors::background()),
    )
}

pub fn render_error_screen(message: &str) -> Paragraph<'static> {
    let text = format!("{}\n\nPress l to retry, q to quit.", message);
    Paragraph::new(text).alignment(Alignment::Center).style(
        Style::default()
            .fg(colors::error())
            .bg(colors::background()),
    )
}

fn format_eta(seconds: u64) -> String {
    if seconds >= 60 {
        format!("{}m{:02}s", seconds / 60, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_word_display_creates_paragraph() {
        let split = WordSplit {
            before: "He".to_string(),
            focus: "l".to_string(),
            after: "lo,".to_string(),
        };
        let _ = render_word_display(&split);
    }

    #[test]
    fn test_render_progress_bar_bounds() {
        let _ = render_progress_bar(0.0, 40);
        let _ = render_progress_bar(50.0, 40);
        let _ = render_progress_bar(100.0, 40);
        // Out-of-range input must not panic.
        let _ = render_progress_bar(150.0, 40);
    }

    #[test]
    fn test_render_context_empty() {
        let _ = render_context_left(&[]);
        let _ = render_context_right(&[]);
    }

    #[test]
    fn test_format_eta() {
        assert_eq!(format_eta(45), "45s");
        assert_eq!(format_eta(60), "1m00s");
        assert_eq!(format_eta(125), "2m05s");
    }
}
