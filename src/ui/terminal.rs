use crate::app::{App, Command};
use crate::engine::{PlaybackStatus, TimerCmd};
use crate::ui::view::{
    render_context_left, render_context_right, render_error_screen, render_help_line,
    render_idle_screen, render_loading_screen, render_progress_bar, render_status_line,
    render_word_display,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Once;
use std::time::{Duration, Instant};

static PANIC_HOOK_SET: Once = Once::new();

/// Interval between redraws while no word change is due.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        set_panic_hook();

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager { terminal })
    }

    /// Drives playback and input until the user quits.
    ///
    /// At most one word-advance deadline exists at any moment. Every session
    /// mutation returns a [`TimerCmd`] that is applied to that deadline
    /// before anything else happens, so a wake-up can never fire against
    /// state the user has already changed.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let mut deadline: Option<Instant> = None;

        loop {
            if app.should_quit() {
                return Ok(());
            }

            self.render_frame(app)?;

            let timeout = deadline
                .map(|d| d.saturating_duration_since(Instant::now()))
                .unwrap_or(FRAME_INTERVAL)
                .min(FRAME_INTERVAL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(command) = map_key(key.code) {
                            let cmd = app.handle_command(command);
                            apply_timer_cmd(&mut deadline, cmd, app);
                        }
                    }
                }
            }

            // Extraction completion is the one externally triggered
            // transition besides input.
            let cmd = app.poll_load();
            apply_timer_cmd(&mut deadline, cmd, app);

            if deadline.is_some_and(|d| Instant::now() >= d) {
                deadline = None;
                let cmd = app.tick();
                apply_timer_cmd(&mut deadline, cmd, app);
            }
        }
    }

    fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // status
                    Constraint::Min(3),    // reading area
                    Constraint::Length(1), // progress
                    Constraint::Length(1), // help
                ])
                .split(area);

            match state.status {
                PlaybackStatus::Idle => {
                    frame.render_widget(render_idle_screen(), rows[1]);
                }
                PlaybackStatus::Loading => {
                    let name = state.document_name.as_deref().unwrap_or("document");
                    frame.render_widget(render_loading_screen(name), rows[1]);
                }
                PlaybackStatus::Error => {
                    let message = state.error.as_deref().unwrap_or("Something went wrong.");
                    frame.render_widget(render_error_screen(message), rows[1]);
                }
                PlaybackStatus::Ready | PlaybackStatus::Playing | PlaybackStatus::Paused => {
                    let columns = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([
                            Constraint::Percentage(35),
                            Constraint::Length(30),
                            Constraint::Percentage(35),
                        ])
                        .split(rows[1]);

                    frame.render_widget(render_context_left(&state.context_left), columns[0]);
                    if let Some(split) = &state.word {
                        frame.render_widget(render_word_display(split), columns[1]);
                    }
                    frame.render_widget(render_context_right(&state.context_right), columns[2]);

                    frame.render_widget(render_status_line(&state), rows[0]);
                    let bar_width = (area.width as usize).saturating_sub(4).max(10);
                    frame.render_widget(
                        render_progress_bar(state.progress_percent, bar_width),
                        rows[2],
                    );
                }
            }

            frame.render_widget(render_help_line(), rows[3]);
        })?;

        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn apply_timer_cmd(deadline: &mut Option<Instant>, cmd: TimerCmd, app: &App) {
    match cmd {
        TimerCmd::Arm => {
            *deadline = app
                .session()
                .current_delay_ms()
                .map(|ms| Instant::now() + Duration::from_millis(ms));
        }
        TimerCmd::Cancel => *deadline = None,
        TimerCmd::Keep => {}
    }
}

fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char(' ') => Some(Command::TogglePlay),
        KeyCode::Left => Some(Command::SeekBack),
        KeyCode::Right => Some(Command::SeekForward),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::SpeedUp),
        KeyCode::Char('-') => Some(Command::SpeedDown),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('l') => Some(Command::Reload),
        KeyCode::Char(c @ '0'..='9') => {
            let digit = c.to_digit(10).unwrap_or(0) as f64;
            Some(Command::SeekTo(digit / 10.0))
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            default_hook(panic_info);
        }));
    });
}
