pub mod render_state;

pub use render_state::{RenderState, WordSplit};

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError};

use log::info;

use crate::engine::{DisplayConfig, PlaybackSession, PlaybackStatus, TimerCmd, TimingConfig};
use crate::extract::{spawn_extraction, DocumentExtractor, ExtractError, TextExtractor};

/// User intentions, mapped from keys by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePlay,
    SeekBack,
    SeekForward,
    /// Jump to a fraction of the document (0.0..=1.0).
    SeekTo(f64),
    Reset,
    SpeedUp,
    SpeedDown,
    /// Retry loading the current document after an error.
    Reload,
    Quit,
}

/// Ties the playback session to the extraction worker and user commands.
///
/// Owns the one [`PlaybackSession`]; the UI reads state through
/// [`RenderState`] snapshots and never mutates the session directly.
pub struct App {
    session: PlaybackSession,
    display: DisplayConfig,
    pending: Option<Receiver<Result<String, ExtractError>>>,
    document_path: Option<PathBuf>,
    should_quit: bool,
}

impl App {
    pub fn new(timing: TimingConfig, display: DisplayConfig) -> Self {
        Self {
            session: PlaybackSession::new(timing),
            display,
            pending: None,
            document_path: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn render_state(&self) -> RenderState {
        RenderState::snapshot(&self.session, &self.display)
    }

    /// Starts loading a document with the default extractor.
    pub fn request_load(&mut self, path: &Path) -> TimerCmd {
        self.request_load_with(Box::new(DocumentExtractor), path)
    }

    /// Starts loading a document with a caller-supplied extractor.
    ///
    /// An unsupported file type fails before any worker is spawned. A load
    /// issued while another is in flight is ignored.
    pub fn request_load_with(
        &mut self,
        extractor: Box<dyn TextExtractor>,
        path: &Path,
    ) -> TimerCmd {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();
        let Some(cmd) = self.session.begin_load(&name) else {
            return TimerCmd::Keep;
        };
        self.document_path = Some(path.to_path_buf());
        if let Err(e) = crate::extract::mime_for_path(path) {
            return self.session.fail_load(&e.to_string());
        }
        info!("extracting text from {}", path.display());
        self.pending = Some(spawn_extraction(extractor, path.to_path_buf()));
        cmd
    }

    /// Checks for a finished extraction. Called once per event-loop pass;
    /// cheap when nothing is pending.
    pub fn poll_load(&mut self) -> TimerCmd {
        let Some(rx) = &self.pending else {
            return TimerCmd::Keep;
        };
        match rx.try_recv() {
            Ok(Ok(text)) => {
                self.pending = None;
                self.session.finish_load(&text)
            }
            Ok(Err(e)) => {
                self.pending = None;
                self.session.fail_load(&e.to_string())
            }
            Err(TryRecvError::Empty) => TimerCmd::Keep,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.session.fail_load("Text extraction was interrupted.")
            }
        }
    }

    /// The playback loop's wake-up, forwarded from the timer host.
    pub fn tick(&mut self) -> TimerCmd {
        self.session.tick()
    }

    pub fn handle_command(&mut self, command: Command) -> TimerCmd {
        match command {
            Command::TogglePlay => self.session.toggle_play(),
            Command::SeekBack => self.session.seek_relative(-(self.display.seek_step as i64)),
            Command::SeekForward => self.session.seek_relative(self.display.seek_step as i64),
            Command::SeekTo(fraction) => self.session.seek_fraction(fraction),
            Command::Reset => self.session.reset(),
            Command::SpeedUp => self.session.adjust_wpm(self.display.wpm_step as i32),
            Command::SpeedDown => self.session.adjust_wpm(-(self.display.wpm_step as i32)),
            Command::Reload => self.reload(),
            Command::Quit => {
                self.should_quit = true;
                TimerCmd::Cancel
            }
        }
    }

    fn reload(&mut self) -> TimerCmd {
        if self.session.status() != PlaybackStatus::Error {
            return TimerCmd::Keep;
        }
        match self.document_path.clone() {
            Some(path) => self.request_load(&path),
            None => TimerCmd::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PlaybackStatus;
    use std::time::Duration;

    struct CannedExtractor(&'static str);

    impl TextExtractor for CannedExtractor {
        fn extract_text(&self, _data: &[u8], _mime: &str) -> Result<String, ExtractError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn extract_text(&self, _data: &[u8], _mime: &str) -> Result<String, ExtractError> {
            Err(ExtractError::PdfParse("broken xref table".to_string()))
        }
    }

    fn new_app() -> App {
        App::new(TimingConfig::default(), DisplayConfig::default())
    }

    fn temp_doc(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn wait_for_load(app: &mut App) -> TimerCmd {
        for _ in 0..200 {
            let cmd = app.poll_load();
            if app.session().status() != PlaybackStatus::Loading {
                return cmd;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("load did not complete");
    }

    #[test]
    fn test_load_through_worker_reaches_ready() {
        let mut app = new_app();
        let path = temp_doc("velo_app_load.txt", "ignored on disk");
        app.request_load_with(Box::new(CannedExtractor("Hello, world! Go.")), &path);
        assert_eq!(app.session().status(), PlaybackStatus::Loading);

        wait_for_load(&mut app);
        assert_eq!(app.session().status(), PlaybackStatus::Ready);
        assert_eq!(app.session().total_words(), 3);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_unsupported_file_fails_without_spawning() {
        let mut app = new_app();
        let cmd = app.request_load(Path::new("picture.png"));
        assert_eq!(cmd, TimerCmd::Cancel);
        assert_eq!(app.session().status(), PlaybackStatus::Error);
        assert!(app.session().last_error().unwrap().contains("picture.png"));
    }

    #[test]
    fn test_extraction_failure_surfaces_message() {
        let mut app = new_app();
        let path = temp_doc("velo_app_fail.txt", "anything");
        app.request_load_with(Box::new(FailingExtractor), &path);
        wait_for_load(&mut app);
        assert_eq!(app.session().status(), PlaybackStatus::Error);
        assert!(app.session().last_error().unwrap().contains("broken xref"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_whitespace_only_document_is_an_error() {
        let mut app = new_app();
        let path = temp_doc("velo_app_empty.txt", "has bytes");
        app.request_load_with(Box::new(CannedExtractor("  \n\t  ")), &path);
        wait_for_load(&mut app);
        assert_eq!(app.session().status(), PlaybackStatus::Error);
        assert_eq!(
            app.session().last_error(),
            Some("No readable text found in this document.")
        );
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_reload_retries_after_error() {
        let mut app = new_app();
        let path = temp_doc("velo_app_retry.txt", "some recovered words");
        app.request_load_with(Box::new(FailingExtractor), &path);
        wait_for_load(&mut app);
        assert_eq!(app.session().status(), PlaybackStatus::Error);

        // Retry uses the default extractor, which reads the file verbatim.
        app.handle_command(Command::Reload);
        assert_eq!(app.session().status(), PlaybackStatus::Loading);
        wait_for_load(&mut app);
        assert_eq!(app.session().status(), PlaybackStatus::Ready);
        assert_eq!(app.session().total_words(), 3);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_reload_is_a_no_op_outside_error() {
        let mut app = new_app();
        assert_eq!(app.handle_command(Command::Reload), TimerCmd::Keep);
        assert_eq!(app.session().status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_commands_drive_the_session() {
        let mut app = new_app();
        let path = temp_doc("velo_app_cmds.txt", "ignored");
        let words = (0..100).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        app.request_load_with(
            Box::new(CannedExtractor(Box::leak(words.into_boxed_str()))),
            &path,
        );
        wait_for_load(&mut app);

        assert_eq!(app.handle_command(Command::TogglePlay), TimerCmd::Arm);
        assert_eq!(app.session().status(), PlaybackStatus::Playing);

        app.handle_command(Command::SeekForward);
        assert_eq!(app.session().position(), 20);
        app.handle_command(Command::SeekBack);
        assert_eq!(app.session().position(), 0);
        app.handle_command(Command::SeekTo(0.5));
        assert_eq!(app.session().position(), 50);

        app.handle_command(Command::SpeedUp);
        assert_eq!(app.session().wpm(), 360);
        app.handle_command(Command::SpeedDown);
        assert_eq!(app.session().wpm(), 350);

        assert_eq!(app.handle_command(Command::Reset), TimerCmd::Cancel);
        assert_eq!(app.session().position(), 0);
        assert_eq!(app.session().status(), PlaybackStatus::Paused);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_quit_cancels_any_pending_timer() {
        let mut app = new_app();
        assert_eq!(app.handle_command(Command::Quit), TimerCmd::Cancel);
        assert!(app.should_quit());
    }
}
