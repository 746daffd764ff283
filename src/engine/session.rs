use log::{debug, warn};

use crate::engine::config::TimingConfig;
use crate::engine::pacing::word_delay_ms;
use crate::engine::token::{tokenize, WordToken};

/// Lifecycle of a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Loading,
    Ready,
    Playing,
    Paused,
    Error,
}

/// What the timer host must do with the single outstanding deadline after a
/// session mutation.
///
/// The event loop owns at most one pending wake-up. Applying the returned
/// command immediately after each call is what keeps ticks from firing
/// against stale position, speed, or status: there is never a moment where
/// an old deadline survives a mutation that invalidated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCmd {
    /// Schedule a fresh wake-up `current_delay_ms()` from now, replacing any
    /// pending one.
    Arm,
    /// Drop any pending wake-up.
    Cancel,
    /// Leave the pending wake-up (or its absence) untouched.
    Keep,
}

/// Mutable playback state for one loaded document.
///
/// Single-writer: exactly one owner mutates this, the presentation side only
/// reads snapshots. All methods are synchronous; waiting happens in the host
/// loop, driven by the returned [`TimerCmd`]s.
pub struct PlaybackSession {
    words: Vec<WordToken>,
    position: usize,
    wpm: u32,
    status: PlaybackStatus,
    last_error: Option<String>,
    document_name: Option<String>,
    timing: TimingConfig,
}

impl PlaybackSession {
    pub fn new(timing: TimingConfig) -> Self {
        let wpm = timing.default_wpm;
        Self {
            words: Vec::new(),
            position: 0,
            wpm,
            status: PlaybackStatus::Idle,
            last_error: None,
            document_name: None,
            timing,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn words(&self) -> &[WordToken] {
        &self.words
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn document_name(&self) -> Option<&str> {
        self.document_name.as_deref()
    }

    pub fn current_token(&self) -> Option<&WordToken> {
        self.words.get(self.position)
    }

    /// How long the current word stays on screen, in milliseconds.
    pub fn current_delay_ms(&self) -> Option<u64> {
        self.current_token()
            .map(|t| word_delay_ms(t, self.wpm, &self.timing))
    }

    pub fn progress_percent(&self) -> f64 {
        if self.words.is_empty() {
            0.0
        } else {
            100.0 * self.position as f64 / self.words.len() as f64
        }
    }

    /// Rough seconds left at the nominal rate, ignoring punctuation pauses.
    pub fn estimated_seconds_remaining(&self) -> u64 {
        let remaining = self.words.len().saturating_sub(self.position) as f64;
        (remaining * 60.0 / self.wpm.max(1) as f64).round() as u64
    }

    /// Begins loading a new document, replacing whatever was loaded before.
    ///
    /// Returns `None` while another load is in flight; a second concurrent
    /// load is ignored rather than racing the first.
    pub fn begin_load(&mut self, name: &str) -> Option<TimerCmd> {
        if self.status == PlaybackStatus::Loading {
            warn!("ignoring load of {:?}: a load is already in flight", name);
            return None;
        }
        debug!("loading {:?}", name);
        self.words.clear();
        self.position = 0;
        self.last_error = None;
        self.document_name = Some(name.to_string());
        self.status = PlaybackStatus::Loading;
        Some(TimerCmd::Cancel)
    }

    /// Completes an in-flight load with the extracted text.
    pub fn finish_load(&mut self, text: &str) -> TimerCmd {
        if self.status != PlaybackStatus::Loading {
            return TimerCmd::Keep;
        }
        let words = tokenize(text);
        if words.is_empty() {
            return self.fail_load("No readable text found in this document.");
        }
        debug!(
            "loaded {:?}: {} words",
            self.document_name.as_deref().unwrap_or(""),
            words.len()
        );
        self.words = words;
        self.position = 0;
        self.status = PlaybackStatus::Ready;
        TimerCmd::Cancel
    }

    /// Completes an in-flight load with a user-facing failure message.
    pub fn fail_load(&mut self, message: &str) -> TimerCmd {
        if self.status != PlaybackStatus::Loading {
            return TimerCmd::Keep;
        }
        warn!(
            "load of {:?} failed: {}",
            self.document_name.as_deref().unwrap_or(""),
            message
        );
        self.last_error = Some(message.to_string());
        self.status = PlaybackStatus::Error;
        TimerCmd::Cancel
    }

    /// Starts playback. Only meaningful from `Ready` or `Paused`.
    pub fn play(&mut self) -> TimerCmd {
        match self.status {
            PlaybackStatus::Ready | PlaybackStatus::Paused => {
                self.status = PlaybackStatus::Playing;
                TimerCmd::Arm
            }
            _ => TimerCmd::Keep,
        }
    }

    /// Stops playback. Only meaningful from `Playing`.
    pub fn pause(&mut self) -> TimerCmd {
        match self.status {
            PlaybackStatus::Playing => {
                self.status = PlaybackStatus::Paused;
                TimerCmd::Cancel
            }
            _ => TimerCmd::Keep,
        }
    }

    pub fn toggle_play(&mut self) -> TimerCmd {
        match self.status {
            PlaybackStatus::Playing => self.pause(),
            _ => self.play(),
        }
    }

    /// One wake-up of the playback loop.
    ///
    /// On the last word the session parks itself in `Paused` instead of
    /// stepping out of range; reaching the end is not an error.
    pub fn tick(&mut self) -> TimerCmd {
        if self.status != PlaybackStatus::Playing {
            return TimerCmd::Keep;
        }
        if self.position + 1 >= self.words.len() {
            debug!("end of document at word {}", self.position);
            self.status = PlaybackStatus::Paused;
            TimerCmd::Cancel
        } else {
            self.position += 1;
            TimerCmd::Arm
        }
    }

    /// Jumps to an absolute word index, clamped into range.
    ///
    /// Status is untouched; a seek while playing re-arms the timer against
    /// the new position so the old word's wait cannot advance past it.
    pub fn seek(&mut self, index: i64) -> TimerCmd {
        if self.words.is_empty() || !self.is_seekable() {
            return TimerCmd::Keep;
        }
        let max = (self.words.len() - 1) as i64;
        self.position = index.clamp(0, max) as usize;
        if self.status == PlaybackStatus::Playing {
            TimerCmd::Arm
        } else {
            TimerCmd::Keep
        }
    }

    pub fn seek_relative(&mut self, delta: i64) -> TimerCmd {
        self.seek(self.position as i64 + delta)
    }

    /// Jumps to a fraction of the document (0.0 = start, 1.0 = last word).
    pub fn seek_fraction(&mut self, fraction: f64) -> TimerCmd {
        if self.words.is_empty() {
            return TimerCmd::Keep;
        }
        let index = (self.words.len() as f64 * fraction.clamp(0.0, 1.0)).floor() as i64;
        self.seek(index)
    }

    /// Back to the first word, paused.
    pub fn reset(&mut self) -> TimerCmd {
        if self.status == PlaybackStatus::Loading {
            return TimerCmd::Keep;
        }
        self.position = 0;
        self.status = PlaybackStatus::Paused;
        TimerCmd::Cancel
    }

    /// Changes the rate, clamped to the configured range.
    ///
    /// Takes effect when the next wake-up is scheduled; an in-flight wait is
    /// deliberately left running at the old rate.
    pub fn set_wpm(&mut self, wpm: u32) -> TimerCmd {
        self.wpm = wpm.clamp(*self.timing.wpm_range.start(), *self.timing.wpm_range.end());
        TimerCmd::Keep
    }

    pub fn adjust_wpm(&mut self, delta: i32) -> TimerCmd {
        let target = (self.wpm as i64 + delta as i64).max(0) as u32;
        self.set_wpm(target)
    }

    fn is_seekable(&self) -> bool {
        matches!(
            self.status,
            PlaybackStatus::Ready | PlaybackStatus::Playing | PlaybackStatus::Paused
        )
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(TimingConfig::default())
    }
}
