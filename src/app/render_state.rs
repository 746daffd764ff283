use crate::engine::config::DisplayConfig;
use crate::engine::session::{PlaybackSession, PlaybackStatus};
use crate::engine::token::WordToken;

/// The current word split around its focus character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSplit {
    pub before: String,
    pub focus: String,
    pub after: String,
}

impl WordSplit {
    /// Splits at the token's ORP index on char boundaries.
    pub fn of(token: &WordToken) -> Self {
        let chars: Vec<char> = token.original.chars().collect();
        let orp = token.orp_index.min(chars.len().saturating_sub(1));
        Self {
            before: chars[..orp].iter().collect(),
            focus: chars.get(orp).map(|c| c.to_string()).unwrap_or_default(),
            after: chars.get(orp + 1..).unwrap_or(&[]).iter().collect(),
        }
    }
}

/// Immutable snapshot of everything the UI draws in one frame.
pub struct RenderState {
    pub status: PlaybackStatus,
    pub word: Option<WordSplit>,
    pub context_left: Vec<String>,
    pub context_right: Vec<String>,
    pub position: usize,
    pub total_words: usize,
    pub progress_percent: f64,
    pub wpm: u32,
    pub seconds_remaining: u64,
    pub document_name: Option<String>,
    pub error: Option<String>,
}

impl RenderState {
    pub fn snapshot(session: &PlaybackSession, display: &DisplayConfig) -> Self {
        let words = session.words();
        let position = session.position();

        let start = position.saturating_sub(display.context_before);
        let context_left = words[start..position]
            .iter()
            .map(|t| t.original.clone())
            .collect();

        let end = (position + 1 + display.context_after).min(words.len());
        let context_right = if position + 1 < words.len() {
            words[position + 1..end]
                .iter()
                .map(|t| t.original.clone())
                .collect()
        } else {
            Vec::new()
        };

        Self {
            status: session.status(),
            word: session.current_token().map(WordSplit::of),
            context_left,
            context_right,
            position,
            total_words: words.len(),
            progress_percent: session.progress_percent(),
            wpm: session.wpm(),
            seconds_remaining: session.estimated_seconds_remaining(),
            document_name: session.document_name().map(str::to_string),
            error: session.last_error().map(str::to_string),
        }
    }
}
