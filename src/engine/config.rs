// Tunables for pacing and display. Defaults are the documented values;
// nothing here is read from disk.

use std::ops::RangeInclusive;

/// Pacing constants for the per-word delay calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Starting words-per-minute rate.
    pub default_wpm: u32,

    /// Allowed WPM range; speed changes clamp into it.
    pub wpm_range: RangeInclusive<u32>,

    /// Multiplier for words ending a sentence (`.` `!` `?`).
    pub sentence_multiplier: f64,

    /// Multiplier for words ending a clause (`,` `;` `:`).
    pub clause_multiplier: f64,

    /// Char count above which the long-word penalty applies.
    pub long_word_threshold: usize,

    /// Multiplier for words longer than the threshold.
    pub long_word_penalty: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            default_wpm: 350,
            wpm_range: 100..=1200,
            sentence_multiplier: 2.5,
            clause_multiplier: 1.8,
            long_word_threshold: 8,
            long_word_penalty: 1.2,
        }
    }
}

/// Layout constants for the reading view.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Context tokens shown before the current word.
    pub context_before: usize,

    /// Context tokens shown after the current word.
    pub context_after: usize,

    /// Words jumped by a relative seek (arrow keys).
    pub seek_step: usize,

    /// WPM added or removed per speed keypress.
    pub wpm_step: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            context_before: 20,
            context_after: 50,
            seek_step: 20,
            wpm_step: 10,
        }
    }
}
