use crate::engine::config::TimingConfig;
use crate::engine::token::WordToken;

/// Nominal per-word interval at the given rate, in milliseconds.
pub fn base_delay_ms(wpm: u32) -> f64 {
    60_000.0 / wpm.max(1) as f64
}

/// Display duration for one word, in milliseconds.
///
/// A single multiplier is applied to the base delay; rules are checked
/// against the original token text in priority order and the first match
/// wins (never cumulative):
/// 1. ends with `.` `!` `?` → sentence pause
/// 2. ends with `,` `;` `:` → clause pause
/// 3. longer than the long-word threshold → decoding penalty
/// 4. otherwise unchanged
///
/// Every multiplier is >= 1.0, so the result never drops below the base
/// delay. Same inputs always produce the same output; the playback loop
/// relies on that for deterministic scheduling.
pub fn word_delay_ms(token: &WordToken, wpm: u32, config: &TimingConfig) -> u64 {
    let base = base_delay_ms(wpm);
    let multiplier = delay_multiplier(&token.original, config);
    (base * multiplier).round() as u64
}

fn delay_multiplier(word: &str, config: &TimingConfig) -> f64 {
    if ends_with_any(word, &['.', '!', '?']) {
        config.sentence_multiplier
    } else if ends_with_any(word, &[',', ';', ':']) {
        config.clause_multiplier
    } else if word.chars().count() > config.long_word_threshold {
        config.long_word_penalty
    } else {
        1.0
    }
}

fn ends_with_any(word: &str, terminators: &[char]) -> bool {
    word.chars().last().is_some_and(|c| terminators.contains(&c))
}
