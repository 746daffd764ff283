pub mod config;
pub mod orp;
pub mod pacing;
pub mod session;
pub mod token;

pub use config::{DisplayConfig, TimingConfig};
pub use orp::orp_index;
pub use pacing::{base_delay_ms, word_delay_ms};
pub use session::{PlaybackSession, PlaybackStatus, TimerCmd};
pub use token::{tokenize, WordToken};
