//! velo — terminal RSVP reader.
//!
//! Flashes a document one word at a time at a user-controlled rate, with the
//! optimal recognition point of each word highlighted and pinned in place.
//! The engine (tokenizer, pacing model, playback state machine) is pure and
//! UI-free; the terminal layer hosts the advancement timer.

pub mod app;
pub mod engine;
pub mod extract;
pub mod ui;
