//! Application layer: keys, input modes and the transition handler.
//!
//! # Architecture
//!
//! ```text
//! Gesture → keyboard::resolve → Key → Event → handle_event → Transition
//!                                                               ↓
//!                              AppState::dispatch ← store.replace + next state
//! ```
//!
//! # Modules
//!
//! - [`keys`]: key variants and the text buffer rule
//! - [`keyboard`]: fixed layout and gesture resolution
//! - [`modes`]: search state and derived input mode
//! - [`services`]: confirmation and id generation collaborators
//! - [`handler`]: the input state machine
//! - [`transition`]: handler output
//! - [`state`]: session container applying transitions to a store

pub mod handler;
pub mod keyboard;
pub mod keys;
pub mod modes;
pub mod services;
pub mod state;
pub mod transition;

pub use handler::{handle_event, handle_key, Event};
pub use keys::{apply_key_to_buffer, ControlKey, Key};
pub use modes::{Mode, SearchState};
pub use services::{Confirm, IdGenerator, Services};
pub use state::AppState;
pub use transition::Transition;
