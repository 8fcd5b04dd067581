//! Read side: view projection, view model types and a plain-text renderer.
//!
//! ```text
//! SearchState + items → project → ViewModel → render → text
//! ```
//!
//! # Modules
//!
//! - [`projection`]: filtering, ordering and highlight resolution
//! - [`viewmodel`]: view model types
//! - [`renderer`]: plain-text output used by the command-line driver

pub mod projection;
pub mod renderer;
pub mod viewmodel;

pub use projection::{filter_and_sort, highlighted_candidate, project};
pub use renderer::render;
pub use viewmodel::{DisplayItem, StatusLine, ViewModel};
