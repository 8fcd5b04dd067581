//! Environment interactions: where keylist keeps its files.

pub mod paths;

pub use paths::{default_data_file, expand_tilde, get_data_dir};
