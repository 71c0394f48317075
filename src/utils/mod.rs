//! Shared text utilities.

mod sanitize;

pub use sanitize::{sanitize_and_truncate, shorten_for_display};
