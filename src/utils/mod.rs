//! Utility modules for chatpane.
//!
//! Small pure helpers shared by the components and available to hosts.
//!
//! # Available Utilities
//!
//! - [`time`] - Timestamp formatting, "old message" detection and relative times
//! - [`text`] - Markdown stripping, truncation and word counting

pub mod text;
pub mod time;

pub use text::{count_words, strip_markdown, truncate_text};
pub use time::{format_time, is_old_message, relative_time};
