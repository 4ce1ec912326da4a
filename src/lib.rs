//! chatpane - terminal chat interface components
//!
//! This library provides the building blocks of a chat UI for the terminal:
//! a message list, an input box, a thinking indicator, message actions, a
//! navigation rail and a slide-in artifact panel offering images, videos,
//! text or prompts for selection. Everything renders with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`animation`] - Timer scheduler and the panel, typewriter, ticker and selection state machines
//! * [`chat`] - Messages, panel options and the in-memory message store
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components and the event loop
//! * [`utils`] - Time and text helpers

/// Timer scheduler and animation state machines
pub mod animation;

/// Chat domain model
pub mod chat;

/// Best-effort clipboard writes
pub mod clipboard;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Demo host used by the `chatpane` binary
pub mod demo;

/// Error types
pub mod error;

/// Logging setup
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for time and text handling
pub mod utils;

pub use error::{ChatError, ChatResult};
