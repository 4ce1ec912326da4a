//! Core UI building blocks.
//!
//! - [`actions`] - the single [`Action`] enum every component emits
//! - [`component`] - the [`Component`] trait shared by all widgets
//! - [`event_handler`] - crossterm input polling on the tokio runtime
//! - [`scroll_lock`] - the lock the artifact panel holds over the message list
//!
//! Components never call each other. They return actions and the container
//! routes them.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod scroll_lock;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use scroll_lock::{ScrollLease, ScrollLock};
