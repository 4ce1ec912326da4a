//! Terminal user interface: components, the chat container and the event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;
pub mod theme;

pub use app_component::{ChatHost, ChatInterface};
pub use renderer::run_app;
pub use theme::{Theme, ThemeMode};
