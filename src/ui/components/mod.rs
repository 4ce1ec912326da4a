//! Reusable UI components

pub mod common;

// Component architecture
pub mod artifact_panel;
pub mod chat_input;
pub mod message_actions;
pub mod message_list;
pub mod prompt_suggestions;
pub mod sidebar_nav;
pub mod thinking_indicator;

// Component exports
pub use artifact_panel::ArtifactPanel;
pub use chat_input::ChatInput;
pub use message_actions::MessageActions;
pub use message_list::MessageList;
pub use prompt_suggestions::PromptSuggestions;
pub use sidebar_nav::{NavItem, SidebarNav};
pub use thinking_indicator::ThinkingIndicator;
