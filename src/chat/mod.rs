//! Chat domain types: messages, message actions, attachments, panel options
//! and the in-memory message store.

pub mod attachment;
pub mod message;
pub mod options;
pub mod store;

pub use attachment::{Attachment, AttachmentKind};
pub use message::{ChatMessage, MessageAction, MessageActionType, Role};
pub use options::{ImageOption, PanelContent, PanelMode, PanelOption, PromptOption, PromptSuggestion, VideoOption};
pub use store::MessageStore;
