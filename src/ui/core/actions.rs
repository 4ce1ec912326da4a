use crate::chat::{ImageOption, MessageAction, PromptOption, VideoOption};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Panel
    OpenPanel,
    ClosePanel,
    SelectOption(String),
    ImageSelected { id: String, option: ImageOption },
    VideoSelected { id: String, option: VideoOption },
    PromptSelected { id: String, option: PromptOption },
    CyclePanelMode,

    // Conversation
    SendMessage(String),
    MessageAction(MessageAction),
    ThinkingComplete { elapsed_secs: u64 },
    ScrollUp,
    ScrollDown,
    FilesAttached(Vec<PathBuf>),
    AttachmentRemoved(PathBuf),

    // Prompt suggestions
    ToggleSuggestions,
    CloseSuggestions,
    SuggestionSelected(String),

    // Navigation
    NavItemSelected(String),

    // UI operations
    ToggleTheme,
    ShowLogs(bool),
    HostTimer(u64),

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
