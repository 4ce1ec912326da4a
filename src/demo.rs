//! Demo host driving the chat interface with canned content.
//!
//! Sending a message shows the thinking indicator for two seconds and then
//! appends a canned assistant reply. `Ctrl+O` cycles the artifact panel
//! through its modes with sample options. A picked prompt suggestion lands in
//! the input, and toggling the theme is written back to the config file when
//! one is set.

use crate::animation::TimerId;
use crate::chat::{ChatMessage, ImageOption, MessageActionType, PanelContent, PanelMode, PromptOption, VideoOption};
use crate::config::Config;
use crate::ui::core::Action;
use crate::ui::{ChatHost, ChatInterface};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Host timer tag for the pending canned reply
const REPLY_TIMER: u64 = 1;
const REPLY_DELAY: Duration = Duration::from_millis(2000);

const WELCOME: &str = "Hello! Ask me anything, or press Ctrl+O to browse generated artifacts.";
const CANNED_REPLY: &str = "Here is a **draft** based on your request. \
Open the artifact panel with `Ctrl+O` to compare the variations and pick the one you like best.";
const SAMPLE_TEXT: &str = "A quiet harbor at dawn. Fishing boats rest on glassy water while gulls circle \
the masts, and the first light paints the lighthouse in soft amber.";

#[derive(Debug, Default)]
pub struct DemoHost {
    panel_mode: PanelMode,
    replies_sent: usize,
    /// Timer of the reply currently being "generated"
    pending_reply: Option<TimerId>,
    /// Config file that receives theme changes
    theme_file: Option<PathBuf>,
}

impl DemoHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist theme toggles as `ui.theme` in `path`
    #[must_use]
    pub fn with_theme_file(mut self, path: PathBuf) -> Self {
        self.theme_file = Some(path);
        self
    }

    pub fn replies_sent(&self) -> usize {
        self.replies_sent
    }

    pub fn is_replying(&self) -> bool {
        self.pending_reply.is_some()
    }

    /// Start a canned reply unless one is already on its way
    fn start_reply(&mut self, chat: &mut ChatInterface) {
        if self.pending_reply.is_some() {
            log::debug!("Demo: reply already pending");
            return;
        }
        chat.set_loading(true);
        self.pending_reply = Some(chat.schedule_host_timer(REPLY_DELAY, REPLY_TIMER));
    }

    pub fn welcome_message() -> ChatMessage {
        ChatMessage::assistant(WELCOME)
    }

    /// Sample content for `mode`
    pub fn sample_content(mode: PanelMode) -> PanelContent {
        let mut content = PanelContent {
            mode,
            ..PanelContent::default()
        };
        match mode {
            PanelMode::Images => {
                content.images = [("harbor", "Harbor at dawn"), ("forest", "Misty forest"), ("city", "Neon city")]
                    .into_iter()
                    .map(|(id, title)| ImageOption {
                        id: id.to_string(),
                        image_url: format!("https://example.com/{id}.png"),
                        title: title.to_string(),
                        description: Some(format!("Generated variation: {}", title.to_lowercase())),
                    })
                    .collect();
            }
            PanelMode::Videos => {
                content.videos = [("pan", "Slow pan", "0:12"), ("timelapse", "Timelapse", "0:30")]
                    .into_iter()
                    .map(|(id, title, duration)| VideoOption {
                        id: id.to_string(),
                        video_url: format!("https://example.com/{id}.mp4"),
                        thumbnail_url: format!("https://example.com/{id}.jpg"),
                        title: title.to_string(),
                        description: None,
                        duration: Some(duration.to_string()),
                    })
                    .collect();
            }
            PanelMode::Text => content.text = SAMPLE_TEXT.to_string(),
            PanelMode::Prompts => {
                content.prompts = [
                    "Make the lighting warmer and more golden",
                    "Add a lone sailboat on the horizon",
                    "Render it as a watercolor painting",
                ]
                .into_iter()
                .enumerate()
                .map(|(index, text)| PromptOption {
                    id: format!("prompt-{}", index + 1),
                    text: text.to_string(),
                })
                .collect();
            }
            PanelMode::Empty => {}
        }
        content
    }
}

impl ChatHost for DemoHost {
    fn handle_action(&mut self, action: Action, chat: &mut ChatInterface) -> anyhow::Result<()> {
        match action {
            Action::SendMessage(text) => {
                chat.push_message(ChatMessage::user(text));
                self.start_reply(chat);
            }
            Action::HostTimer(REPLY_TIMER) => {
                self.pending_reply = None;
                let elapsed = chat.thinking().elapsed_secs();
                chat.set_loading(false);
                chat.push_message(ChatMessage::assistant(CANNED_REPLY).with_thought_time(elapsed));
                self.replies_sent += 1;
            }
            Action::ThinkingComplete { elapsed_secs } => {
                log::info!("Demo: thinking finished after {}s", elapsed_secs);
            }
            Action::CyclePanelMode => {
                self.panel_mode = self.panel_mode.next();
                chat.set_panel_content(Self::sample_content(self.panel_mode));
                chat.set_panel_open(true);
            }
            Action::ImageSelected { option, .. } => {
                chat.push_message(ChatMessage::system(format!("Selected image: {}", option.title)));
            }
            Action::VideoSelected { option, .. } => {
                chat.push_message(ChatMessage::system(format!("Selected video: {}", option.title)));
            }
            Action::PromptSelected { option, .. } => {
                chat.push_message(ChatMessage::system(format!("Selected prompt: {}", option.text)));
            }
            Action::MessageAction(message_action) => {
                if message_action.kind == MessageActionType::Regenerate {
                    self.start_reply(chat);
                } else {
                    chat.push_message(ChatMessage::system(message_action.kind.label()));
                }
            }
            Action::FilesAttached(paths) => {
                let names: Vec<String> = paths.iter().map(|p| display_name(p)).collect();
                chat.push_message(ChatMessage::system(format!("Attached: {}", names.join(", "))));
            }
            Action::AttachmentRemoved(path) => {
                log::info!("Demo: removed attachment {}", path.display());
            }
            Action::SuggestionSelected(prompt) => {
                chat.set_input_value(&prompt);
                chat.set_suggestions_open(false);
            }
            Action::ToggleTheme => {
                if let Some(path) = &self.theme_file {
                    if let Err(e) = Config::save_theme(path, chat.theme_mode()) {
                        log::error!("Demo: could not save theme: {:#}", e);
                    }
                }
            }
            Action::NavItemSelected(id) => {
                if id == "new" {
                    chat.update_store(|store| store.clear());
                    chat.push_message(Self::welcome_message());
                }
                log::info!("Demo: navigated to {}", id);
            }
            other => log::debug!("Demo: ignoring {:?}", other),
        }
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
