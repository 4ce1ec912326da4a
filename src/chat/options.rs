//! Options presented by the artifact panel

use serde::{Deserialize, Serialize};

/// Anything the panel can offer for selection
pub trait PanelOption {
    fn id(&self) -> &str;

    /// Short label used for the option card
    fn title(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOption {
    pub id: String,
    pub image_url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoOption {
    pub id: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Display duration such as "0:30"
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptOption {
    pub id: String,
    pub text: String,
}

impl PanelOption for ImageOption {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl PanelOption for VideoOption {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl PanelOption for PromptOption {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.text
    }
}

/// A rewritten prompt offered by the suggestions sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSuggestion {
    pub id: String,
    pub title: String,
    /// Opening words shown under the title
    pub preview: String,
    /// Text placed in the input when picked
    pub full: String,
}

impl PromptSuggestion {
    pub fn new(id: impl Into<String>, title: &str, preview: &str, full: &str) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            preview: preview.to_string(),
            full: full.to_string(),
        }
    }

    /// The four built-in refinements
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "1",
                "More Specific",
                "Create a professional video ad...",
                "Create a professional video advertisement for a tech startup, focusing on innovation and user experience, with modern transitions and upbeat background music",
            ),
            Self::new(
                "2",
                "Add Context",
                "Generate a video showcasing...",
                "Generate a video showcasing our product's key features with clear explanations, customer testimonials, and a strong call-to-action at the end",
            ),
            Self::new(
                "3",
                "More Creative",
                "Design an engaging video...",
                "Design an engaging video that tells a story about how our product solves real problems, using dynamic visuals, emotional music, and relatable scenarios",
            ),
            Self::new(
                "4",
                "Simpler Version",
                "Make a short video ad...",
                "Make a short video ad highlighting our main product benefit in 30 seconds with bold text overlays and energetic music",
            ),
        ]
    }
}

impl PanelOption for PromptSuggestion {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// What the panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    #[default]
    Empty,
    Images,
    Videos,
    Text,
    Prompts,
}

impl PanelMode {
    /// Next mode in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            PanelMode::Empty => PanelMode::Images,
            PanelMode::Images => PanelMode::Videos,
            PanelMode::Videos => PanelMode::Text,
            PanelMode::Text => PanelMode::Prompts,
            PanelMode::Prompts => PanelMode::Empty,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelMode::Empty => "empty",
            PanelMode::Images => "images",
            PanelMode::Videos => "videos",
            PanelMode::Text => "text",
            PanelMode::Prompts => "prompts",
        }
    }
}

/// Everything the host supplies to the panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelContent {
    pub mode: PanelMode,
    pub images: Vec<ImageOption>,
    pub videos: Vec<VideoOption>,
    pub prompts: Vec<PromptOption>,
    pub text: String,
}

impl PanelContent {
    /// Ids of the options selectable in the current mode
    pub fn option_ids(&self) -> Vec<&str> {
        match self.mode {
            PanelMode::Images => self.images.iter().map(PanelOption::id).collect(),
            PanelMode::Videos => self.videos.iter().map(PanelOption::id).collect(),
            PanelMode::Prompts => self.prompts.iter().map(PanelOption::id).collect(),
            PanelMode::Empty | PanelMode::Text => Vec::new(),
        }
    }
}
