//! Constants used throughout the library
//!
//! Timing defaults, UI copy and layout limits live here so the components and
//! the configuration layer agree on a single set of values.

// Animation timing (milliseconds)
/// Duration of the panel open and close animations
pub const PANEL_TRANSITION_MS: u64 = 600;
/// Default typewriter speed, per character
pub const TYPEWRITER_SPEED_MS: u64 = 30;
/// Delay before staggered prompt reveals begin
pub const PROMPT_START_DELAY_MS: u64 = 300;
/// Additional delay per prompt index
pub const PROMPT_STAGGER_MS: u64 = 150;
/// Delay between a selection and the automatic close request
pub const AUTO_CLOSE_MS: u64 = 800;
/// Status phrase rotation cadence
pub const PHRASE_ROTATE_MS: u64 = 800;
/// Elapsed-seconds recomputation cadence
pub const ELAPSED_TICK_MS: u64 = 1000;

/// Messages older than this are rendered faded
pub const OLD_MESSAGE_SECS: i64 = 5 * 60;

/// Cursor glyph appended while a reveal is in progress
pub const REVEAL_CURSOR: char = '|';
/// Checkmark drawn on the selected option card
pub const SELECTED_CHECKMARK: &str = "✓";

/// Status phrases shown by the thinking indicator when none are configured
pub const DEFAULT_THINKING_PHRASES: &[&str] = &[
    "Conjuring creative visuals...",
    "Weaving narrative threads...",
    "Sculpting digital frames...",
    "Infusing motion with magic...",
    "Orchestrating visual symphony...",
    "Breathing life into pixels...",
    "Crafting cinematic moments...",
    "Harmonizing elements in time...",
    "Painting with light and shadow...",
    "Composing visual poetry...",
    "Dancing with creative energy...",
    "Shaping dreams into reality...",
    "Channeling artistic inspiration...",
    "Blending colors of imagination...",
    "Weaving stories in motion...",
];

// Panel copy
pub const PANEL_EMPTY_TITLE: &str = "Ready for Content";
pub const PANEL_EMPTY_TEXT: &str = "Your artifacts will appear here";
pub const PANEL_SUBTEXT_IMAGES: &str = "Select one of the images above to continue";
pub const PANEL_SUBTEXT_VIDEOS: &str = "Select one of the videos above to continue";
pub const PANEL_SUBTEXT_PROMPTS: &str = "Select one of the prompts above to continue";

// Input copy
pub const INPUT_PLACEHOLDER: &str = "Type a message...";
pub const INPUT_TITLE: &str = " Message ";
/// File extensions the input accepts as attachments
pub const ACCEPTED_ATTACHMENT_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg", "pdf"];
/// Input lines shown before the box stops growing
pub const INPUT_MAX_VISIBLE_LINES: u16 = 6;

// Log overlay
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc' or Ctrl+G to close";

// Layout
/// Width of the collapsed navigation rail
pub const NAV_COLLAPSED_WIDTH: u16 = 5;
/// Width of the expanded navigation rail
pub const NAV_EXPANDED_WIDTH: u16 = 22;
/// Maximum width of the artifact panel in columns
pub const PANEL_MAX_WIDTH: u16 = 60;
/// Height of the chat input box including borders, for a single line
pub const INPUT_HEIGHT: u16 = 3;
/// Width of the prompt suggestion sidebar
pub const SUGGESTIONS_WIDTH: u16 = 44;
