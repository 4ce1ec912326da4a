//! Files attached to the next message

use crate::constants::ACCEPTED_ATTACHMENT_EXTENSIONS;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Pdf,
}

impl AttachmentKind {
    pub fn label(self) -> &'static str {
        match self {
            AttachmentKind::Image => "image",
            AttachmentKind::Pdf => "PDF",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub path: PathBuf,
    pub kind: AttachmentKind,
}

impl Attachment {
    /// Accepts png, jpeg, jpg and pdf files, by extension, case-insensitively
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        if !ACCEPTED_ATTACHMENT_EXTENSIONS.contains(&extension.as_str()) {
            return None;
        }
        let kind = if extension == "pdf" { AttachmentKind::Pdf } else { AttachmentKind::Image };
        Some(Self { path, kind })
    }

    /// File name for display, falling back to the full path
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Split pasted or typed text into candidate paths.
///
/// Paths are separated by whitespace; surrounding single or double quotes are
/// stripped so quoted paths from a file manager drop still parse.
pub fn parse_paths(text: &str) -> Vec<PathBuf> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| c == '\'' || c == '"'))
        .filter(|token| !token.is_empty())
        .map(|token| Path::new(token).to_path_buf())
        .collect()
}
