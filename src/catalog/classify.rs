//! Display classification for raw resources.
//!
//! Maps the service's structural kind and MIME type onto one of the
//! display kinds, each with a fixed icon and color pair.

use serde::{Deserialize, Serialize};

use crate::domain::{RawResource, StructuralKind};

/// Display kind of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayKind {
    Video,
    Pdf,
    Link,
    Note,
    Document,
    Playlist,
}

impl DisplayKind {
    /// Resource kinds offered as format filter chips, in chip order
    pub const FORMATS: [DisplayKind; 5] = [
        DisplayKind::Video,
        DisplayKind::Pdf,
        DisplayKind::Link,
        DisplayKind::Note,
        DisplayKind::Document,
    ];

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            DisplayKind::Video => "Video",
            DisplayKind::Pdf => "PDF",
            DisplayKind::Link => "Link",
            DisplayKind::Note => "Note",
            DisplayKind::Document => "Document",
            DisplayKind::Playlist => "Playlist",
        }
    }

    /// Icon key for this kind
    pub fn icon(self) -> IconKey {
        match self {
            DisplayKind::Video => IconKey::Video,
            DisplayKind::Pdf => IconKey::Download,
            DisplayKind::Link => IconKey::Link,
            DisplayKind::Note => IconKey::Document,
            DisplayKind::Document => IconKey::File,
            DisplayKind::Playlist => IconKey::Folder,
        }
    }

    /// Background/foreground color tokens for this kind
    pub fn palette(self) -> Palette {
        let (background, foreground) = match self {
            DisplayKind::Video => ("bg-purple-50", "text-purple-400"),
            DisplayKind::Pdf => ("bg-green-50", "text-green-400"),
            DisplayKind::Link => ("bg-gray-50", "text-gray-400"),
            DisplayKind::Note => ("bg-red-50", "text-red-400"),
            DisplayKind::Document => ("bg-blue-50", "text-blue-400"),
            DisplayKind::Playlist => ("bg-teal-100", "text-teal-700"),
        };

        Palette {
            background,
            foreground,
        }
    }
}

impl std::fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Icon shown next to an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    Video,
    Download,
    Link,
    Document,
    File,
    Folder,
}

impl IconKey {
    pub fn as_str(self) -> &'static str {
        match self {
            IconKey::Video => "video",
            IconKey::Download => "download",
            IconKey::Link => "link",
            IconKey::Document => "document",
            IconKey::File => "file",
            IconKey::Folder => "folder",
        }
    }
}

/// Color tokens for an item's icon tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Result of classifying a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: DisplayKind,
    pub icon: IconKey,
    pub palette: Palette,
}

impl From<DisplayKind> for Classification {
    fn from(kind: DisplayKind) -> Self {
        Self {
            kind,
            icon: kind.icon(),
            palette: kind.palette(),
        }
    }
}

/// Resolve the display kind for a structural kind and optional MIME type.
///
/// Total: unknown kinds and unrecognized MIME types fall back to
/// [`DisplayKind::Document`].
pub fn display_kind(kind: StructuralKind, mime_type: Option<&str>) -> DisplayKind {
    match kind {
        StructuralKind::Note => DisplayKind::Note,
        StructuralKind::Url => DisplayKind::Link,
        StructuralKind::Upload => {
            let mime = mime_type.unwrap_or_default().to_ascii_lowercase();
            if mime.contains("pdf") {
                DisplayKind::Pdf
            } else if mime.contains("video") {
                DisplayKind::Video
            } else {
                DisplayKind::Document
            }
        }
        StructuralKind::Unknown => DisplayKind::Document,
    }
}

/// Classify a raw resource
pub fn classify(raw: &RawResource) -> Classification {
    display_kind(raw.kind(), raw.mime_type.as_deref()).into()
}
