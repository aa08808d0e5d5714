use iced::Point;
use iced::widget::text_editor;
use std::path::PathBuf;

/// One editing tab: its own buffer, file association, and modified flag.
pub struct TabInfo {
    /// Session-unique id. Monotonically increasing, never reused.
    pub id: u64,
    pub path: Option<PathBuf>,
    pub name: String,
    pub content: text_editor::Content,
    pub modified: bool,
}

impl TabInfo {
    pub fn new_untitled(id: u64) -> Self {
        Self {
            id,
            path: None,
            name: format!("Untitled {id}"),
            content: text_editor::Content::new(),
            modified: false,
        }
    }

    pub fn from_file(id: u64, path: PathBuf, text: String) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            id,
            path: Some(path),
            name,
            content: text_editor::Content::with_text(&text),
            modified: false,
        }
    }

    /// True for a never-touched untitled tab, the only kind Open will
    /// load into instead of creating a new tab.
    pub fn is_untouched(&self) -> bool {
        self.path.is_none() && !self.modified && self.content.text().trim().is_empty()
    }

    pub fn display_name(&self) -> String {
        if self.modified {
            format!("{} *", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Launch flags from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    pub file: Option<String>,
}

/// A blocking error dialog.
#[derive(Debug, Clone)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

/// Context menu state for a right-clicked tab header.
#[derive(Debug, Clone)]
pub struct TabContextMenu {
    pub visible: bool,
    pub tab: usize,
    pub position: Point,
}

impl Default for TabContextMenu {
    fn default() -> Self {
        Self {
            visible: false,
            tab: 0,
            position: Point::ORIGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMenu {
    File,
    Edit,
    View,
    Help,
}
