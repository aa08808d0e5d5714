use iced::{Point, keyboard};
use iced::widget::text_editor;
use std::path::PathBuf;

use crate::app::types::TopMenu;

#[derive(Debug, Clone)]
pub enum Message {
    // File operations
    NewTab,
    OpenFile,
    Save,
    SaveAs,
    CloseTabRequested(usize),
    ConfirmCloseTab,
    CancelCloseTab,

    // JSON commands
    Format,
    Minify,
    Validate,
    RefreshTree,

    // Editor
    EditorAction(text_editor::Action),
    EditorCut,
    EditorCopy,
    EditorPaste,
    EditorSelectAll,

    // Navigation
    TabSelected(usize),
    NextTab,
    PrevTab,

    // Structure tree
    ToggleTreePanel,
    TreeLeafClicked(String),
    TreeBranchClicked(String),

    // Tab header context menu
    ShowTabContextMenu(usize),
    HideTabContextMenu,
    RenameTab,
    CloseTabFromMenu,

    // Top menu bar
    ToggleTopMenu(TopMenu),
    CloseTopMenu,

    // Mouse tracking (context menu placement)
    MouseMoved(Point),

    // Dialogs
    DismissError,
    ShowAbout,
    HideAbout,

    // Window close flow
    WindowCloseRequested,
    QuitSaveAll,
    QuitDiscard,
    QuitCancel,

    // Transient status auto-clear
    StatusExpired(u64),

    // Keyboard shortcuts
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Async results
    FileOpened(Result<(PathBuf, String), String>),
    FileSaved(Result<PathBuf, String>),
}
