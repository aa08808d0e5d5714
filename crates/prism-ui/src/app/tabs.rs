//! Tab and tree helpers shared by the update handlers.

use iced::Task;
use iced::widget::text_editor::{Action, Motion};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{App, ErrorDialog, Message, TabInfo};

/// How long a transient status message stays up.
const STATUS_LINGER: Duration = Duration::from_secs(4);

impl App {
    /// Sets the status line and schedules its auto-clear. A newer
    /// message bumps the ticket, so an older timer expires harmlessly.
    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) -> Task<Message> {
        self.status_message = message.into();
        self.status_is_error = is_error;
        self.status_ticket += 1;
        let ticket = self.status_ticket;
        Task::perform(
            async move {
                tokio::time::sleep(STATUS_LINGER).await;
                ticket
            },
            Message::StatusExpired,
        )
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.error_dialog = Some(ErrorDialog {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn active_text(&self) -> Option<String> {
        self.tabs.get(self.active_tab).map(|t| t.content.text())
    }

    /// Rebuilds the structure tree from the active tab, tolerating
    /// parse failure: the tree reflects the last successful parse or is
    /// empty when the text does not parse.
    pub fn rebuild_tree(&mut self) {
        self.tree = self
            .active_text()
            .and_then(|text| prism_core::parse(&text).ok())
            .map(|value| prism_core::tree::build(&value));
    }

    /// Loads file content into the active tab if it is a never-touched
    /// untitled tab, otherwise into a fresh tab.
    pub fn load_into_tab(&mut self, path: PathBuf, text: String) {
        let reuse = self
            .tabs
            .get(self.active_tab)
            .map(TabInfo::is_untouched)
            .unwrap_or(false);

        if reuse {
            let id = self.tabs[self.active_tab].id;
            self.tabs[self.active_tab] = TabInfo::from_file(id, path, text);
        } else {
            let id = self.next_id();
            self.tabs.push(TabInfo::from_file(id, path, text));
            self.active_tab = self.tabs.len() - 1;
        }
        self.rebuild_tree();
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next_tab_id;
        self.next_tab_id += 1;
        id
    }

    /// Removes a tab and keeps the active index valid. The last tab is
    /// never removed.
    pub fn close_tab(&mut self, idx: usize) {
        if self.tabs.len() <= 1 || idx >= self.tabs.len() {
            return;
        }
        self.tabs.remove(idx);
        if self.active_tab >= self.tabs.len() {
            self.active_tab = self.tabs.len() - 1;
        } else if idx < self.active_tab {
            self.active_tab -= 1;
        }
        self.rebuild_tree();
    }

    /// Persists the folder of `path` as the last-used folder.
    /// Best-effort: failures are logged and ignored.
    pub fn remember_folder(&mut self, path: &Path) {
        self.settings.remember_folder(path);
        if let Err(err) = self.settings.save() {
            tracing::warn!(%err, "failed to persist settings");
        }
    }

    /// Moves the cursor to the key a tree path points at and selects
    /// its span. Failures degrade to "no highlight".
    pub fn locate_in_editor(&mut self, path: &str) {
        let Some(text) = self.active_text() else {
            return;
        };
        let Some(span) = prism_core::locate(&text, path) else {
            tracing::debug!(path, "no text position for tree node");
            return;
        };

        if let Some(tab) = self.tabs.get_mut(self.active_tab) {
            // The editor widget has no direct goto, so replay motions
            // from the document start.
            tab.content.perform(Action::Move(Motion::DocumentStart));
            for _ in 0..span.line {
                tab.content.perform(Action::Move(Motion::Down));
            }
            for _ in 0..span.start {
                tab.content.perform(Action::Move(Motion::Right));
            }
            for _ in 0..(span.end - span.start) {
                tab.content.perform(Action::Select(Motion::Right));
            }
        }
    }

    /// Names of tabs with unsaved changes, for the quit prompt.
    pub fn unsaved_tab_names(&self) -> Vec<String> {
        self.tabs
            .iter()
            .filter(|t| t.modified)
            .map(|t| t.name.clone())
            .collect()
    }
}
