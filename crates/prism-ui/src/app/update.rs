use iced::{Task, keyboard};
use iced::widget::text_editor;

use super::{App, Message, TabInfo};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NewTab => {
                self.active_menu = None;
                let id = self.next_id();
                self.tabs.push(TabInfo::new_untitled(id));
                self.active_tab = self.tabs.len() - 1;
                self.rebuild_tree();
                return self.set_status("New tab", false);
            }

            Message::OpenFile => {
                self.active_menu = None;
                let last_folder = self.settings.last_folder.clone();
                return Task::perform(
                    async move {
                        let mut dialog = rfd::AsyncFileDialog::new()
                            .add_filter("JSON", &["json"])
                            .add_filter("All Files", &["*"])
                            .set_title("Open JSON File");
                        if let Some(folder) = last_folder {
                            dialog = dialog.set_directory(folder);
                        }

                        match dialog.pick_file().await {
                            Some(file) => {
                                let path = file.path().to_path_buf();
                                match std::fs::read_to_string(&path) {
                                    Ok(content) => Ok((path, content)),
                                    Err(e) => Err(format!("Failed to read file: {}", e)),
                                }
                            }
                            None => Err("Cancelled".to_string()),
                        }
                    },
                    Message::FileOpened,
                );
            }

            Message::FileOpened(result) => match result {
                Ok((path, content)) => {
                    // The file must parse before it touches any tab.
                    if let Err(e) = prism_core::validate(&content) {
                        self.show_error(
                            "Invalid JSON",
                            format!("Error parsing JSON:\n{}", e),
                        );
                        return Task::none();
                    }

                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "unknown".to_string());

                    self.remember_folder(&path);
                    self.load_into_tab(path, content);
                    tracing::info!(%name, "opened file");
                    return self.set_status(format!("Opened: {}", name), false);
                }
                Err(e) => {
                    if e != "Cancelled" {
                        self.show_error("Open Error", e);
                    }
                }
            },

            Message::Save => {
                self.active_menu = None;
                if let Some(tab) = self.tabs.get(self.active_tab) {
                    let text = tab.content.text();
                    if let Err(e) = prism_core::validate(&text) {
                        self.show_error(
                            "Invalid JSON",
                            format!("Cannot save invalid JSON:\n{}", e),
                        );
                        return Task::none();
                    }
                    if let Some(path) = &tab.path {
                        let path = path.clone();
                        return Task::perform(
                            async move {
                                std::fs::write(&path, text)
                                    .map(|_| path)
                                    .map_err(|e| format!("Failed to save: {}", e))
                            },
                            Message::FileSaved,
                        );
                    } else {
                        return self.update(Message::SaveAs);
                    }
                }
            }

            Message::SaveAs => {
                self.active_menu = None;
                if let Some(tab) = self.tabs.get(self.active_tab) {
                    let text = tab.content.text();
                    if let Err(e) = prism_core::validate(&text) {
                        self.show_error(
                            "Invalid JSON",
                            format!("Cannot save invalid JSON:\n{}", e),
                        );
                        return Task::none();
                    }
                    let default_name = if tab.path.is_some() {
                        tab.name.clone()
                    } else {
                        format!("{}.json", tab.name.to_lowercase().replace(' ', "-"))
                    };
                    let last_folder = self.settings.last_folder.clone();
                    return Task::perform(
                        async move {
                            let mut dialog = rfd::AsyncFileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name(default_name.as_str());
                            if let Some(folder) = last_folder {
                                dialog = dialog.set_directory(folder);
                            }

                            match dialog.save_file().await {
                                Some(file) => {
                                    let path = file.path().to_path_buf();
                                    std::fs::write(&path, text)
                                        .map(|_| path)
                                        .map_err(|e| format!("Failed to save: {}", e))
                                }
                                None => Err("Cancelled".to_string()),
                            }
                        },
                        Message::FileSaved,
                    );
                }
            }

            Message::FileSaved(result) => match result {
                Ok(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "file".to_string());

                    self.remember_folder(&path);
                    if let Some(tab) = self.tabs.get_mut(self.active_tab) {
                        tab.path = Some(path);
                        tab.name = name.clone();
                        tab.modified = false;
                    }
                    tracing::info!(%name, "saved file");
                    return self.set_status(format!("Saved: {}", name), false);
                }
                Err(e) => {
                    if e != "Cancelled" {
                        self.show_error("Save Error", e);
                    }
                }
            },

            Message::Format => {
                self.active_menu = None;
                if let Some(text) = self.active_text() {
                    match prism_core::format(&text) {
                        Ok(formatted) => {
                            if let Some(tab) = self.tabs.get_mut(self.active_tab) {
                                tab.content = text_editor::Content::with_text(&formatted);
                                tab.modified = true;
                            }
                            self.rebuild_tree();
                            return self.set_status("Formatted", false);
                        }
                        Err(e) => self.show_error(
                            "Invalid JSON",
                            format!("Cannot format invalid JSON:\n{}", e),
                        ),
                    }
                }
            }

            Message::Minify => {
                self.active_menu = None;
                if let Some(text) = self.active_text() {
                    match prism_core::minify(&text) {
                        Ok(minified) => {
                            if let Some(tab) = self.tabs.get_mut(self.active_tab) {
                                tab.content = text_editor::Content::with_text(&minified);
                                tab.modified = true;
                            }
                            self.rebuild_tree();
                            return self.set_status("Minified", false);
                        }
                        Err(e) => self.show_error(
                            "Invalid JSON",
                            format!("Cannot minify invalid JSON:\n{}", e),
                        ),
                    }
                }
            }

            Message::Validate => {
                self.active_menu = None;
                if let Some(text) = self.active_text() {
                    match prism_core::validate(&text) {
                        Ok(()) => return self.set_status("✓ Valid JSON", false),
                        Err(e) => {
                            self.show_error(
                                "Invalid JSON",
                                format!("JSON validation failed:\n\n{}", e),
                            );
                            return self.set_status("✗ Invalid JSON", true);
                        }
                    }
                }
            }

            Message::RefreshTree => {
                self.active_menu = None;
                if let Some(text) = self.active_text() {
                    match prism_core::parse(&text) {
                        Ok(value) => {
                            self.tree = Some(prism_core::tree::build(&value));
                            return self.set_status("Structure refreshed", false);
                        }
                        Err(e) => self.show_error(
                            "Invalid JSON",
                            format!("Error parsing JSON:\n{}", e),
                        ),
                    }
                }
            }

            Message::EditorAction(action) => {
                self.tab_menu.visible = false;
                self.active_menu = None;
                if let Some(tab) = self.tabs.get_mut(self.active_tab) {
                    let is_edit = action.is_edit();
                    tab.content.perform(action);
                    if is_edit {
                        tab.modified = true;
                    }
                }
            }

            Message::TabSelected(idx) => {
                self.tab_menu.visible = false;
                self.active_menu = None;
                if idx < self.tabs.len() {
                    self.active_tab = idx;
                    self.rebuild_tree();
                    let name = self.tabs[idx].name.clone();
                    return self.set_status(format!("Editing: {}", name), false);
                }
            }

            Message::NextTab => {
                self.active_menu = None;
                if !self.tabs.is_empty() {
                    self.active_tab = (self.active_tab + 1) % self.tabs.len();
                    self.rebuild_tree();
                }
            }

            Message::PrevTab => {
                self.active_menu = None;
                if !self.tabs.is_empty() {
                    self.active_tab = if self.active_tab == 0 {
                        self.tabs.len() - 1
                    } else {
                        self.active_tab - 1
                    };
                    self.rebuild_tree();
                }
            }

            Message::CloseTabRequested(idx) => {
                self.active_menu = None;
                self.tab_menu.visible = false;
                if self.tabs.len() > 1 && idx < self.tabs.len() {
                    if self.tabs[idx].modified {
                        self.pending_close = Some(idx);
                    } else {
                        self.close_tab(idx);
                        return self.set_status("Tab closed", false);
                    }
                }
            }

            Message::ConfirmCloseTab => {
                if let Some(idx) = self.pending_close.take() {
                    self.close_tab(idx);
                    return self.set_status("Tab closed", false);
                }
            }

            Message::CancelCloseTab => {
                self.pending_close = None;
            }

            Message::ToggleTreePanel => {
                self.active_menu = None;
                self.tree_visible = !self.tree_visible;
            }

            Message::TreeLeafClicked(path) => {
                if !path.is_empty() {
                    self.locate_in_editor(&path);
                }
            }

            Message::TreeBranchClicked(path) => {
                if let Some(tree) = &mut self.tree {
                    tree.toggle(&path);
                }
                if !path.is_empty() {
                    self.locate_in_editor(&path);
                }
            }

            Message::ShowTabContextMenu(idx) => {
                self.tab_menu = super::TabContextMenu {
                    visible: true,
                    tab: idx,
                    position: self.last_cursor_position,
                };
            }

            Message::HideTabContextMenu => {
                self.tab_menu.visible = false;
            }

            Message::RenameTab => {
                // TODO: implement tab rename; the menu entry is wired
                // but intentionally does nothing yet.
                self.tab_menu.visible = false;
            }

            Message::CloseTabFromMenu => {
                let idx = self.tab_menu.tab;
                self.tab_menu.visible = false;
                return self.update(Message::CloseTabRequested(idx));
            }

            Message::ToggleTopMenu(menu) => {
                if self.active_menu == Some(menu) {
                    self.active_menu = None;
                } else {
                    self.active_menu = Some(menu);
                }
            }

            Message::CloseTopMenu => {
                self.active_menu = None;
            }

            Message::MouseMoved(p) => {
                self.last_cursor_position = p;
            }

            Message::DismissError => {
                self.error_dialog = None;
            }

            Message::ShowAbout => {
                self.active_menu = None;
                self.about_visible = true;
            }

            Message::HideAbout => {
                self.about_visible = false;
            }

            Message::WindowCloseRequested => {
                self.active_menu = None;
                if self.tabs.iter().any(|t| t.modified) {
                    self.quit_prompt_visible = true;
                } else {
                    return iced::exit();
                }
            }

            Message::QuitSaveAll => {
                // Saving every unsaved tab on the way out is an
                // acknowledged no-op; the window still closes.
                return iced::exit();
            }

            Message::QuitDiscard => {
                return iced::exit();
            }

            Message::QuitCancel => {
                self.quit_prompt_visible = false;
            }

            Message::StatusExpired(ticket) => {
                if ticket == self.status_ticket {
                    self.status_message.clear();
                    self.status_is_error = false;
                }
            }

            Message::EditorCut => {
                self.active_menu = None;
                if let Some(tab) = self.tabs.get_mut(self.active_tab) {
                    if let Some(selected) = tab.content.selection() {
                        if let Ok(mut clipboard) = arboard::Clipboard::new() {
                            let _ = clipboard.set_text(&selected);
                        }
                        tab.content
                            .perform(text_editor::Action::Edit(text_editor::Edit::Delete));
                        tab.modified = true;
                        return self.set_status("Cut", false);
                    }
                }
            }

            Message::EditorCopy => {
                self.active_menu = None;
                if let Some(tab) = self.tabs.get(self.active_tab) {
                    if let Some(selected) = tab.content.selection() {
                        if let Ok(mut clipboard) = arboard::Clipboard::new() {
                            let _ = clipboard.set_text(&selected);
                        }
                        return self.set_status("Copied", false);
                    } else {
                        return self.set_status("Nothing selected", false);
                    }
                }
            }

            Message::EditorPaste => {
                self.active_menu = None;
                if let Some(tab) = self.tabs.get_mut(self.active_tab) {
                    if let Ok(mut clipboard) = arboard::Clipboard::new() {
                        if let Ok(clip_text) = clipboard.get_text() {
                            tab.content.perform(text_editor::Action::Edit(
                                text_editor::Edit::Paste(std::sync::Arc::new(clip_text)),
                            ));
                            tab.modified = true;
                            return self.set_status("Pasted", false);
                        }
                    }
                }
            }

            Message::EditorSelectAll => {
                self.active_menu = None;
                if let Some(tab) = self.tabs.get_mut(self.active_tab) {
                    tab.content.perform(text_editor::Action::SelectAll);
                }
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }
        }
        Task::none()
    }

    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        // Platform command modifier: Ctrl, or Cmd on macOS.
        if !modifiers.command() {
            return Task::none();
        }

        let char_key = match &key {
            keyboard::Key::Character(c) => Some(c.to_lowercase()),
            _ => None,
        };

        if let Some(c) = char_key {
            if modifiers.shift() {
                match c.as_str() {
                    "s" => return self.update(Message::SaveAs),
                    _ => {}
                }
            }

            if !modifiers.shift() && !modifiers.alt() {
                match c.as_str() {
                    "n" | "t" => return self.update(Message::NewTab),
                    "o" => return self.update(Message::OpenFile),
                    "s" => return self.update(Message::Save),
                    "w" => return self.update(Message::CloseTabRequested(self.active_tab)),
                    "f" => return self.update(Message::Format),
                    "m" => return self.update(Message::Minify),
                    "k" => return self.update(Message::Validate),
                    "r" => return self.update(Message::RefreshTree),
                    "b" => return self.update(Message::ToggleTreePanel),
                    "a" => return self.update(Message::EditorSelectAll),
                    "q" => return self.update(Message::WindowCloseRequested),
                    _ => {}
                }
            }
        }

        if matches!(key, keyboard::Key::Named(keyboard::key::Named::Tab)) {
            if modifiers.shift() {
                return self.update(Message::PrevTab);
            } else {
                return self.update(Message::NextTab);
            }
        }

        Task::none()
    }
}
