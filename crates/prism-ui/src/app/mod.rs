use iced::{Point, Subscription, Task, keyboard};
use std::path::PathBuf;

use prism_core::{Settings, TreeNode};

pub mod messages;
pub mod tabs;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

pub struct App {
    pub tabs: Vec<TabInfo>,
    pub active_tab: usize,
    /// Next tab id to hand out; ids are never reused within a session.
    pub next_tab_id: u64,
    /// Structure tree of the active tab's last successful parse.
    pub tree: Option<TreeNode>,
    pub tree_visible: bool,
    pub settings: Settings,
    pub status_message: String,
    pub status_is_error: bool,
    /// Generation counter so a newer status survives an older timer.
    pub status_ticket: u64,
    pub error_dialog: Option<ErrorDialog>,
    /// Tab index awaiting a close confirmation.
    pub pending_close: Option<usize>,
    pub quit_prompt_visible: bool,
    pub about_visible: bool,
    pub tab_menu: TabContextMenu,
    pub active_menu: Option<TopMenu>,
    pub last_cursor_position: Point,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let settings = Settings::load();

        let app = Self {
            tabs: vec![TabInfo::new_untitled(1)],
            active_tab: 0,
            next_tab_id: 2,
            tree: None,
            tree_visible: true,
            settings,
            status_message:
                "Ready | Ctrl+O: Open | Ctrl+S: Save | Ctrl+F: Format | Ctrl+K: Validate"
                    .to_string(),
            status_is_error: false,
            status_ticket: 0,
            error_dialog: None,
            pending_close: None,
            quit_prompt_visible: false,
            about_visible: false,
            tab_menu: TabContextMenu::default(),
            active_menu: None,
            last_cursor_position: Point::ORIGIN,
        };

        let task = match flags.file {
            Some(file) => {
                let path = PathBuf::from(file);
                Task::perform(
                    async move {
                        match std::fs::read_to_string(&path) {
                            Ok(content) => Ok((path, content)),
                            Err(e) => Err(format!("Failed to read file: {}", e)),
                        }
                    },
                    Message::FileOpened,
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        let name = self
            .tabs
            .get(self.active_tab)
            .map(|t| t.name.as_str())
            .unwrap_or("Prism");

        let modified = self
            .tabs
            .get(self.active_tab)
            .map(|t| if t.modified { " *" } else { "" })
            .unwrap_or("");

        format!("{}{} - Prism", name, modified)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        });

        // The window close button routes through the unsaved-changes
        // prompt instead of exiting outright.
        let close_sub =
            iced::window::close_requests().map(|_id| Message::WindowCloseRequested);

        Subscription::batch([keyboard_sub, close_sub])
    }
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(iced::Size::new(1200.0, 800.0))
        // Close requests route through the unsaved-changes prompt.
        .exit_on_close_request(false)
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
