use iced::widget::{Column, Row, Space, button, container, horizontal_space, row, text};
use iced::{Background, Border, Element, Length, Padding, Theme};

use crate::app::{App, Message, TopMenu};
use crate::theme::colors;

impl App {
    pub fn view_menu_bar(&self) -> Element<'_, Message> {
        let menus = [TopMenu::File, TopMenu::Edit, TopMenu::View, TopMenu::Help];

        let mut menu_items: Vec<Element<'_, Message>> = Vec::new();

        for menu in menus {
            let label = match menu {
                TopMenu::File => "File",
                TopMenu::Edit => "Edit",
                TopMenu::View => "View",
                TopMenu::Help => "Help",
            };

            let is_active = self.active_menu == Some(menu);

            let menu_btn = button(
                text(label).size(12).color(if is_active {
                    colors::TEXT_PRIMARY
                } else {
                    colors::TEXT_SECONDARY
                }),
            )
            .padding(Padding::from([6, 10]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = if is_active {
                    colors::BG_ACTIVE
                } else {
                    match status {
                        button::Status::Hovered => colors::BG_HOVER,
                        _ => colors::BG_MEDIUM,
                    }
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::ToggleTopMenu(menu));

            menu_items.push(menu_btn.into());
        }

        menu_items.push(horizontal_space().into());

        let bar = Row::with_children(menu_items)
            .spacing(2)
            .padding(Padding::from([4, 8]))
            .align_y(iced::Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Build a single dropdown menu item with label, shortcut, and action.
    pub fn menu_item<'a>(label: &'a str, shortcut: &'a str, msg: Message) -> Element<'a, Message> {
        button(
            row![
                text(label).size(12).color(colors::TEXT_PRIMARY),
                horizontal_space(),
                text(shortcut).size(11).color(colors::TEXT_MUTED),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 16]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => iced::Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border::default(),
                ..Default::default()
            }
        })
        .on_press(msg)
        .into()
    }

    pub fn menu_separator<'a>() -> Element<'a, Message> {
        container(Space::new(Length::Fill, 1))
            .padding(Padding::from([4, 8]))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BORDER)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_menu_dropdown(&self) -> Element<'_, Message> {
        let menu = match self.active_menu {
            Some(m) => m,
            None => return Space::new(0, 0).into(),
        };

        let mut items: Vec<Element<'_, Message>> = Vec::new();

        match menu {
            TopMenu::File => {
                items.push(Self::menu_item("New Tab", "Ctrl+N", Message::NewTab));
                items.push(Self::menu_separator());
                items.push(Self::menu_item("Open...", "Ctrl+O", Message::OpenFile));
                items.push(Self::menu_separator());
                items.push(Self::menu_item("Save", "Ctrl+S", Message::Save));
                items.push(Self::menu_item("Save As...", "Ctrl+Shift+S", Message::SaveAs));
                items.push(Self::menu_separator());
                items.push(Self::menu_item(
                    "Close Tab",
                    "Ctrl+W",
                    Message::CloseTabRequested(self.active_tab),
                ));
                items.push(Self::menu_item("Quit", "Ctrl+Q", Message::WindowCloseRequested));
            }
            TopMenu::Edit => {
                items.push(Self::menu_item("Cut", "Ctrl+X", Message::EditorCut));
                items.push(Self::menu_item("Copy", "Ctrl+C", Message::EditorCopy));
                items.push(Self::menu_item("Paste", "Ctrl+V", Message::EditorPaste));
                items.push(Self::menu_separator());
                items.push(Self::menu_item("Select All", "Ctrl+A", Message::EditorSelectAll));
                items.push(Self::menu_separator());
                items.push(Self::menu_item("Format", "Ctrl+F", Message::Format));
                items.push(Self::menu_item("Minify", "Ctrl+M", Message::Minify));
                items.push(Self::menu_item("Validate", "Ctrl+K", Message::Validate));
            }
            TopMenu::View => {
                items.push(Self::menu_item(
                    "Toggle Structure Panel",
                    "Ctrl+B",
                    Message::ToggleTreePanel,
                ));
                items.push(Self::menu_item(
                    "Refresh Structure",
                    "Ctrl+R",
                    Message::RefreshTree,
                ));
                items.push(Self::menu_separator());
                items.push(Self::menu_item("Next Tab", "Ctrl+Tab", Message::NextTab));
                items.push(Self::menu_item(
                    "Previous Tab",
                    "Ctrl+Shift+Tab",
                    Message::PrevTab,
                ));
            }
            TopMenu::Help => {
                items.push(Self::menu_item("About Prism", "", Message::ShowAbout));
            }
        }

        let menu_content = Column::with_children(items)
            .width(Length::Fixed(260.0))
            .padding(4);

        let menu_offset_x = match menu {
            TopMenu::File => 8.0,
            TopMenu::Edit => 52.0,
            TopMenu::View => 94.0,
            TopMenu::Help => 142.0,
        };

        let menu_box = container(menu_content).style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MEDIUM)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        });

        iced::widget::column![
            Space::with_height(Length::Fixed(32.0)),
            row![Space::with_width(Length::Fixed(menu_offset_x)), menu_box],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn toolbar_button<'a>(label: &'a str, msg: Message) -> Element<'a, Message> {
        button(text(label).size(12).color(colors::TEXT_PRIMARY))
            .padding(Padding::from([5, 12]))
            .style(|_: &Theme, status: button::Status| {
                let bg = match status {
                    button::Status::Hovered => colors::BG_HOVER,
                    button::Status::Pressed => colors::BG_ACTIVE,
                    _ => colors::BG_LIGHT,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        color: colors::BORDER,
                        width: 1.0,
                        radius: 3.0.into(),
                    },
                    ..Default::default()
                }
            })
            .on_press(msg)
            .into()
    }

    pub fn view_toolbar(&self) -> Element<'_, Message> {
        let tree_label = if self.tree_visible { "TREE ▼" } else { "TREE ▶" };

        let toolbar = row![
            Self::toolbar_button("+ NEW", Message::NewTab),
            Self::toolbar_button("OPEN", Message::OpenFile),
            Self::toolbar_button("SAVE", Message::Save),
            Self::toolbar_button("FORMAT", Message::Format),
            Self::toolbar_button("MINIFY", Message::Minify),
            Self::toolbar_button("VALIDATE", Message::Validate),
            Self::toolbar_button(tree_label, Message::ToggleTreePanel),
            horizontal_space(),
        ]
        .spacing(4)
        .padding(Padding::from([6, 8]))
        .align_y(iced::Alignment::Center);

        container(toolbar)
            .width(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let cursor_info = if let Some(tab) = self.tabs.get(self.active_tab) {
            let (line, col) = tab.content.cursor_position();
            format!("Ln {}, Col {}", line + 1, col + 1)
        } else {
            "Ln 1, Col 1".to_string()
        };

        let file_info = self
            .tabs
            .get(self.active_tab)
            .map(|t| {
                if t.modified {
                    format!("{} [modified]", t.name)
                } else {
                    t.name.clone()
                }
            })
            .unwrap_or_else(|| "No file".to_string());

        let status_color = if self.status_is_error {
            colors::DANGER
        } else if self.status_message.starts_with('✓') {
            colors::SUCCESS
        } else {
            colors::TEXT_SECONDARY
        };

        let status_content = row![
            text(&self.status_message).size(12).color(status_color),
            horizontal_space(),
            text(file_info).size(12).color(colors::TEXT_SECONDARY),
            Space::with_width(24),
            text(cursor_info).size(12).color(colors::TEXT_PRIMARY),
            Space::with_width(24),
            text("JSON").size(12).color(colors::ACCENT),
            Space::with_width(24),
            text("UTF-8").size(12).color(colors::TEXT_SECONDARY),
            Space::with_width(12),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(28)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
