use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use crate::app::{App, Message};
use crate::theme::colors;

fn modal_frame<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(container(content).style(|_| container::Style {
        background: Some(Background::Color(colors::BG_MEDIUM)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }))
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn plain_button<'a>(label: &'a str, msg: Message) -> Element<'a, Message> {
    button(text(label).size(13).color(colors::TEXT_PRIMARY))
        .padding(Padding::from([8, 20]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => colors::BG_LIGHT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
        .on_press(msg)
        .into()
}

fn accent_button<'a>(label: &'a str, msg: Message) -> Element<'a, Message> {
    button(text(label).size(13).color(Color::WHITE))
        .padding(Padding::from([8, 20]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => Color::from_rgb(0.40, 0.58, 0.95),
                _ => colors::ACCENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: Color::WHITE,
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(msg)
        .into()
}

fn danger_button<'a>(label: &'a str, msg: Message) -> Element<'a, Message> {
    button(text(label).size(13).color(Color::WHITE))
        .padding(Padding::from([8, 20]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => Color::from_rgb(0.85, 0.25, 0.25),
                _ => Color::from_rgb(0.75, 0.22, 0.22),
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: Color::WHITE,
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(msg)
        .into()
}

impl App {
    pub fn view_error_modal(&self) -> Element<'_, Message> {
        let (title, message) = self
            .error_dialog
            .as_ref()
            .map(|d| (d.title.clone(), d.message.clone()))
            .unwrap_or_default();

        let modal_content = column![
            text(title).size(16).color(colors::DANGER),
            Space::with_height(12),
            text(message).size(13).color(colors::TEXT_SECONDARY),
            Space::with_height(16),
            row![accent_button("OK", Message::DismissError)],
        ]
        .padding(24)
        .width(Length::Fixed(420.0));

        modal_frame(modal_content.into())
    }

    pub fn view_confirm_close_modal(&self) -> Element<'_, Message> {
        let tab_name = self
            .pending_close
            .and_then(|idx| self.tabs.get(idx))
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "this tab".to_string());

        let modal_content = column![
            text("Close Tab").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(12),
            text(format!("Close \"{}\"?", tab_name))
                .size(13)
                .color(colors::TEXT_SECONDARY),
            Space::with_height(4),
            text("Unsaved changes will be lost.")
                .size(11)
                .color(colors::TEXT_MUTED),
            Space::with_height(16),
            row![
                plain_button("Cancel", Message::CancelCloseTab),
                Space::with_width(12),
                danger_button("Close", Message::ConfirmCloseTab),
            ]
            .align_y(iced::Alignment::Center),
        ]
        .padding(24)
        .width(Length::Fixed(380.0));

        modal_frame(modal_content.into())
    }

    pub fn view_quit_modal(&self) -> Element<'_, Message> {
        let unsaved = self.unsaved_tab_names();

        let modal_content = column![
            text("Unsaved Changes").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(12),
            text("Save changes before closing?")
                .size(13)
                .color(colors::TEXT_SECONDARY),
            Space::with_height(4),
            text(format!("Unsaved tabs: {}", unsaved.join(", ")))
                .size(11)
                .color(colors::TEXT_MUTED),
            Space::with_height(16),
            row![
                plain_button("Cancel", Message::QuitCancel),
                Space::with_width(12),
                danger_button("Discard", Message::QuitDiscard),
                Space::with_width(12),
                accent_button("Save All", Message::QuitSaveAll),
            ]
            .align_y(iced::Alignment::Center),
        ]
        .padding(24)
        .width(Length::Fixed(440.0));

        modal_frame(modal_content.into())
    }

    pub fn view_about_modal(&self) -> Element<'_, Message> {
        let modal_content = column![
            text("Prism").size(20).color(colors::ACCENT),
            Space::with_height(8),
            text("A JSON editor built with Rust & Iced")
                .size(13)
                .color(colors::TEXT_SECONDARY),
            Space::with_height(12),
            text(format!("Version {}", env!("CARGO_PKG_VERSION")))
                .size(12)
                .color(colors::TEXT_MUTED),
            Space::with_height(20),
            accent_button("Close", Message::HideAbout),
        ]
        .padding(24)
        .width(Length::Fixed(340.0))
        .align_x(iced::Alignment::Center);

        modal_frame(modal_content.into())
    }

    pub fn view_tab_context_menu(&self) -> Element<'_, Message> {
        let menu_btn_style = |_: &Theme, status: button::Status| -> button::Style {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => colors::BG_MEDIUM,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border::default(),
                ..Default::default()
            }
        };

        let mut items: Vec<Element<'_, Message>> = Vec::new();

        items.push(
            button(text("Rename").size(12).color(colors::TEXT_MUTED))
                .width(Length::Fill)
                .padding(Padding::from([6, 12]))
                .style(menu_btn_style)
                .on_press(Message::RenameTab)
                .into(),
        );

        if self.tabs.len() > 1 {
            items.push(
                container(Space::new(Length::Fill, 1))
                    .style(|_| container::Style {
                        background: Some(Background::Color(colors::BORDER)),
                        ..Default::default()
                    })
                    .into(),
            );
            items.push(
                button(text("Close").size(12).color(colors::TEXT_PRIMARY))
                    .width(Length::Fill)
                    .padding(Padding::from([6, 12]))
                    .style(menu_btn_style)
                    .on_press(Message::CloseTabFromMenu)
                    .into(),
            );
        }

        let menu_content = Column::with_children(items).width(Length::Fixed(140.0));
        let x = self.tab_menu.position.x;
        let y = self.tab_menu.position.y;

        let menu_box = container(menu_content)
            .padding(4)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            });

        column![
            Space::with_height(Length::Fixed(y)),
            row![Space::with_width(Length::Fixed(x)), menu_box],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
