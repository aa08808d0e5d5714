use iced::widget::{
    Column, Row, Space, button, container, horizontal_space, mouse_area, row, text, text_editor,
};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme};

use crate::app::{App, Message};
use crate::highlighter::{HighlightSettings, JsonHighlighter};
use crate::theme::colors;

impl App {
    pub fn view_main_area(&self) -> Element<'_, Message> {
        let main_items: Vec<Element<'_, Message>> = vec![self.view_tabs(), self.view_editor()];

        Column::with_children(main_items)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn view_tabs(&self) -> Element<'_, Message> {
        let mut tabs_vec: Vec<Element<'_, Message>> = Vec::new();

        for (idx, tab) in self.tabs.iter().enumerate() {
            let is_active = self.active_tab == idx;
            tabs_vec.push(self.make_tab(&tab.display_name(), idx, is_active));
        }

        tabs_vec.push(horizontal_space().into());

        let tabs_row = Row::with_children(tabs_vec)
            .spacing(1)
            .align_y(iced::Alignment::End);

        container(tabs_row)
            .width(Length::Fill)
            .height(36)
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

    pub fn make_tab(&self, name: &str, idx: usize, is_active: bool) -> Element<'_, Message> {
        let close_btn = button(text("x").size(12).color(colors::TEXT_MUTED))
            .padding(Padding::from([2, 6]))
            .style(|_, status| {
                let bg = match status {
                    button::Status::Hovered => colors::BG_HOVER,
                    _ => Color::TRANSPARENT,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        radius: 2.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::CloseTabRequested(idx));

        let tab_content = row![
            text(name.to_string()).size(13).color(if is_active {
                colors::TEXT_PRIMARY
            } else {
                colors::TEXT_SECONDARY
            }),
            Space::with_width(8),
            close_btn,
        ]
        .align_y(iced::Alignment::Center);

        let bg = if is_active {
            colors::BG_DARK
        } else {
            colors::BG_MEDIUM
        };

        let tab_btn = button(tab_content)
            .padding(Padding::from([8, 14]))
            .style(move |_, status| {
                let hover_bg = match status {
                    button::Status::Hovered if !is_active => colors::BG_HOVER,
                    _ => bg,
                };
                button::Style {
                    background: Some(Background::Color(hover_bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        color: if is_active {
                            colors::ACCENT
                        } else {
                            Color::TRANSPARENT
                        },
                        width: if is_active { 2.0 } else { 0.0 },
                        radius: 0.0.into(),
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::TabSelected(idx));

        // Right-click on the header opens the Rename/Close menu.
        mouse_area(tab_btn)
            .on_right_press(Message::ShowTabContextMenu(idx))
            .into()
    }

    pub fn view_editor(&self) -> Element<'_, Message> {
        if let Some(tab) = self.tabs.get(self.active_tab) {
            let editor_bg = colors::BG_DARK;
            let selection_color = Color::from_rgba(0.25, 0.46, 0.85, 0.55);

            let editor = text_editor(&tab.content)
                .height(Length::Fill)
                .padding(Padding {
                    top: 16.0,
                    right: 20.0,
                    bottom: 16.0,
                    left: 16.0,
                })
                .font(Font::MONOSPACE)
                .size(14)
                .style(move |_theme: &Theme, _status| text_editor::Style {
                    background: Background::Color(editor_bg),
                    border: Border {
                        width: 0.0,
                        radius: 0.0.into(),
                        color: Color::TRANSPARENT,
                    },
                    icon: colors::TEXT_MUTED,
                    placeholder: colors::TEXT_MUTED,
                    value: colors::TEXT_PRIMARY,
                    selection: selection_color,
                })
                .highlight_with::<JsonHighlighter>(HighlightSettings, |highlight, _theme| {
                    highlight.to_format(Font::MONOSPACE)
                })
                .on_action(Message::EditorAction);

            container(editor)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            container(text("No tab open").size(16).color(colors::TEXT_MUTED))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(|_| container::Style {
                    background: Some(Background::Color(colors::BG_DARK)),
                    ..Default::default()
                })
                .into()
        }
    }
}
