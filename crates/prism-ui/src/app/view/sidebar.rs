use iced::widget::{
    Column, Space, button, column, container, horizontal_space, row, scrollable, text,
};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme};

use prism_core::TreeNode;

use crate::app::{App, Message};
use crate::theme::colors;

impl App {
    pub fn view_sidebar(&self) -> Element<'_, Message> {
        let small_btn_style = |_: &Theme, status: button::Status| -> button::Style {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                button::Status::Pressed => colors::BG_ACTIVE,
                _ => colors::BG_MEDIUM,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_SECONDARY,
                border: Border {
                    radius: 3.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        };

        let header = container(
            row![
                text("STRUCTURE")
                    .size(11)
                    .color(colors::TEXT_SECONDARY)
                    .font(Font::MONOSPACE),
                horizontal_space(),
                button(text("↻").size(10).font(Font::MONOSPACE))
                    .padding(Padding::from([2, 6]))
                    .style(small_btn_style)
                    .on_press(Message::RefreshTree),
            ]
            .spacing(4)
            .align_y(iced::Alignment::Center),
        )
        .padding(Padding::from([10, 12]))
        .width(Length::Fill)
        .style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MEDIUM)),
            ..Default::default()
        });

        let tree_content: Element<'_, Message> = if let Some(tree) = &self.tree {
            let items = self.build_tree_items(tree);
            scrollable(Column::with_children(items).spacing(1).width(Length::Fill))
                .height(Length::Fill)
                .into()
        } else {
            container(
                column![
                    Space::with_height(40),
                    text("No structure").size(13).color(colors::TEXT_MUTED),
                    Space::with_height(4),
                    text("The buffer is empty or not valid JSON")
                        .size(11)
                        .color(colors::TEXT_MUTED),
                ]
                .align_x(iced::Alignment::Center)
                .width(Length::Fill),
            )
            .height(Length::Fill)
            .into()
        };

        let sidebar_content = column![header, tree_content];

        container(sidebar_content)
            .width(Length::Fixed(260.0))
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_LIGHT)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    pub fn build_tree_items(&self, node: &TreeNode) -> Vec<Element<'_, Message>> {
        let mut items = Vec::new();
        items.push(self.make_tree_item(node));

        if node.expanded {
            for child in &node.children {
                items.extend(self.build_tree_items(child));
            }
        }

        items
    }

    pub fn make_tree_item(&self, node: &TreeNode) -> Element<'_, Message> {
        let is_container = node.is_container();

        let icon = if is_container {
            if node.expanded { "[-]" } else { "[+]" }
        } else {
            " · "
        };

        let indent = (node.depth * 14 + 8) as f32;
        let path = node.path.clone();

        // Containers toggle and locate; leaves only locate.
        let msg = if is_container {
            Message::TreeBranchClicked(path)
        } else {
            Message::TreeLeafClicked(path)
        };

        let label_color = if is_container {
            colors::TEXT_PRIMARY
        } else {
            colors::TEXT_SECONDARY
        };

        button(
            row![
                Space::with_width(Length::Fixed(indent)),
                text(icon)
                    .size(12)
                    .font(Font::MONOSPACE)
                    .color(colors::TEXT_MUTED),
                Space::with_width(6),
                text(node.label.clone()).size(13).color(label_color),
            ]
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([4, 0]))
        .style(move |_, status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => Color::TRANSPARENT,
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
}
