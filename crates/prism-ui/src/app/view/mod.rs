pub mod dialogs;
pub mod editor;
pub mod sidebar;
pub mod toolbar;

use iced::widget::{Space, column, container, mouse_area, row, stack};
use iced::{Background, Color, Element, Length};

use crate::app::{App, Message};
use crate::theme::colors;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_menu_bar(),
            self.view_toolbar(),
            row![
                if self.tree_visible {
                    self.view_sidebar()
                } else {
                    container(Space::new(0, 0)).into()
                },
                self.view_main_area(),
            ]
            .height(Length::Fill),
            self.view_status_bar(),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into();

        let tracked_view: Element<'_, Message> = mouse_area(main_view)
            .on_move(Message::MouseMoved)
            .into();

        // Exactly one overlay is shown at a time; blocking dialogs win
        // over menus.
        if self.error_dialog.is_some() {
            stack![
                tracked_view,
                Self::scrim(Message::DismissError),
                self.view_error_modal(),
            ]
            .into()
        } else if self.pending_close.is_some() {
            stack![
                tracked_view,
                Self::scrim(Message::CancelCloseTab),
                self.view_confirm_close_modal(),
            ]
            .into()
        } else if self.quit_prompt_visible {
            stack![
                tracked_view,
                Self::scrim(Message::QuitCancel),
                self.view_quit_modal(),
            ]
            .into()
        } else if self.about_visible {
            stack![
                tracked_view,
                Self::scrim(Message::HideAbout),
                self.view_about_modal(),
            ]
            .into()
        } else if self.tab_menu.visible {
            stack![
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::HideTabContextMenu),
                tracked_view,
                self.view_tab_context_menu(),
            ]
            .into()
        } else if self.active_menu.is_some() {
            stack![
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::CloseTopMenu),
                tracked_view,
                self.view_menu_dropdown(),
            ]
            .into()
        } else {
            tracked_view
        }
    }

    /// Dimmed full-window backdrop behind modals; clicking it sends the
    /// dismiss message.
    fn scrim(on_press: Message) -> Element<'static, Message> {
        mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_| container::Style {
                    background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
                    ..Default::default()
                }),
        )
        .on_press(on_press)
        .into()
    }
}
