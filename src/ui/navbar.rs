// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar carries the app title, the display-mode toggle, and a hamburger
//! menu giving access to the Dashboard, Settings, and About screens.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeDescriptor;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a ThemeDescriptor,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    OpenDashboard,
    OpenSettings,
    OpenAbout,
    ToggleDisplayMode,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenScreen(Screen),
    ToggleDisplayMode,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::OpenDashboard => {
            *menu_open = false;
            Event::OpenScreen(Screen::Dashboard)
        }
        Message::OpenSettings => {
            *menu_open = false;
            Event::OpenScreen(Screen::Settings)
        }
        Message::OpenAbout => {
            *menu_open = false;
            Event::OpenScreen(Screen::About)
        }
        Message::ToggleDisplayMode => Event::ToggleDisplayMode,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

/// Build the top bar with title, display-mode toggle, and menu button.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;
    // Both modes put the sign-out surface under the bar buttons; the label
    // color that stays readable on it differs per mode.
    let button_text = if ctx.theme.mode.is_dark() {
        colors.contrast
    } else {
        colors.surface
    };

    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let toggle_key = if ctx.theme.mode.is_dark() {
        "navbar-display-mode-light"
    } else {
        "navbar-display-mode-dark"
    };
    let toggle_button = button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY))
        .on_press(Message::ToggleDisplayMode)
        .style(styles::accent_button(colors.sign_out, button_text))
        .padding(spacing::XS);

    let menu_button = button(Text::new(ctx.i18n.tr("navbar-menu")).size(typography::BODY))
        .on_press(Message::ToggleMenu)
        .style(styles::accent_button(colors.sign_out, button_text))
        .padding(spacing::XS);

    let bar = Row::new()
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(toggle_button)
        .push(menu_button)
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .width(Length::Fill);

    Container::new(bar)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::top_bar(colors.top_bar[0], colors.surface))
        .into()
}

/// Build the dropdown menu with the screen shortcuts.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    let entry = |key: &str, message: Message| {
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .on_press(message)
            .style(styles::accent_button(colors.options, colors.contrast))
            .width(Length::Fill)
            .padding(spacing::XS)
    };

    let menu = Column::new()
        .push(entry("nav-dashboard", Message::OpenDashboard))
        .push(entry("nav-settings", Message::OpenSettings))
        .push(entry("nav-about", Message::OpenAbout))
        .spacing(spacing::XXS)
        .width(Length::Fixed(220.0));

    Container::new(menu)
        .padding(spacing::XS)
        .style(styles::panel(
            colors.options_background,
            colors.message_box_border,
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_the_flag_without_an_event() {
        let mut menu_open = false;
        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(menu_open);

        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(!menu_open);
    }

    #[test]
    fn opening_a_screen_closes_the_menu() {
        let mut menu_open = true;
        let event = update(Message::OpenSettings, &mut menu_open);
        assert!(matches!(event, Event::OpenScreen(Screen::Settings)));
        assert!(!menu_open);
    }

    #[test]
    fn display_mode_toggle_leaves_the_menu_alone() {
        let mut menu_open = true;
        let event = update(Message::ToggleDisplayMode, &mut menu_open);
        assert!(matches!(event, Event::ToggleDisplayMode));
        assert!(menu_open);
    }
}
