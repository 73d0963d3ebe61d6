// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display-language selection and the display-mode switch.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeDescriptor;
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a ThemeDescriptor,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ToggleDisplayMode,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    LanguageSelected(LanguageIdentifier),
    ToggleDisplayMode,
}

/// Process a settings message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ToggleDisplayMode => Event::ToggleDisplayMode,
    }
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    Column::new()
        .push(title)
        .push(language_section(&ctx))
        .push(display_mode_section(&ctx))
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .push(Text::new(ctx.i18n.tr("select-language-label")).size(typography::BODY))
        .spacing(spacing::XS);

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-pt-BR".
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            translated_name
        };

        let is_current_locale = ctx.i18n.current_locale() == locale;
        let mut entry = Button::new(Text::new(button_text).size(typography::BODY))
            .on_press(Message::LanguageSelected(locale.clone()));

        if is_current_locale {
            entry = entry.style(button::primary);
        } else {
            entry = entry.style(button::secondary);
        }

        column = column.push(entry);
    }

    column.into()
}

fn display_mode_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    let current_key = if ctx.theme.mode.is_dark() {
        "display-mode-dark"
    } else {
        "display-mode-light"
    };
    let target_key = if ctx.theme.mode.is_dark() {
        "display-mode-light"
    } else {
        "display-mode-dark"
    };

    let label = Text::new(format!(
        "{}: {}",
        ctx.i18n.tr("settings-display-mode-label"),
        ctx.i18n.tr(current_key)
    ))
    .size(typography::BODY);

    let switch = button(Text::new(ctx.i18n.tr(target_key)).size(typography::BODY))
        .on_press(Message::ToggleDisplayMode)
        .style(styles::accent_button(colors.primary, colors.surface))
        .padding(spacing::XS);

    Row::new()
        .push(label)
        .push(switch)
        .spacing(spacing::MD)
        .into()
}
