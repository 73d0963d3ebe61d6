// SPDX-License-Identifier: MPL-2.0
//! Widget style helpers fed from the derived theme descriptor.
//!
//! Every helper takes plain colors (or a scrollbar record) by value so the
//! returned closures stay `'static` while the descriptor itself remains owned
//! by the composition root.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ScrollbarStyle;
use iced::widget::{button, container, scrollable};
use iced::{border, Background, Border, Color, Shadow, Theme};

/// Flat content surface (screen backgrounds).
pub fn surface(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Top navigation bar surface with its own text color.
pub fn top_bar(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Bordered panel used for grouped content (event feed, settings sections).
pub fn panel(background: Color, border: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Accent button carrying the mode's primary color.
pub fn accent_button(
    background: Color,
    text: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: 0.85,
                ..background
            },
            _ => background,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: text,
            border: border::rounded(radius::SM),
            ..button::Style::default()
        }
    }
}

/// Scrollbar styling derived from one of the descriptor's records.
pub fn scrollbar(bar: ScrollbarStyle) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    move |_theme: &Theme, _status: scrollable::Status| {
        let rail = scrollable::Rail {
            background: bar.shadow.map(Background::Color),
            border: border::rounded(bar.radius),
            scroller: scrollable::Scroller {
                background: Background::Color(bar.thumb),
                border: border::rounded(bar.radius),
            },
        };

        let auto_scroll = scrollable::AutoScroll {
            background: Background::Color(bar.thumb),
            border: border::rounded(bar.radius),
            shadow: Shadow::default(),
            icon: bar.shadow.unwrap_or(Color::BLACK),
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll,
        }
    }
}
