// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar plus the current screen from the provider bundle. All
//! colors come from the derived theme descriptor; no widget reaches for the
//! store or the system signal.

use super::{Message, Providers, Screen};
use crate::i18n::fluent::I18n;
use crate::i18n::regional;
use crate::realtime;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::{
    widget::{Column, Container, Row, Scrollable, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub providers: &'a Providers,
    pub menu_open: bool,
    pub server_status: Option<&'a str>,
    pub recent_events: &'a [realtime::Event],
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let theme = &ctx.providers.theme;

    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        theme,
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    let content: Element<'_, Message> = match ctx.screen {
        Screen::Dashboard => view_dashboard(&ctx),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            theme,
        })
        .map(Message::Settings),
        Screen::About => view_about(&ctx),
    };

    let body = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::surface(theme.colors.fancy_background));

    Column::new().push(navbar).push(body).into()
}

fn view_dashboard<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let theme = &ctx.providers.theme;
    let colors = &theme.colors;

    let title = Text::new(ctx.i18n.tr("dashboard-title"))
        .size(typography::TITLE_LG)
        .color(colors.accent_text);

    let connection = Row::new()
        .push(
            Text::new(ctx.i18n.tr("dashboard-connection-label"))
                .size(typography::BODY)
                .color(colors.contrast),
        )
        .push(
            Text::new(ctx.i18n.tr(ctx.providers.realtime.state().i18n_key()))
                .size(typography::BODY)
                .color(colors.primary),
        )
        .spacing(spacing::XS);

    let status_text = match ctx.server_status {
        Some(status) => status.to_string(),
        None => ctx.i18n.tr("dashboard-server-status-pending"),
    };
    let status = Row::new()
        .push(
            Text::new(ctx.i18n.tr("dashboard-server-status-label"))
                .size(typography::BODY)
                .color(colors.contrast),
        )
        .push(
            Text::new(status_text)
                .size(typography::BODY)
                .color(colors.message_icons),
        )
        .spacing(spacing::XS);

    Column::new()
        .push(title)
        .push(connection)
        .push(status)
        .push(view_event_feed(ctx))
        .spacing(spacing::MD)
        .width(Length::Fill)
        .into()
}

/// The recent-activity feed delivered through the real-time handle.
fn view_event_feed<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let theme = &ctx.providers.theme;
    let colors = &theme.colors;
    let convention = ctx.providers.regional;

    let label = Text::new(ctx.i18n.tr("dashboard-events-label"))
        .size(typography::BODY)
        .color(colors.contrast);

    let mut entries = Column::new().spacing(spacing::XXS);
    if ctx.recent_events.is_empty() {
        entries = entries.push(
            Text::new(ctx.i18n.tr("dashboard-no-events"))
                .size(typography::CAPTION)
                .color(colors.message_icons),
        );
    } else {
        for event in ctx.recent_events {
            let stamp = format!(
                "{} {}",
                event.received_at.format(regional::date_format_for(convention)),
                event.received_at.format(regional::time_format_for(convention)),
            );
            let line = Row::new()
                .push(
                    Text::new(stamp)
                        .size(typography::CAPTION)
                        .color(colors.message_icons),
                )
                .push(
                    Text::new(format!("{}: {}", event.kind, event.payload))
                        .size(typography::CAPTION)
                        .color(colors.contrast),
                )
                .spacing(spacing::XS);
            entries = entries.push(line);
        }
    }

    let bar = theme.scrollbar_soft;
    let feed = Scrollable::new(entries.width(Length::Fill).padding(spacing::XS))
        .direction(Direction::Vertical(
            Scrollbar::new().width(bar.width).scroller_width(bar.width),
        ))
        .style(styles::scrollbar(bar))
        .height(Length::Fixed(220.0));

    let panel = Container::new(feed)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::panel(
            colors.box_chat_list,
            colors.message_box_border,
        ));

    Column::new()
        .push(label)
        .push(panel)
        .spacing(spacing::XS)
        .into()
}

fn view_about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.providers.theme.colors;

    let title = Text::new(ctx.i18n.tr("about-title"))
        .size(typography::TITLE_LG)
        .color(colors.accent_text);
    let description = Text::new(ctx.i18n.tr("about-description"))
        .size(typography::BODY)
        .color(colors.contrast);
    let version = Text::new(format!(
        "{} {}",
        ctx.i18n.tr("about-version"),
        env!("CARGO_PKG_VERSION")
    ))
    .size(typography::CAPTION)
    .color(colors.message_icons);

    Column::new()
        .push(title)
        .push(description)
        .push(version)
        .spacing(spacing::MD)
        .into()
}
