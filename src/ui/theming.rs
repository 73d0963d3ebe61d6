// SPDX-License-Identifier: MPL-2.0
//! Display-mode resolution and theme derivation.
//!
//! The display mode is resolved once at startup (persisted preference first,
//! system signal second), held in app state for the session, and written back
//! to the preference store on every change. The [`ThemeDescriptor`] is a pure
//! function of the mode over the static color table below.

use crate::store::{keys, PreferenceStore};
use crate::ui::design_tokens::{opacity, palette, radius, sizing};
use dark_light;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// The light/dark visual setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Light,
    Dark,
}

impl DisplayMode {
    /// The opposite mode. Toggling twice returns to the starting mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    /// The persisted string form, `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    /// Parses a persisted mode string. Unrecognized or empty values yield
    /// `None` so resolution can fall through to the system signal.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(DisplayMode::Light),
            "dark" => Some(DisplayMode::Dark),
            _ => None,
        }
    }

    /// Resolves the startup mode: the persisted preference wins; otherwise
    /// the system dark-mode signal decides.
    #[must_use]
    pub fn resolve(store: &dyn PreferenceStore, system_prefers_dark: bool) -> Self {
        store
            .get(keys::PREFERRED_THEME)
            .as_deref()
            .and_then(Self::parse)
            .unwrap_or(if system_prefers_dark {
                DisplayMode::Dark
            } else {
                DisplayMode::Light
            })
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }
}

/// Reads the system dark-mode preference.
///
/// Only an explicit dark signal counts; detection errors and unspecified
/// platform settings read as "no dark preference".
#[must_use]
pub fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

/// Named color table for one display mode.
///
/// Field names follow the workspace's UI surfaces; which palette entry each
/// surface gets is the per-mode presentation data.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Accents
    pub primary: Color,
    pub text_primary: Color,
    pub border_primary: Color,
    pub accent_text: Color,
    pub quick_tags: Color,

    // Base surfaces
    pub surface: Color,
    pub contrast: Color,
    pub fancy_background: Color,
    pub login: Color,

    // Top bar gradient stops
    pub top_bar: [Color; 3],

    // Conversation surfaces
    pub chat_list: Color,
    pub box_chat_list: Color,
    pub new_message_box: Color,
    pub message_box_border: Color,
    pub compose_input: Color,
    pub input_background: Color,
    pub media_input: Color,
    pub message_icons: Color,

    // Ticket surfaces
    pub ticket_list: Color,
    pub box_ticket: Color,
    pub box_list: Color,
    pub tab_header: Color,
    pub campaign_tab: Color,
    pub totals: Color,
    pub dashboard_counter: Color,

    // Ancillary surfaces
    pub options: Color,
    pub options_background: Color,
    pub contact_drawer: Color,
    pub contact_card: Color,
    pub announcements: Color,
    pub announcements_popover: Color,
    pub sign_out: Color,
}

impl ColorScheme {
    /// Light mode color table.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: palette::PURPLE_500,
            text_primary: palette::PURPLE_500,
            border_primary: palette::PURPLE_500,
            accent_text: palette::PURPLE_700,
            quick_tags: palette::PURPLE_500,

            surface: palette::WHITE,
            contrast: palette::GRAY_850,
            fancy_background: palette::GRAY_100,
            login: palette::WHITE,

            top_bar: [palette::PURPLE_500, palette::PURPLE_400, palette::PURPLE_300],

            chat_list: palette::GRAY_300,
            box_chat_list: palette::GRAY_200,
            new_message_box: palette::GRAY_300,
            message_box_border: palette::GRAY_300,
            compose_input: palette::WHITE,
            input_background: palette::WHITE,
            media_input: palette::GRAY_200,
            message_icons: palette::GRAY_500,

            ticket_list: palette::GRAY_100,
            box_ticket: palette::GRAY_50,
            box_list: palette::GRAY_200,
            tab_header: palette::GRAY_50,
            campaign_tab: palette::GRAY_200,
            totals: palette::WHITE,
            dashboard_counter: palette::WHITE,

            options: palette::GRAY_100,
            options_background: palette::GRAY_100,
            contact_drawer: palette::WHITE,
            contact_card: palette::PURPLE_500,
            announcements: palette::GRAY_200,
            announcements_popover: palette::WHITE,
            sign_out: palette::PURPLE_500,
        }
    }

    /// Dark mode color table.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: palette::CYAN_500,
            text_primary: palette::CYAN_500,
            border_primary: palette::CYAN_500,
            accent_text: palette::CYAN_500,
            quick_tags: palette::PURPLE_500,

            surface: palette::GRAY_850,
            contrast: palette::WHITE,
            fancy_background: palette::GRAY_850,
            login: palette::GRAY_950,

            top_bar: [palette::CYAN_500, palette::SKY_500, palette::PURPLE_500],

            chat_list: palette::GRAY_750,
            box_chat_list: palette::GRAY_850,
            new_message_box: palette::GRAY_850,
            message_box_border: palette::GRAY_850,
            compose_input: palette::GRAY_750,
            input_background: palette::GRAY_850,
            media_input: palette::GRAY_950,
            message_icons: palette::CYAN_500,

            ticket_list: palette::GRAY_850,
            box_ticket: palette::GRAY_750,
            box_list: palette::GRAY_750,
            tab_header: palette::GRAY_750,
            campaign_tab: palette::GRAY_750,
            totals: palette::GRAY_900,
            dashboard_counter: palette::CYAN_500,

            options: palette::GRAY_750,
            options_background: palette::GRAY_850,
            contact_drawer: palette::GRAY_750,
            contact_card: palette::GRAY_750,
            announcements: palette::GRAY_850,
            announcements_popover: palette::GRAY_750,
            sign_out: palette::GRAY_850,
        }
    }

    /// Color table for the given mode.
    #[must_use]
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self::light(),
            DisplayMode::Dark => Self::dark(),
        }
    }
}

/// Scrollbar styling record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarStyle {
    /// Rail and thumb width in logical pixels.
    pub width: f32,
    pub radius: f32,
    pub thumb: Color,
    /// Inset shadow drawn inside the thumb, when any.
    pub shadow: Option<Color>,
}

impl ScrollbarStyle {
    /// Prominent variant used next to dense content. The thumb color is
    /// mode-independent.
    #[must_use]
    pub fn bold(_mode: DisplayMode) -> Self {
        Self {
            width: sizing::SCROLLBAR,
            radius: radius::MD,
            thumb: palette::GREEN_500,
            shadow: Some(Color {
                a: opacity::SHADOW,
                ..palette::BLACK
            }),
        }
    }

    /// Subdued variant that blends into the surface of the current mode.
    #[must_use]
    pub fn soft(mode: DisplayMode) -> Self {
        Self {
            width: sizing::SCROLLBAR,
            radius: radius::MD,
            thumb: match mode {
                DisplayMode::Light => palette::GRAY_150,
                DisplayMode::Dark => palette::GRAY_700,
            },
            shadow: None,
        }
    }
}

/// Derived color/style bundle handed to the presentation layer.
///
/// Recomputed whenever the display mode changes; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDescriptor {
    pub mode: DisplayMode,
    pub colors: ColorScheme,
    pub scrollbar_bold: ScrollbarStyle,
    pub scrollbar_soft: ScrollbarStyle,
}

impl ThemeDescriptor {
    /// Pure derivation: the same mode always yields a structurally identical
    /// descriptor.
    #[must_use]
    pub fn derive(mode: DisplayMode) -> Self {
        Self {
            mode,
            colors: ColorScheme::for_mode(mode),
            scrollbar_bold: ScrollbarStyle::bold(mode),
            scrollbar_soft: ScrollbarStyle::soft(mode),
        }
    }

    /// The Iced runtime theme consumed by the built-in widget defaults.
    #[must_use]
    pub fn runtime_theme(&self) -> Theme {
        match self.mode {
            DisplayMode::Light => Theme::Light,
            DisplayMode::Dark => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn absent_preference_follows_system_signal() {
        let store = MemoryStore::default();
        assert_eq!(DisplayMode::resolve(&store, true), DisplayMode::Dark);
        assert_eq!(DisplayMode::resolve(&store, false), DisplayMode::Light);
    }

    #[test]
    fn stored_preference_wins_over_system_signal() {
        let store = MemoryStore::default();
        store.set(keys::PREFERRED_THEME, "light").unwrap();
        assert_eq!(DisplayMode::resolve(&store, true), DisplayMode::Light);

        store.set(keys::PREFERRED_THEME, "dark").unwrap();
        assert_eq!(DisplayMode::resolve(&store, false), DisplayMode::Dark);
    }

    #[test]
    fn unrecognized_stored_value_behaves_as_absent() {
        let store = MemoryStore::default();
        store.set(keys::PREFERRED_THEME, "sepia").unwrap();
        assert_eq!(DisplayMode::resolve(&store, true), DisplayMode::Dark);

        store.set(keys::PREFERRED_THEME, "").unwrap();
        assert_eq!(DisplayMode::resolve(&store, false), DisplayMode::Light);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(DisplayMode::Light.toggled().toggled(), DisplayMode::Light);
        assert_eq!(DisplayMode::Dark.toggled().toggled(), DisplayMode::Dark);
        assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
    }

    #[test]
    fn mode_strings_round_trip() {
        for mode in [DisplayMode::Light, DisplayMode::Dark] {
            assert_eq!(DisplayMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(DisplayMode::parse("system"), None);
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(
            ThemeDescriptor::derive(DisplayMode::Light),
            ThemeDescriptor::derive(DisplayMode::Light)
        );
        assert_eq!(
            ThemeDescriptor::derive(DisplayMode::Dark),
            ThemeDescriptor::derive(DisplayMode::Dark)
        );
    }

    #[test]
    fn light_and_dark_schemes_disagree_on_surfaces() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        assert!(light.surface.r > dark.surface.r);
        assert!(dark.contrast.r > light.contrast.r);
        assert_ne!(light.primary, dark.primary);
    }

    #[test]
    fn bold_scrollbar_thumb_is_mode_independent() {
        assert_eq!(
            ScrollbarStyle::bold(DisplayMode::Light).thumb,
            ScrollbarStyle::bold(DisplayMode::Dark).thumb
        );
    }

    #[test]
    fn soft_scrollbar_thumb_follows_mode() {
        let light = ScrollbarStyle::soft(DisplayMode::Light);
        let dark = ScrollbarStyle::soft(DisplayMode::Dark);
        assert_ne!(light.thumb, dark.thumb);
        assert!(light.thumb.r > dark.thumb.r);
    }
}
