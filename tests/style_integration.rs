// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use chatdesk::ui::design_tokens::{opacity, palette, spacing, typography};
    use chatdesk::ui::theming::{ColorScheme, DisplayMode, ScrollbarStyle, ThemeDescriptor};

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PURPLE_500;
        let _ = palette::CYAN_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::SHADOW;

        // Typography
        let _ = typography::TITLE_LG;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ThemeDescriptor::derive(DisplayMode::Light);
        let dark = ThemeDescriptor::derive(DisplayMode::Dark);

        // Base surfaces should be visually opposite between light and dark
        assert!(light.colors.surface.r > dark.colors.surface.r);

        // Contrast colors should also be opposite between light and dark
        assert!(light.colors.contrast.r < dark.colors.contrast.r);
    }

    #[test]
    fn both_modes_share_the_bold_scrollbar_accent() {
        let light = ScrollbarStyle::bold(DisplayMode::Light);
        let dark = ScrollbarStyle::bold(DisplayMode::Dark);

        assert_eq!(light.thumb, dark.thumb);
        assert!(light.shadow.is_some());
    }

    #[test]
    fn descriptor_scrollbars_follow_the_color_table() {
        let descriptor = ThemeDescriptor::derive(DisplayMode::Dark);

        assert_eq!(descriptor.scrollbar_soft, ScrollbarStyle::soft(DisplayMode::Dark));
        assert_eq!(descriptor.colors, ColorScheme::dark());
    }

    #[test]
    fn runtime_theme_tracks_the_mode() {
        assert_eq!(
            ThemeDescriptor::derive(DisplayMode::Light).runtime_theme(),
            iced::Theme::Light
        );
        assert_eq!(
            ThemeDescriptor::derive(DisplayMode::Dark).runtime_theme(),
            iced::Theme::Dark
        );
    }
}
