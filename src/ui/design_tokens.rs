// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the theme composer and the widget styles.
//!
//! The palette holds every color the two display modes draw from; which
//! surface gets which color is decided in [`crate::ui::theming`], keyed by
//! mode. Values here are presentation data, not behavior.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale, light end
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_50: Color = Color::from_rgb(0.973, 0.973, 0.973);
    pub const GRAY_100: Color = Color::from_rgb(0.961, 0.961, 0.961);
    pub const GRAY_150: Color = Color::from_rgb(0.953, 0.953, 0.953);
    pub const GRAY_200: Color = Color::from_rgb(0.941, 0.941, 0.941);
    pub const GRAY_300: Color = Color::from_rgb(0.898, 0.898, 0.898);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.447, 0.502);

    // Grayscale, dark end
    pub const GRAY_700: Color = Color::from_rgb(0.2, 0.2, 0.2);
    pub const GRAY_750: Color = Color::from_rgb(0.176, 0.176, 0.176);
    pub const GRAY_850: Color = Color::from_rgb(0.102, 0.102, 0.102);
    pub const GRAY_900: Color = Color::from_rgb(0.078, 0.078, 0.078);
    pub const GRAY_950: Color = Color::from_rgb(0.039, 0.039, 0.039);
    pub const BLACK: Color = Color::BLACK;

    // Brand colors (violet scale, light mode accent)
    pub const PURPLE_300: Color = Color::from_rgb(0.753, 0.518, 0.988);
    pub const PURPLE_400: Color = Color::from_rgb(0.659, 0.333, 0.969);
    pub const PURPLE_500: Color = Color::from_rgb(0.545, 0.361, 0.965);
    pub const PURPLE_700: Color = Color::from_rgb(0.427, 0.157, 0.851);

    // Brand colors (cyan scale, dark mode accent)
    pub const CYAN_500: Color = Color::from_rgb(0.0, 1.0, 1.0);
    pub const SKY_500: Color = Color::from_rgb(0.055, 0.647, 0.914);

    // Scrollbar accent
    pub const GREEN_500: Color = Color::from_rgb(0.176, 0.867, 0.498);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Inset shadow drawn inside the bold scrollbar thumb.
    pub const SHADOW: f32 = 0.3;

    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Scrollbar rail and thumb width.
    pub const SCROLLBAR: f32 = 8.0;

    /// Height of the top navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Main screen headings (Dashboard, Settings, About)
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - App name in the navbar
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Event timestamps, status lines
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);

    // The gray ramp must stay ordered so mode-keyed surfaces keep contrast.
    assert!(palette::GRAY_50.r > palette::GRAY_300.r);
    assert!(palette::GRAY_700.r > palette::GRAY_850.r);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn light_grays_are_lighter_than_dark_grays() {
        assert!(palette::GRAY_200.r > palette::GRAY_700.r);
        assert!(palette::GRAY_300.r > palette::GRAY_750.r);
    }
}
