use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Brand manual colours
pub const PRIMARY_GREEN: Color = Color::Rgb(0x00, 0x59, 0x4F); // #00594F
pub const PRIMARY_YELLOW: Color = Color::Rgb(0xDB, 0x8A, 0x06); // #DB8A06
pub const SECONDARY_BEIGE: Color = Color::Rgb(0xED, 0xC4, 0x72); // #EDC472
pub const SECONDARY_LIGHT_GREEN: Color = Color::Rgb(0x86, 0xA9, 0x6F); // #86A96F
pub const NEUTRAL_GRAY: Color = Color::Rgb(0x67, 0x67, 0x69); // #676769
pub const ACCENT_BLUE: Color = Color::Rgb(0x02, 0x54, 0x9D); // #02549D
pub const TEXT_PRIMARY: Color = Color::Rgb(0x1A, 0x20, 0x2C); // #1a202c
pub const TEXT_SECONDARY: Color = Color::Rgb(0x4A, 0x55, 0x68); // #4a5568
pub const BACKGROUND_LIGHT: Color = Color::Rgb(0xF7, 0xFA, 0xFC); // #f7fafc
pub const BACKGROUND_WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const DANGER: Color = Color::Rgb(0xE5, 0x3E, 0x3E); // #e53e3e
pub const SUCCESS: Color = Color::Rgb(0x38, 0xA1, 0x69); // #38a169

// Neutral greys for the dark scheme
const GRAY_100: Color = Color::Rgb(0xF3, 0xF4, 0xF6);
const GRAY_200: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
const GRAY_300: Color = Color::Rgb(0xD1, 0xD5, 0xDB);
const GRAY_400: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
const GRAY_500: Color = Color::Rgb(0x6B, 0x72, 0x80);
const GRAY_600: Color = Color::Rgb(0x4B, 0x55, 0x63);
const GRAY_700: Color = Color::Rgb(0x37, 0x41, 0x51);
const GRAY_800: Color = Color::Rgb(0x1F, 0x29, 0x37);
const GRAY_900: Color = Color::Rgb(0x11, 0x18, 0x27);

/// Brand colours on light surfaces, green sidebar.
#[derive(Debug, Clone)]
pub struct SafraLightTheme {
    roles: ThemeRoles,
}

impl SafraLightTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BACKGROUND_LIGHT,
                surface: BACKGROUND_WHITE,
                surface_muted: GRAY_100,
                border: GRAY_200,
                divider: GRAY_200,

                text: TEXT_PRIMARY,
                text_secondary: TEXT_SECONDARY,
                text_muted: GRAY_500,

                accent_primary: PRIMARY_GREEN,
                accent_secondary: PRIMARY_YELLOW,
                accent_subtle: SECONDARY_BEIGE,
                accent_info: ACCENT_BLUE,

                success: SUCCESS,
                error: DANGER,
                neutral: TEXT_SECONDARY,

                selection_bg: SECONDARY_BEIGE,
                selection_fg: PRIMARY_GREEN,
                focus: PRIMARY_YELLOW,

                modal_bg: GRAY_300,

                sidebar_bg: PRIMARY_GREEN,
                sidebar_fg: GRAY_100,
                sidebar_active_bg: SECONDARY_LIGHT_GREEN,
                sidebar_parent_bg: Color::Rgb(0x1A, 0x6E, 0x64),
            },
        }
    }
}

impl Default for SafraLightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for SafraLightTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Grey surfaces with the brand accents kept for emphasis.
#[derive(Debug, Clone)]
pub struct SafraDarkTheme {
    roles: ThemeRoles,
}

impl SafraDarkTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: GRAY_900,
                surface: GRAY_800,
                surface_muted: GRAY_700,
                border: GRAY_700,
                divider: GRAY_700,

                text: GRAY_100,
                text_secondary: GRAY_300,
                text_muted: GRAY_400,

                accent_primary: SECONDARY_LIGHT_GREEN,
                accent_secondary: PRIMARY_YELLOW,
                accent_subtle: SECONDARY_BEIGE,
                accent_info: ACCENT_BLUE,

                success: SUCCESS,
                error: DANGER,
                neutral: NEUTRAL_GRAY,

                selection_bg: GRAY_700,
                selection_fg: Color::White,
                focus: PRIMARY_YELLOW,

                modal_bg: Color::Black,

                sidebar_bg: GRAY_800,
                sidebar_fg: GRAY_300,
                sidebar_active_bg: GRAY_700,
                sidebar_parent_bg: GRAY_600,
            },
        }
    }
}

impl Default for SafraDarkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for SafraDarkTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Colours assigned to the sales-by-product legend, in fixture order.
pub const SERIES_COLORS: [Color; 4] = [PRIMARY_GREEN, PRIMARY_YELLOW, SECONDARY_BEIGE, ACCENT_BLUE];
