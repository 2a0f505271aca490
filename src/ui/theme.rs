use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    pub success: ColorSpec,
    pub error: ColorSpec,

    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub button_bg: ColorSpec,
    pub button_fg: ColorSpec,
    pub header_bg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::storefront()
    }
}

impl Theme {
    /// Storefront theme, red call-to-action on neutral greys.
    ///
    pub fn storefront() -> Self {
        Theme {
            name: "storefront".to_string(),
            primary: ColorSpec::rgb(238, 49, 49),
            banner: ColorSpec::rgb(238, 49, 49),
            text: ColorSpec::rgb(220, 220, 220),
            text_muted: ColorSpec::rgb(102, 102, 102),
            success: ColorSpec::rgb(80, 200, 120),
            error: ColorSpec::rgb(238, 49, 49),
            border_active: ColorSpec::rgb(238, 49, 49),
            border_normal: ColorSpec::rgb(208, 208, 208),
            button_bg: ColorSpec::rgb(238, 49, 49),
            button_fg: ColorSpec::rgb(255, 255, 255),
            header_bg: ColorSpec::rgb(240, 240, 240),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),  // Blue
            banner: ColorSpec::rgb(187, 154, 247),   // Purple
            text: ColorSpec::rgb(192, 202, 245),     // Foreground
            text_muted: ColorSpec::rgb(86, 95, 137), // Comment
            success: ColorSpec::rgb(158, 206, 106),  // Green
            error: ColorSpec::rgb(247, 118, 142),    // Red
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(65, 72, 104),
            button_bg: ColorSpec::rgb(122, 162, 247),
            button_fg: ColorSpec::rgb(26, 27, 38),
            header_bg: ColorSpec::rgb(36, 40, 59),
        }
    }

    /// Return the theme registered under the name, if any.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "storefront" => Some(Self::storefront()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    pub fn available_themes() -> Vec<String> {
        vec!["storefront".to_string(), "tokyo-night".to_string()]
    }
}
