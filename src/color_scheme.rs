use ratatui::style::Color;

/// Color slots used across the display.
///
/// The swatch order mirrors the classic eight-color terminal palette.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub logo: Color,

    // Identity line
    pub host_text: Color,
    pub device_text: Color,
    pub separator: Color,

    // Field rows
    pub icon: Color,
    pub field_value: Color,

    /// Fixed swatch strip: black, red, green, yellow, blue, magenta, cyan, white.
    pub swatch: [Color; 8],
}

impl ColorScheme {
    /// The one built-in scheme, matching default terminal colors.
    fn default_scheme() -> Self {
        Self {
            logo: Color::White,

            host_text: Color::Yellow,
            device_text: Color::Blue,
            separator: Color::White,

            icon: Color::Magenta,
            field_value: Color::Green,

            swatch: [
                Color::Black,
                Color::Red,
                Color::Green,
                Color::Yellow,
                Color::Blue,
                Color::Magenta,
                Color::Cyan,
                Color::White,
            ],
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_scheme()
    }
}
