//! Row style value
//!
//! The writer treats [`Style`] as an opaque value attached to rows by default;
//! turning it into a stylesheet entry is the serializer's job.

/// Default font family for new styles
pub const DEFAULT_FONT_NAME: &str = "Calibri";

/// Default font size in points
pub const DEFAULT_FONT_SIZE: f64 = 11.0;

/// Color used by fonts and fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Let the application pick
    #[default]
    Auto,
    /// Opaque RGB color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Parse `"#RRGGBB"` or `"RRGGBB"`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb { r, g, b })
    }

    /// ARGB hex as written into OOXML (`FF` alpha), `None` for [`Color::Auto`]
    pub fn to_argb_hex(&self) -> Option<String> {
        match self {
            Color::Auto => None,
            Color::Rgb { r, g, b } => Some(format!("FF{:02X}{:02X}{:02X}", r, g, b)),
        }
    }
}

/// Cell/row style
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Font family name
    pub font_name: String,
    /// Font size in points
    pub font_size: f64,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
    /// Font color
    pub font_color: Color,
    /// Solid background fill
    pub background: Option<Color>,
    /// Wrap text in the cell
    pub wrap_text: bool,
    /// Custom number format code
    pub number_format: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            bold: false,
            italic: false,
            underline: false,
            font_color: Color::Auto,
            background: None,
            wrap_text: false,
            number_format: None,
        }
    }
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font_name = name.into();
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = color;
        self
    }

    /// Set a solid background color
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    /// Set number format code
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = Some(format.into());
        self
    }

    /// Check if nothing differs from [`Style::default`]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = Style::new();
        assert_eq!(style.font_name, "Calibri");
        assert_eq!(style.font_size, 11.0);
        assert!(style.is_default());
    }

    #[test]
    fn test_builder() {
        let style = Style::new()
            .bold(true)
            .font_size(14.0)
            .background(Color::rgb(255, 255, 0))
            .number_format("0.00");

        assert!(style.bold);
        assert!(!style.is_default());
        assert_eq!(style.number_format.as_deref(), Some("0.00"));
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::from_hex("#1F4E79"), Some(Color::rgb(0x1F, 0x4E, 0x79)));
        assert_eq!(Color::from_hex("12345"), None);
        assert_eq!(Color::from_hex("GGGGGG"), None);
        assert_eq!(
            Color::rgb(255, 0, 16).to_argb_hex().as_deref(),
            Some("FFFF0010")
        );
        assert_eq!(Color::Auto.to_argb_hex(), None);
    }
}
