//! Color catalog for chat components.
//!
//! Colors come from two places: the sixteen named chat colors, looked up by
//! their exact lowercase identifier, and custom `#rrggbb` hex values.
//!
//! Named colors carry a preset background (the darker "shadow" shade used
//! behind text) and, where a terminal equivalent exists, an SGR code for
//! ANSI output. Custom colors have neither.

use std::borrow::Cow;
use std::fmt;

use phf::phf_map;

use crate::error::ColorError;

/// Bits of a foreground value that are drawn as red, green and blue.
const RGB_MASK: u32 = 0xFF_FFFF;

/// An immutable chat color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    foreground: u32,
    background: u32,
    name: Cow<'static, str>,
    ansi_code: Option<&'static str>,
}

impl Color {
    pub const BLACK: Color = Color::named(0x000000, 0x000000, "black", Some("30"));
    pub const DARK_BLUE: Color = Color::named(0x0000AA, 0x00002A, "dark_blue", Some("34"));
    pub const DARK_GREEN: Color = Color::named(0x00AA00, 0x002A00, "dark_green", Some("32"));
    pub const DARK_AQUA: Color = Color::named(0x00AAAA, 0x002A2A, "dark_aqua", Some("36"));
    pub const DARK_RED: Color = Color::named(0xAA0000, 0x2A0000, "dark_red", Some("31"));
    pub const DARK_PURPLE: Color = Color::named(0xAA00AA, 0x2A002A, "dark_purple", Some("35"));
    pub const GOLD: Color = Color::named(0xFFAA00, 0x2A2A00, "gold", Some("33"));
    pub const GRAY: Color = Color::named(0xAAAAAA, 0x2A2A2A, "gray", None);
    pub const DARK_GRAY: Color = Color::named(0x555555, 0x151515, "dark_gray", None);
    pub const BLUE: Color = Color::named(0x5555FF, 0x15153F, "blue", Some("34;1"));
    pub const GREEN: Color = Color::named(0x55FF55, 0x153F15, "green", Some("32;1"));
    pub const AQUA: Color = Color::named(0x55FFFF, 0x153F3F, "aqua", Some("36;1"));
    pub const RED: Color = Color::named(0xFF5555, 0x3F1515, "red", Some("31;1"));
    pub const LIGHT_PURPLE: Color = Color::named(0xFF55FF, 0x3F153F, "light_purple", Some("35;1"));
    pub const YELLOW: Color = Color::named(0xFFFF55, 0x3F3F15, "yellow", Some("33;1"));
    pub const WHITE: Color = Color::named(0xFFFFFF, 0x3F3F3F, "white", Some("37;1"));

    const fn named(
        foreground: u32,
        background: u32,
        name: &'static str,
        ansi_code: Option<&'static str>,
    ) -> Self {
        Self {
            foreground,
            background,
            name: Cow::Borrowed(name),
            ansi_code,
        }
    }

    /// Creates a custom color from a raw foreground value.
    ///
    /// Custom colors have no background shade and no ANSI code. The value is
    /// kept as given; the name holds only its low 24 bits, the same bits
    /// `to_rgb` uses.
    pub fn custom(foreground: u32) -> Self {
        Self {
            foreground,
            background: 0,
            name: Cow::Owned(format!("#{:06x}", foreground & RGB_MASK)),
            ansi_code: None,
        }
    }

    /// Looks up one of the sixteen named colors.
    ///
    /// The match is exact and case-sensitive: `"red"` is a color, `"Red"` is
    /// not.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat::Color;
    ///
    /// assert_eq!(Color::lookup_by_name("gold"), Some(Color::GOLD));
    /// assert_eq!(Color::lookup_by_name("Gold"), None);
    /// ```
    pub fn lookup_by_name(name: &str) -> Option<Color> {
        NAMED_COLORS.get(name).map(|color| (*color).clone())
    }

    /// Parses a custom color written as `#` followed by 1 to 8 hex digits.
    ///
    /// Every character after `#` must be a hex digit; there is no partial
    /// parse that stops at the first bad character.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat::Color;
    ///
    /// let color = Color::parse_hex("#ff5733").unwrap();
    /// assert_eq!(color.foreground(), 0xff5733);
    /// assert!(Color::parse_hex("#12zz56").is_err());
    /// ```
    pub fn parse_hex(text: &str) -> Result<Color, ColorError> {
        let invalid = || ColorError::InvalidHexDigits(text.to_string());

        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if digits.is_empty() || digits.len() > 8 {
            return Err(invalid());
        }
        // from_str_radix accepts a leading '+', so check the digits ourselves.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Color::custom(value))
    }

    /// Returns every named color in catalog order.
    pub fn named_colors() -> &'static [Color; 16] {
        &CATALOG
    }

    /// Text color as `0xRRGGBB`.
    pub fn foreground(&self) -> u32 {
        self.foreground
    }

    /// Shadow color as `0xRRGGBB`; zero for custom colors.
    pub fn background(&self) -> u32 {
        self.background
    }

    /// Canonical name: the catalog identifier or `#rrggbb`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// SGR parameters for this color (e.g. `31;1`), if it has a terminal
    /// equivalent.
    pub fn ansi_code(&self) -> Option<&'static str> {
        self.ansi_code
    }

    /// Returns true if this is one of the sixteen named colors.
    pub fn is_named(&self) -> bool {
        matches!(self.name, Cow::Borrowed(_))
    }

    /// Splits the foreground into `(r, g, b)` components.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.foreground.to_be_bytes();
        (r, g, b)
    }

    /// Formats the foreground as a CSS hex color (`#rrggbb`).
    pub fn to_css_hex(&self) -> String {
        format!("#{:06x}", self.foreground & RGB_MASK)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

static CATALOG: [Color; 16] = [
    Color::BLACK,
    Color::DARK_BLUE,
    Color::DARK_GREEN,
    Color::DARK_AQUA,
    Color::DARK_RED,
    Color::DARK_PURPLE,
    Color::GOLD,
    Color::GRAY,
    Color::DARK_GRAY,
    Color::BLUE,
    Color::GREEN,
    Color::AQUA,
    Color::RED,
    Color::LIGHT_PURPLE,
    Color::YELLOW,
    Color::WHITE,
];

static NAMED_COLORS: phf::Map<&'static str, &'static Color> = phf_map! {
    "black" => &CATALOG[0],
    "dark_blue" => &CATALOG[1],
    "dark_green" => &CATALOG[2],
    "dark_aqua" => &CATALOG[3],
    "dark_red" => &CATALOG[4],
    "dark_purple" => &CATALOG[5],
    "gold" => &CATALOG[6],
    "gray" => &CATALOG[7],
    "dark_gray" => &CATALOG[8],
    "blue" => &CATALOG[9],
    "green" => &CATALOG[10],
    "aqua" => &CATALOG[11],
    "red" => &CATALOG[12],
    "light_purple" => &CATALOG[13],
    "yellow" => &CATALOG[14],
    "white" => &CATALOG[15],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_named_color() {
        assert_eq!(Color::lookup_by_name("red"), Some(Color::RED));
        assert_eq!(Color::lookup_by_name("dark_gray"), Some(Color::DARK_GRAY));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Color::lookup_by_name("RED"), None);
        assert_eq!(Color::lookup_by_name("Dark_Blue"), None);
    }

    #[test]
    fn lookup_unknown() {
        assert_eq!(Color::lookup_by_name("pink"), None);
        assert_eq!(Color::lookup_by_name(""), None);
        assert_eq!(Color::lookup_by_name(" red"), None);
    }

    #[test]
    fn parse_hex_long() {
        let color = Color::parse_hex("#ff5733").unwrap();
        assert_eq!(color.foreground(), 0xff5733);
        assert_eq!(color.background(), 0);
        assert_eq!(color.ansi_code(), None);
        assert_eq!(color.name(), "#ff5733");
    }

    #[test]
    fn parse_hex_short_is_a_plain_number() {
        assert_eq!(Color::parse_hex("#f").unwrap().foreground(), 0xf);
        assert_eq!(Color::parse_hex("#f00").unwrap().name(), "#000f00");
    }

    #[test]
    fn parse_hex_wide_values_keep_low_bits_in_name() {
        let color = Color::parse_hex("#1234567").unwrap();
        assert_eq!(color.foreground(), 0x1234567);
        assert_eq!(color.name(), "#234567");
        assert_eq!(color.to_css_hex(), "#234567");
        assert_eq!(color.to_rgb(), (0x23, 0x45, 0x67));
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert!(Color::parse_hex("#").is_err());
        assert!(Color::parse_hex("#12zz56").is_err());
        assert!(Color::parse_hex("#ff5733 ").is_err());
        assert!(Color::parse_hex("#+ff").is_err());
        assert!(Color::parse_hex("#123456789").is_err());
        assert!(Color::parse_hex("ff5733").is_err());
    }

    #[test]
    fn to_rgb() {
        assert_eq!(Color::GOLD.to_rgb(), (0xff, 0xaa, 0x00));
        assert_eq!(Color::custom(0x0a141e).to_rgb(), (10, 20, 30));
    }

    #[test]
    fn named_flag() {
        assert!(Color::AQUA.is_named());
        assert!(!Color::custom(0x55ffff).is_named());
    }
}
