//! Tests for the color catalog.

use chat::{Color, ColorError};

const NAMES: [&str; 16] = [
    "black",
    "dark_blue",
    "dark_green",
    "dark_aqua",
    "dark_red",
    "dark_purple",
    "gold",
    "gray",
    "dark_gray",
    "blue",
    "green",
    "aqua",
    "red",
    "light_purple",
    "yellow",
    "white",
];

// ============================================================================
// Named Colors
// ============================================================================

#[test]
fn every_name_round_trips() {
    for name in NAMES {
        let color = Color::lookup_by_name(name);
        assert!(color.is_some(), "missing color: {}", name);
        assert_eq!(color.unwrap().name(), name);
    }
}

#[test]
fn catalog_order_matches_names() {
    let names: Vec<_> = Color::named_colors().iter().map(Color::name).collect();
    assert_eq!(names, NAMES);
}

#[test]
fn other_names_are_unknown() {
    for name in ["", "Red", "RED", "grey", "purple", "dark-blue", "reset", "#ff0000"] {
        assert_eq!(Color::lookup_by_name(name), None, "unexpected match: {}", name);
    }
}

#[test]
fn catalog_palette() {
    let expected = [
        ("black", 0x000000, 0x000000, Some("30")),
        ("dark_blue", 0x0000AA, 0x00002A, Some("34")),
        ("dark_green", 0x00AA00, 0x002A00, Some("32")),
        ("dark_aqua", 0x00AAAA, 0x002A2A, Some("36")),
        ("dark_red", 0xAA0000, 0x2A0000, Some("31")),
        ("dark_purple", 0xAA00AA, 0x2A002A, Some("35")),
        ("gold", 0xFFAA00, 0x2A2A00, Some("33")),
        ("gray", 0xAAAAAA, 0x2A2A2A, None),
        ("dark_gray", 0x555555, 0x151515, None),
        ("blue", 0x5555FF, 0x15153F, Some("34;1")),
        ("green", 0x55FF55, 0x153F15, Some("32;1")),
        ("aqua", 0x55FFFF, 0x153F3F, Some("36;1")),
        ("red", 0xFF5555, 0x3F1515, Some("31;1")),
        ("light_purple", 0xFF55FF, 0x3F153F, Some("35;1")),
        ("yellow", 0xFFFF55, 0x3F3F15, Some("33;1")),
        ("white", 0xFFFFFF, 0x3F3F3F, Some("37;1")),
    ];

    for (name, foreground, background, ansi) in expected {
        let color = Color::lookup_by_name(name).unwrap();
        assert_eq!(color.foreground(), foreground, "{} foreground", name);
        assert_eq!(color.background(), background, "{} background", name);
        assert_eq!(color.ansi_code(), ansi, "{} ansi", name);
    }
}

// ============================================================================
// Hex Colors
// ============================================================================

#[test]
fn hex_values_match_their_number() {
    for text in ["#0", "#a", "#ff", "#fff", "#ABCDEF", "#12345678", "#00ff00"] {
        let color = Color::parse_hex(text).unwrap();
        let value = u32::from_str_radix(&text[1..], 16).unwrap();
        assert_eq!(color.foreground(), value, "{}", text);
        assert_eq!(color.background(), 0);
        assert_eq!(color.ansi_code(), None);
    }
}

#[test]
fn hex_name_is_six_lowercase_digits() {
    assert_eq!(Color::parse_hex("#ABCDEF").unwrap().name(), "#abcdef");
    assert_eq!(Color::parse_hex("#ff").unwrap().name(), "#0000ff");
    assert_eq!(Color::parse_hex("#ff").unwrap().to_string(), "#0000ff");
}

#[test]
fn wide_hex_keeps_value_but_names_low_bits() {
    let seven = Color::parse_hex("#1234567").unwrap();
    assert_eq!(seven.foreground(), 0x1234567);
    assert_eq!(seven.name(), "#234567");
    assert_eq!(seven.to_css_hex(), "#234567");
    assert_eq!(seven.to_rgb(), (0x23, 0x45, 0x67));

    let eight = Color::parse_hex("#FF00AA11").unwrap();
    assert_eq!(eight.foreground(), 0xff00aa11);
    assert_eq!(eight.name(), "#00aa11");
    assert_eq!(eight.to_rgb(), (0x00, 0xaa, 0x11));
}

#[test]
fn hex_rejects_bad_digits() {
    for text in ["#", "#12zz56", "#ff ", " #ff", "#-1", "#+1", "#0x12", "#123456789", "red"] {
        assert_eq!(
            Color::parse_hex(text),
            Err(ColorError::InvalidHexDigits(text.to_string())),
            "accepted {:?}",
            text
        );
    }
}

#[test]
fn named_and_custom_differ() {
    let custom = Color::parse_hex("#ff5555").unwrap();
    assert_eq!(custom.foreground(), Color::RED.foreground());
    assert_ne!(custom, Color::RED);
}
