//! Category colors.
//!
//! Each category gets a fixed swatch; every node inherits the swatch of its
//! root category, and the root disc is left white.

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Parse `#RRGGBB` or `#RGB`.
pub fn parse_hex(s: &str) -> Option<Rgb> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |h: &str| u8::from_str_radix(h, 16).ok();
    match hex.len() {
        6 => Some(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Rgb::new(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

const SWATCHES: &[(&str, &str)] = &[
    ("All", "#AEB1B0"),
    ("Blouse", "#FF5733"),
    ("Bottom", "#FFC300"),
    ("Dupatta", "#C70039"),
    ("Ethnic Dress", "#900C3F"),
    ("Saree", "#581845"),
    ("Set", "#FF6347"),
    ("Top", "#FFA07A"),
    ("Western Dress", "#F08080"),
    ("kurta", "#0000FF"),
];

/// Swatch for a category name; unknown categories are black.
pub fn category_color(category: &str) -> Rgb {
    SWATCHES
        .iter()
        .find(|(name, _)| *name == category)
        .and_then(|(_, hex)| parse_hex(hex))
        .unwrap_or(Rgb::BLACK)
}

/// Fill for a segment given its color key (`None` for the root).
pub fn segment_color(color_key: Option<&str>) -> Rgb {
    color_key.map(category_color).unwrap_or(Rgb::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(parse_hex("#FFA07A"), Some(Rgb::new(255, 160, 122)));
        assert_eq!(parse_hex("#fff"), Some(Rgb::WHITE));
        assert_eq!(parse_hex("FFA07A"), None);
        assert_eq!(parse_hex("#GG0000"), None);
        assert_eq!(parse_hex("#1234"), None);
    }

    #[test]
    fn known_and_unknown_categories() {
        assert_eq!(category_color("Top"), Rgb::new(255, 160, 122));
        assert_eq!(category_color("All"), Rgb::new(174, 177, 176));
        assert_eq!(category_color("Kurta"), Rgb::BLACK);
        assert_eq!(segment_color(None), Rgb::WHITE);
        assert_eq!(segment_color(Some("kurta")), Rgb::new(0, 0, 255));
    }
}
