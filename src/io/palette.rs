//! Hex color parsing and formatting

use crate::io::error::{Result, WalkerError};

/// Parse `#RRGGBB` or `#RGB` (leading `#` optional) into opaque RGBA
///
/// # Errors
///
/// Returns `InvalidColor` if the text is not a 3 or 6 digit hex color
pub fn parse_hex_color(value: &str) -> Result<[u8; 4]> {
    let invalid = || WalkerError::InvalidColor {
        value: value.to_string(),
    };

    let digits = value.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| -> Result<u8> {
        let part = digits.get(range).ok_or_else(invalid)?;
        u8::from_str_radix(part, 16).ok().ok_or_else(invalid)
    };

    match digits.len() {
        6 => Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?, 0xFF]),
        3 => {
            // #abc expands to #aabbcc
            let short = [channel(0..1)?, channel(1..2)?, channel(2..3)?];
            Ok([short[0] * 17, short[1] * 17, short[2] * 17, 0xFF])
        }
        _ => Err(invalid()),
    }
}

/// Format as uppercase `#RRGGBB`, ignoring alpha
pub fn to_hex(color: [u8; 4]) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}

/// Format as an SVG `rgb(r,g,b)` paint value
pub fn to_svg_rgb(color: [u8; 4]) -> String {
    format!("rgb({},{},{})", color[0], color[1], color[2])
}
