//! CSS color helpers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Convert `#RRGGBB` plus an alpha into `rgba(r, g, b, a)`.
///
/// Input that is not a six-digit hex color is returned unchanged, so named
/// colors like `"black"` still reach the canvas (at full opacity).
#[must_use]
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let Some(digits) = hex.strip_prefix('#') else {
        return hex.to_string();
    };
    if digits.len() != 6 || !digits.is_ascii() {
        return hex.to_string();
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => format!("rgba({r}, {g}, {b}, {alpha})"),
        _ => hex.to_string(),
    }
}
