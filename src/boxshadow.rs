use anyhow::Result;

pub const MIN_OFFSET: i32 = -50;
pub const MAX_OFFSET: i32 = 50;
pub const MAX_RADIUS: u32 = 50;
pub const MAX_OPACITY: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxShadow {
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur_radius: u32,
    pub spread_radius: u32,
    pub color: String,
    pub opacity: u8,
}

impl Default for BoxShadow {
    fn default() -> Self {
        Self {
            offset_x: 10,
            offset_y: 10,
            blur_radius: 5,
            spread_radius: 2,
            color: "#fb923c".to_string(),
            opacity: 100,
        }
    }
}

impl BoxShadow {
    pub fn css(&self) -> Result<String> {
        Ok(format!(
            "box-shadow: {}px {}px {}px {}px {};",
            self.offset_x,
            self.offset_y,
            self.blur_radius,
            self.spread_radius,
            hex_to_rgba(&self.color, self.opacity)?
        ))
    }
}

pub fn hex_to_rgba(hex: &str, opacity: u8) -> Result<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        anyhow::bail!("\"{}\" is not a six-digit hex color", hex);
    }

    let r = u8::from_str_radix(&digits[0..2], 16)?;
    let g = u8::from_str_radix(&digits[2..4], 16)?;
    let b = u8::from_str_radix(&digits[4..6], 16)?;

    // f64 Display uses the shortest round-trip form, so 100 -> "1", 50 -> "0.5".
    Ok(format!("rgba({}, {}, {}, {})", r, g, b, opacity as f64 / 100.0))
}
