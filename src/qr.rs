use anyhow::{Context, Result};
use qrcode::QrCode;
use qrcode::render::svg;
use std::fs;
use std::path::Path;

pub const MIN_DIMENSION: u32 = 200;

pub fn render_svg(text: &str, color: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("QR code content cannot be empty");
    }

    let code = QrCode::new(text.as_bytes())
        .with_context(|| format!("Failed to encode {} bytes of content", text.len()))?;

    let image = code
        .render::<svg::Color>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .dark_color(svg::Color(color))
        .light_color(svg::Color("transparent"))
        .build();

    Ok(image)
}

pub fn write_svg(text: &str, color: &str, path: &Path) -> Result<()> {
    let image = render_svg(text, color)?;

    fs::write(path, image).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
