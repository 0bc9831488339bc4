use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Luma};
use qrcode::{EcLevel, QrCode, Version};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("payload does not fit a version-4 symbol at level M: {0:?}")]
    Encode(qrcode::types::QrError),
    #[error("PNG error: {0}")]
    Png(#[from] image::ImageError),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, QrError>;

/// Fixed symbol version; payloads beyond its level-M capacity are a
/// caller configuration error, not something negotiated at runtime.
pub const SYMBOL_VERSION: i16 = 4;

/// Device pixels per QR module, matching the reference rendering.
pub const MODULE_SCALE: u32 = 10;

/// Encode a payload into a PNG-compressed grayscale QR bitmap.
pub fn encode_png_sync(payload: &str) -> Result<Vec<u8>> {
    let code = QrCode::with_version(payload, Version::Normal(SYMBOL_VERSION), EcLevel::M)
        .map_err(QrError::Encode)?;

    let bitmap = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SCALE, MODULE_SCALE)
        .build();

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        bitmap.as_raw(),
        bitmap.width(),
        bitmap.height(),
        ExtendedColorType::L8,
    )?;
    Ok(png)
}

/// Async wrapper; encoding and PNG compression are CPU-bound, so they
/// run on the blocking pool.
pub async fn encode_png(payload: String) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || encode_png_sync(&payload)).await?
}
