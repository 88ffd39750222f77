use crate::data::MOCK_DETECTIONS;
use crate::error::AppError;
use crate::models::{CropImage, DetectionResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageReader;
use rand::Rng;
use std::io::Cursor;

/// Picks one of the canned results uniformly at random.
pub fn classify<R: Rng + ?Sized>(rng: &mut R) -> DetectionResult {
    MOCK_DETECTIONS[rng.gen_range(0..MOCK_DETECTIONS.len())]
}

/// Sniffs the format and reads the header of a locally chosen image, and
/// builds a `data:` URL for the preview. Pixel data is never decoded.
pub fn decode_image(file_name: &str, bytes: Vec<u8>) -> Result<CropImage, AppError> {
    let format = image::guess_format(&bytes)
        .map_err(|_| AppError::UnsupportedImage(file_name.to_string()))?;

    let (width, height) = ImageReader::with_format(Cursor::new(&bytes), format)
        .into_dimensions()
        .map_err(|e| AppError::ImageRead(format!("{}: {}", file_name, e)))?;

    let mime = format.to_mime_type();
    let data_url = format!("data:{};base64,{}", mime, STANDARD.encode(&bytes));

    Ok(CropImage {
        file_name: file_name.to_string(),
        mime,
        width,
        height,
        size_bytes: bytes.len(),
        data_url,
    })
}

// 1x1 transparent PNG.
#[cfg(test)]
pub(crate) const PIXEL_PNG: [u8; 67] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];
