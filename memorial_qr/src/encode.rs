//! QR rendering and the placeholder fallback.

use image::{Rgb, RgbImage};
#[cfg(feature = "qr")]
use log::warn;

use crate::glyphs::{draw_text, fill};

/// Pixels per QR module.
pub const BOX_SIZE: u32 = 10;
/// Light modules around the code, in modules.
pub const BORDER: u32 = 2;
/// Edge length of the placeholder image.
pub const PLACEHOLDER_SIZE: u32 = 256;
/// Text drawn on the placeholder.
pub const PLACEHOLDER_NOTICE: &str = "QR lib not installed";

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Render `data` as a QR code (error correction M).
///
/// Data too long for any QR version falls back to the placeholder with a
/// warning; this never fails.
#[cfg(feature = "qr")]
pub fn make_qr(data: &str) -> RgbImage {
    match encode_qr(data, BOX_SIZE, BORDER) {
        Ok(img) => img,
        Err(err) => {
            warn!("cannot encode {} bytes as a QR code ({err}); writing placeholder", data.len());
            placeholder()
        },
    }
}

/// Without the `qr` feature every job gets the placeholder.
#[cfg(not(feature = "qr"))]
pub fn make_qr(_data: &str) -> RgbImage {
    placeholder()
}

/// White square with [`PLACEHOLDER_NOTICE`] in black at (10, 10).
pub fn placeholder() -> RgbImage {
    let mut img = RgbImage::from_pixel(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, WHITE);
    draw_text(&mut img, 10, 10, PLACEHOLDER_NOTICE, 2, BLACK);
    img
}

#[cfg(feature = "qr")]
#[allow(clippy::cast_possible_truncation)]
fn encode_qr(data: &str, box_size: u32, border: u32) -> Result<RgbImage, qrcode::types::QrError> {
    use qrcode::{Color, EcLevel, QrCode};

    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)?;
    // at most 177 modules per side
    let modules = code.width();
    let side = (modules as u32 + 2 * border) * box_size;

    let mut img = RgbImage::from_pixel(side, side, WHITE);
    for (index, color) in code.to_colors().into_iter().enumerate() {
        if color != Color::Dark {
            continue;
        }
        let x = (index % modules) as u32 + border;
        let y = (index / modules) as u32 + border;
        fill(&mut img, x * box_size, y * box_size, box_size, BLACK);
    }
    Ok(img)
}
