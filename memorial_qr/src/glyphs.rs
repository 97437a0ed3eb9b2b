//! 5x7 bitmap letters for the placeholder notice.

use image::{Rgb, RgbImage};

const WIDTH: u32 = 5;
const HEIGHT: u32 = 7;

/// Rows top to bottom; bit 4 is the leftmost column.
fn glyph(ch: char) -> [u8; 7] {
    match ch {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110],
        'd' => [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        's' => [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
        _ => [0; 7],
    }
}

/// Draw `text` with its top-left corner at `(x, y)`, each dot `scale` pixels square.
///
/// Letters outside the notice alphabet draw as blanks. Pixels past the image
/// edge are clipped.
pub(crate) fn draw_text(img: &mut RgbImage, x: u32, y: u32, text: &str, scale: u32, color: Rgb<u8>) {
    let advance = (WIDTH + 1) * scale;
    let mut pen_x = x;
    for ch in text.chars() {
        let rows = glyph(ch);
        for (row, bits) in (0..HEIGHT).zip(rows) {
            for col in 0..WIDTH {
                if bits & (1 << (WIDTH - 1 - col)) == 0 {
                    continue;
                }
                fill(img, pen_x + col * scale, y + row * scale, scale, color);
            }
        }
        pen_x += advance;
    }
}

/// Fill a `size`-pixel square at `(x, y)`, clipped to the image.
pub(crate) fn fill(img: &mut RgbImage, x: u32, y: u32, size: u32, color: Rgb<u8>) {
    for py in y..(y + size).min(img.height()) {
        for px in x..(x + size).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn letter_t_has_full_top_bar() {
        let mut img = RgbImage::from_pixel(10, 10, WHITE);
        draw_text(&mut img, 0, 0, "T", 1, BLACK);
        for x in 0..5 {
            assert_eq!(*img.get_pixel(x, 0), BLACK);
        }
        assert_eq!(*img.get_pixel(2, 6), BLACK);
        assert_eq!(*img.get_pixel(0, 6), WHITE);
    }

    #[test]
    fn notice_letters_all_have_glyphs() {
        for ch in crate::encode::PLACEHOLDER_NOTICE.chars().filter(|c| *c != ' ') {
            assert_ne!(glyph(ch), [0; 7], "no glyph for {ch:?}");
        }
    }

    #[test]
    fn lowercase_is_its_own_shape() {
        assert_ne!(glyph('l'), glyph('L'));
        assert_ne!(glyph('t'), glyph('T'));
        // x-height letters leave the top two rows empty
        assert_eq!(&glyph('n')[..2], &[0, 0]);
    }

    #[test]
    fn scale_and_advance() {
        let mut img = RgbImage::from_pixel(40, 20, WHITE);
        draw_text(&mut img, 0, 0, "LL", 2, BLACK);
        // second L starts one blank column after the first, at (5 + 1) * 2
        assert_eq!(*img.get_pixel(12, 0), BLACK);
        assert_eq!(*img.get_pixel(13, 1), BLACK);
        assert_eq!(*img.get_pixel(10, 0), WHITE);
    }

    #[test]
    fn drawing_past_the_edge_is_clipped() {
        let mut img = RgbImage::from_pixel(4, 4, WHITE);
        draw_text(&mut img, 2, 2, "E", 3, BLACK);
        assert_eq!(*img.get_pixel(3, 3), BLACK);
    }
}
