use super::frame::{Color, RenderFrame};

pub const FONT_WIDTH: u32 = 5;
pub const FONT_HEIGHT: u32 = 7;

/// Width in pixels of `text` drawn at `scale`, without trailing spacing.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let advance = (FONT_WIDTH + 1) * scale;
    let glyphs = text.chars().count() as u32;
    (glyphs * advance).saturating_sub(scale)
}

impl RenderFrame<'_> {
    /// Draws `text` with its top-left corner at `(x, y)`.
    ///
    /// Characters without a glyph are left blank.
    pub fn draw_text(&mut self, text: &str, x: u32, y: u32, scale: u32, color: Color) {
        let mut cursor_x = x;

        for ch in text.chars() {
            if let Some(rows) = glyph_bits(ch.to_ascii_uppercase()) {
                for (row, bits) in (0..).zip(rows) {
                    for col in 0..FONT_WIDTH {
                        if (bits >> (FONT_WIDTH - 1 - col)) & 1 == 1 {
                            self.draw_square(
                                cursor_x + col * scale,
                                y + row * scale,
                                scale,
                                scale,
                                color,
                            );
                        }
                    }
                }
            }

            cursor_x += (FONT_WIDTH + 1) * scale;
        }
    }
}

fn glyph_bits(ch: char) -> Option<[u8; FONT_HEIGHT as usize]> {
    match ch {
        'A' => Some([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'E' => Some([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        'I' => Some([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111]),
        'M' => Some([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
        'N' => Some([0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
        'O' => Some([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'P' => Some([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
        'R' => Some([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        'S' => Some([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'T' => Some([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        'U' => Some([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::frame::PIXEL_BITS;
    use super::*;

    const INK: Color = [0, 0, 0, 255];

    #[test]
    fn width_accounts_for_spacing_between_glyphs() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("I", 1), 5);
        assert_eq!(text_width("IT", 1), 11);
        assert_eq!(text_width("IT", 3), 33);
    }

    #[test]
    fn draws_glyph_rows_from_the_top() {
        let mut buffer = vec![0; 12 * 7 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 12,
            height: 7,
            buffer: &mut buffer,
        };

        frame.draw_text("t", 0, 0, 1, INK);

        for x in 0..5 {
            assert_eq!(frame.pixel(x, 0), Some(&INK));
        }
        assert_eq!(frame.pixel(2, 6), Some(&INK));
        assert_eq!(frame.pixel(0, 6), Some(&[0; PIXEL_BITS]));
    }

    #[test]
    fn unknown_characters_still_advance_the_cursor() {
        let mut buffer = vec![0; 12 * 7 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 12,
            height: 7,
            buffer: &mut buffer,
        };

        frame.draw_text(" I", 0, 0, 1, INK);

        assert_eq!(frame.pixel(0, 0), Some(&[0; PIXEL_BITS]));
        assert_eq!(frame.pixel(6, 0), Some(&INK));
    }
}
