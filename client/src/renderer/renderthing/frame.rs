pub const PIXEL_BITS: usize = 4;

pub type Color = [u8; PIXEL_BITS];

pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl<'a> RenderFrame<'a> {
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8; PIXEL_BITS]> {
        self.buffer
            .chunks_exact_mut(PIXEL_BITS)
            .filter_map(|chunk| chunk.try_into().ok())
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8; PIXEL_BITS]> {
        let index = self.pixel_index(x, y)?;
        self.buffer.get(index..index + PIXEL_BITS)?.try_into().ok()
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8; PIXEL_BITS]> {
        let index = self.pixel_index(x, y)?;
        self.buffer
            .get_mut(index..index + PIXEL_BITS)?
            .try_into()
            .ok()
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color;
        }
    }

    /// Fills a rectangle, clipping whatever falls outside of the frame.
    pub fn draw_square(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);

        for y in y..y_end {
            for x in x..x_end {
                self.draw_pixel(x, y, color);
            }
        }
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels_mut() {
            *pixel = color;
        }
    }

    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some((x as usize + y as usize * self.width as usize) * PIXEL_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [255, 0, 0, 255];

    #[test]
    fn last_pixel_is_addressable() {
        let mut buffer = vec![0; 3 * 2 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 3,
            height: 2,
            buffer: &mut buffer,
        };

        frame.draw_pixel(2, 1, RED);

        assert_eq!(frame.pixel(2, 1), Some(&RED));
        assert_eq!(&buffer[buffer.len() - PIXEL_BITS..], &RED);
    }

    #[test]
    fn pixels_outside_the_frame_do_not_wrap() {
        let mut buffer = vec![0; 3 * 2 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 3,
            height: 2,
            buffer: &mut buffer,
        };

        frame.draw_pixel(3, 0, RED);

        assert_eq!(frame.pixel(3, 0), None);
        assert_eq!(frame.pixel(0, 1), Some(&[0; PIXEL_BITS]));
    }

    #[test]
    fn squares_are_clipped_to_the_frame() {
        let mut buffer = vec![0; 4 * 4 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 4,
            height: 4,
            buffer: &mut buffer,
        };

        frame.draw_square(2, 2, 10, 10, RED);

        assert_eq!(frame.pixel(1, 1), Some(&[0; PIXEL_BITS]));
        assert_eq!(frame.pixel(2, 2), Some(&RED));
        assert_eq!(frame.pixel(3, 3), Some(&RED));
        assert_eq!(buffer.chunks_exact(PIXEL_BITS).filter(|p| *p == RED).count(), 4);
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut buffer = vec![0; 5 * 3 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 5,
            height: 3,
            buffer: &mut buffer,
        };

        frame.fill(RED);

        assert!(buffer.chunks_exact(PIXEL_BITS).all(|p| p == RED));
    }
}
