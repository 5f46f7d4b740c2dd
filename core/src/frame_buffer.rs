use crate::constants::{
    EXTENDED_HEIGHT, EXTENDED_WIDTH, NORMAL_HEIGHT, NORMAL_WIDTH, SCROLL_COLUMNS,
};

/// Display resolution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// 64x32, the original CHIP-8 screen
    #[default]
    Normal,
    /// 128x64, the SUPER-CHIP high resolution screen
    Extended,
}

impl Mode {
    pub fn width(self) -> usize {
        match self {
            Mode::Normal => NORMAL_WIDTH,
            Mode::Extended => EXTENDED_WIDTH,
        }
    }

    pub fn height(self) -> usize {
        match self {
            Mode::Normal => NORMAL_HEIGHT,
            Mode::Extended => EXTENDED_HEIGHT,
        }
    }

    /// How many sprite bytes make up one drawn row.
    pub fn sprite_bytes_per_row(self) -> usize {
        match self {
            Mode::Normal => 1,
            Mode::Extended => 2,
        }
    }
}

/// # Screen
/// A monochrome bitmap the interpreter draws on.
///
/// Pixels are 0 or 1 and addressed as (x, y) from the top left.
/// Coordinates must already be inside the screen; callers apply any wraparound themselves.
pub trait Screen {
    fn mode(&self) -> Mode;

    /// Resizes to the mode's dimensions. Always clears, even if the mode doesn't change.
    fn set_mode(&mut self, mode: Mode);

    fn clear(&mut self);

    fn get_pixel(&self, x: usize, y: usize) -> u8;

    /// XORs `bit` onto the pixel at (x, y) and returns its new value.
    fn xor_pixel(&mut self, x: usize, y: usize, bit: u8) -> u8;

    fn scroll_up(&mut self, lines: usize);

    fn scroll_down(&mut self, lines: usize);

    /// Moves every column `SCROLL_COLUMNS` to the left.
    fn scroll_left(&mut self);

    /// Moves every column `SCROLL_COLUMNS` to the right.
    fn scroll_right(&mut self);

    fn width(&self) -> usize {
        self.mode().width()
    }

    fn height(&self) -> usize {
        self.mode().height()
    }
}

/// # FrameBuffer
/// The contents of the next frame to be drawn.
///
/// Stored row-major with one byte per pixel, so a row is a contiguous `width` long slice.
/// Out-of-bounds reads return 0 and out-of-bounds writes are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    mode: Mode,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// A blank 64x32 frame.
    pub fn new() -> Self {
        let mode = Mode::Normal;
        FrameBuffer {
            mode,
            pixels: vec![0; mode.width() * mode.height()],
        }
    }

    /// All pixels, row after row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.pixels.chunks_exact(self.mode.width())
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.mode.width() && y < self.mode.height() {
            Some(y * self.mode.width() + x)
        } else {
            None
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for FrameBuffer {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.pixels.clear();
        self.pixels.resize(mode.width() * mode.height(), 0);
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn get_pixel(&self, x: usize, y: usize) -> u8 {
        self.index(x, y).map_or(0, |i| self.pixels[i])
    }

    fn xor_pixel(&mut self, x: usize, y: usize, bit: u8) -> u8 {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] ^= bit & 1;
                self.pixels[i]
            }
            None => 0,
        }
    }

    fn scroll_up(&mut self, lines: usize) {
        let shift = lines.min(self.mode.height()) * self.mode.width();
        let len = self.pixels.len();
        self.pixels.copy_within(shift.., 0);
        self.pixels[len - shift..].fill(0);
    }

    fn scroll_down(&mut self, lines: usize) {
        let shift = lines.min(self.mode.height()) * self.mode.width();
        let len = self.pixels.len();
        self.pixels.copy_within(..len - shift, shift);
        self.pixels[..shift].fill(0);
    }

    fn scroll_left(&mut self) {
        let width = self.mode.width();
        for row in self.pixels.chunks_exact_mut(width) {
            row.copy_within(SCROLL_COLUMNS.., 0);
            row[width - SCROLL_COLUMNS..].fill(0);
        }
    }

    fn scroll_right(&mut self) {
        let width = self.mode.width();
        for row in self.pixels.chunks_exact_mut(width) {
            row.copy_within(..width - SCROLL_COLUMNS, SCROLL_COLUMNS);
            row[..SCROLL_COLUMNS].fill(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sets (x, y) for each point.
    fn frame_with(points: &[(usize, usize)]) -> FrameBuffer {
        let mut frame = FrameBuffer::new();
        for &(x, y) in points {
            frame.xor_pixel(x, y, 1);
        }
        frame
    }

    fn lit(frame: &FrameBuffer) -> Vec<(usize, usize)> {
        let mut points = Vec::new();
        for (y, row) in frame.rows().enumerate() {
            for (x, pixel) in row.iter().enumerate() {
                if *pixel == 1 {
                    points.push((x, y));
                }
            }
        }
        points
    }

    #[test]
    fn test_new_is_blank_normal() {
        let frame = FrameBuffer::new();
        assert_eq!(frame.mode(), Mode::Normal);
        assert_eq!((frame.width(), frame.height()), (64, 32));
        assert_eq!(frame.pixels().len(), 64 * 32);
        assert!(frame.pixels().iter().all(|p| *p == 0));
    }

    #[test]
    fn test_set_mode_resizes_and_clears() {
        let mut frame = frame_with(&[(3, 3)]);
        frame.set_mode(Mode::Extended);
        assert_eq!((frame.width(), frame.height()), (128, 64));
        assert_eq!(frame.pixels().len(), 128 * 64);
        assert!(lit(&frame).is_empty());

        frame.xor_pixel(100, 60, 1);
        frame.set_mode(Mode::Extended);
        assert!(lit(&frame).is_empty());

        frame.set_mode(Mode::Normal);
        assert_eq!(frame.pixels().len(), 64 * 32);
    }

    #[test]
    fn test_clear() {
        let mut frame = frame_with(&[(0, 0), (63, 31)]);
        frame.clear();
        assert!(lit(&frame).is_empty());
    }

    #[test]
    fn test_xor_pixel_toggles() {
        let mut frame = FrameBuffer::new();
        assert_eq!(frame.xor_pixel(5, 6, 1), 1);
        assert_eq!(frame.get_pixel(5, 6), 1);
        assert_eq!(frame.xor_pixel(5, 6, 0), 1);
        assert_eq!(frame.xor_pixel(5, 6, 1), 0);
        assert_eq!(frame.get_pixel(5, 6), 0);
    }

    #[test]
    fn test_out_of_bounds_does_not_alias_next_row() {
        let mut frame = FrameBuffer::new();
        assert_eq!(frame.xor_pixel(64, 0, 1), 0);
        assert_eq!(frame.get_pixel(0, 1), 0);
        assert_eq!(frame.get_pixel(64, 0), 0);
        assert!(lit(&frame).is_empty());
    }

    #[test]
    fn test_scroll_down() {
        let mut frame = frame_with(&[(1, 0), (2, 30), (3, 31)]);
        frame.scroll_down(1);
        assert_eq!(lit(&frame), vec![(1, 1), (2, 31)]);
    }

    #[test]
    fn test_scroll_up() {
        let mut frame = frame_with(&[(1, 0), (2, 1), (3, 31)]);
        frame.scroll_up(1);
        assert_eq!(lit(&frame), vec![(2, 0), (3, 30)]);
    }

    #[test]
    fn test_scroll_past_height_blanks() {
        let mut frame = frame_with(&[(1, 0), (2, 31)]);
        frame.scroll_down(40);
        assert!(lit(&frame).is_empty());

        let mut frame = frame_with(&[(1, 0), (2, 31)]);
        frame.scroll_up(32);
        assert!(lit(&frame).is_empty());
    }

    #[test]
    fn test_scroll_zero_lines() {
        let mut frame = frame_with(&[(1, 0)]);
        frame.scroll_up(0);
        frame.scroll_down(0);
        assert_eq!(lit(&frame), vec![(1, 0)]);
    }

    #[test]
    fn test_scroll_right() {
        let mut frame = frame_with(&[(0, 0), (59, 1), (60, 2), (63, 3)]);
        frame.scroll_right();
        assert_eq!(lit(&frame), vec![(4, 0), (63, 1)]);
    }

    #[test]
    fn test_scroll_left() {
        let mut frame = frame_with(&[(0, 0), (3, 1), (4, 2), (63, 3)]);
        frame.scroll_left();
        assert_eq!(lit(&frame), vec![(0, 2), (59, 3)]);
    }

    #[test]
    fn test_scroll_extended_uses_four_columns() {
        let mut frame = FrameBuffer::new();
        frame.set_mode(Mode::Extended);
        frame.xor_pixel(120, 63, 1);
        frame.scroll_right();
        assert_eq!(frame.get_pixel(124, 63), 1);
        frame.scroll_down(1);
        assert!(frame.pixels().iter().all(|p| *p == 0));
    }

    #[test]
    fn test_mode_dimensions() {
        assert_eq!((Mode::Normal.width(), Mode::Normal.height()), (64, 32));
        assert_eq!((Mode::Extended.width(), Mode::Extended.height()), (128, 64));
        assert_eq!(Mode::Normal.sprite_bytes_per_row(), 1);
        assert_eq!(Mode::Extended.sprite_bytes_per_row(), 2);
    }
}
