//! Memory map, machine dimensions and default timings.
//!
//! ```text
//! 0x000..0x050  small hex font (16 glyphs x 5 bytes)
//! 0x052..0x072  call stack (16 return addresses, little-endian)
//! 0x0A0..0x140  big hex font (16 glyphs x 10 bytes)
//! 0x200..0x1000 program
//! ```

/// Bytes of addressable memory.
pub const MEMORY_SIZE: usize = 4096;

/// Where ROMs are loaded and where execution starts after a reset.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory.
pub const MAX_ROM_BYTES: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Initial stack pointer; return addresses are pushed upwards from here.
pub const STACK_BASE: u16 = 0x52;

/// Number of nested subroutine calls the stack region can hold.
pub const STACK_DEPTH: u16 = 16;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

pub const FONT_ADDR: u16 = 0x000;
pub const FONT_GLYPH_BYTES: u16 = 5;
pub const BIG_FONT_ADDR: u16 = 0x0A0;
pub const BIG_FONT_GLYPH_BYTES: u16 = 10;

pub const NORMAL_WIDTH: usize = 64;
pub const NORMAL_HEIGHT: usize = 32;
pub const EXTENDED_WIDTH: usize = 128;
pub const EXTENDED_HEIGHT: usize = 64;

/// Columns moved by a horizontal scroll, in either resolution.
pub const SCROLL_COLUMNS: usize = 4;

/// Default instructions executed per second.
pub const CLOCK_SPEED: u32 = 500;

/// Default milliseconds between delay/sound timer decrements.
pub const TIMER_INTERVAL_MS: u64 = 20;

/// # Sprite sheet
/// One 4x5 glyph per hex digit; each byte is a row and only the high nibble is drawn.
///
/// ```text
/// 0xF0  ####
/// 0x90  #  #
/// 0x90  #  #
/// 0x90  #  #
/// 0xF0  ####
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// # Big sprite sheet
/// One 8x10 glyph per hex digit, pointed at by `FX30`.
#[rustfmt::skip]
pub const BIG_SPRITE_SHEET: [u8; 160] = [
    0xFF, 0xFF, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xFF, 0xFF, // 0
    0x18, 0x78, 0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0xFF, 0xFF, // 1
    0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, // 2
    0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF, // 3
    0xC3, 0xC3, 0xC3, 0xC3, 0xFF, 0xFF, 0x03, 0x03, 0x03, 0x03, // 4
    0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF, // 5
    0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0xFF, // 6
    0xFF, 0xFF, 0x03, 0x03, 0x06, 0x0C, 0x18, 0x18, 0x18, 0x18, // 7
    0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0xFF, // 8
    0xFF, 0xFF, 0xC3, 0xC3, 0xFF, 0xFF, 0x03, 0x03, 0xFF, 0xFF, // 9
    0x7E, 0xFF, 0xC3, 0xC3, 0xC3, 0xFF, 0xFF, 0xC3, 0xC3, 0xC3, // A
    0xFC, 0xFC, 0xC3, 0xC3, 0xFC, 0xFC, 0xC3, 0xC3, 0xFC, 0xFC, // B
    0x3C, 0xFF, 0xC3, 0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0xFF, 0x3C, // C
    0xFC, 0xFE, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xFE, 0xFC, // D
    0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, // E
    0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, // F
];
