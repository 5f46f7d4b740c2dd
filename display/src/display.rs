use sdl2::pixels::PixelFormatEnum;
use sdl2::render::TextureValueError;
use sdl2::video::WindowBuildError;
use sdl2::IntegerOrSdlError;
use thiserror::Error;

use chip8_core::constants::{NORMAL_HEIGHT, NORMAL_WIDTH};
use chip8_core::{FrameBuffer, Screen};

const BYTES_PER_PIXEL: usize = 3;
const OFF: [u8; BYTES_PER_PIXEL] = [0, 0, 0];
const ON: [u8; BYTES_PER_PIXEL] = [65, 255, 0];

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("sdl error: {0}")]
    Sdl(String),
    #[error("unable to create window: {0}")]
    Window(#[from] WindowBuildError),
    #[error("unable to create canvas: {0}")]
    Canvas(#[from] IntegerOrSdlError),
    #[error("unable to create texture: {0}")]
    Texture(#[from] TextureValueError),
}

// Most of the sdl2 API reports failures as bare strings
impl From<String> for DisplayError {
    fn from(e: String) -> Self {
        DisplayError::Sdl(e)
    }
}

/// # Display
/// A window showing the interpreter's screen.
///
/// The window is sized for the 64x32 screen; 128x64 frames are drawn at half the scale so the
/// window never changes size.
/// The display only gets a call to `render` when the interpreter asks for a redraw.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel of the 64x32 screen
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "Chip-8",
                NORMAL_WIDTH as u32 * scale,
                NORMAL_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()?;
        let mut canvas = window.into_canvas().build()?;
        canvas.clear();
        canvas.present();
        log::debug!(
            "opened a {}x{} window",
            NORMAL_WIDTH as u32 * scale,
            NORMAL_HEIGHT as u32 * scale
        );

        Ok(Display { canvas })
    }

    /// Formats a frame for rendering as an SDL2 texture.
    ///
    /// An RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .pixels()
            .iter()
            .flat_map(|pixel| if *pixel == 0 { OFF } else { ON })
            .collect()
    }

    /// Formats the frame as an SDL2 RGB24 texture and renders it.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let (width, height) = (frame.width(), frame.height());
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator.create_texture_streaming(
            PixelFormatEnum::RGB24,
            width as u32,
            height as u32,
        )?;

        let rgb = Display::frame_to_sdl_texture(frame);
        let row_bytes = width * BYTES_PER_PIXEL;
        // Texture rows may be padded, so copy them one at a time
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (dst, src) in buffer.chunks_mut(pitch).zip(rgb.chunks_exact(row_bytes)) {
                dst[..row_bytes].copy_from_slice(src);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
