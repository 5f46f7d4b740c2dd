pub use chip8::{Chip8, RunState};
pub use constants::{CLOCK_SPEED, TIMER_INTERVAL_MS};
pub use error::Chip8Error;
pub use frame_buffer::{FrameBuffer, Mode, Screen};
pub use instruction::Instruction;
pub use rom::Rom;

mod chip8;
pub mod constants;
mod error;
mod frame_buffer;
mod instruction;
mod memory;
mod opcode;
mod operations;
mod rom;
