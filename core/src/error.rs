use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the interpreter.
///
/// Register and timer arithmetic never fails; every wraparound there is defined behaviour.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("unable to read ROM {}", path.display())]
    RomNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ROM is {size} bytes but must be between 1 and {max} bytes")]
    InvalidRomSize { size: usize, max: usize },

    #[error("unknown instruction {0:#06X}")]
    UnknownInstruction(u16),

    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBoundsMemoryAccess { address: usize },

    #[error("call stack overflow")]
    StackOverflow,

    #[error("return from subroutine with an empty call stack")]
    StackUnderflow,
}
