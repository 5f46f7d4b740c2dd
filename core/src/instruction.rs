use std::fmt;

use crate::error::Chip8Error;
use crate::opcode::Opcode;

/// Every instruction the interpreter understands, decoded from an Opcode.
///
/// `x` and `y` are register indices, `kk` an immediate byte, `n` a nibble and bare `u16`s are
/// 12-bit addresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    Cls,
    /// `00EE`
    Ret,
    /// `00BN`
    ScrollUp(u8),
    /// `00CN`
    ScrollDown(u8),
    /// `00FB`
    ScrollRight,
    /// `00FC`
    ScrollLeft,
    /// `00FD`
    Exit,
    /// `00FE`
    LowRes,
    /// `00FF`
    HighRes,
    /// `1NNN`
    Jump(u16),
    /// `2NNN`
    Call(u16),
    /// `3XKK`
    SkipEqByte { x: u8, kk: u8 },
    /// `4XKK`
    SkipNeByte { x: u8, kk: u8 },
    /// `5XY0`
    SkipEqReg { x: u8, y: u8 },
    /// `6XKK`
    LoadByte { x: u8, kk: u8 },
    /// `7XKK`
    AddByte { x: u8, kk: u8 },
    /// `8XY0`
    Move { x: u8, y: u8 },
    /// `8XY1`
    Or { x: u8, y: u8 },
    /// `8XY2`
    And { x: u8, y: u8 },
    /// `8XY3`
    Xor { x: u8, y: u8 },
    /// `8XY4`
    AddReg { x: u8, y: u8 },
    /// `8XY5`
    Sub { x: u8, y: u8 },
    /// `8XY6`
    ShiftRight { x: u8 },
    /// `8XY7`
    SubN { x: u8, y: u8 },
    /// `8XYE`
    ShiftLeft { x: u8 },
    /// `9XY0`
    SkipNeReg { x: u8, y: u8 },
    /// `ANNN`
    LoadIndex(u16),
    /// `BNNN`
    JumpOffset(u16),
    /// `CXKK`
    Random { x: u8, kk: u8 },
    /// `DXYN`
    Draw { x: u8, y: u8, n: u8 },
    /// `EX9E`
    SkipKeyDown { x: u8 },
    /// `EXA1`
    SkipKeyUp { x: u8 },
    /// `FX07`
    LoadDelay { x: u8 },
    /// `FX0A`
    WaitKey { x: u8 },
    /// `FX15`
    SetDelay { x: u8 },
    /// `FX18`
    SetSound { x: u8 },
    /// `FX1E`
    AddIndex { x: u8 },
    /// `FX29`
    LoadFont { x: u8 },
    /// `FX30`
    LoadBigFont { x: u8 },
    /// `FX33`
    StoreBcd { x: u8 },
    /// `FX55`
    StoreRegisters { x: u8 },
    /// `FX65`
    LoadRegisters { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for a given Opcode.
    ///
    /// Anything not listed, including the `0NNN` machine routines, is an `UnknownInstruction`.
    pub fn decode(op: u16) -> Result<Self, Chip8Error> {
        use Instruction::*;

        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Cls,
            (0x0, 0x0, 0xE, 0xE) => Ret,
            (0x0, 0x0, 0xB, _) => ScrollUp(n),
            (0x0, 0x0, 0xC, _) => ScrollDown(n),
            (0x0, 0x0, 0xF, 0xB) => ScrollRight,
            (0x0, 0x0, 0xF, 0xC) => ScrollLeft,
            (0x0, 0x0, 0xF, 0xD) => Exit,
            (0x0, 0x0, 0xF, 0xE) => LowRes,
            (0x0, 0x0, 0xF, 0xF) => HighRes,
            (0x1, ..) => Jump(addr),
            (0x2, ..) => Call(addr),
            (0x3, ..) => SkipEqByte { x, kk },
            (0x4, ..) => SkipNeByte { x, kk },
            (0x5, .., 0x0) => SkipEqReg { x, y },
            (0x6, ..) => LoadByte { x, kk },
            (0x7, ..) => AddByte { x, kk },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x },
            (0x9, .., 0x0) => SkipNeReg { x, y },
            (0xA, ..) => LoadIndex(addr),
            (0xB, ..) => JumpOffset(addr),
            (0xC, ..) => Random { x, kk },
            (0xD, ..) => Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => SkipKeyDown { x },
            (0xE, _, 0xA, 0x1) => SkipKeyUp { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => WaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddIndex { x },
            (0xF, _, 0x2, 0x9) => LoadFont { x },
            (0xF, _, 0x3, 0x0) => LoadBigFont { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => LoadRegisters { x },
            _ => return Err(Chip8Error::UnknownInstruction(op)),
        };
        Ok(instruction)
    }
}

/// Assembler mnemonics, e.g. `DRW V1, V2, 5`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;

        match *self {
            Cls => write!(f, "CLS"),
            Ret => write!(f, "RET"),
            ScrollUp(n) => write!(f, "SCU {}", n),
            ScrollDown(n) => write!(f, "SCD {}", n),
            ScrollRight => write!(f, "SCR"),
            ScrollLeft => write!(f, "SCL"),
            Exit => write!(f, "EXIT"),
            LowRes => write!(f, "LOW"),
            HighRes => write!(f, "HIGH"),
            Jump(addr) => write!(f, "JP {:#05X}", addr),
            Call(addr) => write!(f, "CALL {:#05X}", addr),
            SkipEqByte { x, kk } => write!(f, "SE V{:X}, {:#04X}", x, kk),
            SkipNeByte { x, kk } => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            SkipEqReg { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            LoadByte { x, kk } => write!(f, "LD V{:X}, {:#04X}", x, kk),
            AddByte { x, kk } => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddReg { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x } => write!(f, "SHR V{:X}", x),
            SubN { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x } => write!(f, "SHL V{:X}", x),
            SkipNeReg { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadIndex(addr) => write!(f, "LD I, {:#05X}", addr),
            JumpOffset(addr) => write!(f, "JP V0, {:#05X}", addr),
            Random { x, kk } => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            SkipKeyDown { x } => write!(f, "SKP V{:X}", x),
            SkipKeyUp { x } => write!(f, "SKNP V{:X}", x),
            LoadDelay { x } => write!(f, "LD V{:X}, DT", x),
            WaitKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            SetSound { x } => write!(f, "LD ST, V{:X}", x),
            AddIndex { x } => write!(f, "ADD I, V{:X}", x),
            LoadFont { x } => write!(f, "LD F, V{:X}", x),
            LoadBigFont { x } => write!(f, "LD HF, V{:X}", x),
            StoreBcd { x } => write!(f, "LD B, V{:X}", x),
            StoreRegisters { x } => write!(f, "LD [I], V{:X}", x),
            LoadRegisters { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}
