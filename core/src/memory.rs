use crate::constants::{
    BIG_FONT_ADDR, BIG_SPRITE_SHEET, FONT_ADDR, MEMORY_SIZE, SPRITE_SHEET,
};
use crate::error::Chip8Error;

// NB. addresses are usize so that sums like I + offset can be checked before they wrap

/// # Memory
/// 4096 bytes of RAM with bounds-checked access.
///
/// The interpreter's fonts live at the bottom of memory, see `constants` for the full map.
/// Every accessor returns `OutOfBoundsMemoryAccess` rather than wrapping or panicking.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Zeroed memory with both fonts installed.
    pub fn new() -> Self {
        let mut bytes = Box::new([0; MEMORY_SIZE]);
        let font = FONT_ADDR as usize;
        bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        let big_font = BIG_FONT_ADDR as usize;
        bytes[big_font..big_font + BIG_SPRITE_SHEET.len()].copy_from_slice(&BIG_SPRITE_SHEET);
        Memory { bytes }
    }

    /// Checks that `address..address + len` lies within memory.
    fn check(address: usize, len: usize) -> Result<(), Chip8Error> {
        match address.checked_add(len) {
            Some(end) if end <= MEMORY_SIZE => Ok(()),
            _ => Err(Chip8Error::OutOfBoundsMemoryAccess {
                address: address.max(MEMORY_SIZE),
            }),
        }
    }

    pub fn read(&self, address: usize) -> Result<u8, Chip8Error> {
        Self::check(address, 1)?;
        Ok(self.bytes[address])
    }

    pub fn slice(&self, address: usize, len: usize) -> Result<&[u8], Chip8Error> {
        Self::check(address, len)?;
        Ok(&self.bytes[address..address + len])
    }

    pub fn slice_mut(&mut self, address: usize, len: usize) -> Result<&mut [u8], Chip8Error> {
        Self::check(address, len)?;
        Ok(&mut self.bytes[address..address + len])
    }

    /// Copies `data` into memory starting at `address`; nothing is written if it doesn't fit.
    pub fn load(&mut self, address: usize, data: &[u8]) -> Result<(), Chip8Error> {
        self.slice_mut(address, data.len())?.copy_from_slice(data);
        Ok(())
    }

    /// Reads an opcode. Instructions are stored high byte first.
    pub fn read_opcode(&self, address: usize) -> Result<u16, Chip8Error> {
        let word = self.slice(address, 2)?;
        Ok(u16::from_be_bytes([word[0], word[1]]))
    }

    /// Reads a return address. The stack stores them low byte first.
    pub fn read_stack_word(&self, address: usize) -> Result<u16, Chip8Error> {
        let word = self.slice(address, 2)?;
        Ok(u16::from_le_bytes([word[0], word[1]]))
    }

    pub fn write_stack_word(&mut self, address: usize, value: u16) -> Result<(), Chip8Error> {
        self.load(address, &value.to_le_bytes())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fonts_installed() {
        let memory = Memory::new();
        assert_eq!(memory.slice(0x000, 80).unwrap(), &SPRITE_SHEET[..]);
        assert_eq!(memory.slice(0x0A0, 160).unwrap(), &BIG_SPRITE_SHEET[..]);
    }

    #[test]
    fn test_program_area_zeroed() {
        let memory = Memory::new();
        assert!(memory.slice(0x200, 0xE00).unwrap().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_load_and_read() {
        let mut memory = Memory::new();
        memory.load(0x300, &[0xDE, 0xAD]).unwrap();
        assert_eq!(memory.read(0x300).unwrap(), 0xDE);
        assert_eq!(memory.read(0x301).unwrap(), 0xAD);
    }

    #[test]
    fn test_load_to_last_byte() {
        let mut memory = Memory::new();
        memory.load(0xFFE, &[0x12, 0x34]).unwrap();
        assert_eq!(memory.read_opcode(0xFFE).unwrap(), 0x1234);
    }

    #[test]
    fn test_load_past_end_writes_nothing() {
        let mut memory = Memory::new();
        let err = memory.load(0xFFF, &[0x1, 0x2]).unwrap_err();
        assert!(matches!(
            err,
            Chip8Error::OutOfBoundsMemoryAccess { address: 0x1000 }
        ));
        assert_eq!(memory.read(0xFFF).unwrap(), 0x0);
    }

    #[test]
    fn test_read_out_of_bounds() {
        let memory = Memory::new();
        assert!(matches!(
            memory.read(0x1234),
            Err(Chip8Error::OutOfBoundsMemoryAccess { address: 0x1234 })
        ));
    }

    #[test]
    fn test_slice_overflowing_usize() {
        let memory = Memory::new();
        assert!(memory.slice(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_read_opcode_big_endian() {
        let mut memory = Memory::new();
        memory.load(0x200, &[0xAA, 0xBB]).unwrap();
        assert_eq!(memory.read_opcode(0x200).unwrap(), 0xAABB);
    }

    #[test]
    fn test_stack_word_little_endian() {
        let mut memory = Memory::new();
        memory.write_stack_word(0x52, 0x0ABC).unwrap();
        assert_eq!(memory.slice(0x52, 2).unwrap(), &[0xBC, 0x0A]);
        assert_eq!(memory.read_stack_word(0x52).unwrap(), 0x0ABC);
    }
}
