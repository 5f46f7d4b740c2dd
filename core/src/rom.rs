use std::fs;
use std::ops::Deref;
use std::path::Path;

use crate::constants::MAX_ROM_BYTES;
use crate::error::Chip8Error;

/// A CHIP-8 program: raw big-endian machine code with no header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rom {
    code: Vec<u8>,
}

impl Rom {
    /// Wraps program bytes.
    ///
    /// Returns `InvalidRomSize` if `code` is empty or larger than `MAX_ROM_BYTES`.
    pub fn with_code(code: Vec<u8>) -> Result<Self, Chip8Error> {
        if code.is_empty() || code.len() > MAX_ROM_BYTES {
            return Err(Chip8Error::InvalidRomSize {
                size: code.len(),
                max: MAX_ROM_BYTES,
            });
        }
        Ok(Rom { code })
    }

    /// Reads a ROM from a file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, Chip8Error> {
        let path = path.as_ref();
        let code = fs::read(path).map_err(|source| Chip8Error::RomNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", code.len(), path.display());
        Self::with_code(code)
    }
}

impl Deref for Rom {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rom_with_code_accepts_max_size() {
        let rom = Rom::with_code(vec![0xA; MAX_ROM_BYTES]).unwrap();
        assert_eq!(rom.len(), MAX_ROM_BYTES);
    }

    #[test]
    fn rom_with_code_rejects_too_large() {
        let rom = Rom::with_code(vec![1; MAX_ROM_BYTES + 1]);
        assert!(matches!(
            rom,
            Err(Chip8Error::InvalidRomSize { size, max: MAX_ROM_BYTES }) if size == MAX_ROM_BYTES + 1
        ));
    }

    #[test]
    fn rom_with_code_rejects_empty() {
        assert!(Rom::with_code(Vec::new()).is_err());
    }

    #[test]
    fn rom_read_missing_file() {
        let path = std::env::temp_dir().join("chip8-core-this-rom-does-not-exist.ch8");
        match Rom::read(&path) {
            Err(Chip8Error::RomNotFound { path: missing, .. }) => assert_eq!(missing, path),
            other => panic!("expected RomNotFound, got {:?}", other),
        }
    }

    #[test]
    fn rom_read_file() {
        let path = std::env::temp_dir().join(format!("chip8-core-rom-{}.ch8", std::process::id()));
        fs::write(&path, [0x00, 0xE0, 0x12, 0x00]).unwrap();
        let rom = Rom::read(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(&*rom.unwrap(), &[0x00, 0xE0, 0x12, 0x00]);
    }
}
