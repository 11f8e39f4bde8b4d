use super::error::Error;
use super::Result;

#[derive(PartialEq, Eq, Debug)]
pub enum FileType {
    /// The iNES file type
    INES,

    /// The NES 2.0 file type
    NES2,
}

impl FileType {
    pub fn from_bytes(rom_bytes: [u8; 16]) -> Result<FileType> {
        // iNES and NES 2.0 both start with "NES<EOF>" where EOF is the DOS end of file (`0x1A`).
        let has_signature = rom_bytes[0..4] == *b"NES\x1A";
        if !has_signature {
            return Err(Error::InvalidSignature);
        }

        // NES 2.0 files have bit 3 set and bit 2 clear in byte 7 of the header.
        let has_nes2_identifier = rom_bytes[7] & 0b0000_1100 == 0b0000_1000;

        if has_nes2_identifier {
            Ok(FileType::NES2)
        } else {
            Ok(FileType::INES)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn rejects_missing_signature() {
        let bytes = [0u8; 16];
        assert_eq!(FileType::from_bytes(bytes), Err(Error::InvalidSignature));
    }

    #[test]
    pub fn recognizes_ines_signature() {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(b"NES\x1A");
        assert_eq!(FileType::from_bytes(bytes), Ok(FileType::INES));
    }

    #[test]
    pub fn recognizes_nes2_identifier_bits() {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(b"NES\x1A");
        bytes[7] = 0b0000_1000;
        assert_eq!(FileType::from_bytes(bytes), Ok(FileType::NES2));
    }
}
