use super::error::Error;
use super::file_type::FileType;
use super::mirroring_type::MirroringType;
use super::Result;

use std::convert::TryInto;

const HEADER_SIZE: usize = 16;

#[derive(PartialEq, Debug)]
pub struct Header {
    pub file_type: FileType,

    /// The number of bytes containing the program rom data.
    pub prg_rom_bytes: u32,

    /// The number of bytes containing the character rom data.
    pub chr_rom_bytes: u32,

    /// The type of nametable mirroring used by this rom.
    pub mirroring_type: MirroringType,

    /// If true the cartridge has battery-backed persistent memory mapped between
    /// `0x6000` and `0x7FFF`. Refused; see the cartridge loader.
    pub has_persistent_memory: bool,

    /// If true the rom has a 512-byte trainer mapped into `0x7000` to `0x71FF`.
    /// Refused; see the cartridge loader.
    pub has_trainer: bool,

    pub mapper_number: u16,
}

impl Header {
    pub fn from_bytes(rom_bytes: &[u8]) -> Result<Header> {
        if rom_bytes.len() < HEADER_SIZE {
            return Err(Error::Truncated { expected: HEADER_SIZE, found: rom_bytes.len() });
        }

        let rom_bytes: [u8; HEADER_SIZE] = rom_bytes[0..HEADER_SIZE]
            .try_into()
            .expect("slice is exactly HEADER_SIZE bytes long");

        let file_type = FileType::from_bytes(rom_bytes)?;
        match file_type {
            FileType::INES => Header::from_bytes_ines(rom_bytes),
            FileType::NES2 => Header::from_bytes_nes2(rom_bytes),
        }
    }

    /// Load a header in the iNES format.
    fn from_bytes_ines(rom_bytes: [u8; HEADER_SIZE]) -> Result<Header> {
        // Byte 4 gives the number of program rom banks in 16kb increments.
        let prg_rom_bytes = (rom_bytes[4] as u32) * 16384;

        // Byte 5 gives the number of character rom banks in 8kb increments.
        let chr_rom_bytes = (rom_bytes[5] as u32) * 8192;

        let control_1 = rom_bytes[6];
        let control_2 = rom_bytes[7];

        let mirroring_type = MirroringType::from_ines_byte_6(control_1);
        let has_persistent_memory = (control_1 & 0b0000_0010) >> 1 != 0;
        let has_trainer = (control_1 & 0b0000_0100) >> 2 != 0;

        let mapper_lower_nibble = (control_1 & 0b1111_0000) >> 4;
        let mapper_upper_nibble = control_2 & 0b1111_0000;
        let mapper_number = (mapper_upper_nibble | mapper_lower_nibble) as u16;

        Ok(Header {
            file_type: FileType::INES,
            prg_rom_bytes,
            chr_rom_bytes,
            mirroring_type,
            has_persistent_memory,
            has_trainer,
            mapper_number,
        })
    }

    /// NES 2.0 is backwards compatible with iNES for everything we read, so we parse it
    /// the same way and just correct the reported file type.
    fn from_bytes_nes2(rom_bytes: [u8; HEADER_SIZE]) -> Result<Header> {
        let mut header = Header::from_bytes_ines(rom_bytes)?;
        header.file_type = FileType::NES2;
        Ok(header)
    }
}
