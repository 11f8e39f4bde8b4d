mod error;
mod file_type;
mod header;
mod mirroring_type;

pub use error::Error;
pub use file_type::FileType;
pub use header::Header;
pub use mirroring_type::MirroringType;

pub type Result<A> = std::result::Result<A, Error>;

/// Only NROM (mapper 0) is supported; every other mapper number is refused at load time.
const SUPPORTED_MAPPER: u16 = 0;

#[derive(PartialEq, Debug)]
pub struct NESROM {
    pub header: Header,
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
}

impl NESROM {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<NESROM> {
        let mut bytes = bytes.into_iter();

        let header_bytes: Vec<u8> = bytes.by_ref().take(16).collect();
        let header = Header::from_bytes(&header_bytes)?;

        log::info!(
            "parsed {:?} header: {} bytes prg-rom, {} bytes chr-rom, mapper {}, mirroring {:?}",
            header.file_type,
            header.prg_rom_bytes,
            header.chr_rom_bytes,
            header.mapper_number,
            header.mirroring_type
        );

        if header.mapper_number != SUPPORTED_MAPPER {
            let error = Error::UnsupportedFeature(format!("mapper {}", header.mapper_number));
            log::error!("refusing to load cartridge: {}", error);
            return Err(error);
        }

        if header.has_trainer {
            let error = Error::UnsupportedFeature("512-byte trainer block".to_string());
            log::error!("refusing to load cartridge: {}", error);
            return Err(error);
        }

        if header.has_persistent_memory {
            let error = Error::UnsupportedFeature("battery-backed PRG RAM".to_string());
            log::error!("refusing to load cartridge: {}", error);
            return Err(error);
        }

        let prg_rom: Vec<u8> = bytes.by_ref().take(header.prg_rom_bytes as usize).collect();
        if prg_rom.len() != header.prg_rom_bytes as usize {
            let error = Error::Truncated { expected: header.prg_rom_bytes as usize, found: prg_rom.len() };
            log::error!("refusing to load cartridge: {}", error);
            return Err(error);
        }

        let chr_rom: Vec<u8> = bytes.by_ref().take(header.chr_rom_bytes as usize).collect();

        Ok(NESROM { header, prg_rom, chr_rom })
    }
}
