use rom::nesrom::{Error, NESROM};

fn ines_header(prg_banks: u8, chr_banks: u8, control_1: u8, control_2: u8) -> Vec<u8> {
    let mut header = vec![b'N', b'E', b'S', 0x1A, prg_banks, chr_banks, control_1, control_2];
    header.resize(16, 0);
    header
}

#[test]
fn parses_32kb_nrom_cartridge() {
    let mut bytes = ines_header(2, 1, 0x00, 0x00);
    bytes.extend(vec![0xAB; 32768]);
    bytes.extend(vec![0xCD; 8192]);

    let rom = NESROM::from_bytes(bytes).expect("should parse a well-formed NROM cartridge");
    assert_eq!(rom.header.prg_rom_bytes, 32768);
    assert_eq!(rom.header.chr_rom_bytes, 8192);
    assert_eq!(rom.header.mapper_number, 0);
    assert_eq!(rom.prg_rom.len(), 32768);
    assert_eq!(rom.chr_rom.len(), 8192);
}

#[test]
fn parses_16kb_nrom_cartridge() {
    let mut bytes = ines_header(1, 1, 0x00, 0x00);
    bytes.extend(vec![0xAB; 16384]);
    bytes.extend(vec![0xCD; 8192]);

    let rom = NESROM::from_bytes(bytes).expect("should parse a 16kb PRG-ROM cartridge");
    assert_eq!(rom.header.prg_rom_bytes, 16384);
    assert_eq!(rom.prg_rom.len(), 16384);
}

#[test]
fn rejects_missing_signature() {
    let mut bytes = vec![0x00; 16];
    bytes.extend(vec![0xAB; 32768]);

    let result = NESROM::from_bytes(bytes);
    assert_eq!(result.unwrap_err(), Error::InvalidSignature);
}

#[test]
fn rejects_unsupported_mapper() {
    // Lower mapper nibble in control byte 1 = 0b0001 => mapper 1 (MMC1), not NROM.
    let mut bytes = ines_header(1, 1, 0b0001_0000, 0x00);
    bytes.extend(vec![0xAB; 16384]);
    bytes.extend(vec![0xCD; 8192]);

    let result = NESROM::from_bytes(bytes);
    assert!(matches!(result, Err(Error::UnsupportedFeature(_))));
}

#[test]
fn rejects_trainer_block() {
    let mut bytes = ines_header(1, 1, 0b0000_0100, 0x00);
    bytes.extend(vec![0xAB; 16384]);

    let result = NESROM::from_bytes(bytes);
    assert!(matches!(result, Err(Error::UnsupportedFeature(_))));
}

#[test]
fn rejects_truncated_prg_rom() {
    let mut bytes = ines_header(2, 1, 0x00, 0x00);
    bytes.extend(vec![0xAB; 100]);

    let result = NESROM::from_bytes(bytes);
    assert!(matches!(result, Err(Error::Truncated { .. })));
}
