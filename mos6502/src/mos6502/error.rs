use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("unknown opcode {opcode:#04x} at pc {pc:#06x}")]
    UnknownOpcode { pc: u16, opcode: u8 },

    #[error("unimplemented opcode {opcode:#04x} ({mnemonic}) at pc {pc:#06x}")]
    Unimplemented { pc: u16, opcode: u8, mnemonic: &'static str },
}
