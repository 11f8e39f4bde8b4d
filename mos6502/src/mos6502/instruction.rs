use super::addressing_mode::AddressingMode;
use super::opcode::Opcode;

/// The signature of an instruction is its `Opcode` + `AddressingMode` pair, plus the base
/// number of cycles it costs before any branch/page-crossing extras are applied.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct InstructionSignature {
    pub opcode: Opcode,
    pub addressing_mode: AddressingMode,
    pub base_cycles: u8,
}

impl InstructionSignature {
    const fn new(opcode: Opcode, addressing_mode: AddressingMode, base_cycles: u8) -> InstructionSignature {
        InstructionSignature { opcode, addressing_mode, base_cycles }
    }

    pub fn decode(byte: u8) -> Option<InstructionSignature> {
        INSTRUCTION_SIGNATURES[byte as usize]
    }
}

use AddressingMode::{
    Implied as Imp, Accumulator as Acc, Immediate as Imm, Relative as Rel,
    ZeroPage as Zp, ZeroPageX as Zpx, ZeroPageY as Zpy,
    Absolute as Abs, AbsoluteX as Absx, AbsoluteY as Absy,
    Indirect as Ind, IndexedIndirect as Indx, IndirectIndexed as Indy,
};
use Opcode::*;

/// Decode table for every official NMOS 6502 opcode. Unofficial opcodes decode to `None`
/// and are reported as `Error::UnknownOpcode`.
static INSTRUCTION_SIGNATURES: [Option<InstructionSignature>; 256] = [
    /*0x00*/ Some(InstructionSignature::new(BRK, Imp, 7)),
    /*0x01*/ Some(InstructionSignature::new(ORA, Indx, 6)),
    /*0x02*/ None,
    /*0x03*/ None,
    /*0x04*/ None,
    /*0x05*/ Some(InstructionSignature::new(ORA, Zp, 3)),
    /*0x06*/ Some(InstructionSignature::new(ASL, Zp, 5)),
    /*0x07*/ None,
    /*0x08*/ Some(InstructionSignature::new(PHP, Imp, 3)),
    /*0x09*/ Some(InstructionSignature::new(ORA, Imm, 2)),
    /*0x0A*/ Some(InstructionSignature::new(ASL, Acc, 2)),
    /*0x0B*/ None,
    /*0x0C*/ None,
    /*0x0D*/ Some(InstructionSignature::new(ORA, Abs, 4)),
    /*0x0E*/ Some(InstructionSignature::new(ASL, Abs, 6)),
    /*0x0F*/ None,
    /*0x10*/ Some(InstructionSignature::new(BPL, Rel, 2)),
    /*0x11*/ Some(InstructionSignature::new(ORA, Indy, 5)),
    /*0x12*/ None,
    /*0x13*/ None,
    /*0x14*/ None,
    /*0x15*/ Some(InstructionSignature::new(ORA, Zpx, 4)),
    /*0x16*/ Some(InstructionSignature::new(ASL, Zpx, 6)),
    /*0x17*/ None,
    /*0x18*/ Some(InstructionSignature::new(CLC, Imp, 2)),
    /*0x19*/ Some(InstructionSignature::new(ORA, Absy, 4)),
    /*0x1A*/ None,
    /*0x1B*/ None,
    /*0x1C*/ None,
    /*0x1D*/ Some(InstructionSignature::new(ORA, Absx, 4)),
    /*0x1E*/ Some(InstructionSignature::new(ASL, Absx, 7)),
    /*0x1F*/ None,
    /*0x20*/ Some(InstructionSignature::new(JSR, Abs, 6)),
    /*0x21*/ Some(InstructionSignature::new(AND, Indx, 6)),
    /*0x22*/ None,
    /*0x23*/ None,
    /*0x24*/ Some(InstructionSignature::new(BIT, Zp, 3)),
    /*0x25*/ Some(InstructionSignature::new(AND, Zp, 3)),
    /*0x26*/ Some(InstructionSignature::new(ROL, Zp, 5)),
    /*0x27*/ None,
    /*0x28*/ Some(InstructionSignature::new(PLP, Imp, 4)),
    /*0x29*/ Some(InstructionSignature::new(AND, Imm, 2)),
    /*0x2A*/ Some(InstructionSignature::new(ROL, Acc, 2)),
    /*0x2B*/ None,
    /*0x2C*/ Some(InstructionSignature::new(BIT, Abs, 4)),
    /*0x2D*/ Some(InstructionSignature::new(AND, Abs, 4)),
    /*0x2E*/ Some(InstructionSignature::new(ROL, Abs, 6)),
    /*0x2F*/ None,
    /*0x30*/ Some(InstructionSignature::new(BMI, Rel, 2)),
    /*0x31*/ Some(InstructionSignature::new(AND, Indy, 5)),
    /*0x32*/ None,
    /*0x33*/ None,
    /*0x34*/ None,
    /*0x35*/ Some(InstructionSignature::new(AND, Zpx, 4)),
    /*0x36*/ Some(InstructionSignature::new(ROL, Zpx, 6)),
    /*0x37*/ None,
    /*0x38*/ Some(InstructionSignature::new(SEC, Imp, 2)),
    /*0x39*/ Some(InstructionSignature::new(AND, Absy, 4)),
    /*0x3A*/ None,
    /*0x3B*/ None,
    /*0x3C*/ None,
    /*0x3D*/ Some(InstructionSignature::new(AND, Absx, 4)),
    /*0x3E*/ Some(InstructionSignature::new(ROL, Absx, 7)),
    /*0x3F*/ None,
    /*0x40*/ Some(InstructionSignature::new(RTI, Imp, 6)),
    /*0x41*/ Some(InstructionSignature::new(EOR, Indx, 6)),
    /*0x42*/ None,
    /*0x43*/ None,
    /*0x44*/ None,
    /*0x45*/ Some(InstructionSignature::new(EOR, Zp, 3)),
    /*0x46*/ Some(InstructionSignature::new(LSR, Zp, 5)),
    /*0x47*/ None,
    /*0x48*/ Some(InstructionSignature::new(PHA, Imp, 3)),
    /*0x49*/ Some(InstructionSignature::new(EOR, Imm, 2)),
    /*0x4A*/ Some(InstructionSignature::new(LSR, Acc, 2)),
    /*0x4B*/ None,
    /*0x4C*/ Some(InstructionSignature::new(JMP, Abs, 3)),
    /*0x4D*/ Some(InstructionSignature::new(EOR, Abs, 4)),
    /*0x4E*/ Some(InstructionSignature::new(LSR, Abs, 6)),
    /*0x4F*/ None,
    /*0x50*/ Some(InstructionSignature::new(BVC, Rel, 2)),
    /*0x51*/ Some(InstructionSignature::new(EOR, Indy, 5)),
    /*0x52*/ None,
    /*0x53*/ None,
    /*0x54*/ None,
    /*0x55*/ Some(InstructionSignature::new(EOR, Zpx, 4)),
    /*0x56*/ Some(InstructionSignature::new(LSR, Zpx, 6)),
    /*0x57*/ None,
    /*0x58*/ Some(InstructionSignature::new(CLI, Imp, 2)),
    /*0x59*/ Some(InstructionSignature::new(EOR, Absy, 4)),
    /*0x5A*/ None,
    /*0x5B*/ None,
    /*0x5C*/ None,
    /*0x5D*/ Some(InstructionSignature::new(EOR, Absx, 4)),
    /*0x5E*/ Some(InstructionSignature::new(LSR, Absx, 7)),
    /*0x5F*/ None,
    /*0x60*/ Some(InstructionSignature::new(RTS, Imp, 6)),
    /*0x61*/ Some(InstructionSignature::new(ADC, Indx, 6)),
    /*0x62*/ None,
    /*0x63*/ None,
    /*0x64*/ None,
    /*0x65*/ Some(InstructionSignature::new(ADC, Zp, 3)),
    /*0x66*/ Some(InstructionSignature::new(ROR, Zp, 5)),
    /*0x67*/ None,
    /*0x68*/ Some(InstructionSignature::new(PLA, Imp, 4)),
    /*0x69*/ Some(InstructionSignature::new(ADC, Imm, 2)),
    /*0x6A*/ Some(InstructionSignature::new(ROR, Acc, 2)),
    /*0x6B*/ None,
    /*0x6C*/ Some(InstructionSignature::new(JMP, Ind, 5)),
    /*0x6D*/ Some(InstructionSignature::new(ADC, Abs, 4)),
    /*0x6E*/ Some(InstructionSignature::new(ROR, Abs, 6)),
    /*0x6F*/ None,
    /*0x70*/ Some(InstructionSignature::new(BVS, Rel, 2)),
    /*0x71*/ Some(InstructionSignature::new(ADC, Indy, 5)),
    /*0x72*/ None,
    /*0x73*/ None,
    /*0x74*/ None,
    /*0x75*/ Some(InstructionSignature::new(ADC, Zpx, 4)),
    /*0x76*/ Some(InstructionSignature::new(ROR, Zpx, 6)),
    /*0x77*/ None,
    /*0x78*/ Some(InstructionSignature::new(SEI, Imp, 2)),
    /*0x79*/ Some(InstructionSignature::new(ADC, Absy, 4)),
    /*0x7A*/ None,
    /*0x7B*/ None,
    /*0x7C*/ None,
    /*0x7D*/ Some(InstructionSignature::new(ADC, Absx, 4)),
    /*0x7E*/ Some(InstructionSignature::new(ROR, Absx, 7)),
    /*0x7F*/ None,
    /*0x80*/ None,
    /*0x81*/ Some(InstructionSignature::new(STA, Indx, 6)),
    /*0x82*/ None,
    /*0x83*/ None,
    /*0x84*/ Some(InstructionSignature::new(STY, Zp, 3)),
    /*0x85*/ Some(InstructionSignature::new(STA, Zp, 3)),
    /*0x86*/ Some(InstructionSignature::new(STX, Zp, 3)),
    /*0x87*/ None,
    /*0x88*/ Some(InstructionSignature::new(DEY, Imp, 2)),
    /*0x89*/ None,
    /*0x8A*/ Some(InstructionSignature::new(TXA, Imp, 2)),
    /*0x8B*/ None,
    /*0x8C*/ Some(InstructionSignature::new(STY, Abs, 4)),
    /*0x8D*/ Some(InstructionSignature::new(STA, Abs, 4)),
    /*0x8E*/ Some(InstructionSignature::new(STX, Abs, 4)),
    /*0x8F*/ None,
    /*0x90*/ Some(InstructionSignature::new(BCC, Rel, 2)),
    /*0x91*/ Some(InstructionSignature::new(STA, Indy, 6)),
    /*0x92*/ None,
    /*0x93*/ None,
    /*0x94*/ Some(InstructionSignature::new(STY, Zpx, 4)),
    /*0x95*/ Some(InstructionSignature::new(STA, Zpx, 4)),
    /*0x96*/ Some(InstructionSignature::new(STX, Zpy, 4)),
    /*0x97*/ None,
    /*0x98*/ Some(InstructionSignature::new(TYA, Imp, 2)),
    /*0x99*/ Some(InstructionSignature::new(STA, Absy, 5)),
    /*0x9A*/ Some(InstructionSignature::new(TXS, Imp, 2)),
    /*0x9B*/ None,
    /*0x9C*/ None,
    /*0x9D*/ Some(InstructionSignature::new(STA, Absx, 5)),
    /*0x9E*/ None,
    /*0x9F*/ None,
    /*0xA0*/ Some(InstructionSignature::new(LDY, Imm, 2)),
    /*0xA1*/ Some(InstructionSignature::new(LDA, Indx, 6)),
    /*0xA2*/ Some(InstructionSignature::new(LDX, Imm, 2)),
    /*0xA3*/ None,
    /*0xA4*/ Some(InstructionSignature::new(LDY, Zp, 3)),
    /*0xA5*/ Some(InstructionSignature::new(LDA, Zp, 3)),
    /*0xA6*/ Some(InstructionSignature::new(LDX, Zp, 3)),
    /*0xA7*/ None,
    /*0xA8*/ Some(InstructionSignature::new(TAY, Imp, 2)),
    /*0xA9*/ Some(InstructionSignature::new(LDA, Imm, 2)),
    /*0xAA*/ Some(InstructionSignature::new(TAX, Imp, 2)),
    /*0xAB*/ None,
    /*0xAC*/ Some(InstructionSignature::new(LDY, Abs, 4)),
    /*0xAD*/ Some(InstructionSignature::new(LDA, Abs, 4)),
    /*0xAE*/ Some(InstructionSignature::new(LDX, Abs, 4)),
    /*0xAF*/ None,
    /*0xB0*/ Some(InstructionSignature::new(BCS, Rel, 2)),
    /*0xB1*/ Some(InstructionSignature::new(LDA, Indy, 5)),
    /*0xB2*/ None,
    /*0xB3*/ None,
    /*0xB4*/ Some(InstructionSignature::new(LDY, Zpx, 4)),
    /*0xB5*/ Some(InstructionSignature::new(LDA, Zpx, 4)),
    /*0xB6*/ Some(InstructionSignature::new(LDX, Zpy, 4)),
    /*0xB7*/ None,
    /*0xB8*/ Some(InstructionSignature::new(CLV, Imp, 2)),
    /*0xB9*/ Some(InstructionSignature::new(LDA, Absy, 4)),
    /*0xBA*/ Some(InstructionSignature::new(TSX, Imp, 2)),
    /*0xBB*/ None,
    /*0xBC*/ Some(InstructionSignature::new(LDY, Absx, 4)),
    /*0xBD*/ Some(InstructionSignature::new(LDA, Absx, 4)),
    /*0xBE*/ Some(InstructionSignature::new(LDX, Absy, 4)),
    /*0xBF*/ None,
    /*0xC0*/ Some(InstructionSignature::new(CPY, Imm, 2)),
    /*0xC1*/ Some(InstructionSignature::new(CMP, Indx, 6)),
    /*0xC2*/ None,
    /*0xC3*/ None,
    /*0xC4*/ Some(InstructionSignature::new(CPY, Zp, 3)),
    /*0xC5*/ Some(InstructionSignature::new(CMP, Zp, 3)),
    /*0xC6*/ Some(InstructionSignature::new(DEC, Zp, 5)),
    /*0xC7*/ None,
    /*0xC8*/ Some(InstructionSignature::new(INY, Imp, 2)),
    /*0xC9*/ Some(InstructionSignature::new(CMP, Imm, 2)),
    /*0xCA*/ Some(InstructionSignature::new(DEX, Imp, 2)),
    /*0xCB*/ None,
    /*0xCC*/ Some(InstructionSignature::new(CPY, Abs, 4)),
    /*0xCD*/ Some(InstructionSignature::new(CMP, Abs, 4)),
    /*0xCE*/ Some(InstructionSignature::new(DEC, Abs, 6)),
    /*0xCF*/ None,
    /*0xD0*/ Some(InstructionSignature::new(BNE, Rel, 2)),
    /*0xD1*/ Some(InstructionSignature::new(CMP, Indy, 5)),
    /*0xD2*/ None,
    /*0xD3*/ None,
    /*0xD4*/ None,
    /*0xD5*/ Some(InstructionSignature::new(CMP, Zpx, 4)),
    /*0xD6*/ Some(InstructionSignature::new(DEC, Zpx, 6)),
    /*0xD7*/ None,
    /*0xD8*/ Some(InstructionSignature::new(CLD, Imp, 2)),
    /*0xD9*/ Some(InstructionSignature::new(CMP, Absy, 4)),
    /*0xDA*/ None,
    /*0xDB*/ None,
    /*0xDC*/ None,
    /*0xDD*/ Some(InstructionSignature::new(CMP, Absx, 4)),
    /*0xDE*/ Some(InstructionSignature::new(DEC, Absx, 7)),
    /*0xDF*/ None,
    /*0xE0*/ Some(InstructionSignature::new(CPX, Imm, 2)),
    /*0xE1*/ Some(InstructionSignature::new(SBC, Indx, 6)),
    /*0xE2*/ None,
    /*0xE3*/ None,
    /*0xE4*/ Some(InstructionSignature::new(CPX, Zp, 3)),
    /*0xE5*/ Some(InstructionSignature::new(SBC, Zp, 3)),
    /*0xE6*/ Some(InstructionSignature::new(INC, Zp, 5)),
    /*0xE7*/ None,
    /*0xE8*/ Some(InstructionSignature::new(INX, Imp, 2)),
    /*0xE9*/ Some(InstructionSignature::new(SBC, Imm, 2)),
    /*0xEA*/ Some(InstructionSignature::new(NOP, Imp, 2)),
    /*0xEB*/ None,
    /*0xEC*/ Some(InstructionSignature::new(CPX, Abs, 4)),
    /*0xED*/ Some(InstructionSignature::new(SBC, Abs, 4)),
    /*0xEE*/ Some(InstructionSignature::new(INC, Abs, 6)),
    /*0xEF*/ None,
    /*0xF0*/ Some(InstructionSignature::new(BEQ, Rel, 2)),
    /*0xF1*/ Some(InstructionSignature::new(SBC, Indy, 5)),
    /*0xF2*/ None,
    /*0xF3*/ None,
    /*0xF4*/ None,
    /*0xF5*/ Some(InstructionSignature::new(SBC, Zpx, 4)),
    /*0xF6*/ Some(InstructionSignature::new(INC, Zpx, 6)),
    /*0xF7*/ None,
    /*0xF8*/ Some(InstructionSignature::new(SED, Imp, 2)),
    /*0xF9*/ Some(InstructionSignature::new(SBC, Absy, 4)),
    /*0xFA*/ None,
    /*0xFB*/ None,
    /*0xFC*/ None,
    /*0xFD*/ Some(InstructionSignature::new(SBC, Absx, 4)),
    /*0xFE*/ Some(InstructionSignature::new(INC, Absx, 7)),
    /*0xFF*/ None,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn decodes_known_opcode() {
        let signature = InstructionSignature::decode(0xA9).unwrap();
        assert_eq!(signature.opcode, Opcode::LDA);
        assert_eq!(signature.addressing_mode, AddressingMode::Immediate);
        assert_eq!(signature.base_cycles, 2);
    }

    #[test]
    pub fn rejects_unofficial_opcode() {
        assert_eq!(InstructionSignature::decode(0x02), None);
    }

    #[test]
    pub fn rejects_unused_opcode() {
        assert_eq!(InstructionSignature::decode(0xFF), None);
    }
}
