mod addressing_mode;
mod bus;
mod error;
mod instruction;
mod opcode;
mod register;
mod status;

pub use addressing_mode::AddressingMode;
pub use bus::{Bus, NesBus, RamBus16kb, RESET_VECTOR_ADDRESS};
pub use error::Error;
pub use instruction::InstructionSignature;
pub use opcode::Opcode;
pub use register::Register;
pub use status::{Status, StatusFlag};

pub type Result<T> = std::result::Result<T, Error>;

const STACK_BASE: u16 = 0x0100;

/// Where the operand for the instruction currently executing came from. `resolve_operand`
/// builds one of these from the addressing mode; `execute` reads and writes through it
/// without needing to know which addressing mode produced it.
#[derive(Clone, Copy, Debug)]
enum Operand {
    Implied,
    Accumulator,
    Immediate(u8),
    Memory(u16),
}

/// A Ricoh 2A03 CPU core (MOS 6502 minus decimal mode). Owns only its own registers and
/// cycle bookkeeping; memory lives behind whatever `Bus` is passed to `tick`/`reset`.
pub struct MOS6502 {
    a: u8,
    x: u8,
    y: u8,
    p: Status,
    pc: u16,
    sp: u8,

    /// Total ticks seen since construction. Increments by exactly one on every `tick()`.
    cycle_count: u64,

    /// Ticks remaining before the next instruction is fetched. `tick()` decrements this
    /// and returns early while it's nonzero; when it reaches zero the next `tick()` fetches
    /// and executes an instruction atomically and refills this from its cycle cost.
    pending_cycles: u32,
}

impl MOS6502 {
    pub fn new() -> MOS6502 {
        MOS6502 {
            a: 0,
            x: 0,
            y: 0,
            p: Status::default(),
            pc: 0,
            sp: 0xFD,
            cycle_count: 0,
            pending_cycles: 0,
        }
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn status(&self) -> Status {
        self.p
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Ticks remaining before the CPU fetches its next instruction. Zero means the *next*
    /// call to `tick()` will decode and execute a new instruction — useful for a driver
    /// that wants to trace per-instruction, not per-cycle.
    pub fn pending_cycles(&self) -> u32 {
        self.pending_cycles
    }

    /// Loads `PC` from the reset vector, puts the CPU into its post-reset register state,
    /// and accounts for the 7 cycles a real reset takes. This is a one-shot setup step,
    /// not part of the `tick()` cadence.
    pub fn reset(&mut self, bus: &impl Bus) {
        self.pc = bus.read_u16(RESET_VECTOR_ADDRESS);
        self.sp = 0xFD;
        self.write_register(Register::P, 0);
        self.p.set(StatusFlag::InterruptDisable, true);
        self.pending_cycles = 0;
        self.cycle_count = self.cycle_count.wrapping_add(7);
        log::debug!("reset: pc <- {:#06x} (from reset vector), sp <- {:#04x}", self.pc, self.sp);
    }

    /// Advances the CPU by one clock cycle. Every call increments `cycle_count` by one.
    /// Whichever call happens to land on an empty `pending_cycles` counter does the actual
    /// fetch-decode-execute work for the next instruction and pays for it up front.
    pub fn tick(&mut self, bus: &mut impl Bus) -> Result<()> {
        self.cycle_count = self.cycle_count.wrapping_add(1);

        if self.pending_cycles > 0 {
            self.pending_cycles -= 1;
            return Ok(());
        }

        let total_cycles = self.step(bus)?;
        self.pending_cycles = total_cycles as u32 - 1;
        Ok(())
    }

    fn step(&mut self, bus: &mut impl Bus) -> Result<u8> {
        let pc_at_fetch = self.pc;
        let opcode_byte = self.fetch_u8(bus);
        let signature = InstructionSignature::decode(opcode_byte)
            .ok_or(Error::UnknownOpcode { pc: pc_at_fetch, opcode: opcode_byte })?;

        let (operand, page_crossed) = self.resolve_operand(bus, signature.addressing_mode);

        log::trace!(
            "{:#06x}: {:?} {:?} (opcode {:#04x})",
            pc_at_fetch,
            signature.opcode,
            signature.addressing_mode,
            opcode_byte
        );

        let read_bonus = if page_crossed
            && Self::page_crossing_adds_cycle(signature.opcode, signature.addressing_mode)
        {
            1
        } else {
            0
        };

        let branch_bonus =
            self.execute(bus, signature.opcode, operand, page_crossed, pc_at_fetch, opcode_byte)?;

        Ok(signature.base_cycles + read_bonus + branch_bonus)
    }

    /// Whether a page boundary crossed while resolving this addressing mode costs an
    /// extra cycle. Only the indexed *read* addressing modes pay this; stores and
    /// read-modify-write instructions already have it baked into their base cost.
    fn page_crossing_adds_cycle(opcode: Opcode, mode: AddressingMode) -> bool {
        let is_indexed_read_mode = matches!(
            mode,
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectIndexed
        );
        let is_read_family = matches!(
            opcode,
            Opcode::LDA
                | Opcode::LDX
                | Opcode::LDY
                | Opcode::ADC
                | Opcode::SBC
                | Opcode::CMP
                | Opcode::AND
                | Opcode::ORA
                | Opcode::EOR
        );
        is_indexed_read_mode && is_read_family
    }

    fn fetch_u8(&mut self, bus: &impl Bus) -> u8 {
        let value = bus.read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn fetch_u16(&mut self, bus: &impl Bus) -> u16 {
        let value = bus.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    fn resolve_operand(&mut self, bus: &impl Bus, mode: AddressingMode) -> (Operand, bool) {
        match mode {
            AddressingMode::Implied => (Operand::Implied, false),
            AddressingMode::Accumulator => (Operand::Accumulator, false),
            AddressingMode::Immediate => {
                let value = self.fetch_u8(bus);
                (Operand::Immediate(value), false)
            }
            AddressingMode::Relative => {
                let offset = self.fetch_u8(bus) as i8;
                let address = self.pc.wrapping_add(offset as u16);
                let page_crossed = (self.pc & 0xFF00) != (address & 0xFF00);
                (Operand::Memory(address), page_crossed)
            }
            AddressingMode::ZeroPage => {
                let address = self.fetch_u8(bus) as u16;
                (Operand::Memory(address), false)
            }
            AddressingMode::ZeroPageX => {
                let base = self.fetch_u8(bus);
                let address = base.wrapping_add(self.x) as u16;
                (Operand::Memory(address), false)
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_u8(bus);
                let address = base.wrapping_add(self.y) as u16;
                (Operand::Memory(address), false)
            }
            AddressingMode::Absolute => {
                let address = self.fetch_u16(bus);
                (Operand::Memory(address), false)
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_u16(bus);
                let address = base.wrapping_add(self.x as u16);
                let page_crossed = (base & 0xFF00) != (address & 0xFF00);
                (Operand::Memory(address), page_crossed)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_u16(bus);
                let address = base.wrapping_add(self.y as u16);
                let page_crossed = (base & 0xFF00) != (address & 0xFF00);
                (Operand::Memory(address), page_crossed)
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_u16(bus);
                let address = bus.read_u16(pointer);
                (Operand::Memory(address), false)
            }
            AddressingMode::IndexedIndirect => {
                let base = self.fetch_u8(bus);
                let pointer = base.wrapping_add(self.x);
                let lo = bus.read_u8(pointer as u16) as u16;
                let hi = bus.read_u8(pointer.wrapping_add(1) as u16) as u16;
                (Operand::Memory((hi << 8) | lo), false)
            }
            AddressingMode::IndirectIndexed => {
                let pointer = self.fetch_u8(bus);
                let lo = bus.read_u8(pointer as u16) as u16;
                let hi = bus.read_u8(pointer.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                let address = base.wrapping_add(self.y as u16);
                let page_crossed = (base & 0xFF00) != (address & 0xFF00);
                (Operand::Memory(address), page_crossed)
            }
        }
    }

    fn read_operand_value(&self, bus: &impl Bus, operand: Operand) -> u8 {
        match operand {
            Operand::Implied => 0,
            Operand::Accumulator => self.a,
            Operand::Immediate(value) => value,
            Operand::Memory(address) => bus.read_u8(address),
        }
    }

    fn write_operand(&mut self, bus: &mut impl Bus, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Memory(address) => bus.write_u8(address, value),
            Operand::Implied | Operand::Immediate(_) => {}
        }
    }

    fn write_register(&mut self, register: Register, value: u8) {
        match register {
            Register::A => self.a = value,
            Register::X => self.x = value,
            Register::Y => self.y = value,
            Register::SP => self.sp = value,
            Register::P => {
                self.p = Status(value);
                self.p.set(StatusFlag::Break, false);
                self.p.set(StatusFlag::Unused, true);
            }
        }
    }

    fn set_zn(&mut self, value: u8) {
        self.p.set(StatusFlag::Zero, value == 0);
        self.p.set(StatusFlag::Negative, value & 0x80 != 0);
    }

    fn push_u8(&mut self, bus: &mut impl Bus, value: u8) {
        bus.write_u8(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pull_u8(&mut self, bus: &impl Bus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read_u8(STACK_BASE + self.sp as u16)
    }

    fn push_u16(&mut self, bus: &mut impl Bus, value: u16) {
        self.push_u8(bus, (value >> 8) as u8);
        self.push_u8(bus, (value & 0x00FF) as u8);
    }

    fn pull_u16(&mut self, bus: &impl Bus) -> u16 {
        let lo = self.pull_u8(bus) as u16;
        let hi = self.pull_u8(bus) as u16;
        (hi << 8) | lo
    }

    /// `A <- A + value + Carry`, used directly by ADC and (with `value` inverted) by SBC.
    fn add_with_carry(&mut self, value: u8) {
        let carry_in: u16 = if self.p.get(StatusFlag::Carry) { 1 } else { 0 };
        let sum = self.a as u16 + value as u16 + carry_in;
        let result = sum as u8;

        self.p.set(StatusFlag::Carry, sum > 0xFF);
        self.p.set(StatusFlag::Overflow, (self.a ^ result) & (value ^ result) & 0x80 != 0);

        self.a = result;
        self.set_zn(self.a);
    }

    fn compare(&mut self, register: u8, value: u8) {
        self.p.set(StatusFlag::Carry, register >= value);
        self.set_zn(register.wrapping_sub(value));
    }

    fn branch_if(&mut self, operand: Operand, page_crossed: bool, condition: bool) -> u8 {
        if !condition {
            return 0;
        }

        if let Operand::Memory(address) = operand {
            self.pc = address;
        }

        if page_crossed {
            2
        } else {
            1
        }
    }

    fn execute(
        &mut self,
        bus: &mut impl Bus,
        opcode: Opcode,
        operand: Operand,
        page_crossed: bool,
        pc_at_fetch: u16,
        opcode_byte: u8,
    ) -> Result<u8> {
        match opcode {
            Opcode::LDA => {
                self.a = self.read_operand_value(bus, operand);
                self.set_zn(self.a);
            }
            Opcode::LDX => {
                self.x = self.read_operand_value(bus, operand);
                self.set_zn(self.x);
            }
            Opcode::LDY => {
                self.y = self.read_operand_value(bus, operand);
                self.set_zn(self.y);
            }
            Opcode::STA => self.write_operand(bus, operand, self.a),
            Opcode::STX => self.write_operand(bus, operand, self.x),
            Opcode::STY => self.write_operand(bus, operand, self.y),
            Opcode::TAX => {
                self.x = self.a;
                self.set_zn(self.x);
            }
            Opcode::TAY => {
                self.y = self.a;
                self.set_zn(self.y);
            }
            Opcode::TXA => {
                self.a = self.x;
                self.set_zn(self.a);
            }
            Opcode::TYA => {
                self.a = self.y;
                self.set_zn(self.a);
            }
            Opcode::TSX => {
                self.x = self.sp;
                self.set_zn(self.x);
            }
            Opcode::TXS => self.sp = self.x,
            Opcode::PHA => self.push_u8(bus, self.a),
            Opcode::PHP => {
                let mut pushed = self.p;
                pushed.set(StatusFlag::Break, true);
                pushed.set(StatusFlag::Unused, true);
                self.push_u8(bus, pushed.0);
            }
            Opcode::PLA => {
                let value = self.pull_u8(bus);
                self.a = value;
                self.set_zn(value);
            }
            Opcode::PLP => {
                let pulled = self.pull_u8(bus);
                self.write_register(Register::P, pulled);
            }
            Opcode::AND => {
                self.a &= self.read_operand_value(bus, operand);
                self.set_zn(self.a);
            }
            Opcode::EOR => {
                self.a ^= self.read_operand_value(bus, operand);
                self.set_zn(self.a);
            }
            Opcode::ORA => {
                self.a |= self.read_operand_value(bus, operand);
                self.set_zn(self.a);
            }
            Opcode::BIT => {
                let value = self.read_operand_value(bus, operand);
                self.p.set(StatusFlag::Zero, self.a & value == 0);
                self.p.set(StatusFlag::Overflow, value & 0x40 != 0);
                self.p.set(StatusFlag::Negative, value & 0x80 != 0);
            }
            Opcode::ADC => {
                let value = self.read_operand_value(bus, operand);
                self.add_with_carry(value);
            }
            Opcode::SBC => {
                let value = self.read_operand_value(bus, operand);
                self.add_with_carry(!value);
            }
            Opcode::CMP => {
                let value = self.read_operand_value(bus, operand);
                self.compare(self.a, value);
            }
            Opcode::CPX => {
                let value = self.read_operand_value(bus, operand);
                self.compare(self.x, value);
            }
            Opcode::CPY => {
                let value = self.read_operand_value(bus, operand);
                self.compare(self.y, value);
            }
            Opcode::INC => {
                let value = self.read_operand_value(bus, operand).wrapping_add(1);
                self.write_operand(bus, operand, value);
                self.set_zn(value);
            }
            Opcode::INX => {
                self.x = self.x.wrapping_add(1);
                self.set_zn(self.x);
            }
            Opcode::INY => {
                self.y = self.y.wrapping_add(1);
                self.set_zn(self.y);
            }
            Opcode::DEC => {
                let value = self.read_operand_value(bus, operand).wrapping_sub(1);
                self.write_operand(bus, operand, value);
                self.set_zn(value);
            }
            Opcode::DEX => {
                self.x = self.x.wrapping_sub(1);
                self.set_zn(self.x);
            }
            Opcode::DEY => {
                self.y = self.y.wrapping_sub(1);
                self.set_zn(self.y);
            }
            Opcode::ASL => {
                let value = self.read_operand_value(bus, operand);
                self.p.set(StatusFlag::Carry, value & 0x80 != 0);
                let result = value << 1;
                self.write_operand(bus, operand, result);
                self.set_zn(result);
            }
            Opcode::LSR => {
                let value = self.read_operand_value(bus, operand);
                self.p.set(StatusFlag::Carry, value & 0x01 != 0);
                let result = value >> 1;
                self.write_operand(bus, operand, result);
                self.set_zn(result);
            }
            Opcode::ROL => {
                let value = self.read_operand_value(bus, operand);
                let carry_in = if self.p.get(StatusFlag::Carry) { 1 } else { 0 };
                self.p.set(StatusFlag::Carry, value & 0x80 != 0);
                let result = (value << 1) | carry_in;
                self.write_operand(bus, operand, result);
                self.set_zn(result);
            }
            Opcode::ROR => {
                let value = self.read_operand_value(bus, operand);
                let carry_in = if self.p.get(StatusFlag::Carry) { 0x80 } else { 0 };
                self.p.set(StatusFlag::Carry, value & 0x01 != 0);
                let result = (value >> 1) | carry_in;
                self.write_operand(bus, operand, result);
                self.set_zn(result);
            }
            Opcode::JMP => {
                if let Operand::Memory(address) = operand {
                    self.pc = address;
                }
            }
            Opcode::JSR => {
                if let Operand::Memory(address) = operand {
                    let return_address = self.pc.wrapping_sub(1);
                    self.push_u16(bus, return_address);
                    self.pc = address;
                }
            }
            Opcode::RTS => {
                let address = self.pull_u16(bus);
                self.pc = address.wrapping_add(1);
            }
            Opcode::BCS => return Ok(self.branch_if(operand, page_crossed, self.p.get(StatusFlag::Carry))),
            Opcode::BCC => return Ok(self.branch_if(operand, page_crossed, !self.p.get(StatusFlag::Carry))),
            Opcode::BEQ => return Ok(self.branch_if(operand, page_crossed, self.p.get(StatusFlag::Zero))),
            Opcode::BNE => return Ok(self.branch_if(operand, page_crossed, !self.p.get(StatusFlag::Zero))),
            Opcode::BMI => return Ok(self.branch_if(operand, page_crossed, self.p.get(StatusFlag::Negative))),
            Opcode::BPL => return Ok(self.branch_if(operand, page_crossed, !self.p.get(StatusFlag::Negative))),
            Opcode::BVC => return Ok(self.branch_if(operand, page_crossed, !self.p.get(StatusFlag::Overflow))),
            Opcode::BVS => return Ok(self.branch_if(operand, page_crossed, self.p.get(StatusFlag::Overflow))),
            Opcode::CLC => self.p.set(StatusFlag::Carry, false),
            Opcode::CLD => self.p.set(StatusFlag::DecimalMode, false),
            Opcode::CLI => self.p.set(StatusFlag::InterruptDisable, false),
            Opcode::CLV => self.p.set(StatusFlag::Overflow, false),
            Opcode::SEC => self.p.set(StatusFlag::Carry, true),
            Opcode::SED => self.p.set(StatusFlag::DecimalMode, true),
            Opcode::SEI => self.p.set(StatusFlag::InterruptDisable, true),
            Opcode::NOP => {}
            Opcode::BRK => {
                return Err(Error::Unimplemented {
                    pc: pc_at_fetch,
                    opcode: opcode_byte,
                    mnemonic: "BRK",
                })
            }
            Opcode::RTI => {
                let pulled = self.pull_u8(bus);
                self.write_register(Register::P, pulled);
                self.pc = self.pull_u16(bus);
            }
        }

        Ok(0)
    }
}

impl Default for MOS6502 {
    fn default() -> MOS6502 {
        MOS6502::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_one_instruction(cpu: &mut MOS6502, bus: &mut impl Bus) {
        cpu.tick(bus).unwrap();
        while cpu.pending_cycles > 0 {
            cpu.tick(bus).unwrap();
        }
    }

    #[test]
    pub fn reset_loads_pc_from_vector_and_sets_flags() {
        let bus = RamBus16kb::new().with_reset_vector(0x8000);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        assert_eq!(cpu.pc, 0x8000);
        assert_eq!(cpu.sp, 0xFD);
        assert!(cpu.p.get(StatusFlag::InterruptDisable));
        assert_eq!(cpu.cycle_count, 7);
    }

    #[test]
    pub fn lda_immediate_sets_negative_flag() {
        let mut bus = RamBus16kb::new().with_program(&[0xA9, 0x80]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.p.get(StatusFlag::Negative));
        assert!(!cpu.p.get(StatusFlag::Zero));
    }

    #[test]
    pub fn adc_sets_overflow_when_two_positives_overflow() {
        let mut bus = RamBus16kb::new().with_program(&[0x69, 0x50]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        cpu.a = 0x50;
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.a, 0xA0);
        assert!(cpu.p.get(StatusFlag::Overflow));
        assert!(cpu.p.get(StatusFlag::Negative));
    }

    #[test]
    pub fn sbc_borrows_when_carry_clear() {
        let mut bus = RamBus16kb::new().with_program(&[0xE9, 0x01]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        cpu.a = 0x00;
        cpu.p.set(StatusFlag::Carry, false);
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.a, 0xFE);
        assert!(!cpu.p.get(StatusFlag::Carry));
    }

    #[test]
    pub fn asl_absolute_sets_carry_from_bit_seven() {
        let mut bus = RamBus16kb::new()
            .with_program(&[0x0E, 0x00, 0x20])
            .with_memory_at(0x2000, &[0x81]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(bus.read_u8(0x2000), 0x02);
        assert!(cpu.p.get(StatusFlag::Carry));
    }

    #[test]
    pub fn bit_sets_overflow_and_negative_from_memory_bits() {
        let mut bus = RamBus16kb::new()
            .with_program(&[0x24, 0x10])
            .with_memory_at(0x0010, &[0xC0]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        cpu.a = 0xFF;
        run_one_instruction(&mut cpu, &mut bus);
        assert!(cpu.p.get(StatusFlag::Overflow));
        assert!(cpu.p.get(StatusFlag::Negative));
        assert!(!cpu.p.get(StatusFlag::Zero));
    }

    #[test]
    pub fn cmp_sets_carry_when_accumulator_greater_or_equal() {
        let mut bus = RamBus16kb::new().with_program(&[0xC9, 0x10]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        cpu.a = 0x10;
        run_one_instruction(&mut cpu, &mut bus);
        assert!(cpu.p.get(StatusFlag::Carry));
        assert!(cpu.p.get(StatusFlag::Zero));
    }

    #[test]
    pub fn bcc_branches_backward_when_carry_clear() {
        let program = [0x18, 0x90, 0xFD]; // CLC ; BCC -3
        let mut bus = RamBus16kb::new().with_program(&program);
        let start = bus.read_u16(RESET_VECTOR_ADDRESS);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        run_one_instruction(&mut cpu, &mut bus);
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.pc, start);
    }

    #[test]
    pub fn jsr_and_rts_round_trip() {
        let mut bus = RamBus16kb::new()
            .with_memory_at(0x0200, &[0x20, 0x00, 0x03, 0xEA])
            .with_memory_at(0x0300, &[0x60])
            .with_reset_vector(0x0200);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.pc, 0x0300);
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.pc, 0x0203);
    }

    #[test]
    pub fn indexed_indirect_wraps_within_zero_page() {
        let mut bus = RamBus16kb::new()
            .with_memory_at(0x0200, &[0xA1, 0xFE])
            .with_memory_at(0x0000, &[0x34, 0x03])
            .with_memory_at(0x0334, &[0x42])
            .with_reset_vector(0x0200);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        cpu.x = 0x02;
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.a, 0x42);
    }

    #[test]
    pub fn pha_and_pla_round_trip_accumulator() {
        let mut bus = RamBus16kb::new().with_program(&[0x48, 0xA9, 0x00, 0x68]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        cpu.a = 0x55;
        run_one_instruction(&mut cpu, &mut bus);
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.a, 0x00);
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.a, 0x55);
    }

    #[test]
    pub fn php_forces_break_and_unused_bits_in_pushed_byte() {
        let mut bus = RamBus16kb::new().with_program(&[0x08]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        cpu.p = Status(0x00);
        run_one_instruction(&mut cpu, &mut bus);
        let pushed = bus.read_u8(0x0100 + cpu.sp as u16 + 1);
        assert_eq!(pushed & 0x30, 0x30);
    }

    #[test]
    pub fn plp_preserves_break_as_zero_and_unused_as_one() {
        let mut bus = RamBus16kb::new().with_program(&[0x28]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        cpu.sp = cpu.sp.wrapping_sub(1);
        bus.write_u8(0x0100 + cpu.sp.wrapping_add(1) as u16, 0xFF);
        run_one_instruction(&mut cpu, &mut bus);
        assert!(!cpu.p.get(StatusFlag::Break));
        assert!(cpu.p.get(StatusFlag::Unused));
    }

    #[test]
    pub fn page_crossing_adds_a_cycle_for_indexed_loads_only() {
        let mut bus = RamBus16kb::new()
            .with_program(&[0xBD, 0xFF, 0x02])
            .with_memory_at(0x0300, &[0x77]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        cpu.x = 0x01;
        cpu.tick(&mut bus).unwrap();
        assert_eq!(cpu.pending_cycles, 4);
    }

    #[test]
    pub fn unknown_opcode_is_an_error() {
        let mut bus = RamBus16kb::new().with_program(&[0x02]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        let result = cpu.tick(&mut bus);
        assert!(matches!(result, Err(Error::UnknownOpcode { opcode: 0x02, .. })));
    }

    #[test]
    pub fn rti_pulls_status_and_pc_without_adjustment() {
        let mut bus = RamBus16kb::new().with_program(&[0x40]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        cpu.sp = cpu.sp.wrapping_sub(3);
        let base = 0x0100 + cpu.sp.wrapping_add(1) as u16;
        bus.write_u8(base, 0xA5); // pulled P
        bus.write_u8(base + 1, 0x34); // pulled PC lo
        bus.write_u8(base + 2, 0x12); // pulled PC hi
        run_one_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.pc, 0x1234);
        assert!(!cpu.p.get(StatusFlag::Break));
        assert!(cpu.p.get(StatusFlag::Unused));
    }

    #[test]
    pub fn brk_is_unimplemented() {
        let mut bus = RamBus16kb::new().with_program(&[0x00]);
        let mut cpu = MOS6502::new();
        cpu.reset(&bus);
        let result = cpu.tick(&mut bus);
        assert!(matches!(result, Err(Error::Unimplemented { opcode: 0x00, .. })));
    }
}
