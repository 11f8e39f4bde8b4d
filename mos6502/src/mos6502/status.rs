/// `Status` represents the processor status register, `p` on the `MOS6502`.
///
/// Each bit in `p` has a different meaning:
///
/// ```text
/// +---+---+---+---+---+---+---+---+
/// | N | V |   | B | D | I | Z | C |
/// +---+---+---+---+---+---+---+---+
///   |   |   |   |   |   |   |   |
///   |   |   |   |   |   |   |   \-------- CARRY
///   |   |   |   |   |   |   |
///   |   |   |   |   |   |   \------------ ZERO RESULT
///   |   |   |   |   |   |
///   |   |   |   |   |   \---------------- INTERRUPT DISABLE
///   |   |   |   |   |
///   |   |   |   |   \-------------------- DECIMAL MODE (ignored on the NES)
///   |   |   |   |
///   |   |   |   \------------------------ BREAK COMMAND
///   |   |   |
///   |   |   \---------------------------- UNUSED (always 1)
///   |   |
///   |   \-------------------------------- OVERFLOW
///   |
///   \------------------------------------ NEGATIVE RESULT
/// ```
///
/// `Break` doesn't exist as storage in `P`; it is only meaningful in the byte
/// pushed by `BRK`/`PHP`. `Unused` always reads as `1` when pushed.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Status(pub u8);

impl Status {
    pub fn get(&self, flag: StatusFlag) -> bool {
        let bit = flag as u8;
        (self.0 & (1 << bit)) != 0
    }

    pub fn set(&mut self, flag: StatusFlag, value: bool) {
        let bit = flag as u8;
        if value {
            self.0 |= 1 << bit;
        } else {
            self.0 &= !(1 << bit);
        }
    }

    pub fn with(&mut self, flag: StatusFlag, value: bool) -> &mut Self {
        self.set(flag, value);
        self
    }
}

impl Default for Status {
    fn default() -> Status {
        Status(0)
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum StatusFlag {
    Carry = 0,
    Zero = 1,
    InterruptDisable = 2,
    DecimalMode = 3,
    Break = 4,
    Unused = 5,
    Overflow = 6,
    Negative = 7,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn set_and_get_are_independent_per_flag() {
        let mut status = Status::default();
        status.set(StatusFlag::Carry, true);
        status.set(StatusFlag::Negative, true);

        assert!(status.get(StatusFlag::Carry));
        assert!(status.get(StatusFlag::Negative));
        assert!(!status.get(StatusFlag::Zero));
        assert!(!status.get(StatusFlag::Overflow));
    }

    #[test]
    pub fn clearing_a_flag_leaves_others_untouched() {
        let mut status = Status(0b1111_1111);
        status.set(StatusFlag::Zero, false);

        assert_eq!(status.0, 0b1111_1101);
    }
}
