use super::Target;
use crate::context::Context;
use crate::cpu::{Flag, Halve};
use crate::memory::Bus;

/// Rotate/shift operation. Every variant moves the value by one bit and
/// reports the bit that falls off the end.
#[derive(Clone, Copy, Debug)]
enum Shift {
    /// Circular left: bit 7 goes to C and bit 0.
    Rlc,
    /// Circular right: bit 0 goes to C and bit 7.
    Rrc,
    /// Left through carry: old C enters bit 0.
    Rl,
    /// Right through carry: old C enters bit 7.
    Rr,
    /// Left, zero in.
    Sla,
    /// Right, bit 7 kept.
    Sra,
    /// Right, zero in.
    Srl,
}

impl Shift {
    /// Returns `(result, carry_out)`.
    #[inline]
    fn apply(self, value: u8, carry_in: bool) -> (u8, bool) {
        let bit7 = value & 0x80 != 0;
        let bit0 = value & 0x01 != 0;
        match self {
            Shift::Rlc => (value.rotate_left(1), bit7),
            Shift::Rrc => (value.rotate_right(1), bit0),
            Shift::Rl => ((value << 1) | carry_in as u8, bit7),
            Shift::Rr => ((value >> 1) | ((carry_in as u8) << 7), bit0),
            Shift::Sla => (value << 1, bit7),
            Shift::Sra => ((value >> 1) | (value & 0x80), bit0),
            Shift::Srl => (value >> 1, bit0),
        }
    }
}

impl<B: Bus> Context<B> {
    /// Shift `target` in place. Only C is written; Z, N and H keep their
    /// previous values. `len` is 1 for the accumulator forms and 2 for the
    /// CB-prefixed ones.
    fn shift(&mut self, target: Target, op: Shift, len: u16) {
        let value = self.read_target(target);
        let (result, carry) = op.apply(value, self.regs.is_flag(Flag::C));
        self.write_target(target, result);
        self.regs.set_flag(Flag::C, carry);
        self.advance(len);
    }

    /// RLCA
    pub fn rlca(&mut self) {
        self.shift(Target::Reg(Halve::A), Shift::Rlc, 1);
    }

    /// RRCA
    pub fn rrca(&mut self) {
        self.shift(Target::Reg(Halve::A), Shift::Rrc, 1);
    }

    /// RLA
    pub fn rla(&mut self) {
        self.shift(Target::Reg(Halve::A), Shift::Rl, 1);
    }

    /// RRA
    pub fn rra(&mut self) {
        self.shift(Target::Reg(Halve::A), Shift::Rr, 1);
    }

    /// RLC r
    pub fn rlc_r(&mut self, r: Halve) {
        self.shift(Target::Reg(r), Shift::Rlc, 2);
    }

    /// RLC (HL)
    pub fn rlc_hl(&mut self) {
        self.shift(Target::MemHl, Shift::Rlc, 2);
    }

    /// RRC r
    pub fn rrc_r(&mut self, r: Halve) {
        self.shift(Target::Reg(r), Shift::Rrc, 2);
    }

    /// RRC (HL)
    pub fn rrc_hl(&mut self) {
        self.shift(Target::MemHl, Shift::Rrc, 2);
    }

    /// RL r
    pub fn rl_r(&mut self, r: Halve) {
        self.shift(Target::Reg(r), Shift::Rl, 2);
    }

    /// RL (HL)
    pub fn rl_hl(&mut self) {
        self.shift(Target::MemHl, Shift::Rl, 2);
    }

    /// RR r
    pub fn rr_r(&mut self, r: Halve) {
        self.shift(Target::Reg(r), Shift::Rr, 2);
    }

    /// RR (HL)
    pub fn rr_hl(&mut self) {
        self.shift(Target::MemHl, Shift::Rr, 2);
    }

    /// SLA r
    pub fn sla_r(&mut self, r: Halve) {
        self.shift(Target::Reg(r), Shift::Sla, 2);
    }

    /// SLA (HL)
    pub fn sla_hl(&mut self) {
        self.shift(Target::MemHl, Shift::Sla, 2);
    }

    /// SRA r
    pub fn sra_r(&mut self, r: Halve) {
        self.shift(Target::Reg(r), Shift::Sra, 2);
    }

    /// SRA (HL)
    pub fn sra_hl(&mut self) {
        self.shift(Target::MemHl, Shift::Sra, 2);
    }

    /// SRL r
    pub fn srl_r(&mut self, r: Halve) {
        self.shift(Target::Reg(r), Shift::Srl, 2);
    }

    /// SRL (HL)
    pub fn srl_hl(&mut self) {
        self.shift(Target::MemHl, Shift::Srl, 2);
    }

    fn swap(&mut self, target: Target) {
        let result = self.read_target(target).rotate_left(4);
        self.write_target(target, result);
        self.set_flags(result == 0, false, false, false);
        self.advance(2);
    }

    /// SWAP r: exchange nibbles; Z from the result, N/H/C cleared.
    pub fn swap_r(&mut self, r: Halve) {
        self.swap(Target::Reg(r));
    }

    /// SWAP (HL)
    pub fn swap_hl(&mut self) {
        self.swap(Target::MemHl);
    }
}

#[cfg(test)]
mod tests {
    use super::Shift;

    #[test]
    fn shift_table() {
        assert_eq!(Shift::Rlc.apply(0x85, false), (0x0B, true));
        assert_eq!(Shift::Rrc.apply(0x01, false), (0x80, true));
        assert_eq!(Shift::Rl.apply(0x80, true), (0x01, true));
        assert_eq!(Shift::Rl.apply(0x40, false), (0x80, false));
        assert_eq!(Shift::Rr.apply(0x01, true), (0x80, true));
        assert_eq!(Shift::Sla.apply(0xFF, true), (0xFE, true));
        assert_eq!(Shift::Sra.apply(0x81, false), (0xC0, true));
        assert_eq!(Shift::Srl.apply(0x81, true), (0x40, true));
    }
}
