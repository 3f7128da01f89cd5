use super::Target;
use crate::context::Context;
use crate::cpu::{Flag, Halve};
use crate::memory::Bus;

#[inline]
fn bit_mask(bit: u8) -> u8 {
    debug_assert!(bit < 8, "bit index out of range: {bit}");
    1 << (bit & 0x07)
}

impl<B: Bus> Context<B> {
    /// Z is set when the bit is clear; N cleared, H set, C preserved.
    fn test_bit(&mut self, bit: u8, target: Target) {
        let set = self.read_target(target) & bit_mask(bit) != 0;
        self.regs.set_flag(Flag::Z, !set);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, true);
        self.advance(2);
    }

    fn update_bit(&mut self, bit: u8, target: Target, value: bool) {
        let current = self.read_target(target);
        let result = if value {
            current | bit_mask(bit)
        } else {
            current & !bit_mask(bit)
        };
        self.write_target(target, result);
        self.advance(2);
    }

    /// BIT b, r
    pub fn bit_r(&mut self, bit: u8, r: Halve) {
        self.test_bit(bit, Target::Reg(r));
    }

    /// BIT b, (HL)
    pub fn bit_hl(&mut self, bit: u8) {
        self.test_bit(bit, Target::MemHl);
    }

    /// RES b, r
    pub fn res_r(&mut self, bit: u8, r: Halve) {
        self.update_bit(bit, Target::Reg(r), false);
    }

    /// RES b, (HL)
    pub fn res_hl(&mut self, bit: u8) {
        self.update_bit(bit, Target::MemHl, false);
    }

    /// SET b, r
    pub fn set_r(&mut self, bit: u8, r: Halve) {
        self.update_bit(bit, Target::Reg(r), true);
    }

    /// SET b, (HL)
    pub fn set_hl(&mut self, bit: u8) {
        self.update_bit(bit, Target::MemHl, true);
    }
}
