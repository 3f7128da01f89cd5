use super::Target;
use crate::context::Context;
use crate::cpu::alu::{add8, sub8};
use crate::cpu::{Flag, Halve, Register};
use crate::memory::Bus;

impl<B: Bus> Context<B> {
    /// 8-bit increment shared by INC r and INC (HL). C is untouched.
    fn inc8(&mut self, target: Target) {
        let sum = add8(self.read_target(target), 1);
        self.write_target(target, sum.result);
        self.regs.set_flag(Flag::Z, sum.result == 0);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, sum.half_carry);
        self.advance(1);
    }

    /// 8-bit decrement shared by DEC r and DEC (HL). C is untouched.
    fn dec8(&mut self, target: Target) {
        let diff = sub8(self.read_target(target), 1);
        self.write_target(target, diff.result);
        self.regs.set_flag(Flag::Z, diff.result == 0);
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, diff.half_carry);
        self.advance(1);
    }

    /// INC r
    pub fn inc_r(&mut self, r: Halve) {
        self.inc8(Target::Reg(r));
    }

    /// INC (HL)
    pub fn inc_hl(&mut self) {
        self.inc8(Target::MemHl);
    }

    /// DEC r
    pub fn dec_r(&mut self, r: Halve) {
        self.dec8(Target::Reg(r));
    }

    /// DEC (HL)
    pub fn dec_hl(&mut self) {
        self.dec8(Target::MemHl);
    }

    /// INC rr (no flags)
    pub fn inc_rr(&mut self, rr: Register) {
        let value = self.regs.get_register(rr).wrapping_add(1);
        self.regs.set_register(rr, value);
        self.advance(1);
    }

    /// DEC rr (no flags)
    pub fn dec_rr(&mut self, rr: Register) {
        let value = self.regs.get_register(rr).wrapping_sub(1);
        self.regs.set_register(rr, value);
        self.advance(1);
    }
}
