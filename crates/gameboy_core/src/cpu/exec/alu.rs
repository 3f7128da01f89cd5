use super::Target;
use crate::context::Context;
use crate::cpu::alu::{add16, add8, sub8};
use crate::cpu::{Flag, Halve, Register};
use crate::memory::Bus;

impl<B: Bus> Context<B> {
    /// Core 8-bit ADD/ADC on A.
    ///
    /// ADC adds the operand and then the incoming carry as two separate
    /// byte additions; a carry or half carry out of either step is reported.
    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let carry_in = (use_carry && self.regs.is_flag(Flag::C)) as u8;
        let first = add8(self.regs.a(), value);
        let second = add8(first.result, carry_in);

        self.regs.set_a(second.result);
        self.set_flags(
            second.result == 0,
            false,
            first.half_carry || second.half_carry,
            first.carry || second.carry,
        );
    }

    /// Core 8-bit SUB/SBC/CP on A. `store` is false for CP.
    fn alu_sub(&mut self, value: u8, use_carry: bool, store: bool) {
        let carry_in = (use_carry && self.regs.is_flag(Flag::C)) as u8;
        let first = sub8(self.regs.a(), value);
        let second = sub8(first.result, carry_in);

        if store {
            self.regs.set_a(second.result);
        }
        self.set_flags(
            second.result == 0,
            true,
            first.half_carry || second.half_carry,
            first.carry || second.carry,
        );
    }

    #[inline]
    fn alu_and(&mut self, value: u8) {
        let result = self.regs.a() & value;
        self.regs.set_a(result);
        self.set_flags(result == 0, false, true, false);
    }

    #[inline]
    fn alu_or(&mut self, value: u8) {
        let result = self.regs.a() | value;
        self.regs.set_a(result);
        self.set_flags(result == 0, false, false, false);
    }

    #[inline]
    fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a() ^ value;
        self.regs.set_a(result);
        self.set_flags(result == 0, false, false, false);
    }

    /// ADD A, r
    pub fn add_r(&mut self, r: Halve) {
        self.alu_add(self.read_target(Target::Reg(r)), false);
        self.advance(1);
    }

    /// ADD A, (HL)
    pub fn add_hl(&mut self) {
        self.alu_add(self.read_target(Target::MemHl), false);
        self.advance(1);
    }

    /// ADD A, n
    pub fn add_n(&mut self) {
        self.alu_add(self.imm8(), false);
        self.advance(2);
    }

    /// ADC A, r
    pub fn adc_r(&mut self, r: Halve) {
        self.alu_add(self.read_target(Target::Reg(r)), true);
        self.advance(1);
    }

    /// ADC A, (HL)
    pub fn adc_hl(&mut self) {
        self.alu_add(self.read_target(Target::MemHl), true);
        self.advance(1);
    }

    /// ADC A, n
    pub fn adc_n(&mut self) {
        self.alu_add(self.imm8(), true);
        self.advance(2);
    }

    /// SUB r
    pub fn sub_r(&mut self, r: Halve) {
        self.alu_sub(self.read_target(Target::Reg(r)), false, true);
        self.advance(1);
    }

    /// SUB (HL)
    pub fn sub_hl(&mut self) {
        self.alu_sub(self.read_target(Target::MemHl), false, true);
        self.advance(1);
    }

    /// SUB n
    pub fn sub_n(&mut self) {
        self.alu_sub(self.imm8(), false, true);
        self.advance(2);
    }

    /// SBC A, r
    pub fn sbc_r(&mut self, r: Halve) {
        self.alu_sub(self.read_target(Target::Reg(r)), true, true);
        self.advance(1);
    }

    /// SBC A, (HL)
    pub fn sbc_hl(&mut self) {
        self.alu_sub(self.read_target(Target::MemHl), true, true);
        self.advance(1);
    }

    /// SBC A, n
    pub fn sbc_n(&mut self) {
        self.alu_sub(self.imm8(), true, true);
        self.advance(2);
    }

    /// CP r: flags as for SUB r, A unchanged.
    pub fn cp_r(&mut self, r: Halve) {
        self.alu_sub(self.read_target(Target::Reg(r)), false, false);
        self.advance(1);
    }

    /// CP (HL)
    pub fn cp_hl(&mut self) {
        self.alu_sub(self.read_target(Target::MemHl), false, false);
        self.advance(1);
    }

    /// CP n
    pub fn cp_n(&mut self) {
        self.alu_sub(self.imm8(), false, false);
        self.advance(2);
    }

    /// AND r. H is always set.
    pub fn and_r(&mut self, r: Halve) {
        self.alu_and(self.read_target(Target::Reg(r)));
        self.advance(1);
    }

    /// AND (HL)
    pub fn and_hl(&mut self) {
        self.alu_and(self.read_target(Target::MemHl));
        self.advance(1);
    }

    /// AND n
    pub fn and_n(&mut self) {
        self.alu_and(self.imm8());
        self.advance(2);
    }

    /// OR r
    pub fn or_r(&mut self, r: Halve) {
        self.alu_or(self.read_target(Target::Reg(r)));
        self.advance(1);
    }

    /// OR (HL)
    pub fn or_hl(&mut self) {
        self.alu_or(self.read_target(Target::MemHl));
        self.advance(1);
    }

    /// OR n
    pub fn or_n(&mut self) {
        self.alu_or(self.imm8());
        self.advance(2);
    }

    /// XOR r
    pub fn xor_r(&mut self, r: Halve) {
        self.alu_xor(self.read_target(Target::Reg(r)));
        self.advance(1);
    }

    /// XOR (HL)
    pub fn xor_hl(&mut self) {
        self.alu_xor(self.read_target(Target::MemHl));
        self.advance(1);
    }

    /// XOR n
    pub fn xor_n(&mut self) {
        self.alu_xor(self.imm8());
        self.advance(2);
    }

    /// ADD HL, rr
    ///
    /// Z from the 16-bit result; N is cleared; H and C come from bits 11
    /// and 15.
    pub fn add_hl_rr(&mut self, rr: Register) {
        let sum = add16(self.regs.hl, self.regs.get_register(rr));
        self.regs.hl = sum.result;
        self.set_flags(sum.result == 0, false, sum.half_carry, sum.carry);
        self.advance(1);
    }

    /// ADD SP, e
    pub fn add_sp_e(&mut self) {
        self.regs.sp = self.sp_plus_offset();
        self.advance(2);
    }

    /// CCF: complement C, clear N and H.
    pub fn ccf(&mut self) {
        let carry = self.regs.is_flag(Flag::C);
        self.regs.set_flag(Flag::C, !carry);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, false);
        self.advance(1);
    }

    /// SCF: set C, clear N and H.
    pub fn scf(&mut self) {
        self.regs.set_flag(Flag::C, true);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, false);
        self.advance(1);
    }

    /// CPL: complement A, set N and H.
    pub fn cpl(&mut self) {
        self.regs.set_a(!self.regs.a());
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, true);
        self.advance(1);
    }

    /// DAA: decimal adjust A after a BCD addition or subtraction.
    ///
    /// The nibble (> 9) and byte (> 0x99) range checks only apply after an
    /// addition; after a subtraction only the H and C flags select the
    /// correction. N is left unchanged.
    pub fn daa(&mut self) {
        let a = self.regs.a();
        let subtract = self.regs.is_flag(Flag::N);
        let mut adjust = 0u8;
        let mut carry = false;

        if (!subtract && (a & 0x0F) > 0x09) || self.regs.is_flag(Flag::H) {
            adjust |= 0x06;
        }
        if (!subtract && a > 0x99) || self.regs.is_flag(Flag::C) {
            adjust |= 0x60;
            carry = true;
        }

        let result = if subtract {
            a.wrapping_sub(adjust)
        } else {
            a.wrapping_add(adjust)
        };

        self.regs.set_a(result);
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::H, false);
        self.regs.set_flag(Flag::C, carry);
        self.advance(1);
    }
}
