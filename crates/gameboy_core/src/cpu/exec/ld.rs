use crate::context::Context;
use crate::cpu::alu::add8;
use crate::cpu::{Halve, Register};
use crate::memory::Bus;

/// Base address of the high page used by the LDH forms.
const HIGH_PAGE: u16 = 0xFF00;

impl<B: Bus> Context<B> {
    /// LD r, r'
    pub fn ld_r_r(&mut self, dst: Halve, src: Halve) {
        let value = self.regs.get_halve(src);
        self.regs.set_halve(dst, value);
        self.advance(1);
    }

    /// LD r, n
    pub fn ld_r_n(&mut self, dst: Halve) {
        let value = self.imm8();
        self.regs.set_halve(dst, value);
        self.advance(2);
    }

    /// LD r, (HL)
    pub fn ld_r_hl(&mut self, dst: Halve) {
        let value = self.memory.read8(self.regs.hl);
        self.regs.set_halve(dst, value);
        self.advance(1);
    }

    /// LD (HL), r
    pub fn ld_hl_r(&mut self, src: Halve) {
        let value = self.regs.get_halve(src);
        self.memory.write8(self.regs.hl, value);
        self.advance(1);
    }

    /// LD (HL), n
    pub fn ld_hl_n(&mut self) {
        let value = self.imm8();
        self.memory.write8(self.regs.hl, value);
        self.advance(2);
    }

    /// LD A, (BC)
    pub fn ld_a_bc(&mut self) {
        self.load_a_from(self.regs.bc);
    }

    /// LD A, (DE)
    pub fn ld_a_de(&mut self) {
        self.load_a_from(self.regs.de);
    }

    /// LD (BC), A
    pub fn ld_bc_a(&mut self) {
        self.store_a_to(self.regs.bc);
    }

    /// LD (DE), A
    pub fn ld_de_a(&mut self) {
        self.store_a_to(self.regs.de);
    }

    /// LD A, (nn)
    pub fn ld_a_nn(&mut self) {
        let addr = self.imm16();
        self.regs.set_a(self.memory.read8(addr));
        self.advance(3);
    }

    /// LD (nn), A
    pub fn ld_nn_a(&mut self) {
        let addr = self.imm16();
        self.memory.write8(addr, self.regs.a());
        self.advance(3);
    }

    /// LDH A, (C): load A from 0xFF00 + C.
    pub fn ldh_a_c(&mut self) {
        let addr = HIGH_PAGE | self.regs.get_halve(Halve::C) as u16;
        self.load_a_from(addr);
    }

    /// LDH (C), A: store A to 0xFF00 + C.
    pub fn ldh_c_a(&mut self) {
        let addr = HIGH_PAGE | self.regs.get_halve(Halve::C) as u16;
        self.store_a_to(addr);
    }

    /// LDH A, (n): load A from 0xFF00 + n.
    pub fn ldh_a_n(&mut self) {
        let addr = HIGH_PAGE | self.imm8() as u16;
        self.regs.set_a(self.memory.read8(addr));
        self.advance(2);
    }

    /// LDH (n), A: store A to 0xFF00 + n.
    pub fn ldh_n_a(&mut self) {
        let addr = HIGH_PAGE | self.imm8() as u16;
        self.memory.write8(addr, self.regs.a());
        self.advance(2);
    }

    /// LD A, (HL-)
    pub fn ld_a_hl_dec(&mut self) {
        let addr = self.regs.hl;
        self.regs.hl = addr.wrapping_sub(1);
        self.load_a_from(addr);
    }

    /// LD A, (HL+)
    pub fn ld_a_hl_inc(&mut self) {
        let addr = self.regs.hl;
        self.regs.hl = addr.wrapping_add(1);
        self.load_a_from(addr);
    }

    /// LD (HL-), A
    pub fn ld_hl_dec_a(&mut self) {
        let addr = self.regs.hl;
        self.regs.hl = addr.wrapping_sub(1);
        self.store_a_to(addr);
    }

    /// LD (HL+), A
    pub fn ld_hl_inc_a(&mut self) {
        let addr = self.regs.hl;
        self.regs.hl = addr.wrapping_add(1);
        self.store_a_to(addr);
    }

    /// LD rr, nn
    pub fn ld_rr_nn(&mut self, rr: Register) {
        let value = self.imm16();
        self.regs.set_register(rr, value);
        self.advance(3);
    }

    /// LD (nn), SP: stores SP little-endian at nn and nn+1.
    pub fn ld_nn_sp(&mut self) {
        let addr = self.imm16();
        self.memory.write16(addr, self.regs.sp);
        self.advance(3);
    }

    /// LD SP, HL
    pub fn ld_sp_hl(&mut self) {
        self.regs.sp = self.regs.hl;
        self.advance(1);
    }

    /// LD HL, SP+e
    ///
    /// H and C come from the unsigned addition of SP's low byte and the raw
    /// offset byte; Z and N are always cleared.
    pub fn ld_hl_sp_e(&mut self) {
        self.regs.hl = self.sp_plus_offset();
        self.advance(2);
    }

    /// Shared by LD HL,SP+e and ADD SP,e.
    pub(super) fn sp_plus_offset(&mut self) -> u16 {
        let raw = self.imm8();
        let sp = self.regs.sp;
        let offset = raw as i8 as i32;
        let result = (sp as i32 + offset) as u16;

        let low = add8(sp as u8, raw);
        self.set_flags(false, false, low.half_carry, low.carry);
        result
    }

    fn load_a_from(&mut self, addr: u16) {
        self.regs.set_a(self.memory.read8(addr));
        self.advance(1);
    }

    fn store_a_to(&mut self, addr: u16) {
        self.memory.write8(addr, self.regs.a());
        self.advance(1);
    }
}
