use super::Condition;
use crate::context::Context;
use crate::memory::Bus;

impl<B: Bus> Context<B> {
    /// NOP
    pub fn nop(&mut self) {
        self.advance(1);
    }

    /// JP nn
    pub fn jp_nn(&mut self) {
        self.regs.pc = self.imm16();
    }

    /// JP cc, nn
    pub fn jp_cc_nn(&mut self, cc: Condition) {
        if cc.holds(&self.regs) {
            self.jp_nn();
        } else {
            self.advance(3);
        }
    }

    /// JP HL
    pub fn jp_hl(&mut self) {
        self.regs.pc = self.regs.hl;
    }

    /// JR e: the offset is relative to the instruction that follows.
    pub fn jr_e(&mut self) {
        let offset = self.imm8() as i8;
        self.advance(2);
        self.regs.pc = self.regs.pc.wrapping_add_signed(offset as i16);
    }

    /// JR cc, e
    pub fn jr_cc_e(&mut self, cc: Condition) {
        if cc.holds(&self.regs) {
            self.jr_e();
        } else {
            self.advance(2);
        }
    }

    /// CALL nn: push the address of the next instruction, jump to nn.
    pub fn call_nn(&mut self) {
        let target = self.imm16();
        let ret = self.regs.pc.wrapping_add(3);
        self.push16(ret);
        self.regs.pc = target;
    }

    /// CALL cc, nn
    pub fn call_cc_nn(&mut self, cc: Condition) {
        if cc.holds(&self.regs) {
            self.call_nn();
        } else {
            self.advance(3);
        }
    }

    /// RET
    pub fn ret(&mut self) {
        self.regs.pc = self.pop16();
    }

    /// RET cc
    pub fn ret_cc(&mut self, cc: Condition) {
        if cc.holds(&self.regs) {
            self.ret();
        } else {
            self.advance(1);
        }
    }

    /// RST n: call one of the eight fixed vectors 0x00, 0x08, .., 0x38.
    pub fn rst(&mut self, vector: u8) {
        debug_assert!(vector & !0x38 == 0, "invalid RST vector {vector:#04x}");
        let ret = self.regs.pc.wrapping_add(1);
        self.push16(ret);
        self.regs.pc = (vector & 0x38) as u16;
    }
}
