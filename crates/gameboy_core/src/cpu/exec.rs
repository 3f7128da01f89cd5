mod alu;
mod bit;
mod control;
mod incdec;
mod ld;
mod rotate;
mod stack;

use super::{Flag, Halve, RegisterFile};
use crate::context::Context;
use crate::memory::Bus;

/// Branch condition used by JP/JR/CALL/RET cc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    NZ,
    Z,
    NC,
    C,
}

impl Condition {
    #[inline]
    pub fn holds(self, regs: &RegisterFile) -> bool {
        match self {
            Condition::NZ => !regs.is_flag(Flag::Z),
            Condition::Z => regs.is_flag(Flag::Z),
            Condition::NC => !regs.is_flag(Flag::C),
            Condition::C => regs.is_flag(Flag::C),
        }
    }
}

/// 8-bit operand location: a register halve or the byte at (HL).
#[derive(Clone, Copy, Debug)]
enum Target {
    Reg(Halve),
    MemHl,
}

impl<B: Bus> Context<B> {
    /// Byte following the opcode at PC.
    #[inline]
    fn imm8(&self) -> u8 {
        self.memory.read8(self.regs.pc.wrapping_add(1))
    }

    /// Little-endian word following the opcode at PC.
    #[inline]
    fn imm16(&self) -> u16 {
        self.memory.read16(self.regs.pc.wrapping_add(1))
    }

    /// Step PC past an instruction of `len` bytes.
    #[inline]
    fn advance(&mut self, len: u16) {
        self.regs.pc = self.regs.pc.wrapping_add(len);
    }

    #[inline]
    fn read_target(&self, target: Target) -> u8 {
        match target {
            Target::Reg(r) => self.regs.get_halve(r),
            Target::MemHl => self.memory.read8(self.regs.hl),
        }
    }

    #[inline]
    fn write_target(&mut self, target: Target, value: u8) {
        match target {
            Target::Reg(r) => self.regs.set_halve(r, value),
            Target::MemHl => self.memory.write8(self.regs.hl, value),
        }
    }

    /// Write all four flags at once.
    #[inline]
    fn set_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.regs.set_flag(Flag::Z, z);
        self.regs.set_flag(Flag::N, n);
        self.regs.set_flag(Flag::H, h);
        self.regs.set_flag(Flag::C, c);
    }

    #[inline]
    fn push16(&mut self, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        self.memory.write16(self.regs.sp, value);
    }

    #[inline]
    fn pop16(&mut self) -> u16 {
        let value = self.memory.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }
}
