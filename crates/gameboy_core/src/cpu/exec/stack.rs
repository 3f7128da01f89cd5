use crate::context::Context;
use crate::cpu::Register;
use crate::memory::Bus;

impl<B: Bus> Context<B> {
    /// PUSH rr: SP -= 2, then store rr little-endian at the new SP.
    pub fn push_rr(&mut self, rr: Register) {
        let value = self.regs.get_register(rr);
        self.push16(value);
        self.advance(1);
    }

    /// POP rr: load rr from SP, then SP += 2.
    ///
    /// Popping into AF restores the flags from the stacked byte; its lower
    /// nibble is dropped since those bits of F do not exist on hardware.
    pub fn pop_rr(&mut self, rr: Register) {
        let mut value = self.pop16();
        if rr == Register::AF {
            value &= 0xFFF0;
        }
        self.regs.set_register(rr, value);
        self.advance(1);
    }
}
