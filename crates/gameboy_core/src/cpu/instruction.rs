use std::fmt;

use super::{Condition, Halve, Register};
use crate::context::Context;
use crate::memory::Bus;

/// Every instruction primitive together with its static operand selectors.
///
/// Immediate operands are not part of the value: the primitive reads them
/// from memory past PC when it runs. A fetch loop decodes opcode bytes into
/// this enum and hands it to [`Context::execute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Nop,

    // Loads.
    LdRR { dst: Halve, src: Halve },
    LdRN(Halve),
    LdRHl(Halve),
    LdHlR(Halve),
    LdHlN,
    LdABc,
    LdADe,
    LdBcA,
    LdDeA,
    LdANn,
    LdNnA,
    LdhAC,
    LdhCA,
    LdhAN,
    LdhNA,
    LdAHlDec,
    LdAHlInc,
    LdHlDecA,
    LdHlIncA,
    LdRrNn(Register),
    LdNnSp,
    LdSpHl,
    LdHlSpE,

    // Stack.
    Push(Register),
    Pop(Register),

    // 8-bit arithmetic and logic on A.
    AddR(Halve),
    AddHl,
    AddN,
    AdcR(Halve),
    AdcHl,
    AdcN,
    SubR(Halve),
    SubHl,
    SubN,
    SbcR(Halve),
    SbcHl,
    SbcN,
    CpR(Halve),
    CpHl,
    CpN,
    AndR(Halve),
    AndHl,
    AndN,
    OrR(Halve),
    OrHl,
    OrN,
    XorR(Halve),
    XorHl,
    XorN,
    IncR(Halve),
    IncHl,
    DecR(Halve),
    DecHl,

    // 16-bit arithmetic.
    IncRr(Register),
    DecRr(Register),
    AddHlRr(Register),
    AddSpE,

    // Flag and accumulator.
    Ccf,
    Scf,
    Daa,
    Cpl,

    // Rotates and shifts.
    Rlca,
    Rrca,
    Rla,
    Rra,
    RlcR(Halve),
    RlcHl,
    RrcR(Halve),
    RrcHl,
    RlR(Halve),
    RlHl,
    RrR(Halve),
    RrHl,
    SlaR(Halve),
    SlaHl,
    SraR(Halve),
    SraHl,
    SrlR(Halve),
    SrlHl,
    SwapR(Halve),
    SwapHl,

    // Single-bit operations.
    BitR(u8, Halve),
    BitHl(u8),
    ResR(u8, Halve),
    ResHl(u8),
    SetR(u8, Halve),
    SetHl(u8),

    // Control transfer.
    Jp,
    JpCc(Condition),
    JpHl,
    Jr,
    JrCc(Condition),
    Call,
    CallCc(Condition),
    Ret,
    RetCc(Condition),
    Rst(u8),
}

impl Instruction {
    /// Encoded length in bytes, including the opcode (and the 0xCB prefix
    /// for the extended forms).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> u16 {
        use Instruction::*;
        match self {
            LdRN(_) | LdHlN | LdhAN | LdhNA | LdHlSpE | AddN | AdcN | SubN | SbcN | CpN | AndN
            | OrN | XorN | AddSpE | Jr | JrCc(_) => 2,

            RlcR(_) | RlcHl | RrcR(_) | RrcHl | RlR(_) | RlHl | RrR(_) | RrHl | SlaR(_)
            | SlaHl | SraR(_) | SraHl | SrlR(_) | SrlHl | SwapR(_) | SwapHl | BitR(..)
            | BitHl(_) | ResR(..) | ResHl(_) | SetR(..) | SetHl(_) => 2,

            LdANn | LdNnA | LdRrNn(_) | LdNnSp | Jp | JpCc(_) | Call | CallCc(_) => 3,

            _ => 1,
        }
    }

    /// Whether the instruction is encoded behind the 0xCB prefix.
    pub fn is_prefixed(self) -> bool {
        use Instruction::*;
        matches!(
            self,
            RlcR(_)
                | RlcHl
                | RrcR(_)
                | RrcHl
                | RlR(_)
                | RlHl
                | RrR(_)
                | RrHl
                | SlaR(_)
                | SlaHl
                | SraR(_)
                | SraHl
                | SrlR(_)
                | SrlHl
                | SwapR(_)
                | SwapHl
                | BitR(..)
                | BitHl(_)
                | ResR(..)
                | ResHl(_)
                | SetR(..)
                | SetHl(_)
        )
    }
}

impl fmt::Display for Halve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Halve::A => "A",
            Halve::F => "F",
            Halve::B => "B",
            Halve::C => "C",
            Halve::D => "D",
            Halve::E => "E",
            Halve::H => "H",
            Halve::L => "L",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Register::AF => "AF",
            Register::BC => "BC",
            Register::DE => "DE",
            Register::HL => "HL",
            Register::IR => "IR",
            Register::IE => "IE",
            Register::SP => "SP",
            Register::PC => "PC",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Condition::NZ => "NZ",
            Condition::Z => "Z",
            Condition::NC => "NC",
            Condition::C => "C",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;
        match *self {
            Nop => write!(f, "NOP"),

            LdRR { dst, src } => write!(f, "LD {dst},{src}"),
            LdRN(r) => write!(f, "LD {r},n"),
            LdRHl(r) => write!(f, "LD {r},(HL)"),
            LdHlR(r) => write!(f, "LD (HL),{r}"),
            LdHlN => write!(f, "LD (HL),n"),
            LdABc => write!(f, "LD A,(BC)"),
            LdADe => write!(f, "LD A,(DE)"),
            LdBcA => write!(f, "LD (BC),A"),
            LdDeA => write!(f, "LD (DE),A"),
            LdANn => write!(f, "LD A,(nn)"),
            LdNnA => write!(f, "LD (nn),A"),
            LdhAC => write!(f, "LDH A,(C)"),
            LdhCA => write!(f, "LDH (C),A"),
            LdhAN => write!(f, "LDH A,(n)"),
            LdhNA => write!(f, "LDH (n),A"),
            LdAHlDec => write!(f, "LD A,(HL-)"),
            LdAHlInc => write!(f, "LD A,(HL+)"),
            LdHlDecA => write!(f, "LD (HL-),A"),
            LdHlIncA => write!(f, "LD (HL+),A"),
            LdRrNn(rr) => write!(f, "LD {rr},nn"),
            LdNnSp => write!(f, "LD (nn),SP"),
            LdSpHl => write!(f, "LD SP,HL"),
            LdHlSpE => write!(f, "LD HL,SP+e"),

            Push(rr) => write!(f, "PUSH {rr}"),
            Pop(rr) => write!(f, "POP {rr}"),

            AddR(r) => write!(f, "ADD A,{r}"),
            AddHl => write!(f, "ADD A,(HL)"),
            AddN => write!(f, "ADD A,n"),
            AdcR(r) => write!(f, "ADC A,{r}"),
            AdcHl => write!(f, "ADC A,(HL)"),
            AdcN => write!(f, "ADC A,n"),
            SubR(r) => write!(f, "SUB {r}"),
            SubHl => write!(f, "SUB (HL)"),
            SubN => write!(f, "SUB n"),
            SbcR(r) => write!(f, "SBC A,{r}"),
            SbcHl => write!(f, "SBC A,(HL)"),
            SbcN => write!(f, "SBC A,n"),
            CpR(r) => write!(f, "CP {r}"),
            CpHl => write!(f, "CP (HL)"),
            CpN => write!(f, "CP n"),
            AndR(r) => write!(f, "AND {r}"),
            AndHl => write!(f, "AND (HL)"),
            AndN => write!(f, "AND n"),
            OrR(r) => write!(f, "OR {r}"),
            OrHl => write!(f, "OR (HL)"),
            OrN => write!(f, "OR n"),
            XorR(r) => write!(f, "XOR {r}"),
            XorHl => write!(f, "XOR (HL)"),
            XorN => write!(f, "XOR n"),
            IncR(r) => write!(f, "INC {r}"),
            IncHl => write!(f, "INC (HL)"),
            DecR(r) => write!(f, "DEC {r}"),
            DecHl => write!(f, "DEC (HL)"),

            IncRr(rr) => write!(f, "INC {rr}"),
            DecRr(rr) => write!(f, "DEC {rr}"),
            AddHlRr(rr) => write!(f, "ADD HL,{rr}"),
            AddSpE => write!(f, "ADD SP,e"),

            Ccf => write!(f, "CCF"),
            Scf => write!(f, "SCF"),
            Daa => write!(f, "DAA"),
            Cpl => write!(f, "CPL"),

            Rlca => write!(f, "RLCA"),
            Rrca => write!(f, "RRCA"),
            Rla => write!(f, "RLA"),
            Rra => write!(f, "RRA"),
            RlcR(r) => write!(f, "RLC {r}"),
            RlcHl => write!(f, "RLC (HL)"),
            RrcR(r) => write!(f, "RRC {r}"),
            RrcHl => write!(f, "RRC (HL)"),
            RlR(r) => write!(f, "RL {r}"),
            RlHl => write!(f, "RL (HL)"),
            RrR(r) => write!(f, "RR {r}"),
            RrHl => write!(f, "RR (HL)"),
            SlaR(r) => write!(f, "SLA {r}"),
            SlaHl => write!(f, "SLA (HL)"),
            SraR(r) => write!(f, "SRA {r}"),
            SraHl => write!(f, "SRA (HL)"),
            SrlR(r) => write!(f, "SRL {r}"),
            SrlHl => write!(f, "SRL (HL)"),
            SwapR(r) => write!(f, "SWAP {r}"),
            SwapHl => write!(f, "SWAP (HL)"),

            BitR(b, r) => write!(f, "BIT {b},{r}"),
            BitHl(b) => write!(f, "BIT {b},(HL)"),
            ResR(b, r) => write!(f, "RES {b},{r}"),
            ResHl(b) => write!(f, "RES {b},(HL)"),
            SetR(b, r) => write!(f, "SET {b},{r}"),
            SetHl(b) => write!(f, "SET {b},(HL)"),

            Jp => write!(f, "JP nn"),
            JpCc(cc) => write!(f, "JP {cc},nn"),
            JpHl => write!(f, "JP HL"),
            Jr => write!(f, "JR e"),
            JrCc(cc) => write!(f, "JR {cc},e"),
            Call => write!(f, "CALL nn"),
            CallCc(cc) => write!(f, "CALL {cc},nn"),
            Ret => write!(f, "RET"),
            RetCc(cc) => write!(f, "RET {cc}"),
            Rst(vector) => write!(f, "RST {vector:02X}h"),
        }
    }
}

impl<B: Bus> Context<B> {
    /// Run one instruction primitive against this context.
    pub fn execute(&mut self, instr: Instruction) {
        #[cfg(feature = "cpu-trace")]
        log::trace!(
            "PC=0x{:04X} {:<12} AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X} SP=0x{:04X}",
            self.regs.pc,
            instr.to_string(),
            self.regs.af,
            self.regs.bc,
            self.regs.de,
            self.regs.hl,
            self.regs.sp,
        );

        use Instruction::*;
        match instr {
            Nop => self.nop(),

            LdRR { dst, src } => self.ld_r_r(dst, src),
            LdRN(r) => self.ld_r_n(r),
            LdRHl(r) => self.ld_r_hl(r),
            LdHlR(r) => self.ld_hl_r(r),
            LdHlN => self.ld_hl_n(),
            LdABc => self.ld_a_bc(),
            LdADe => self.ld_a_de(),
            LdBcA => self.ld_bc_a(),
            LdDeA => self.ld_de_a(),
            LdANn => self.ld_a_nn(),
            LdNnA => self.ld_nn_a(),
            LdhAC => self.ldh_a_c(),
            LdhCA => self.ldh_c_a(),
            LdhAN => self.ldh_a_n(),
            LdhNA => self.ldh_n_a(),
            LdAHlDec => self.ld_a_hl_dec(),
            LdAHlInc => self.ld_a_hl_inc(),
            LdHlDecA => self.ld_hl_dec_a(),
            LdHlIncA => self.ld_hl_inc_a(),
            LdRrNn(rr) => self.ld_rr_nn(rr),
            LdNnSp => self.ld_nn_sp(),
            LdSpHl => self.ld_sp_hl(),
            LdHlSpE => self.ld_hl_sp_e(),

            Push(rr) => self.push_rr(rr),
            Pop(rr) => self.pop_rr(rr),

            AddR(r) => self.add_r(r),
            AddHl => self.add_hl(),
            AddN => self.add_n(),
            AdcR(r) => self.adc_r(r),
            AdcHl => self.adc_hl(),
            AdcN => self.adc_n(),
            SubR(r) => self.sub_r(r),
            SubHl => self.sub_hl(),
            SubN => self.sub_n(),
            SbcR(r) => self.sbc_r(r),
            SbcHl => self.sbc_hl(),
            SbcN => self.sbc_n(),
            CpR(r) => self.cp_r(r),
            CpHl => self.cp_hl(),
            CpN => self.cp_n(),
            AndR(r) => self.and_r(r),
            AndHl => self.and_hl(),
            AndN => self.and_n(),
            OrR(r) => self.or_r(r),
            OrHl => self.or_hl(),
            OrN => self.or_n(),
            XorR(r) => self.xor_r(r),
            XorHl => self.xor_hl(),
            XorN => self.xor_n(),
            IncR(r) => self.inc_r(r),
            IncHl => self.inc_hl(),
            DecR(r) => self.dec_r(r),
            DecHl => self.dec_hl(),

            IncRr(rr) => self.inc_rr(rr),
            DecRr(rr) => self.dec_rr(rr),
            AddHlRr(rr) => self.add_hl_rr(rr),
            AddSpE => self.add_sp_e(),

            Ccf => self.ccf(),
            Scf => self.scf(),
            Daa => self.daa(),
            Cpl => self.cpl(),

            Rlca => self.rlca(),
            Rrca => self.rrca(),
            Rla => self.rla(),
            Rra => self.rra(),
            RlcR(r) => self.rlc_r(r),
            RlcHl => self.rlc_hl(),
            RrcR(r) => self.rrc_r(r),
            RrcHl => self.rrc_hl(),
            RlR(r) => self.rl_r(r),
            RlHl => self.rl_hl(),
            RrR(r) => self.rr_r(r),
            RrHl => self.rr_hl(),
            SlaR(r) => self.sla_r(r),
            SlaHl => self.sla_hl(),
            SraR(r) => self.sra_r(r),
            SraHl => self.sra_hl(),
            SrlR(r) => self.srl_r(r),
            SrlHl => self.srl_hl(),
            SwapR(r) => self.swap_r(r),
            SwapHl => self.swap_hl(),

            BitR(b, r) => self.bit_r(b, r),
            BitHl(b) => self.bit_hl(b),
            ResR(b, r) => self.res_r(b, r),
            ResHl(b) => self.res_hl(b),
            SetR(b, r) => self.set_r(b, r),
            SetHl(b) => self.set_hl(b),

            Jp => self.jp_nn(),
            JpCc(cc) => self.jp_cc_nn(cc),
            JpHl => self.jp_hl(),
            Jr => self.jr_e(),
            JrCc(cc) => self.jr_cc_e(cc),
            Call => self.call_nn(),
            CallCc(cc) => self.call_cc_nn(cc),
            Ret => self.ret(),
            RetCc(cc) => self.ret_cc(cc),
            Rst(vector) => self.rst(vector),
        }
    }
}
