use bitflags::bitflags;
use typed_builder::TypedBuilder;

/// Register file for the Game Boy CPU (SM83).
///
/// The four general purpose pairs are stored as combined 16-bit values and
/// the 8-bit halves are carved out of them by masking, so writing one halve
/// never disturbs its sibling. `ir`, `ie`, `sp` and `pc` are independent
/// 16-bit registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, TypedBuilder)]
pub struct RegisterFile {
    /// Accumulator (high) and flags (low).
    #[builder(default)]
    pub af: u16,
    #[builder(default)]
    pub bc: u16,
    #[builder(default)]
    pub de: u16,
    #[builder(default)]
    pub hl: u16,
    /// Instruction register.
    #[builder(default)]
    pub ir: u16,
    /// Interrupt enable.
    #[builder(default)]
    pub ie: u16,
    #[builder(default)]
    pub sp: u16,
    #[builder(default)]
    pub pc: u16,
}

/// 8-bit half of one of the combined registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Halve {
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// 16-bit register identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Register {
    AF,
    BC,
    DE,
    HL,
    IR,
    IE,
    SP,
    PC,
}

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero on hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

bitflags! {
    /// Bitset view of the F register.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

impl From<Flag> for Flags {
    fn from(flag: Flag) -> Self {
        Flags::from_bits_retain(1 << flag as u8)
    }
}

impl Halve {
    pub const ALL: [Halve; 8] = [
        Halve::A,
        Halve::F,
        Halve::B,
        Halve::C,
        Halve::D,
        Halve::E,
        Halve::H,
        Halve::L,
    ];

    /// Combined register this halve belongs to.
    #[inline]
    pub const fn owner(self) -> Register {
        match self {
            Halve::A | Halve::F => Register::AF,
            Halve::B | Halve::C => Register::BC,
            Halve::D | Halve::E => Register::DE,
            Halve::H | Halve::L => Register::HL,
        }
    }

    /// Whether this is the high byte of its owner.
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Halve::A | Halve::B | Halve::D | Halve::H)
    }

    /// The other half of the same combined register.
    #[inline]
    pub const fn sibling(self) -> Halve {
        match self {
            Halve::A => Halve::F,
            Halve::F => Halve::A,
            Halve::B => Halve::C,
            Halve::C => Halve::B,
            Halve::D => Halve::E,
            Halve::E => Halve::D,
            Halve::H => Halve::L,
            Halve::L => Halve::H,
        }
    }
}

impl Register {
    pub const ALL: [Register; 8] = [
        Register::AF,
        Register::BC,
        Register::DE,
        Register::HL,
        Register::IR,
        Register::IE,
        Register::SP,
        Register::PC,
    ];
}

const HIGH_MASK: u16 = 0xFF00;
const LOW_MASK: u16 = 0x00FF;

impl RegisterFile {
    /// Register values the DMG boot ROM leaves behind when it hands control
    /// to cartridge code at 0x0100.
    ///
    /// These follow Pan Docs and the values commonly used by other emulators.
    pub fn dmg_boot() -> Self {
        Self::builder()
            .af(0x01B0)
            .bc(0x0013)
            .de(0x00D8)
            .hl(0x014D)
            .sp(0xFFFE)
            .pc(0x0100)
            .build()
    }

    #[inline]
    pub fn get_register(&self, reg: Register) -> u16 {
        match reg {
            Register::AF => self.af,
            Register::BC => self.bc,
            Register::DE => self.de,
            Register::HL => self.hl,
            Register::IR => self.ir,
            Register::IE => self.ie,
            Register::SP => self.sp,
            Register::PC => self.pc,
        }
    }

    #[inline]
    pub fn set_register(&mut self, reg: Register, value: u16) {
        *self.register_mut(reg) = value;
    }

    #[inline]
    fn register_mut(&mut self, reg: Register) -> &mut u16 {
        match reg {
            Register::AF => &mut self.af,
            Register::BC => &mut self.bc,
            Register::DE => &mut self.de,
            Register::HL => &mut self.hl,
            Register::IR => &mut self.ir,
            Register::IE => &mut self.ie,
            Register::SP => &mut self.sp,
            Register::PC => &mut self.pc,
        }
    }

    #[inline]
    pub fn get_halve(&self, halve: Halve) -> u8 {
        let word = self.get_register(halve.owner());
        if halve.is_high() {
            ((word & HIGH_MASK) >> 8) as u8
        } else {
            (word & LOW_MASK) as u8
        }
    }

    #[inline]
    pub fn set_halve(&mut self, halve: Halve, value: u8) {
        let word = self.register_mut(halve.owner());
        let value = value as u16;
        if halve.is_high() {
            *word = (*word & LOW_MASK) | (value << 8);
        } else {
            *word = (*word & HIGH_MASK) | value;
        }
    }

    /// Accumulator shorthand.
    #[inline]
    pub fn a(&self) -> u8 {
        self.get_halve(Halve::A)
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.set_halve(Halve::A, value);
    }

    #[inline]
    pub fn is_flag(&self, flag: Flag) -> bool {
        self.flags().contains(flag.into())
    }

    /// Set or clear a single flag. Every other bit of F is left as is.
    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let mut flags = self.flags();
        flags.set(flag.into(), value);
        self.set_halve(Halve::F, flags.bits());
    }

    /// F viewed as a flag set. Bits outside Z/N/H/C are retained.
    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_retain(self.get_halve(Halve::F))
    }
}
