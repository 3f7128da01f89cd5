//! Pure arithmetic primitives shared by the instruction set.
//!
//! Each helper returns the wrapped result together with the carry out of the
//! top bit and the half carry out of the low nibble (bit 3 for bytes, bit 11
//! for words). None of them touch CPU state; the callers decide which flags
//! the outcome feeds.

/// Outcome of an 8-bit or 16-bit addition/subtraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluResult<T> {
    pub result: T,
    pub carry: bool,
    pub half_carry: bool,
}

/// `a + b` with carries out of bit 7 and bit 3.
#[inline]
pub fn add8(a: u8, b: u8) -> AluResult<u8> {
    let full = a as u16 + b as u16;
    AluResult {
        result: full as u8,
        carry: full > 0xFF,
        half_carry: (a & 0x0F) + (b & 0x0F) > 0x0F,
    }
}

/// `a - b` with borrows out of bit 7 and bit 3.
#[inline]
pub fn sub8(a: u8, b: u8) -> AluResult<u8> {
    AluResult {
        result: a.wrapping_sub(b),
        carry: a < b,
        half_carry: (a & 0x0F) < (b & 0x0F),
    }
}

/// `a + b` with carries out of bit 15 and bit 11.
#[inline]
pub fn add16(a: u16, b: u16) -> AluResult<u16> {
    let full = a as u32 + b as u32;
    AluResult {
        result: full as u16,
        carry: full > 0xFFFF,
        half_carry: (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF,
    }
}

/// `a - b` with borrows out of bit 15 and bit 11.
#[inline]
pub fn sub16(a: u16, b: u16) -> AluResult<u16> {
    AluResult {
        result: a.wrapping_sub(b),
        carry: a < b,
        half_carry: (a & 0x0FFF) < (b & 0x0FFF),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add8_matches_reference_for_all_operands() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let r = add8(a, b);
                let sum = a as u32 + b as u32;
                assert_eq!(r.result as u32, sum % 256, "{a:#04x} + {b:#04x}");
                assert_eq!(r.carry, sum > 255, "{a:#04x} + {b:#04x}");
                assert_eq!(
                    r.half_carry,
                    (a & 0xF) + (b & 0xF) > 0xF,
                    "{a:#04x} + {b:#04x}"
                );
            }
        }
    }

    #[test]
    fn sub8_matches_reference_for_all_operands() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let r = sub8(a, b);
                assert_eq!(
                    r.result as i32,
                    (a as i32 - b as i32).rem_euclid(256),
                    "{a:#04x} - {b:#04x}"
                );
                assert_eq!(r.carry, a < b, "{a:#04x} - {b:#04x}");
                assert_eq!(r.half_carry, (a & 0xF) < (b & 0xF), "{a:#04x} - {b:#04x}");
            }
        }
    }

    #[test]
    fn add16_carries_out_of_bits_11_and_15() {
        assert_eq!(
            add16(0x0FFF, 0x0001),
            AluResult {
                result: 0x1000,
                carry: false,
                half_carry: true
            }
        );
        assert_eq!(
            add16(0xFFFF, 0x0001),
            AluResult {
                result: 0x0000,
                carry: true,
                half_carry: true
            }
        );
        assert_eq!(
            add16(0x8000, 0x8000),
            AluResult {
                result: 0x0000,
                carry: true,
                half_carry: false
            }
        );
        // Low nibble overflow alone does not count as a 16-bit half carry.
        assert!(!add16(0x000F, 0x0001).half_carry);
    }

    #[test]
    fn sub16_borrows_from_bits_12_and_16() {
        assert_eq!(
            sub16(0x1000, 0x0001),
            AluResult {
                result: 0x0FFF,
                carry: false,
                half_carry: true
            }
        );
        assert_eq!(
            sub16(0x0000, 0x0001),
            AluResult {
                result: 0xFFFF,
                carry: true,
                half_carry: true
            }
        );
        assert_eq!(
            sub16(0x1234, 0x1234),
            AluResult {
                result: 0,
                carry: false,
                half_carry: false
            }
        );
    }
}
