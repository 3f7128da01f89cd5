//! Cartridge image helpers: header checksums and header decoding.
//!
//! The CPU core only needs the raw image; everything here is informational
//! and is used by [`Context::from_rom`](crate::Context::from_rom) to reject
//! images too small to carry a header.

mod header;
mod licensee;

pub use header::{
    cartridge_type_name, ram_size_kib, rom_size_kib, CartridgeHeader, CgbSupport, Destination,
    NINTENDO_LOGO,
};

use thiserror::Error;

/// First address past the cartridge header; images must be at least this long.
pub const HEADER_END: usize = 0x150;

const TITLE_START: usize = 0x134;
const HEADER_CHECKSUM_ADDR: usize = 0x14D;
const GLOBAL_CHECKSUM_ADDR: usize = 0x14E;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartridgeError {
    #[error("cartridge is too small ({len} bytes, minimum is {HEADER_END} bytes)")]
    TooSmall { len: usize },
}

fn ensure_header(rom: &[u8]) -> Result<(), CartridgeError> {
    if rom.len() < HEADER_END {
        return Err(CartridgeError::TooSmall { len: rom.len() });
    }
    Ok(())
}

/// 8-bit header checksum over 0x0134..=0x014C.
pub fn header_checksum(rom: &[u8]) -> Result<u8, CartridgeError> {
    ensure_header(rom)?;
    Ok(rom[TITLE_START..HEADER_CHECKSUM_ADDR]
        .iter()
        .fold(0u8, |sum, &byte| sum.wrapping_sub(byte).wrapping_sub(1)))
}

/// 16-bit sum of every byte in the image except the two global checksum
/// bytes themselves.
pub fn global_checksum(rom: &[u8]) -> Result<u16, CartridgeError> {
    ensure_header(rom)?;
    Ok(rom
        .iter()
        .enumerate()
        .filter(|(addr, _)| !(GLOBAL_CHECKSUM_ADDR..HEADER_END).contains(addr))
        .fold(0u16, |sum, (_, &byte)| sum.wrapping_add(byte as u16)))
}

#[cfg(test)]
mod tests;
