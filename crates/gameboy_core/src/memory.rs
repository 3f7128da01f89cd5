/// Size of the SM83 address space.
pub const MEMORY_SIZE: usize = 0x10000;

/// Abstraction over the address space the CPU talks to.
///
/// Only byte access is required; 16-bit access is composed from two byte
/// accesses in little-endian order with the high byte at `addr + 1`
/// (wrapping, so a word at 0xFFFF aliases 0x0000).
pub trait Bus {
    fn read8(&self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    #[inline]
    fn read16(&self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}

/// Flat 64 KiB byte array with no mapping or side effects.
///
/// Every `u16` is a valid index, so accesses cannot fail.
#[derive(Clone)]
pub struct Memory {
    cells: Box<[u8; MEMORY_SIZE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .finish_non_exhaustive()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            cells: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Memory whose first bytes are `bytes`; the rest is zero.
    ///
    /// Bytes past the end of the address space are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut memory = Self::new();
        memory.load(0, bytes);
        memory
    }

    /// Copy `bytes` into memory starting at `offset`, truncated at the end of
    /// the address space. Returns the number of bytes written.
    pub fn load(&mut self, offset: u16, bytes: &[u8]) -> usize {
        let start = offset as usize;
        let len = bytes.len().min(MEMORY_SIZE - start);
        self.cells[start..start + len].copy_from_slice(&bytes[..len]);
        len
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells[..]
    }
}

impl Bus for Memory {
    #[inline]
    fn read8(&self, addr: u16) -> u8 {
        self.cells[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.cells[addr as usize] = value;
    }
}
