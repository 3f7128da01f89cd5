use crate::cartridge::{CartridgeError, CartridgeHeader};
use crate::cpu::RegisterFile;
use crate::memory::{Bus, Memory};

/// Portion of the ROM image mapped at address 0 (banks 0 and 1, no mapper).
const MAPPED_ROM_SIZE: usize = 0x8000;

/// Execution context every instruction runs against.
///
/// Holds the register file, the address space, and the read-only program
/// image. The context is owned by whatever drives the fetch loop; each
/// instruction borrows it mutably for the duration of one call.
#[derive(Clone, Debug)]
pub struct Context<B: Bus = Memory> {
    pub regs: RegisterFile,
    pub memory: B,
    rom: Vec<u8>,
}

impl Default for Context<Memory> {
    fn default() -> Self {
        Self::new(RegisterFile::default(), Memory::new())
    }
}

impl<B: Bus> Context<B> {
    pub fn new(regs: RegisterFile, memory: B) -> Self {
        log::debug!(
            "Execution context created: PC=0x{:04X} SP=0x{:04X}",
            regs.pc,
            regs.sp
        );
        Self {
            regs,
            memory,
            rom: Vec::new(),
        }
    }

    /// Program image this context was created from (empty if none).
    pub fn rom(&self) -> &[u8] {
        &self.rom
    }
}

impl Context<Memory> {
    /// Context for a cartridge image, starting from the post-boot register
    /// state with the first 32 KiB of the image mapped at 0x0000.
    pub fn from_rom(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        let header = CartridgeHeader::parse(&rom)?;
        let mut memory = Memory::new();
        let mapped = memory.load(0, &rom[..rom.len().min(MAPPED_ROM_SIZE)]);
        log::debug!(
            "Mapped {} of {} ROM bytes for '{}'",
            mapped,
            rom.len(),
            header.title
        );

        let mut ctx = Self::new(RegisterFile::dmg_boot(), memory);
        ctx.rom = rom;
        Ok(ctx)
    }
}
