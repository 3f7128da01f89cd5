pub mod cartridge;
pub mod context;
pub mod cpu;
pub mod memory;

pub use cartridge::{global_checksum, header_checksum, CartridgeError, CartridgeHeader};
pub use context::Context;
pub use cpu::{Condition, Flag, Flags, Halve, Instruction, Register, RegisterFile};
pub use memory::{Bus, Memory, MEMORY_SIZE};
