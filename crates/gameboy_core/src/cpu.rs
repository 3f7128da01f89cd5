//! SM83 CPU core: register file, ALU primitives, and the instruction set.
//!
//! There is no fetch loop here. Each instruction primitive is a method on
//! [`Context`](crate::Context) that reads its own immediate operands from
//! memory past PC, updates registers/memory/flags, and advances PC by its
//! encoded length. Mapping opcode bytes to primitives is left to the caller,
//! which can use the [`Instruction`] catalogue for that.

pub mod alu;
mod exec;
mod instruction;
mod regs;

pub use exec::Condition;
pub use instruction::Instruction;
pub use regs::{Flag, Flags, Halve, Register, RegisterFile};
