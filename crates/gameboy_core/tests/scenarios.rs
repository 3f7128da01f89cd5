use anyhow::Result;
use gameboy_core::cartridge::NINTENDO_LOGO;
use gameboy_core::{
    global_checksum, header_checksum, Bus, CartridgeError, Condition, Context, Flag, Halve,
    Instruction, Memory,
};

/// Opcode that stops the test driver. The core has no HALT primitive.
const STOP: u8 = 0x76;

/// NOP; JP 0x0150
const ENTRY: &[u8] = &[0x00, 0xC3, 0x50, 0x01];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a `len`-byte image with a valid header and `program` placed at `addr`
/// for each `(addr, program)` pair.
fn build_rom(len: usize, chunks: &[(usize, &[u8])]) -> Result<Vec<u8>> {
    let mut rom = vec![0; len];
    rom[0x104..0x134].copy_from_slice(&NINTENDO_LOGO);
    rom[0x134..0x13C].copy_from_slice(b"SCENARIO");
    for &(addr, program) in chunks {
        rom[addr..addr + program.len()].copy_from_slice(program);
    }
    rom[0x14D] = header_checksum(&rom)?;
    let global = global_checksum(&rom)?;
    rom[0x14E..0x150].copy_from_slice(&global.to_be_bytes());
    Ok(rom)
}

/// Decoder for the handful of opcodes used by the programs below.
fn decode(ctx: &Context) -> Option<Instruction> {
    let pc = ctx.regs.pc;
    let instr = match ctx.memory.read8(pc) {
        0x00 => Instruction::Nop,
        0x05 => Instruction::DecR(Halve::B),
        0x06 => Instruction::LdRN(Halve::B),
        0x20 => Instruction::JrCc(Condition::NZ),
        0x27 => Instruction::Daa,
        0x3E => Instruction::LdRN(Halve::A),
        0xC3 => Instruction::Jp,
        0xC6 => Instruction::AddN,
        0xC9 => Instruction::Ret,
        0xCD => Instruction::Call,
        0xEA => Instruction::LdNnA,
        0xCB => match ctx.memory.read8(pc.wrapping_add(1)) {
            0x37 => Instruction::SwapR(Halve::A),
            _ => return None,
        },
        _ => return None,
    };
    Some(instr)
}

fn run(ctx: &mut Context, max_steps: usize) -> usize {
    for step in 0..max_steps {
        if ctx.memory.read8(ctx.regs.pc) == STOP {
            return step;
        }
        let Some(instr) = decode(ctx) else {
            panic!(
                "unexpected opcode 0x{:02X} at 0x{:04X}",
                ctx.memory.read8(ctx.regs.pc),
                ctx.regs.pc
            );
        };
        ctx.execute(instr);
    }
    panic!("program did not stop within {max_steps} steps");
}

#[test]
fn from_rom_starts_at_post_boot_state() -> Result<()> {
    init_logger();
    let rom = build_rom(0x8000, &[(0x100, ENTRY)])?;
    let ctx = Context::from_rom(rom.clone())?;

    assert_eq!(ctx.regs.pc, 0x0100);
    assert_eq!(ctx.regs.sp, 0xFFFE);
    assert_eq!(ctx.regs.af, 0x01B0);
    assert_eq!(ctx.rom(), &rom[..]);
    assert_eq!(ctx.memory.read8(0x0101), 0xC3);
    assert_eq!(ctx.memory.read8(0x0134), b'S');
    Ok(())
}

#[test]
fn from_rom_maps_only_first_32_kib() -> Result<()> {
    init_logger();
    let mut rom = build_rom(0x10000, &[])?;
    rom[0x7FFF] = 0x11;
    rom[0x8000] = 0x22;
    let ctx = Context::from_rom(rom)?;

    assert_eq!(ctx.memory.read8(0x7FFF), 0x11);
    assert_eq!(ctx.memory.read8(0x8000), 0x00);
    assert_eq!(ctx.rom().len(), 0x10000);
    Ok(())
}

#[test]
fn from_rom_rejects_truncated_image() {
    init_logger();
    let err = Context::from_rom(vec![0; 0x14F]).unwrap_err();
    assert_eq!(err, CartridgeError::TooSmall { len: 0x14F });
}

#[test]
fn bcd_multiply_by_repeated_addition() -> Result<()> {
    init_logger();
    let main: &[u8] = &[
        0x06, 0x03, // LD B,3
        0x3E, 0x00, // LD A,0
        0xCD, 0x00, 0x02, // CALL 0x0200
        0x05, // DEC B
        0x20, 0xFA, // JR NZ,-6
        0xEA, 0x00, 0xC0, // LD (0xC000),A
        0xCB, 0x37, // SWAP A
        STOP,
    ];
    let add_nine: &[u8] = &[
        0xC6, 0x09, // ADD A,9
        0x27, // DAA
        0xC9, // RET
    ];
    let rom = build_rom(0x8000, &[(0x100, ENTRY), (0x150, main), (0x200, add_nine)])?;

    let mut ctx = Context::from_rom(rom)?;
    let steps = run(&mut ctx, 64);

    assert_eq!(steps, 2 + 2 + 3 * 6 + 2);
    assert_eq!(ctx.memory.read8(0xC000), 0x27);
    assert_eq!(ctx.regs.a(), 0x72);
    assert_eq!(ctx.regs.get_halve(Halve::B), 0x00);
    assert_eq!(ctx.regs.sp, 0xFFFE);
    assert_eq!(ctx.regs.pc, 0x015F);
    assert!(!ctx.regs.is_flag(Flag::Z));
    Ok(())
}

#[test]
fn custom_bus_implementations_are_supported() {
    init_logger();

    /// Bus that mirrors 0xE000..0xFE00 onto 0xC000..0xDE00.
    struct EchoBus(Memory);

    impl EchoBus {
        fn map(addr: u16) -> u16 {
            match addr {
                0xE000..=0xFDFF => addr - 0x2000,
                _ => addr,
            }
        }
    }

    impl Bus for EchoBus {
        fn read8(&self, addr: u16) -> u8 {
            self.0.read8(Self::map(addr))
        }

        fn write8(&mut self, addr: u16, value: u8) {
            self.0.write8(Self::map(addr), value);
        }
    }

    let regs = gameboy_core::RegisterFile::builder()
        .pc(0x0100)
        .hl(0xE010)
        .build();
    let mut ctx = Context::new(regs, EchoBus(Memory::new()));
    ctx.regs.set_a(0x5C);
    ctx.execute(Instruction::LdHlIncA);

    assert_eq!(ctx.memory.0.read8(0xC010), 0x5C);
    assert_eq!(ctx.regs.hl, 0xE011);
    assert_eq!(ctx.regs.pc, 0x0101);
}
