use std::fmt;

use super::licensee::{new_licensee_name, old_licensee_name};
use super::{global_checksum, header_checksum, CartridgeError, HEADER_END};

/// Bitmap every licensed cartridge carries at 0x0104..0x0134.
pub const NINTENDO_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

const OLD_LICENSEE_USES_NEW: u8 = 0x33;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CgbSupport {
    /// Pre-CGB cartridge.
    None,
    Enhanced,
    Only,
    Unknown(u8),
}

impl CgbSupport {
    pub fn from_flag(flag: u8) -> Self {
        match flag {
            0x00 => CgbSupport::None,
            0x80 => CgbSupport::Enhanced,
            0xC0 => CgbSupport::Only,
            other => CgbSupport::Unknown(other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Japan,
    Overseas,
    Unknown(u8),
}

impl Destination {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x00 => Destination::Japan,
            0x01 => Destination::Overseas,
            other => Destination::Unknown(other),
        }
    }
}

/// Decoded cartridge header (0x0100..0x0150) plus the checksums computed
/// from the image it was parsed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub entry_point: [u8; 4],
    pub logo_matches: bool,
    pub title: String,
    /// Absent on older cartridges, where the first byte is zero.
    pub manufacturer: Option<[u8; 4]>,
    pub cgb_flag: u8,
    pub new_licensee: [u8; 2],
    pub sgb_flag: u8,
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
    pub destination_code: u8,
    pub old_licensee: u8,
    pub rom_version: u8,
    pub header_checksum: u8,
    pub global_checksum: u16,
    pub computed_header_checksum: u8,
    pub computed_global_checksum: u16,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Result<Self, CartridgeError> {
        if rom.len() < HEADER_END {
            return Err(CartridgeError::TooSmall { len: rom.len() });
        }

        let mut entry_point = [0; 4];
        entry_point.copy_from_slice(&rom[0x100..0x104]);

        let logo_matches = rom[0x104..0x134] == NINTENDO_LOGO;

        let title = String::from_utf8_lossy(&rom[0x134..0x144])
            .trim_end_matches('\0')
            .to_string();

        let manufacturer = match rom[0x13F] {
            0x00 => None,
            _ => {
                let mut code = [0; 4];
                code.copy_from_slice(&rom[0x13F..0x143]);
                Some(code)
            }
        };

        let header = Self {
            entry_point,
            logo_matches,
            title,
            manufacturer,
            cgb_flag: rom[0x143],
            new_licensee: [rom[0x144], rom[0x145]],
            sgb_flag: rom[0x146],
            cartridge_type: rom[0x147],
            rom_size_code: rom[0x148],
            ram_size_code: rom[0x149],
            destination_code: rom[0x14A],
            old_licensee: rom[0x14B],
            rom_version: rom[0x14C],
            header_checksum: rom[0x14D],
            global_checksum: u16::from_be_bytes([rom[0x14E], rom[0x14F]]),
            computed_header_checksum: header_checksum(rom)?,
            computed_global_checksum: global_checksum(rom)?,
        };

        log::debug!(
            "Parsed cartridge header: title='{}' type=0x{:02X} rom_size=0x{:02X}",
            header.title,
            header.cartridge_type,
            header.rom_size_code
        );
        if !header.logo_matches {
            log::warn!("Cartridge logo does not match the expected bitmap");
        }
        if !header.header_checksum_ok() {
            log::warn!(
                "Header checksum mismatch: stored 0x{:02X}, computed 0x{:02X}",
                header.header_checksum,
                header.computed_header_checksum
            );
        }
        if !header.global_checksum_ok() {
            log::warn!(
                "Global checksum mismatch: stored 0x{:04X}, computed 0x{:04X}",
                header.global_checksum,
                header.computed_global_checksum
            );
        }

        Ok(header)
    }

    pub fn header_checksum_ok(&self) -> bool {
        self.header_checksum == self.computed_header_checksum
    }

    pub fn global_checksum_ok(&self) -> bool {
        self.global_checksum == self.computed_global_checksum
    }

    pub fn cgb_support(&self) -> CgbSupport {
        CgbSupport::from_flag(self.cgb_flag)
    }

    pub fn supports_sgb(&self) -> bool {
        self.sgb_flag == 0x03
    }

    pub fn destination(&self) -> Destination {
        Destination::from_code(self.destination_code)
    }

    pub fn cartridge_type_name(&self) -> Option<&'static str> {
        cartridge_type_name(self.cartridge_type)
    }

    pub fn rom_size_kib(&self) -> Option<u32> {
        rom_size_kib(self.rom_size_code)
    }

    pub fn ram_size_kib(&self) -> Option<u32> {
        ram_size_kib(self.ram_size_code)
    }

    /// Publisher name, consulting the new licensee code when the old code
    /// defers to it.
    pub fn publisher(&self) -> Option<&'static str> {
        if self.old_licensee == OLD_LICENSEE_USES_NEW {
            new_licensee_name(self.new_licensee)
        } else {
            old_licensee_name(self.old_licensee)
        }
    }
}

pub fn cartridge_type_name(code: u8) -> Option<&'static str> {
    let name = match code {
        0x00 => "ROM ONLY",
        0x01 => "MBC1",
        0x02 => "MBC1+RAM",
        0x03 => "MBC1+RAM+BATTERY",
        0x05 => "MBC2",
        0x06 => "MBC2+BATTERY",
        0x08 => "ROM+RAM",
        0x09 => "ROM+RAM+BATTERY",
        0x0B => "MMM01",
        0x0C => "MMM01+RAM",
        0x0D => "MMM01+RAM+BATTERY",
        0x0F => "MBC3+TIMER+BATTERY",
        0x10 => "MBC3+TIMER+RAM+BATTERY",
        0x11 => "MBC3",
        0x12 => "MBC3+RAM",
        0x13 => "MBC3+RAM+BATTERY",
        0x19 => "MBC5",
        0x1A => "MBC5+RAM",
        0x1B => "MBC5+RAM+BATTERY",
        0x1C => "MBC5+RUMBLE",
        0x1D => "MBC5+RUMBLE+RAM",
        0x1E => "MBC5+RUMBLE+RAM+BATTERY",
        0x20 => "MBC6",
        0x22 => "MBC7+SENSOR+RUMBLE+RAM+BATTERY",
        0xFC => "POCKET CAMERA",
        0xFD => "BANDAI TAMA5",
        0xFE => "HuC3",
        0xFF => "HuC1+RAM+BATTERY",
        _ => return None,
    };
    Some(name)
}

/// ROM size in KiB: 32 KiB shifted left by the code.
pub fn rom_size_kib(code: u8) -> Option<u32> {
    match code {
        0x00..=0x08 => Some(32 << code),
        _ => None,
    }
}

pub fn ram_size_kib(code: u8) -> Option<u32> {
    match code {
        0x00 => Some(0),
        0x01 => Some(2),
        0x02 => Some(8),
        0x03 => Some(32),
        0x04 => Some(128),
        0x05 => Some(64),
        _ => None,
    }
}

fn or_unknown<T: fmt::Display>(value: Option<T>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v}{unit}"),
        None => "unknown".to_string(),
    }
}

fn matches_label(ok: bool) -> &'static str {
    if ok {
        "matches"
    } else {
        "does not match"
    }
}

impl fmt::Display for CartridgeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cartridge header:")?;
        writeln!(f, "- Title: {}", self.title)?;
        writeln!(f, "- ROM version: 0x{:02X}", self.rom_version)?;
        let [e0, e1, e2, e3] = self.entry_point;
        writeln!(f, "- Entry point: 0x{e0:02X} 0x{e1:02X} 0x{e2:02X} 0x{e3:02X}")?;
        writeln!(f, "- Logo: {} expected bitmap", matches_label(self.logo_matches))?;
        match self.manufacturer {
            Some(code) => writeln!(f, "- Manufacturer: {}", String::from_utf8_lossy(&code))?,
            None => writeln!(f, "- Manufacturer: (old cartridge)")?,
        }
        let cgb = match self.cgb_support() {
            CgbSupport::None => "old cartridge",
            CgbSupport::Enhanced => "CGB enhanced",
            CgbSupport::Only => "CGB only",
            CgbSupport::Unknown(_) => "unknown value",
        };
        writeln!(f, "- CGB flag: 0x{:02X} ({cgb})", self.cgb_flag)?;
        writeln!(
            f,
            "- New licensee: {} ({})",
            String::from_utf8_lossy(&self.new_licensee),
            new_licensee_name(self.new_licensee).unwrap_or("unknown")
        )?;
        let sgb = if self.supports_sgb() {
            "supports SGB functions"
        } else {
            "no SGB functions"
        };
        writeln!(f, "- SGB flag: 0x{:02X} ({sgb})", self.sgb_flag)?;
        writeln!(
            f,
            "- Cartridge type: 0x{:02X} ({})",
            self.cartridge_type,
            self.cartridge_type_name().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "- ROM size: 0x{:02X} ({})",
            self.rom_size_code,
            or_unknown(self.rom_size_kib(), " KiB")
        )?;
        writeln!(
            f,
            "- RAM size: 0x{:02X} ({})",
            self.ram_size_code,
            or_unknown(self.ram_size_kib(), " KiB")
        )?;
        let destination = match self.destination() {
            Destination::Japan => "Japan and possibly overseas",
            Destination::Overseas => "overseas only",
            Destination::Unknown(_) => "unknown code",
        };
        writeln!(f, "- Destination: 0x{:02X} ({destination})", self.destination_code)?;
        writeln!(
            f,
            "- Old licensee: 0x{:02X} ({})",
            self.old_licensee,
            old_licensee_name(self.old_licensee).unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "- Header checksum: 0x{:02X} ({} computed 0x{:02X})",
            self.header_checksum,
            matches_label(self.header_checksum_ok()),
            self.computed_header_checksum
        )?;
        write!(
            f,
            "- Global checksum: 0x{:04X} ({} computed 0x{:04X})",
            self.global_checksum,
            matches_label(self.global_checksum_ok()),
            self.computed_global_checksum
        )
    }
}
