use super::*;

fn blank_image() -> Vec<u8> {
    vec![0; HEADER_END]
}

/// Image with a plausible header: logo, title, type/size codes and both
/// checksums filled in.
fn sample_image() -> Vec<u8> {
    let mut rom = vec![0; 0x8000];
    rom[0x100..0x104].copy_from_slice(&[0x00, 0xC3, 0x50, 0x01]);
    rom[0x104..0x134].copy_from_slice(&NINTENDO_LOGO);
    rom[0x134..0x13D].copy_from_slice(b"TESTCART\0");
    rom[0x143] = 0x80;
    rom[0x144..0x146].copy_from_slice(b"01");
    rom[0x146] = 0x03;
    rom[0x147] = 0x13;
    rom[0x148] = 0x02;
    rom[0x149] = 0x03;
    rom[0x14A] = 0x01;
    rom[0x14B] = 0x33;
    rom[0x14C] = 0x01;
    rom[0x150] = 0xAB;
    rom[0x7FFF] = 0xCD;

    let header = header_checksum(&rom).unwrap();
    rom[0x14D] = header;
    let global = global_checksum(&rom).unwrap();
    rom[0x14E..0x150].copy_from_slice(&global.to_be_bytes());
    rom
}

#[test]
fn checksums_of_blank_image_follow_the_formulas() {
    let rom = blank_image();

    let mut expected_header = 0u8;
    for &byte in &rom[0x134..=0x14C] {
        expected_header = expected_header.wrapping_sub(byte).wrapping_sub(1);
    }
    let mut expected_global = 0u16;
    for (addr, &byte) in rom.iter().enumerate() {
        if addr != 0x14E && addr != 0x14F {
            expected_global = expected_global.wrapping_add(byte as u16);
        }
    }

    assert_eq!(header_checksum(&rom), Ok(expected_header));
    assert_eq!(header_checksum(&rom), Ok(0xE7));
    assert_eq!(global_checksum(&rom), Ok(expected_global));
    assert_eq!(global_checksum(&rom), Ok(0));
}

#[test]
fn global_checksum_skips_its_own_bytes() {
    let mut rom = blank_image();
    rom[0x14D] = 0x10;
    rom[0x14E] = 0xFF;
    rom[0x14F] = 0xFF;
    rom[0x000] = 0x01;
    assert_eq!(global_checksum(&rom), Ok(0x11));
}

#[test]
fn header_checksum_only_covers_title_through_version() {
    let mut rom = blank_image();
    rom[0x133] = 0x55;
    rom[0x14D] = 0x55;
    assert_eq!(header_checksum(&rom), Ok(0xE7));

    rom[0x134] = 0x01;
    assert_eq!(header_checksum(&rom), Ok(0xE6));
}

#[test]
fn undersized_image_is_rejected() {
    let rom = vec![0; HEADER_END - 1];
    let err = CartridgeError::TooSmall { len: 335 };
    assert_eq!(header_checksum(&rom), Err(err));
    assert_eq!(global_checksum(&rom), Err(err));
    assert_eq!(CartridgeHeader::parse(&rom), Err(err));
    assert_eq!(
        err.to_string(),
        "cartridge is too small (335 bytes, minimum is 336 bytes)"
    );
}

#[test]
fn parse_decodes_header_fields() {
    let header = CartridgeHeader::parse(&sample_image()).unwrap();

    assert_eq!(header.entry_point, [0x00, 0xC3, 0x50, 0x01]);
    assert!(header.logo_matches);
    assert_eq!(header.title, "TESTCART");
    assert_eq!(header.manufacturer, None);
    assert_eq!(header.cgb_support(), CgbSupport::Enhanced);
    assert!(header.supports_sgb());
    assert_eq!(header.cartridge_type_name(), Some("MBC3+RAM+BATTERY"));
    assert_eq!(header.rom_size_kib(), Some(128));
    assert_eq!(header.ram_size_kib(), Some(32));
    assert_eq!(header.destination(), Destination::Overseas);
    assert_eq!(header.publisher(), Some("Nintendo Research & Development 1"));
    assert_eq!(header.rom_version, 0x01);
    assert!(header.header_checksum_ok());
    assert!(header.global_checksum_ok());
}

#[test]
fn parse_reports_mismatches() {
    let mut rom = sample_image();
    rom[0x104] ^= 0xFF;
    rom[0x14D] = rom[0x14D].wrapping_add(1);

    let header = CartridgeHeader::parse(&rom).unwrap();
    assert!(!header.logo_matches);
    assert!(!header.header_checksum_ok());
    assert!(!header.global_checksum_ok());
}

#[test]
fn manufacturer_code_present_when_first_byte_nonzero() {
    let mut rom = sample_image();
    rom[0x13F..0x143].copy_from_slice(b"ABCD");
    let header = CartridgeHeader::parse(&rom).unwrap();
    assert_eq!(header.manufacturer, Some(*b"ABCD"));
}

#[test]
fn size_decoders() {
    assert_eq!(rom_size_kib(0x00), Some(32));
    assert_eq!(rom_size_kib(0x08), Some(8192));
    assert_eq!(rom_size_kib(0x09), None);
    assert_eq!(ram_size_kib(0x00), Some(0));
    assert_eq!(ram_size_kib(0x04), Some(128));
    assert_eq!(ram_size_kib(0x05), Some(64));
    assert_eq!(ram_size_kib(0x06), None);
    assert_eq!(cartridge_type_name(0x00), Some("ROM ONLY"));
    assert_eq!(cartridge_type_name(0x04), None);
}

#[test]
fn display_report_lists_fields() {
    let report = CartridgeHeader::parse(&sample_image()).unwrap().to_string();
    assert!(report.contains("- Title: TESTCART"));
    assert!(report.contains("- Cartridge type: 0x13 (MBC3+RAM+BATTERY)"));
    assert!(report.contains("- ROM size: 0x02 (128 KiB)"));
    assert!(report.contains("- Logo: matches expected bitmap"));
    assert!(report.contains("- Destination: 0x01 (overseas only)"));
}
