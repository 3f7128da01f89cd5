//! Publisher lookup for the header's licensee codes.

/// Two-character ASCII code at 0x0144..0x0146, used when the old code is 0x33.
pub(super) fn new_licensee_name(code: [u8; 2]) -> Option<&'static str> {
    let name = match &code {
        b"00" => "None",
        b"01" => "Nintendo Research & Development 1",
        b"08" => "Capcom",
        b"13" => "EA (Electronic Arts)",
        b"18" => "Hudson Soft",
        b"19" => "B-AI",
        b"20" => "KSS",
        b"22" => "Planning Office WADA",
        b"24" => "PCM Complete",
        b"25" => "San-X",
        b"28" => "Kemco",
        b"29" => "SETA Corporation",
        b"30" => "Viacom",
        b"31" => "Nintendo",
        b"32" => "Bandai",
        b"33" => "Ocean Software/Acclaim Entertainment",
        b"34" => "Konami",
        b"35" => "HectorSoft",
        b"37" => "Taito",
        b"38" => "Hudson Soft",
        b"39" => "Banpresto",
        b"41" => "Ubi Soft",
        b"42" => "Atlus",
        b"44" => "Malibu Interactive",
        b"46" => "Angel",
        b"47" => "Bullet-Proof Software",
        b"49" => "Irem",
        b"50" => "Absolute",
        b"51" => "Acclaim Entertainment",
        b"52" => "Activision",
        b"53" => "Sammy USA Corporation",
        b"54" => "Konami",
        b"55" => "Hi Tech Expressions",
        b"56" => "LJN",
        b"57" => "Matchbox",
        b"58" => "Mattel",
        b"59" => "Milton Bradley Company",
        b"60" => "Titus Interactive",
        b"61" => "Virgin Games Ltd.",
        b"64" => "Lucasfilm Games",
        b"67" => "Ocean Software",
        b"69" => "EA (Electronic Arts)",
        b"70" => "Infogrames",
        b"71" => "Interplay Entertainment",
        b"72" => "Broderbund",
        b"73" => "Sculptured Software",
        b"75" => "The Sales Curve Limited",
        b"78" => "THQ",
        b"79" => "Accolade",
        b"80" => "Misawa Entertainment",
        b"83" => "lozc",
        b"86" => "Tokuma Shoten",
        b"87" => "Tsukuda Original",
        b"91" => "Chunsoft Co.",
        b"92" => "Video System",
        b"93" => "Ocean Software/Acclaim Entertainment",
        b"95" => "Varie",
        b"96" => "Yonezawa/s'pal",
        b"97" => "Kaneko",
        b"99" => "Pack-In-Video",
        b"9H" => "Bottom Up",
        b"A4" => "Konami (Yu-Gi-Oh!)",
        b"BL" => "MTO",
        b"DK" => "Kodansha",
        _ => return None,
    };
    Some(name)
}

/// Single-byte code at 0x014B.
pub(super) fn old_licensee_name(code: u8) -> Option<&'static str> {
    let name = match code {
        0x00 => "None",
        0x01 => "Nintendo",
        0x08 => "Capcom",
        0x09 => "HOT-B",
        0x0A => "Jaleco",
        0x0B => "Coconuts Japan",
        0x0C => "Elite Systems",
        0x13 => "EA (Electronic Arts)",
        0x18 => "Hudson Soft",
        0x19 => "ITC Entertainment",
        0x1A => "Yanoman",
        0x1D => "Japan Clary",
        0x1F => "Virgin Games Ltd.",
        0x24 => "PCM Complete",
        0x25 => "San-X",
        0x28 => "Kemco",
        0x29 => "SETA Corporation",
        0x30 => "Infogrames",
        0x31 => "Nintendo",
        0x32 => "Bandai",
        0x33 => "(see new licensee code)",
        0x34 => "Konami",
        0x35 => "HectorSoft",
        0x38 => "Capcom",
        0x39 => "Banpresto",
        0x3C => "Entertainment Interactive",
        0x3E => "Gremlin",
        0x41 => "Ubi Soft",
        0x42 => "Atlus",
        0x44 => "Malibu Interactive",
        0x46 => "Angel",
        0x47 => "Spectrum HoloByte",
        0x49 => "Irem",
        0x4A => "Virgin Games Ltd.",
        0x4D => "Malibu Interactive",
        0x4F => "U.S. Gold",
        0x50 => "Absolute",
        0x51 => "Acclaim Entertainment",
        0x52 => "Activision",
        0x53 => "Sammy USA Corporation",
        0x54 => "GameTek",
        0x55 => "Park Place",
        0x56 => "LJN",
        0x57 => "Matchbox",
        0x59 => "Milton Bradley Company",
        0x5A => "Mindscape",
        0x5B => "Romstar",
        0x5C => "Naxat Soft",
        0x5D => "Tradewest",
        0x60 => "Titus Interactive",
        0x61 => "Virgin Games Ltd.",
        0x67 => "Ocean Software",
        0x69 => "EA (Electronic Arts)",
        0x6E => "Elite Systems",
        0x6F => "Electro Brain",
        0x70 => "Infogrames",
        0x71 => "Interplay Entertainment",
        0x72 => "Broderbund",
        0x73 => "Sculptured Software",
        0x75 => "The Sales Curve Limited",
        0x78 => "THQ",
        0x79 => "Accolade",
        0x7A => "Triffix Entertainment",
        0x7C => "MicroProse",
        0x7F => "Kemco",
        0x80 => "Misawa Entertainment",
        0x83 => "LOZC G.",
        0x86 => "Tokuma Shoten",
        0x8B => "Bullet-Proof Software",
        0x8C => "Vic Tokai Corp.",
        0x8E => "Ape Inc.",
        0x8F => "I'Max",
        0x91 => "Chunsoft Co.",
        0x92 => "Video System",
        0x93 => "Tsubaraya Productions",
        0x95 => "Varie",
        0x96 => "Yonezawa/S'Pal",
        0x97 => "Kemco",
        0x99 => "Arc",
        0x9A => "Nihon Bussan",
        0x9B => "Tecmo",
        0x9C => "Imagineer",
        0x9D => "Banpresto",
        0x9F => "Nova",
        0xA1 => "Hori Electric",
        0xA2 => "Bandai",
        0xA4 => "Konami",
        0xA6 => "Kawada",
        0xA7 => "Takara",
        0xA9 => "Technos Japan",
        0xAA => "Broderbund",
        0xAC => "Toei Animation",
        0xAD => "Toho",
        0xAF => "Namco",
        0xB0 => "Acclaim Entertainment",
        0xB1 => "ASCII Corporation or Nexsoft",
        0xB2 => "Bandai",
        0xB4 => "Square Enix",
        0xB6 => "HAL Laboratory",
        0xB7 => "SNK",
        0xB9 => "Pony Canyon",
        0xBA => "Culture Brain",
        0xBB => "Sunsoft",
        0xBD => "Sony Imagesoft",
        0xBF => "Sammy Corporation",
        0xC0 => "Taito",
        0xC2 => "Kemco",
        0xC3 => "Square",
        0xC4 => "Tokuma Shoten",
        0xC5 => "Data East",
        0xC6 => "Tonkin House",
        0xC8 => "Koei",
        0xC9 => "UFL",
        0xCA => "Ultra Games",
        0xCB => "VAP, Inc.",
        0xCC => "Use Corporation",
        0xCD => "Meldac",
        0xCE => "Pony Canyon",
        0xCF => "Angel",
        0xD0 => "Taito",
        0xD1 => "SOFEL",
        0xD2 => "Quest",
        0xD3 => "Sigma Enterprises",
        0xD4 => "ASK Kodansha Co.",
        0xD6 => "Naxat Soft",
        0xD7 => "Copya System",
        0xD9 => "Banpresto",
        0xDA => "Tomy",
        0xDB => "LJN",
        0xDD => "Nippon Computer Systems",
        0xDE => "Human Ent.",
        0xDF => "Altron",
        0xE0 => "Jaleco",
        0xE1 => "Towa Chiki",
        0xE2 => "Yutaka",
        0xE3 => "Varie",
        0xE5 => "Epoch",
        0xE7 => "Athena",
        0xE8 => "Asmik Ace Entertainment",
        0xE9 => "Natsume",
        0xEA => "King Records",
        0xEB => "Atlus",
        0xEC => "Epic/Sony Records",
        0xEE => "IGS",
        0xF0 => "A Wave",
        0xF3 => "Extreme Entertainment",
        0xFF => "LJN",
        _ => return None,
    };
    Some(name)
}
