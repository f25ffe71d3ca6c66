// Shared helpers for integration tests
//
// Each integration test binary compiles this module separately and uses a
// different subset of it.
#![allow(dead_code)]

use famicore::bus::Bus;
use famicore::cartridge::mappers::create_mapper;
use famicore::cartridge::Cartridge;
use famicore::cpu::Cpu;

/// Build an iNES image in memory: 16-byte header, `prg_pages` pages of
/// PRG-ROM filled from `prg` (zero-padded), one page of CHR-ROM.
pub fn build_ines_image(prg_pages: u8, prg: &[u8]) -> Vec<u8> {
    let prg_len = prg_pages as usize * 16 * 1024;
    assert!(prg.len() <= prg_len, "program larger than PRG-ROM");

    let mut data = vec![0u8; 16];
    data[0..4].copy_from_slice(b"NES\x1A");
    data[4] = prg_pages;
    data[5] = 1;

    let mut prg_rom = vec![0u8; prg_len];
    prg_rom[..prg.len()].copy_from_slice(prg);
    data.extend_from_slice(&prg_rom);
    data.extend(std::iter::repeat(0).take(8 * 1024));
    data
}

/// A CPU and bus with a NROM-128 cartridge whose PRG starts with `prg` and
/// whose reset vector points at $8000. The CPU has been reset.
pub fn system_with_program(prg: &[u8]) -> (Cpu, Bus) {
    let mut prg_rom = vec![0u8; 16 * 1024];
    prg_rom[..prg.len()].copy_from_slice(prg);
    // Reset vector lives at $FFFC, which is PRG offset $3FFC on NROM-128
    prg_rom[0x3FFC] = 0x00;
    prg_rom[0x3FFD] = 0x80;

    let image = build_ines_image(1, &prg_rom);
    let cartridge = Cartridge::from_ines_bytes(&image, "test.nes").expect("valid test image");
    let mapper = create_mapper(cartridge).expect("mapper 0");

    let mut bus = Bus::new();
    bus.attach_mapper(mapper);

    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    (cpu, bus)
}

/// A CPU and bus with no cartridge; `prg` is poked into the writable
/// scratch region at $8000 and PC is pointed there.
pub fn scratch_system(prg: &[u8]) -> (Cpu, Bus) {
    let mut bus = Bus::new();
    for (i, &byte) in prg.iter().enumerate() {
        bus.write(0x8000 + i as u16, byte);
    }
    let mut cpu = Cpu::new();
    cpu.pc = 0x8000;
    (cpu, bus)
}
