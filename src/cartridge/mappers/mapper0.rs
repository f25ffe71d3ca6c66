// Mapper 0 (NROM) - no bank switching
//
// CPU $8000-$BFFF: first 16KB of PRG-ROM
// CPU $C000-$FFFF: last 16KB of PRG-ROM, or a mirror of the first 16KB on
//                  NROM-128 boards
// PPU $0000-$1FFF: 8KB CHR-ROM or CHR-RAM

use super::MapperError;
use crate::cartridge::{Cartridge, Mapper, Mirroring, CHR_ROM_PAGE_SIZE};

/// Pattern memory backing. ROM drops writes; RAM (boards whose header
/// declares zero CHR pages) accepts them.
enum ChrBacking {
    Rom(Vec<u8>),
    Ram(Vec<u8>),
}

/// NROM board.
///
/// PRG mirroring is an address mask fixed at construction: `$3FFF` on
/// NROM-128, so the upper bank aliases the lower, `$7FFF` on NROM-256,
/// where both banks are distinct.
pub struct Mapper0 {
    prg_rom: Vec<u8>,
    prg_mask: u16,
    chr: ChrBacking,
    mirroring: Mirroring,
}

impl Mapper0 {
    /// Build an NROM board from a loaded cartridge.
    ///
    /// Re-checks the shape the iNES loader promises: exactly one or two
    /// 16KB PRG pages and a single 8KB CHR bank. A cartridge that violates
    /// either is a configuration error, not a panic.
    pub fn new(cartridge: Cartridge) -> Result<Self, MapperError> {
        let prg_mask = match cartridge.prg_rom.len() {
            0x4000 => 0x3FFF,
            0x8000 => 0x7FFF,
            len => {
                return Err(MapperError::InvalidConfiguration(format!(
                    "NROM needs 16KB or 32KB of PRG-ROM, got {} bytes",
                    len
                )))
            }
        };
        if cartridge.chr_rom.len() != CHR_ROM_PAGE_SIZE {
            return Err(MapperError::InvalidConfiguration(format!(
                "NROM needs one 8KB CHR bank, got {} bytes",
                cartridge.chr_rom.len()
            )));
        }

        let chr = if cartridge.chr_is_ram {
            ChrBacking::Ram(cartridge.chr_rom)
        } else {
            ChrBacking::Rom(cartridge.chr_rom)
        };

        Ok(Mapper0 {
            prg_rom: cartridge.prg_rom,
            prg_mask,
            chr,
            mirroring: cartridge.mirroring,
        })
    }

    fn chr_mem(&self) -> &[u8] {
        match &self.chr {
            ChrBacking::Rom(data) | ChrBacking::Ram(data) => data,
        }
    }
}

impl Mapper for Mapper0 {
    fn cpu_read(&self, address: u16) -> u8 {
        if address < 0x8000 {
            // $4020-$7FFF is unpopulated on NROM boards
            return 0;
        }
        self.prg_rom[(address & self.prg_mask) as usize]
    }

    fn cpu_write(&mut self, _address: u16, _value: u8) {
        // NROM has no mapper registers; PRG writes are dropped
    }

    fn ppu_read(&self, address: u16) -> u8 {
        self.chr_mem().get(address as usize).copied().unwrap_or(0)
    }

    fn ppu_write(&mut self, address: u16, value: u8) {
        if let ChrBacking::Ram(data) = &mut self.chr {
            if let Some(cell) = data.get_mut(address as usize) {
                *cell = value;
            }
        }
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
