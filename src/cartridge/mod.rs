// Cartridge module - iNES ROM loading and mapper interface
//
// Parses the 16-byte iNES header, validates it, and carves the file into
// PRG-ROM and CHR-ROM. Mapper selection is limited to mapper 0 (NROM);
// anything else is a load error.

pub mod mappers;

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// iNES signature: "NES\x1A" read as a little-endian u32
const INES_SIGNATURE: u32 = 0x1A53_454E;

/// Length of the iNES header
const HEADER_LEN: usize = 16;

/// Size of one PRG-ROM page (16 KiB)
pub const PRG_ROM_PAGE_SIZE: usize = 16 * 1024;

/// Size of one CHR-ROM page (8 KiB)
pub const CHR_ROM_PAGE_SIZE: usize = 8 * 1024;

/// Length of an optional trainer block
const TRAINER_LEN: usize = 512;

/// Error raised while loading a ROM file.
#[derive(Debug)]
pub enum RomError {
    /// The file could not be opened or read
    Io { path: String, source: io::Error },
    /// The first four bytes are not "NES\x1A"
    BadSignature { path: String },
    /// The header names a mapper this core does not support
    UnsupportedMapper { path: String, mapper: u8 },
    /// The file ended before the sizes promised by the header
    Truncated {
        path: String,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for RomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomError::Io { path, source } => {
                write!(f, "error opening file {}: {}", path, source)
            }
            RomError::BadSignature { path } => {
                write!(f, "iNES signature mismatch while loading {}", path)
            }
            RomError::UnsupportedMapper { path, mapper } => {
                write!(f, "mapper {} not supported while loading {}", mapper, path)
            }
            RomError::Truncated {
                path,
                expected,
                actual,
            } => write!(
                f,
                "ROM read failed while loading {}: read {} of {} bytes specified in header",
                path, actual, expected
            ),
        }
    }
}

impl std::error::Error for RomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RomError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Nametable mirroring arrangement declared by the header.
///
/// The CPU core never consults this; it is carried for the PPU collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Parsed iNES header fields.
#[derive(Debug, Clone, Copy)]
pub struct INesHeader {
    /// Number of 16 KiB PRG-ROM pages
    pub prg_rom_pages: u8,
    /// Number of 8 KiB CHR-ROM pages (0 means the board provides CHR-RAM)
    pub chr_rom_pages: u8,
    /// Mapper number from the high nibbles of bytes 6 and 7
    pub mapper: u8,
    pub mirroring: Mirroring,
    pub has_battery: bool,
    pub has_trainer: bool,
}

impl INesHeader {
    /// Parse the 16 header bytes. Does not validate the signature; that is
    /// the caller's job so the error can name the offending file.
    fn parse(bytes: &[u8; HEADER_LEN]) -> (bool, INesHeader) {
        let signature = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

        let flags6 = bytes[6];
        let flags7 = bytes[7];

        let mirroring = if flags6 & 0x08 != 0 {
            Mirroring::FourScreen
        } else if flags6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let header = INesHeader {
            prg_rom_pages: bytes[4],
            chr_rom_pages: bytes[5],
            mapper: (flags7 & 0xF0) | (flags6 >> 4),
            mirroring,
            has_battery: flags6 & 0x02 != 0,
            has_trainer: flags6 & 0x04 != 0,
        };

        (signature == INES_SIGNATURE, header)
    }
}

/// A loaded cartridge: ROM contents plus header-derived metadata.
#[derive(Debug)]
pub struct Cartridge {
    pub prg_rom: Vec<u8>,
    /// CHR-ROM from the file, or 8 KiB of zeroed CHR-RAM when the header
    /// declares zero CHR pages
    pub chr_rom: Vec<u8>,
    /// Whether `chr_rom` is writable pattern RAM (header declared zero CHR
    /// pages) rather than ROM from the file
    pub chr_is_ram: bool,
    pub trainer: Option<Vec<u8>>,
    pub mapper: u8,
    pub mirroring: Mirroring,
    pub has_battery: bool,
}

impl Cartridge {
    /// Load and validate an iNES file from disk.
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Cartridge, RomError> {
        let path_str = path.as_ref().display().to_string();
        let data = fs::read(&path).map_err(|source| RomError::Io {
            path: path_str.clone(),
            source,
        })?;
        Self::from_ines_bytes(&data, &path_str)
    }

    /// Parse an iNES image already in memory. `path` is used only for
    /// diagnostics.
    pub fn from_ines_bytes(data: &[u8], path: &str) -> Result<Cartridge, RomError> {
        if data.len() < HEADER_LEN {
            return Err(RomError::Truncated {
                path: path.to_string(),
                expected: HEADER_LEN,
                actual: data.len(),
            });
        }

        let mut header_bytes = [0u8; HEADER_LEN];
        header_bytes.copy_from_slice(&data[..HEADER_LEN]);
        let (valid_signature, header) = INesHeader::parse(&header_bytes);

        if !valid_signature {
            return Err(RomError::BadSignature {
                path: path.to_string(),
            });
        }
        if header.mapper != 0 {
            return Err(RomError::UnsupportedMapper {
                path: path.to_string(),
                mapper: header.mapper,
            });
        }

        let prg_len = header.prg_rom_pages as usize * PRG_ROM_PAGE_SIZE;
        let chr_len = header.chr_rom_pages as usize * CHR_ROM_PAGE_SIZE;
        let trainer_len = if header.has_trainer { TRAINER_LEN } else { 0 };

        let expected = HEADER_LEN + trainer_len + prg_len + chr_len;
        if data.len() < expected {
            return Err(RomError::Truncated {
                path: path.to_string(),
                expected,
                actual: data.len(),
            });
        }

        let trainer_start = HEADER_LEN;
        let prg_start = trainer_start + trainer_len;
        let chr_start = prg_start + prg_len;

        let trainer = header
            .has_trainer
            .then(|| data[trainer_start..prg_start].to_vec());
        let prg_rom = data[prg_start..chr_start].to_vec();
        let chr_is_ram = chr_len == 0;
        let chr_rom = if chr_is_ram {
            // CHR-RAM board: give the PPU side 8 KiB of writable pattern memory
            vec![0; CHR_ROM_PAGE_SIZE]
        } else {
            data[chr_start..chr_start + chr_len].to_vec()
        };

        Ok(Cartridge {
            prg_rom,
            chr_rom,
            chr_is_ram,
            trainer,
            mapper: header.mapper,
            mirroring: header.mirroring,
            has_battery: header.has_battery,
        })
    }
}

/// Interface between the buses and a cartridge board.
///
/// `cpu_read`/`cpu_write` cover `$4020-$FFFF` of the CPU address space;
/// `ppu_read`/`ppu_write` cover `$0000-$1FFF` of the PPU address space
/// (pattern tables).
pub trait Mapper {
    fn cpu_read(&self, address: u16) -> u8;
    fn cpu_write(&mut self, address: u16, value: u8);
    fn ppu_read(&self, address: u16) -> u8;
    fn ppu_write(&mut self, address: u16, value: u8);
    fn mirroring(&self) -> Mirroring;
}
