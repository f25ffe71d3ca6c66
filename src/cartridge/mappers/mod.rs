// Mappers module - cartridge board implementations
//
// Only mapper 0 (NROM) is implemented; the factory rejects everything else
// before any banking state exists.

mod mapper0;

use super::{Cartridge, Mapper};
use mapper0::Mapper0;

/// Error type for mapper creation
#[derive(Debug)]
pub enum MapperError {
    /// The requested mapper number is not supported
    UnsupportedMapper(u8),
    /// The cartridge contents do not fit the selected board
    InvalidConfiguration(String),
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperError::UnsupportedMapper(num) => {
                write!(f, "mapper {} is not supported", num)
            }
            MapperError::InvalidConfiguration(msg) => {
                write!(f, "invalid mapper configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Create the mapper implementation selected by the cartridge header.
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, MapperError> {
    match cartridge.mapper {
        0 => Ok(Box::new(Mapper0::new(cartridge)?)),
        mapper_num => Err(MapperError::UnsupportedMapper(mapper_num)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Mirroring;

    #[test]
    fn test_mapper0_creation() {
        let cartridge = Cartridge {
            prg_rom: vec![0xAA; 16 * 1024],
            chr_rom: vec![0xBB; 8 * 1024],
            chr_is_ram: false,
            trainer: None,
            mapper: 0,
            mirroring: Mirroring::Horizontal,
            has_battery: false,
        };

        let mapper = create_mapper(cartridge).unwrap();
        assert_eq!(mapper.mirroring(), Mirroring::Horizontal);
        assert_eq!(mapper.cpu_read(0x8000), 0xAA);
    }

    #[test]
    fn test_unsupported_mapper() {
        let cartridge = Cartridge {
            prg_rom: vec![0; 16 * 1024],
            chr_rom: vec![0; 8 * 1024],
            chr_is_ram: false,
            trainer: None,
            mapper: 99,
            mirroring: Mirroring::Horizontal,
            has_battery: false,
        };

        let result = create_mapper(cartridge);
        assert!(matches!(result, Err(MapperError::UnsupportedMapper(99))));
    }

    #[test]
    fn test_invalid_prg_size_is_a_configuration_error() {
        let cartridge = Cartridge {
            prg_rom: vec![0; 4 * 1024],
            chr_rom: vec![0; 8 * 1024],
            chr_is_ram: false,
            trainer: None,
            mapper: 0,
            mirroring: Mirroring::Horizontal,
            has_battery: false,
        };

        let result = create_mapper(cartridge);
        assert!(matches!(
            result,
            Err(MapperError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_loader_output_always_satisfies_nrom_invariants() {
        // Anything the iNES loader accepts as mapper 0 must construct,
        // including a CHR-RAM board: the loader substitutes the 8KB bank
        // the board validation insists on.
        for (prg_pages, chr_pages) in [(1u8, 1u8), (2, 1), (1, 0), (2, 0)] {
            let mut data = vec![0u8; 16];
            data[0..4].copy_from_slice(b"NES\x1A");
            data[4] = prg_pages;
            data[5] = chr_pages;
            data.extend(std::iter::repeat(0xEA).take(prg_pages as usize * 16 * 1024));
            data.extend(std::iter::repeat(0x11).take(chr_pages as usize * 8 * 1024));

            let cartridge = Cartridge::from_ines_bytes(&data, "loader.nes")
                .expect("loader accepts the image");
            create_mapper(cartridge).unwrap_or_else(|e| {
                panic!(
                    "loader output ({} PRG, {} CHR pages) rejected: {}",
                    prg_pages, chr_pages, e
                )
            });
        }
    }
}
